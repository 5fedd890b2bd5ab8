//! Integration tests for environment-variable configuration overrides.

use figment::Jail;
use forge_config::ForgeConfig;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("STOREFORGE_GENERAL__SEED", "7");
        jail.set_env("STOREFORGE_PATHS__OUTPUT_DIR", "/tmp/forge-out");

        let config: ForgeConfig = ForgeConfig::figment().extract()?;
        assert_eq!(config.general.seed, 7);
        assert_eq!(config.paths.output_dir, "/tmp/forge-out");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".storeforge")?;
        jail.create_file(
            ".storeforge/config.toml",
            r#"
[paths]
output_dir = "from-toml"
"#,
        )?;
        jail.set_env("STOREFORGE_PATHS__OUTPUT_DIR", "from-env");

        let config: ForgeConfig = ForgeConfig::figment().extract()?;
        assert_eq!(config.paths.output_dir, "from-env");
        Ok(())
    });
}

#[test]
fn project_toml_beats_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".storeforge")?;
        jail.create_file(
            ".storeforge/config.toml",
            r"
[general]
first_store_number = 400
",
        )?;

        let config: ForgeConfig = ForgeConfig::figment().extract()?;
        assert_eq!(config.general.first_store_number, 400);
        Ok(())
    });
}
