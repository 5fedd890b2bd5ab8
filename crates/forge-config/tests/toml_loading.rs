//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use forge_config::ForgeConfig;

#[test]
fn loads_paths_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[paths]
fixtures_dir = "fixtures"
output_dir = "artifacts"
templates_dir = "meeting_templates"
"#,
        )?;

        let config: ForgeConfig = Figment::from(Serialized::defaults(ForgeConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.paths.fixtures_dir, "fixtures");
        assert_eq!(config.paths.output_dir, "artifacts");
        assert_eq!(config.paths.templates_dir, "meeting_templates");
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[general]
seed = 42
default_duration_minutes = 45
first_store_number = 101
",
        )?;

        let config: ForgeConfig = Figment::from(Serialized::defaults(ForgeConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.seed, 42);
        assert_eq!(config.general.default_duration_minutes, 45);
        assert_eq!(config.general.first_store_number, 101);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[paths]
output_dir = "elsewhere"
"#,
        )?;

        let config: ForgeConfig = Figment::from(Serialized::defaults(ForgeConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.paths.output_dir, "elsewhere");
        assert_eq!(config.paths.fixtures_dir, "output");
        assert_eq!(config.general.seed, 20_240_315);
        Ok(())
    });
}
