//! # forge-config
//!
//! Layered configuration loading for Storeforge using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STOREFORGE_*` prefix, `__` as separator)
//! 2. Project-level `.storeforge/config.toml`
//! 3. User-level `~/.config/storeforge/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STOREFORGE_PATHS__OUTPUT_DIR` -> `paths.output_dir`,
//! `STOREFORGE_GENERAL__SEED` -> `general.seed`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use forge_config::ForgeConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = ForgeConfig::load_with_dotenv().expect("config");
//!
//! println!("fixtures at {}", config.paths.fixtures_dir);
//! ```

mod error;
mod general;
mod paths;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use paths::PathsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ForgeConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ForgeConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`STOREFORGE_*` prefix)
    /// 2. `.storeforge/config.toml` (project-local)
    /// 3. `~/.config/storeforge/config.toml` (user-global)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI and
    /// tests.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".storeforge/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("STOREFORGE_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("storeforge").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ForgeConfig::default();
        assert_eq!(config.paths.fixtures_dir, "output");
        assert_eq!(config.general.seed, 20_240_315);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = ForgeConfig::figment();
        let config: ForgeConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.general.default_duration_minutes, 60);
        assert_eq!(config.paths.output_dir, "output");
    }
}
