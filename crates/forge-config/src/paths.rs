//! Filesystem layout configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_fixtures_dir() -> String {
    "output".to_string()
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

/// Where fixtures are read from and artifacts are written to.
///
/// The structured fixture set and the generated artifacts share one root by
/// default, matching the numbered-folder layout (`01_Build_Templates`,
/// `03_Historical_Projects`, ..., `08_Budget_Artifacts`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Root directory holding the structured fixture folders.
    #[serde(default = "default_fixtures_dir")]
    pub fixtures_dir: String,

    /// Root directory generated artifacts are written under.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory holding meeting-template YAML overrides. Stock templates
    /// are embedded in the binary; files here take precedence.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
}

impl PathsConfig {
    #[must_use]
    pub fn fixtures_root(&self) -> PathBuf {
        PathBuf::from(&self.fixtures_dir)
    }

    #[must_use]
    pub fn output_root(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    #[must_use]
    pub fn templates_root(&self) -> PathBuf {
        PathBuf::from(&self.templates_dir)
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            fixtures_dir: default_fixtures_dir(),
            output_dir: default_output_dir(),
            templates_dir: default_templates_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_share_one_root() {
        let config = PathsConfig::default();
        assert_eq!(config.fixtures_dir, config.output_dir);
        assert_eq!(config.templates_root(), PathBuf::from("templates"));
    }
}
