pub mod batch;
pub mod budget;
pub mod meeting;
pub mod seed;
pub mod teams;

use std::path::PathBuf;

use forge_config::ForgeConfig;

/// Conversations root: `{output}/07_Conversations`.
#[must_use]
pub fn conversations_root(config: &ForgeConfig) -> PathBuf {
    config.paths.output_root().join("07_Conversations")
}

/// Budget artifacts root: `{output}/08_Budget_Artifacts`.
#[must_use]
pub fn budget_root(config: &ForgeConfig) -> PathBuf {
    config.paths.output_root().join("08_Budget_Artifacts")
}

/// Today's date as `YYYY-MM-DD`, for defaulted `--date` flags.
#[must_use]
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
