//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default master seed. All randomness (historical cost variation, dialogue
/// pacing, reaction counts) derives from this unless `--seed` overrides it.
const fn default_seed() -> u64 {
    20_240_315
}

/// Default meeting duration printed in transcript headers.
const fn default_duration_minutes() -> u32 {
    60
}

/// First store number assigned by the historical-projects seeder.
const fn default_first_store_number() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Master seed for deterministic generation.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Meeting duration in minutes when no `--duration` is given.
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,

    /// Store ids are formatted `Store-{n}` starting from this number.
    #[serde(default = "default_first_store_number")]
    pub first_store_number: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            default_duration_minutes: default_duration_minutes(),
            first_store_number: default_first_store_number(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.seed, 20_240_315);
        assert_eq!(config.default_duration_minutes, 60);
        assert_eq!(config.first_store_number, 50);
    }
}
