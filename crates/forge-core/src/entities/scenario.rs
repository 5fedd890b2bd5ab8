use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named what-if multiplier applied to a baseline budget.
///
/// Scenario adjustments are aggregate-only: the multiplier scales the total
/// cost and produces no category-level detail. The per-category fast-track
/// premiums elsewhere are a separate model and are intentionally not
/// reconciled with these multipliers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub multiplier: f64,
    pub notes: String,
}

impl Scenario {
    #[must_use]
    pub fn new(name: &str, description: &str, multiplier: f64, notes: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            multiplier,
            notes: notes.to_string(),
        }
    }
}
