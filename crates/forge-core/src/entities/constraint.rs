use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One concrete constraint with its cost impact and mitigation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConstraintExample {
    pub constraint: String,
    pub impact: String,
    pub mitigation: String,
}

/// A family of constraints (landlord, budget, timeline, regional,
/// operational).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConstraintType {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub examples: Vec<ConstraintExample>,
}

/// Root document of `constraint_catalog.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConstraintCatalog {
    pub constraint_types: Vec<ConstraintType>,
}
