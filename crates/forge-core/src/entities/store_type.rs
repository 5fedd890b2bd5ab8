use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named retail-format template with a typical size and cost profile.
///
/// Immutable reference data, loaded from `store_types.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StoreType {
    pub type_id: String,
    pub name: String,
    pub typical_sqft: u32,
    pub sqft_range: [u32; 2],
    pub target_markets: Vec<String>,
    pub typical_use_cases: Vec<String>,
    pub key_features: Vec<String>,
    pub cost_drivers: Vec<String>,
}

/// Root document of `store_types.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StoreTypes {
    pub store_types: Vec<StoreType>,
}

impl StoreTypes {
    /// Look up a store type by its `type_id`.
    #[must_use]
    pub fn get(&self, type_id: &str) -> Option<&StoreType> {
        self.store_types.iter().find(|s| s.type_id == type_id)
    }
}
