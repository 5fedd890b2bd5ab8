use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Delivery and quality statistics for one vendor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VendorPerformance {
    pub projects_completed: u32,
    pub on_time_rate: f64,
    pub on_budget_rate: f64,
    pub quality_rating: f64,
}

/// One supplier in the vendor catalog.
///
/// Pricing is free-form per vendor (unit costs, discounts, payment terms),
/// so it stays a JSON object rather than a typed struct.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Vendor {
    pub vendor_id: String,
    pub name: String,
    pub category: String,
    pub markets: Vec<String>,
    pub specialties: Vec<String>,
    pub pricing: Value,
    pub performance: VendorPerformance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Root document of `vendor_catalog.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VendorCatalog {
    pub vendors: Vec<Vendor>,
}

/// Canonical-name registry used for tag extraction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VendorRegistryEntry {
    pub canonical_name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub category: String,
}

/// Root document of `vendor_registry.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VendorRegistry {
    pub vendors: Vec<VendorRegistryEntry>,
}

impl VendorRegistry {
    /// Canonical names in declaration order.
    #[must_use]
    pub fn canonical_names(&self) -> Vec<&str> {
        self.vendors
            .iter()
            .map(|v| v.canonical_name.as_str())
            .collect()
    }
}
