use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One priced line item inside a category breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CostLineItem {
    pub item: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_cost: f64,
    pub total: i64,
}

/// Line items plus totals for one cost category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CategoryBreakdown {
    pub total: i64,
    pub per_sqft: f64,
    pub line_items: Vec<CostLineItem>,
}

/// One fully priced base-cost model (e.g. `suburban_standard_3500sqft`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CostModelEntry {
    pub store_type: String,
    pub square_footage: u32,
    pub total_base_cost: i64,
    pub cost_per_sqft: i64,
    /// Keyed by cost-category name in fixture order.
    pub breakdown: BTreeMap<String, CategoryBreakdown>,
}

/// Root document of `cost_model_*.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CostModel {
    pub model_version: String,
    pub last_updated: String,
    pub base_costs: BTreeMap<String, CostModelEntry>,
    /// Documentation-only formula strings carried through to the Data
    /// Sources sheet.
    pub formulas: BTreeMap<String, String>,
}
