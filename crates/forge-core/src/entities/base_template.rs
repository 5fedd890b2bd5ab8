use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One category block in the base build template.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TemplateCategory {
    pub category: String,
    pub subcategories: Vec<String>,
}

/// Root document of `base_template.json` — the versioned build standard
/// every new store starts from.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BaseTemplate {
    pub template_id: String,
    pub version: String,
    pub effective_date: String,
    pub categories: Vec<TemplateCategory>,
    pub specifications: Value,
}
