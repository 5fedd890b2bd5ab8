use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::CostBreakdown;

/// One completed build record. Source of historical averages.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HistoricalProject {
    pub store_id: String,
    pub store_type: String,
    pub square_footage: u32,
    pub market: String,
    /// Completion date as `YYYY-MM-DD`.
    pub completion_date: String,
    pub total_cost: i64,
    pub cost_per_sqft: f64,
    pub categories: CostBreakdown,
    pub timeline_days: u32,
    /// Budget variance percentage, negative when under budget.
    pub variance_from_budget: i32,
    #[serde(default)]
    pub lessons_learned: Vec<String>,
}

/// Root document of `historical_projects.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HistoricalProjects {
    pub projects: Vec<HistoricalProject>,
}

impl HistoricalProjects {
    /// Projects matching a store type, in file order.
    #[must_use]
    pub fn of_type<'a>(&'a self, store_type: &str) -> Vec<&'a HistoricalProject> {
        self.projects
            .iter()
            .filter(|p| p.store_type == store_type)
            .collect()
    }

    /// Look up a single project by store id.
    #[must_use]
    pub fn get(&self, store_id: &str) -> Option<&HistoricalProject> {
        self.projects.iter().find(|p| p.store_id == store_id)
    }
}

/// Averages over the historical projects of one store type.
///
/// Produced by the historical average calculator; absent entirely (the
/// "no data" sentinel is `Option::None`) when no records match.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HistoricalAverage {
    /// Number of records the averages are based on.
    pub count: usize,
    /// Mean total cost, truncated to whole dollars.
    pub total_cost: i64,
    /// Mean cost per square foot, rounded to two decimals.
    pub cost_per_sqft: f64,
    /// Mean per-category costs, each truncated to whole dollars.
    pub categories: CostBreakdown,
}
