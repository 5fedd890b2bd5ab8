//! Scenario cost projector.
//!
//! Applies named uniform multipliers to a base total cost. The rounding
//! policy is truncation toward zero — the same `int()` cast the legacy
//! generator used — and must stay that way for golden-file reproducibility.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use forge_core::entities::Scenario;

/// Projection of one scenario against a base cost.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScenarioProjection {
    pub scenario: Scenario,
    /// `trunc(base_cost * multiplier)`.
    pub cost: i64,
    /// `multiplier - 1.0`, exactly.
    pub variance: f64,
}

/// Apply one multiplier to a base cost, truncating toward zero.
#[must_use]
pub fn apply_factor(base_cost: i64, factor: f64) -> i64 {
    (base_cost as f64 * factor) as i64
}

/// Project every scenario against a base cost, in table order.
#[must_use]
pub fn project(base_cost: i64, scenarios: &[Scenario]) -> Vec<ScenarioProjection> {
    scenarios
        .iter()
        .map(|scenario| ScenarioProjection {
            scenario: scenario.clone(),
            cost: apply_factor(base_cost, scenario.multiplier),
            variance: scenario.multiplier - 1.0,
        })
        .collect()
}

/// The stock comparison table used by every budget plan workbook.
///
/// Note the aggregate-only multipliers: "Accelerated Schedule" is 1.15 here
/// while the fast-track strategy sheet carries distinct per-category premiums
/// for the same idea. The mismatch is part of the dataset.
#[must_use]
pub fn stock_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "Base Case",
            "Standard build, Columbus market, 12-week timeline",
            1.0,
            "Historical average",
        ),
        Scenario::new(
            "Cincinnati Market",
            "Union labor requirements",
            1.06,
            "Regional modifier: electrical 1.08x, construction 1.05x",
        ),
        Scenario::new(
            "Accelerated Schedule",
            "8-week timeline (vs. 12 weeks)",
            1.15,
            "Labor premium, expedite fees",
        ),
        Scenario::new(
            "Premium Finishes",
            "Upgraded materials and fixtures",
            1.22,
            "Fixture upgrade 30%, material upgrade 15%",
        ),
        Scenario::new(
            "Budget Cap (Value Eng.)",
            "Cost-optimized specifications",
            0.88,
            "Material substitutions, simplified finishes",
        ),
    ]
}
