//! Historical average calculator.

use forge_core::entities::{CostBreakdown, HistoricalAverage, HistoricalProjects};
use forge_core::enums::CostCategory;

/// Average costs over the historical projects of one store type.
///
/// Total cost and every category cost are arithmetic means truncated to whole
/// dollars; cost-per-sqft is rounded to two decimals. Returns `None` when no
/// records match — callers skip cost-summary rendering instead of dividing by
/// zero.
#[must_use]
pub fn historical_average(
    store_type: &str,
    projects: &HistoricalProjects,
) -> Option<HistoricalAverage> {
    let matching = projects.of_type(store_type);
    if matching.is_empty() {
        return None;
    }

    let count = matching.len();
    let divisor = count as f64;

    let avg_total: f64 = matching.iter().map(|p| p.total_cost as f64).sum::<f64>() / divisor;
    let avg_psf: f64 = matching.iter().map(|p| p.cost_per_sqft).sum::<f64>() / divisor;

    let mut categories = CostBreakdown::default();
    for category in CostCategory::ALL {
        let avg: f64 = matching
            .iter()
            .map(|p| p.categories.get(category) as f64)
            .sum::<f64>()
            / divisor;
        categories.set(category, avg as i64);
    }

    Some(HistoricalAverage {
        count,
        total_cost: avg_total as i64,
        cost_per_sqft: (avg_psf * 100.0).round() / 100.0,
        categories,
    })
}
