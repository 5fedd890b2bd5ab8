//! Regional/timeline adjustment composer.
//!
//! Adjustments compose as `base × regional × timeline`, applied strictly in
//! that order, with truncation toward zero after every multiplication. The
//! intermediate truncation is observable (it can shift the result by a
//! dollar against a single combined multiplication) and is part of the
//! documented contract.

use forge_core::entities::RegionalModifiers;
use forge_core::enums::CostCategory;

use crate::scenario::apply_factor;

/// Timeline factors recognized by the composer. Timeline premiums are always
/// aggregate-only; there is no per-category timeline table.
pub const STANDARD_TIMELINE: f64 = 1.0;
pub const ACCELERATED_TIMELINE: f64 = 1.15;

/// Compose a regional multiplier and a timeline factor onto a base cost.
///
/// Each factor defaults to 1.0 when absent. Regional applies first, then
/// timeline, truncating after each step.
#[must_use]
pub fn compose(base_cost: i64, regional: Option<f64>, timeline: Option<f64>) -> i64 {
    let after_regional = apply_factor(base_cost, regional.unwrap_or(1.0));
    apply_factor(after_regional, timeline.unwrap_or(1.0))
}

/// Compose for one market/category pair out of the regional modifier table.
#[must_use]
pub fn compose_for_market(
    base_cost: i64,
    modifiers: &RegionalModifiers,
    market: &str,
    category: CostCategory,
    timeline: Option<f64>,
) -> i64 {
    let regional = modifiers.factor(market, category);
    compose(base_cost, Some(regional), timeline)
}

#[cfg(test)]
mod tests {
    use forge_core::entities::{CategoryModifiers, MarketModifiers};
    use forge_core::enums::MarketTier;
    use pretty_assertions::assert_eq;

    use super::*;

    fn cincinnati() -> RegionalModifiers {
        RegionalModifiers {
            markets: vec![MarketModifiers {
                market: "Cincinnati".into(),
                state: "OH".into(),
                tier: MarketTier::Secondary,
                modifiers: CategoryModifiers {
                    construction: 1.05,
                    electrical: 1.08,
                    hvac: 1.04,
                    plumbing: 1.03,
                    fixtures: 1.00,
                    technology: 1.00,
                    soft_costs: 1.03,
                },
                notes: String::new(),
            }],
        }
    }

    #[test]
    fn missing_factors_default_to_identity() {
        assert_eq!(compose(647_500, None, None), 647_500);
        assert_eq!(compose(647_500, Some(1.0), None), 647_500);
        assert_eq!(compose(647_500, None, Some(1.0)), 647_500);
    }

    #[test]
    fn truncates_at_each_step() {
        // 647,500 × 1.08 = 699,300 exactly; 699,300 × 1.15 lands just under
        // 804,195 in f64 and truncates to 804,194. A single combined
        // multiplication would not reproduce this value chain.
        let after_regional = apply_factor(647_500, 1.08);
        assert_eq!(after_regional, 699_300);
        assert_eq!(
            compose(647_500, Some(1.08), Some(ACCELERATED_TIMELINE)),
            804_194
        );
    }

    #[test]
    fn regional_applies_before_timeline() {
        let stepwise = apply_factor(apply_factor(1_000_003, 1.08), 1.15);
        assert_eq!(
            compose(1_000_003, Some(1.08), Some(1.15)),
            stepwise,
            "composition must equal regional-then-timeline with truncation between"
        );
    }

    #[test]
    fn unknown_market_uses_identity_regional() {
        let modifiers = cincinnati();
        assert_eq!(
            compose_for_market(100_000, &modifiers, "Narnia", CostCategory::Electrical, None),
            100_000
        );
    }

    #[test]
    fn market_category_pair_resolves_from_table() {
        let modifiers = cincinnati();
        assert_eq!(
            compose_for_market(
                647_500,
                &modifiers,
                "Cincinnati",
                CostCategory::Electrical,
                Some(ACCELERATED_TIMELINE)
            ),
            804_194
        );
        assert_eq!(
            compose_for_market(
                100_000,
                &modifiers,
                "Cincinnati",
                CostCategory::Fixtures,
                None
            ),
            100_000
        );
    }
}
