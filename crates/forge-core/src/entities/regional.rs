use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CostCategory, MarketTier};

/// Per-category cost multipliers for one market.
///
/// Multipliers are ≥ 0 and applied multiplicatively to a cost breakdown;
/// a missing market defaults every category to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MarketModifiers {
    pub market: String,
    pub state: String,
    pub tier: MarketTier,
    pub modifiers: CategoryModifiers,
    pub notes: String,
}

/// The multiplier table itself, one factor per cost category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CategoryModifiers {
    pub construction: f64,
    pub electrical: f64,
    pub hvac: f64,
    pub plumbing: f64,
    pub fixtures: f64,
    pub technology: f64,
    pub soft_costs: f64,
}

impl CategoryModifiers {
    #[must_use]
    pub const fn get(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::Construction => self.construction,
            CostCategory::Electrical => self.electrical,
            CostCategory::Hvac => self.hvac,
            CostCategory::Plumbing => self.plumbing,
            CostCategory::Fixtures => self.fixtures,
            CostCategory::Technology => self.technology,
            CostCategory::SoftCosts => self.soft_costs,
        }
    }

    /// Identity table: every category at 1.0.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            construction: 1.0,
            electrical: 1.0,
            hvac: 1.0,
            plumbing: 1.0,
            fixtures: 1.0,
            technology: 1.0,
            soft_costs: 1.0,
        }
    }
}

impl Default for CategoryModifiers {
    fn default() -> Self {
        Self::identity()
    }
}

/// Root document of `regional_modifiers.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RegionalModifiers {
    pub markets: Vec<MarketModifiers>,
}

impl RegionalModifiers {
    /// Look up a market by name.
    #[must_use]
    pub fn get(&self, market: &str) -> Option<&MarketModifiers> {
        self.markets.iter().find(|m| m.market == market)
    }

    /// Multiplier for one market/category pair, defaulting to 1.0 when the
    /// market is unknown.
    #[must_use]
    pub fn factor(&self, market: &str, category: CostCategory) -> f64 {
        self.get(market)
            .map_or(1.0, |m| m.modifiers.get(category))
    }
}
