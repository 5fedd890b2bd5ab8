use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CostCategory;

/// Per-category dollar amounts for one project or estimate.
///
/// Invariant carried from the source data: `sum(categories)` approximates the
/// associated total cost, with drift bounded only by integer truncation —
/// there is no enforced tolerance.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CostBreakdown {
    pub construction: i64,
    pub electrical: i64,
    pub hvac: i64,
    pub plumbing: i64,
    pub fixtures: i64,
    pub technology: i64,
    pub soft_costs: i64,
}

impl CostBreakdown {
    /// Amount for one category.
    #[must_use]
    pub const fn get(&self, category: CostCategory) -> i64 {
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

    /// Set the amount for one category.
    pub const fn set(&mut self, category: CostCategory, amount: i64) {
        match category {
            CostCategory::Construction => self.construction = amount,
            CostCategory::Electrical => self.electrical = amount,
            CostCategory::Hvac => self.hvac = amount,
            CostCategory::Plumbing => self.plumbing = amount,
            CostCategory::Fixtures => self.fixtures = amount,
            CostCategory::Technology => self.technology = amount,
            CostCategory::SoftCosts => self.soft_costs = amount,
        }
    }

    /// Sum across all seven categories.
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.construction
            + self.electrical
            + self.hvac
            + self.plumbing
            + self.fixtures
            + self.technology
            + self.soft_costs
    }

    /// Iterate categories in canonical order with their amounts.
    pub fn iter(&self) -> impl Iterator<Item = (CostCategory, i64)> + '_ {
        CostCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_all_categories() {
        let mut breakdown = CostBreakdown::default();
        for (i, category) in CostCategory::ALL.into_iter().enumerate() {
            breakdown.set(category, (i as i64 + 1) * 100);
        }
        assert_eq!(breakdown.total(), 2800);
        assert_eq!(breakdown.get(CostCategory::SoftCosts), 700);
    }

    #[test]
    fn iter_follows_canonical_order() {
        let breakdown = CostBreakdown {
            construction: 1,
            electrical: 2,
            hvac: 3,
            plumbing: 4,
            fixtures: 5,
            technology: 6,
            soft_costs: 7,
        };
        let amounts: Vec<i64> = breakdown.iter().map(|(_, v)| v).collect();
        assert_eq!(amounts, [1, 2, 3, 4, 5, 6, 7]);
    }
}
