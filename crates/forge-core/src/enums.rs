//! Cost categories, market tiers, and meeting types.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// CostCategory
// ---------------------------------------------------------------------------

/// The seven cost categories every budget breaks down into.
///
/// Order matters: iteration over [`CostCategory::ALL`] drives row order in
/// every workbook sheet and the column order of the historical-projects CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Construction,
    Electrical,
    Hvac,
    Plumbing,
    Fixtures,
    Technology,
    SoftCosts,
}

impl CostCategory {
    /// All categories in canonical presentation order.
    pub const ALL: [Self; 7] = [
        Self::Construction,
        Self::Electrical,
        Self::Hvac,
        Self::Plumbing,
        Self::Fixtures,
        Self::Technology,
        Self::SoftCosts,
    ];

    /// Snake-case key used in fixture files and CSV headers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Construction => "construction",
            Self::Electrical => "electrical",
            Self::Hvac => "hvac",
            Self::Plumbing => "plumbing",
            Self::Fixtures => "fixtures",
            Self::Technology => "technology",
            Self::SoftCosts => "soft_costs",
        }
    }

    /// Human-facing label used in workbook rows.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Construction => "Construction",
            Self::Electrical => "Electrical",
            Self::Hvac => "HVAC",
            Self::Plumbing => "Plumbing",
            Self::Fixtures => "Fixtures",
            Self::Technology => "Technology",
            Self::SoftCosts => "Soft Costs",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MarketTier
// ---------------------------------------------------------------------------

/// Cost tier of a regional market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarketTier {
    Primary,
    Secondary,
    Tertiary,
}

impl MarketTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }
}

impl fmt::Display for MarketTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MeetingType
// ---------------------------------------------------------------------------

/// The five synthesized meeting formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MeetingType {
    SiteVisitDebrief,
    VendorNegotiation,
    LessonsLearned,
    DesignReview,
    WeeklyDevSync,
}

impl MeetingType {
    pub const ALL: [Self; 5] = [
        Self::SiteVisitDebrief,
        Self::VendorNegotiation,
        Self::LessonsLearned,
        Self::DesignReview,
        Self::WeeklyDevSync,
    ];

    /// Snake-case key used in template file names and output paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SiteVisitDebrief => "site_visit_debrief",
            Self::VendorNegotiation => "vendor_negotiation",
            Self::LessonsLearned => "lessons_learned",
            Self::DesignReview => "design_review",
            Self::WeeklyDevSync => "weekly_dev_sync",
        }
    }

    /// Title printed in the `MEETING:` transcript header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SiteVisitDebrief => "Site Visit Debrief",
            Self::VendorNegotiation => "Vendor Negotiation",
            Self::LessonsLearned => "Lessons Learned",
            Self::DesignReview => "Design Review",
            Self::WeeklyDevSync => "Weekly Dev Sync",
        }
    }

    /// Parse the snake-case key back into a meeting type.
    #[must_use]
    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mt| mt.as_str() == value)
    }
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_order_is_stable() {
        let keys: Vec<&str> = CostCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            keys,
            [
                "construction",
                "electrical",
                "hvac",
                "plumbing",
                "fixtures",
                "technology",
                "soft_costs"
            ]
        );
    }

    #[test]
    fn meeting_type_roundtrips_through_key() {
        for mt in MeetingType::ALL {
            assert_eq!(MeetingType::from_str_opt(mt.as_str()), Some(mt));
        }
        assert_eq!(MeetingType::from_str_opt("standup"), None);
    }

    #[test]
    fn snake_case_serialization() {
        let json = serde_json::to_string(&CostCategory::SoftCosts).unwrap();
        assert_eq!(json, "\"soft_costs\"");
        let json = serde_json::to_string(&MeetingType::SiteVisitDebrief).unwrap();
        assert_eq!(json, "\"site_visit_debrief\"");
    }
}
