//! Fixture seeding: materializes the entire structured dataset.
//!
//! All content mirrors the production dataset: five store types, the v2.3
//! base template, the constraint catalog, 160 historical projects with
//! per-record seeded cost variation, ten market modifier tables, the
//! suburban-standard line-item cost model, the eight-vendor catalog, and the
//! persona roster.

use std::fs;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::json;

use forge_core::entities::{
    BaseTemplate, CategoryModifiers, ConstraintCatalog, ConstraintExample, ConstraintType,
    CostBreakdown, CostLineItem, CostModel, CostModelEntry, CategoryBreakdown, HistoricalProject,
    HistoricalProjects, MarketModifiers, Persona, Personas, RegionalModifiers, StoreType,
    StoreTypes, TemplateCategory, Vendor, VendorCatalog, VendorPerformance, VendorRegistry,
    VendorRegistryEntry,
};
use forge_core::enums::MarketTier;

use crate::loader::{HistoricalProjectRecord, RegionalModifierRecord};
use crate::DataError;

// ── 01 Build templates ─────────────────────────────────────────────

#[must_use]
pub fn store_types() -> StoreTypes {
    let entries: [(&str, &str, u32, [u32; 2], &[&str], &[&str], &[&str], &[&str]); 5] = [
        (
            "urban_flagship",
            "Urban Flagship",
            5000,
            [4500, 6000],
            &["New York", "Chicago", "San Francisco", "Boston"],
            &["High-traffic urban locations", "Brand showcases", "Market entry"],
            &[
                "Premium finishes and fixtures",
                "Advanced technology package",
                "Enhanced lighting design",
                "Digital experience zones",
            ],
            &["Premium materials", "Urban labor rates", "Complex permitting"],
        ),
        (
            "suburban_standard",
            "Suburban Standard",
            3500,
            [3000, 4000],
            &["Columbus", "Cincinnati", "Indianapolis", "Louisville"],
            &["Mall locations", "Shopping centers", "Standard rollout"],
            &[
                "Standard fixtures and finishes",
                "Base technology package",
                "Standard lighting",
                "Traditional layout",
            ],
            &["Material costs", "Standard labor", "Landlord requirements"],
        ),
        (
            "express_compact",
            "Express/Compact",
            2000,
            [1500, 2500],
            &["Secondary markets", "Airport locations", "Outlet centers"],
            &["Quick market entry", "Test markets", "Cost-optimized"],
            &[
                "Essential fixtures only",
                "Minimal technology",
                "Cost-effective finishes",
                "Simplified layout",
            ],
            &["Efficiency", "Material minimization", "Fast construction"],
        ),
        (
            "remodel_refresh",
            "Remodel/Refresh",
            3500,
            [2000, 5000],
            &["All markets"],
            &["Store updates", "Brand refresh", "Technology upgrade"],
            &[
                "Selective category updates",
                "Existing infrastructure reuse",
                "Phased construction",
                "Minimal disruption",
            ],
            &["Demolition", "Working around existing", "Phasing complexity"],
        ),
        (
            "prototype_innovation",
            "Prototype/Innovation",
            4000,
            [3500, 5000],
            &["Select test markets"],
            &["New concept testing", "Format innovation", "Future rollout development"],
            &[
                "Custom fixtures",
                "Advanced technology",
                "Experimental layouts",
                "Premium everything",
            ],
            &["Custom design", "R&D costs", "Trial and error", "Documentation"],
        ),
    ];

    StoreTypes {
        store_types: entries
            .into_iter()
            .map(
                |(type_id, name, sqft, range, markets, use_cases, features, drivers)| StoreType {
                    type_id: type_id.to_string(),
                    name: name.to_string(),
                    typical_sqft: sqft,
                    sqft_range: range,
                    target_markets: to_strings(markets),
                    typical_use_cases: to_strings(use_cases),
                    key_features: to_strings(features),
                    cost_drivers: to_strings(drivers),
                },
            )
            .collect(),
    }
}

#[must_use]
pub fn base_template() -> BaseTemplate {
    let categories: [(&str, &[&str]); 7] = [
        (
            "Construction",
            &["Demolition", "Structural", "Framing", "Drywall", "Flooring", "Ceiling", "Paint"],
        ),
        (
            "Electrical",
            &[
                "Electrical panel (400A standard)",
                "LED lighting system",
                "Outlets and switches",
                "Emergency lighting",
                "Technology wiring",
            ],
        ),
        ("HVAC", &["Commercial HVAC unit", "Ductwork", "Controls", "Maintenance"]),
        ("Plumbing", &["Fixtures", "Water lines", "Drainage", "Backflow prevention"]),
        (
            "Fixtures",
            &["Display fixtures", "Shelving", "Mannequins", "Signage", "Checkout counter"],
        ),
        (
            "Technology",
            &["POS systems", "Security cameras", "WiFi infrastructure", "Digital displays"],
        ),
        (
            "Soft Costs",
            &["Design fees", "Permits", "Insurance", "Project management", "Contingency (10%)"],
        ),
    ];

    BaseTemplate {
        template_id: "base_template_v2.3".to_string(),
        version: "2.3".to_string(),
        effective_date: "2025-03-01".to_string(),
        categories: categories
            .into_iter()
            .map(|(category, subcategories)| TemplateCategory {
                category: category.to_string(),
                subcategories: to_strings(subcategories),
            })
            .collect(),
        specifications: json!({
            "electrical_panel": "400A (updated from 200A as of v2.3)",
            "lighting": "LED throughout",
            "flooring": "Luxury vinyl tile (LVT)",
            "ceiling": "9ft minimum height",
            "hvac": "Variable refrigerant flow (VRF)"
        }),
    }
}

// ── 02 Constraints ─────────────────────────────────────────────────

#[must_use]
pub fn constraint_catalog() -> ConstraintCatalog {
    let types: [(&str, &str, &[(&str, &str, &str)]); 5] = [
        (
            "landlord",
            "Requirements imposed by property owner",
            &[
                (
                    "Approved vendor list only",
                    "May increase costs 5-15% if preferred vendors not approved",
                    "Negotiate vendor approval, use approved subs, price accordingly",
                ),
                (
                    "No structural modifications",
                    "Limits layout options, may require creative workarounds",
                    "Design within existing footprint, use non-structural solutions",
                ),
                (
                    "After-hours work required",
                    "Labor rates increase 20-30% for night/weekend shifts",
                    "Optimize work scheduling, frontload daytime tasks",
                ),
                (
                    "Noise restrictions during mall hours",
                    "Extends timeline by 15-25%, phasing complexity",
                    "Schedule noisy work appropriately, sound dampening",
                ),
            ],
        ),
        (
            "budget",
            "Financial limitations on project",
            &[
                (
                    "Budget cap below market rate",
                    "Requires value engineering, material substitutions",
                    "Phased approach, specification downgrades, vendor negotiation",
                ),
                (
                    "Cash flow limitations",
                    "Payment schedule affects vendor pricing",
                    "Negotiate extended terms, progress payments",
                ),
            ],
        ),
        (
            "timeline",
            "Schedule constraints and deadlines",
            &[
                (
                    "Accelerated schedule (8 weeks vs. 12 weeks)",
                    "Labor premium 15%, material expedite fees, overlap inefficiencies",
                    "Parallel work streams, premium scheduling, night shifts",
                ),
                (
                    "Holiday deadline",
                    "Premium labor during holiday season, reduced productivity",
                    "Buffer time, incentive payments, backup resources",
                ),
            ],
        ),
        (
            "regional",
            "Local market conditions and requirements",
            &[
                (
                    "Union labor required",
                    "Labor rates 8-12% higher than non-union markets",
                    "Build into baseline, negotiate scope efficiently",
                ),
                (
                    "Complex permitting jurisdiction",
                    "Extended timeline (4-6 weeks), additional fees",
                    "Early permit application, expediter services",
                ),
                (
                    "Limited local vendor pool",
                    "Reduced competition, potentially higher pricing",
                    "Develop regional vendor relationships, incentivize new entrants",
                ),
            ],
        ),
        (
            "operational",
            "Store operation requirements",
            &[
                (
                    "Store must remain open during remodel",
                    "Phasing required, productivity loss 20-30%",
                    "Night work, temporary barriers, dust control",
                ),
                (
                    "Minimize closure days",
                    "Compressed schedule, premium labor costs",
                    "Prefabrication, parallel work, extended hours",
                ),
            ],
        ),
    ];

    ConstraintCatalog {
        constraint_types: types
            .into_iter()
            .map(|(kind, description, examples)| ConstraintType {
                kind: kind.to_string(),
                description: description.to_string(),
                examples: examples
                    .iter()
                    .map(|(constraint, impact, mitigation)| ConstraintExample {
                        constraint: (*constraint).to_string(),
                        impact: (*impact).to_string(),
                        mitigation: (*mitigation).to_string(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

// ── 03 Historical projects ─────────────────────────────────────────

const MARKETS: [&str; 7] = [
    "Columbus",
    "Cincinnati",
    "Cleveland",
    "Indianapolis",
    "Louisville",
    "Pittsburgh",
    "Detroit",
];

/// Base cost per square foot by store type.
fn base_cost_psf(store_type: &str) -> i64 {
    match store_type {
        "urban_flagship" => 285,
        "express_compact" => 145,
        "remodel_refresh" => 95,
        "prototype_innovation" => 325,
        _ => 185, // suburban_standard
    }
}

/// Generate the 160 historical project records.
///
/// Each record draws from its own `SmallRng` seeded with
/// `seed.wrapping_add(project_number)`, so any record regenerates
/// identically in isolation.
#[must_use]
pub fn historical_projects(seed: u64, first_store_number: u32) -> HistoricalProjects {
    let distribution: [(&str, u32, u32); 5] = [
        ("suburban_standard", 3500, 80),
        ("urban_flagship", 5000, 20),
        ("express_compact", 2000, 30),
        ("remodel_refresh", 3500, 25),
        ("prototype_innovation", 4000, 5),
    ];

    let mut projects = Vec::new();
    let mut number = first_store_number;

    for (store_type, sqft, count) in distribution {
        for _ in 0..count {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(u64::from(number)));

            let variation = rng.random_range(0.85..=1.15);
            let total_cost = (base_cost_psf(store_type) as f64 * f64::from(sqft) * variation) as i64;

            let categories = CostBreakdown {
                construction: (total_cost as f64 * 0.35) as i64,
                electrical: (total_cost as f64 * 0.12) as i64,
                hvac: (total_cost as f64 * 0.08) as i64,
                plumbing: (total_cost as f64 * 0.05) as i64,
                fixtures: (total_cost as f64 * 0.25) as i64,
                technology: (total_cost as f64 * 0.08) as i64,
                soft_costs: (total_cost as f64 * 0.07) as i64,
            };

            let market = (*MARKETS.choose(&mut rng).expect("non-empty")).to_string();
            let completion_date = format!(
                "2024-{:02}-{:02}",
                rng.random_range(1..=12_u32),
                rng.random_range(1..=28_u32)
            );

            let schedule_note = if rng.random_bool(0.7) {
                "Completed on schedule"
            } else {
                "Delayed by permit issues"
            };
            let vendor_note = if rng.random_bool(0.8) {
                "Vendor performance good"
            } else {
                "Vendor substitution required"
            };

            projects.push(HistoricalProject {
                store_id: format!("Store-{number}"),
                store_type: store_type.to_string(),
                square_footage: sqft,
                market,
                completion_date,
                total_cost,
                cost_per_sqft: ((total_cost as f64 / f64::from(sqft)) * 100.0).round() / 100.0,
                categories,
                timeline_days: rng.random_range(60..=120),
                variance_from_budget: rng.random_range(-5..=10),
                lessons_learned: vec![schedule_note.to_string(), vendor_note.to_string()],
            });

            number += 1;
        }
    }

    HistoricalProjects { projects }
}

// ── 04 Regional modifiers ──────────────────────────────────────────

#[must_use]
pub fn regional_modifiers() -> RegionalModifiers {
    let rows: [(&str, &str, MarketTier, [f64; 7], &str); 10] = [
        (
            "Columbus",
            "OH",
            MarketTier::Secondary,
            [1.00, 1.03, 1.02, 1.01, 1.00, 1.00, 1.02],
            "Baseline market, good vendor competition",
        ),
        (
            "Cincinnati",
            "OH",
            MarketTier::Secondary,
            [1.05, 1.08, 1.04, 1.03, 1.00, 1.00, 1.03],
            "Union labor requirements increase electrical costs",
        ),
        (
            "Cleveland",
            "OH",
            MarketTier::Secondary,
            [1.04, 1.06, 1.03, 1.02, 1.00, 1.00, 1.03],
            "Moderate cost market",
        ),
        (
            "Pittsburgh",
            "PA",
            MarketTier::Secondary,
            [1.07, 1.09, 1.05, 1.04, 1.02, 1.00, 1.05],
            "Higher labor costs, union presence",
        ),
        (
            "Indianapolis",
            "IN",
            MarketTier::Secondary,
            [0.97, 0.99, 0.98, 0.98, 1.00, 1.00, 1.00],
            "Cost-effective market, good vendor availability",
        ),
        (
            "Louisville",
            "KY",
            MarketTier::Tertiary,
            [0.94, 0.96, 0.95, 0.95, 1.00, 1.00, 0.98],
            "Lower cost market",
        ),
        (
            "Detroit",
            "MI",
            MarketTier::Secondary,
            [1.08, 1.12, 1.06, 1.05, 1.00, 1.00, 1.06],
            "High union presence, regulatory complexity",
        ),
        (
            "Chicago",
            "IL",
            MarketTier::Primary,
            [1.25, 1.35, 1.22, 1.20, 1.05, 1.00, 1.15],
            "Major urban market, high labor costs, complex permitting",
        ),
        (
            "New York",
            "NY",
            MarketTier::Primary,
            [1.45, 1.55, 1.40, 1.38, 1.10, 1.05, 1.25],
            "Highest cost market, union mandates, complex logistics",
        ),
        (
            "San Francisco",
            "CA",
            MarketTier::Primary,
            [1.50, 1.52, 1.45, 1.42, 1.08, 1.03, 1.28],
            "Extreme high cost, seismic requirements, permit complexity",
        ),
    ];

    RegionalModifiers {
        markets: rows
            .into_iter()
            .map(|(market, state, tier, m, notes)| MarketModifiers {
                market: market.to_string(),
                state: state.to_string(),
                tier,
                modifiers: CategoryModifiers {
                    construction: m[0],
                    electrical: m[1],
                    hvac: m[2],
                    plumbing: m[3],
                    fixtures: m[4],
                    technology: m[5],
                    soft_costs: m[6],
                },
                notes: notes.to_string(),
            })
            .collect(),
    }
}

// ── 05 Cost model ──────────────────────────────────────────────────

#[must_use]
pub fn cost_model() -> CostModel {
    type Item = (&'static str, &'static str, f64, f64, i64);
    let breakdowns: [(&str, i64, f64, &[Item]); 7] = [
        (
            "construction",
            226_625,
            64.75,
            &[
                ("Demolition", "sqft", 3500.0, 5.50, 19_250),
                ("Framing", "sqft", 3500.0, 12.00, 42_000),
                ("Drywall", "sqft", 7000.0, 8.50, 59_500),
                ("Flooring (LVT)", "sqft", 3500.0, 18.00, 63_000),
                ("Ceiling", "sqft", 3500.0, 7.50, 26_250),
                ("Paint", "sqft", 7000.0, 2.25, 15_750),
            ],
        ),
        (
            "electrical",
            77_700,
            22.20,
            &[
                ("400A electrical panel", "each", 1.0, 8500.0, 8_500),
                ("LED lighting fixtures", "each", 65.0, 412.0, 26_780),
                ("Outlets and switches", "each", 85.0, 125.0, 10_625),
                ("Emergency lighting", "each", 12.0, 385.0, 4_620),
                ("Electrical rough-in", "sqft", 3500.0, 7.50, 26_250),
            ],
        ),
        (
            "hvac",
            51_800,
            14.80,
            &[
                ("Commercial HVAC unit (VRF)", "each", 1.0, 16_500.0, 16_500),
                ("Ductwork", "sqft", 3500.0, 8.50, 29_750),
                ("HVAC controls", "system", 1.0, 3250.0, 3_250),
                ("Installation labor", "system", 1.0, 2300.0, 2_300),
            ],
        ),
        (
            "plumbing",
            32_375,
            9.25,
            &[
                ("Bathroom fixtures", "set", 2.0, 2850.0, 5_700),
                ("Water heater", "each", 1.0, 1250.0, 1_250),
                ("Water lines", "lf", 280.0, 22.0, 6_160),
                ("Drainage", "lf", 280.0, 28.0, 7_840),
                ("Plumbing labor", "sqft", 3500.0, 3.25, 11_375),
            ],
        ),
        (
            "fixtures",
            161_875,
            46.25,
            &[
                ("Wall display fixtures", "lf", 320.0, 185.0, 59_200),
                ("Floor fixtures", "each", 45.0, 725.0, 32_625),
                ("Mannequins", "each", 18.0, 385.0, 6_930),
                ("Signage package", "package", 1.0, 12_500.0, 12_500),
                ("Checkout counter", "lf", 24.0, 425.0, 10_200),
                ("Dressing rooms", "each", 8.0, 1850.0, 14_800),
                ("Mirrors and accessories", "package", 1.0, 8500.0, 8_500),
            ],
        ),
        (
            "technology",
            51_800,
            14.80,
            &[
                ("POS system (3 terminals)", "system", 1.0, 12_500.0, 12_500),
                ("Security cameras", "each", 16.0, 875.0, 14_000),
                ("WiFi infrastructure", "system", 1.0, 4250.0, 4_250),
                ("Digital displays", "each", 4.0, 2150.0, 8_600),
                ("Sound system", "system", 1.0, 3850.0, 3_850),
                ("Technology wiring", "sqft", 3500.0, 2.50, 8_750),
            ],
        ),
        (
            "soft_costs",
            45_325,
            12.95,
            &[
                ("Architectural design", "project", 1.0, 15_000.0, 15_000),
                ("Engineering", "project", 1.0, 8500.0, 8_500),
                ("Permits and fees", "project", 1.0, 6250.0, 6_250),
                ("Project management", "project", 1.0, 8500.0, 8_500),
                ("Contingency (10%)", "percent", 1.0, 7075.0, 7_075),
            ],
        ),
    ];

    let mut breakdown = std::collections::BTreeMap::new();
    for (category, total, per_sqft, items) in breakdowns {
        breakdown.insert(
            category.to_string(),
            CategoryBreakdown {
                total,
                per_sqft,
                line_items: items
                    .iter()
                    .map(|(item, unit, quantity, unit_cost, total)| CostLineItem {
                        item: (*item).to_string(),
                        unit: (*unit).to_string(),
                        quantity: *quantity,
                        unit_cost: *unit_cost,
                        total: *total,
                    })
                    .collect(),
            },
        );
    }

    let mut base_costs = std::collections::BTreeMap::new();
    base_costs.insert(
        "suburban_standard_3500sqft".to_string(),
        CostModelEntry {
            store_type: "suburban_standard".to_string(),
            square_footage: 3500,
            total_base_cost: 647_500,
            cost_per_sqft: 185,
            breakdown,
        },
    );

    let mut formulas = std::collections::BTreeMap::new();
    formulas.insert(
        "regional_adjustment".to_string(),
        "base_cost * regional_modifier".to_string(),
    );
    formulas.insert(
        "timeline_premium".to_string(),
        "base_cost * (1 + premium_rate) where premium_rate = 0.15 for accelerated".to_string(),
    );
    formulas.insert(
        "total_cost".to_string(),
        "sum(categories) * regional_modifier * timeline_factor".to_string(),
    );

    CostModel {
        model_version: "2.3".to_string(),
        last_updated: "2025-03-01".to_string(),
        base_costs,
        formulas,
    }
}

// ── 06 Vendor data ─────────────────────────────────────────────────

#[must_use]
pub fn vendor_catalog() -> VendorCatalog {
    let vendors = vec![
        Vendor {
            vendor_id: "V001".into(),
            name: "BuildRight Construction".into(),
            category: "General Contractor".into(),
            markets: to_strings(&["Columbus", "Cincinnati", "Cleveland", "Indianapolis"]),
            specialties: to_strings(&["Full store builds", "Remodels", "Project management"]),
            pricing: json!({
                "typical_margin": "12-15%",
                "payment_terms": "Progress payments: 30% deposit, 40% at roughin, 30% at completion",
                "typical_lead_time_days": 90
            }),
            performance: VendorPerformance {
                projects_completed: 85,
                on_time_rate: 0.87,
                on_budget_rate: 0.82,
                quality_rating: 4.3,
            },
            notes: None,
        },
        Vendor {
            vendor_id: "V002".into(),
            name: "CoolAir Systems".into(),
            category: "HVAC".into(),
            markets: to_strings(&["All OH, IN, KY markets"]),
            specialties: to_strings(&["Commercial HVAC", "VRF systems", "Controls"]),
            pricing: json!({
                "commercial_unit_3500sqft": 16_500,
                "volume_discount_5_units": "7%",
                "volume_discount_10_units": "12%",
                "payment_terms": "50% deposit, 50% on delivery",
                "typical_lead_time_weeks": 10
            }),
            performance: VendorPerformance {
                projects_completed: 120,
                on_time_rate: 0.75,
                on_budget_rate: 0.88,
                quality_rating: 4.5,
            },
            notes: None,
        },
        Vendor {
            vendor_id: "V003".into(),
            name: "TempMaster".into(),
            category: "HVAC".into(),
            markets: to_strings(&["Columbus", "Cincinnati"]),
            specialties: to_strings(&["Backup vendor", "Competitive pricing"]),
            pricing: json!({
                "commercial_unit_3500sqft": 15_000,
                "typical_discount": "9% under primary vendor",
                "payment_terms": "Standard net 30",
                "typical_lead_time_weeks": 8
            }),
            performance: VendorPerformance {
                projects_completed: 35,
                on_time_rate: 0.91,
                on_budget_rate: 0.95,
                quality_rating: 4.4,
            },
            notes: Some("Emerging preferred vendor based on Store-112 performance".into()),
        },
        Vendor {
            vendor_id: "V004".into(),
            name: "PowerTech Solutions".into(),
            category: "Electrical".into(),
            markets: to_strings(&["All Midwest"]),
            specialties: to_strings(&[
                "Commercial electrical",
                "LED lighting",
                "Technology infrastructure",
            ]),
            pricing: json!({
                "panel_400A": 8500,
                "led_fixture": 412,
                "hourly_rate": 95,
                "typical_lead_time_weeks": 6
            }),
            performance: VendorPerformance {
                projects_completed: 95,
                on_time_rate: 0.89,
                on_budget_rate: 0.84,
                quality_rating: 4.6,
            },
            notes: None,
        },
        Vendor {
            vendor_id: "V005".into(),
            name: "FlowMaster Plumbing".into(),
            category: "Plumbing".into(),
            markets: to_strings(&["OH, IN, PA"]),
            specialties: to_strings(&["Commercial plumbing", "Fixture installation"]),
            pricing: json!({
                "hourly_rate": 85,
                "fixture_set": 2850,
                "typical_lead_time_weeks": 4
            }),
            performance: VendorPerformance {
                projects_completed: 78,
                on_time_rate: 0.92,
                on_budget_rate: 0.90,
                quality_rating: 4.4,
            },
            notes: None,
        },
        Vendor {
            vendor_id: "V006".into(),
            name: "RetailFixtures Pro".into(),
            category: "Fixtures".into(),
            markets: to_strings(&["National"]),
            specialties: to_strings(&["Custom retail fixtures", "Display systems", "Millwork"]),
            pricing: json!({
                "wall_system_per_lf": 185,
                "floor_fixture": 725,
                "mannequin": 385,
                "typical_lead_time_weeks": 8
            }),
            performance: VendorPerformance {
                projects_completed: 145,
                on_time_rate: 0.83,
                on_budget_rate: 0.87,
                quality_rating: 4.7,
            },
            notes: None,
        },
        Vendor {
            vendor_id: "V007".into(),
            name: "SmartStore Tech".into(),
            category: "Technology".into(),
            markets: to_strings(&["National"]),
            specialties: to_strings(&["POS systems", "Security", "Digital displays"]),
            pricing: json!({
                "pos_3_terminal_system": 12_500,
                "security_camera": 875,
                "digital_display": 2150,
                "typical_lead_time_weeks": 6
            }),
            performance: VendorPerformance {
                projects_completed: 110,
                on_time_rate: 0.88,
                on_budget_rate: 0.91,
                quality_rating: 4.5,
            },
            notes: None,
        },
        Vendor {
            vendor_id: "V008".into(),
            name: "BuildSmart Design".into(),
            category: "Design/Architecture".into(),
            markets: to_strings(&["National"]),
            specialties: to_strings(&["Retail design", "Store planning", "Engineering"]),
            pricing: json!({
                "design_fee_3500sqft": 15_000,
                "engineering_fee": 8500,
                "typical_lead_time_weeks": 4
            }),
            performance: VendorPerformance {
                projects_completed: 125,
                on_time_rate: 0.90,
                on_budget_rate: 0.93,
                quality_rating: 4.8,
            },
            notes: None,
        },
    ];

    VendorCatalog { vendors }
}

/// Canonical-name registry derived from the catalog.
#[must_use]
pub fn vendor_registry() -> VendorRegistry {
    VendorRegistry {
        vendors: vendor_catalog()
            .vendors
            .into_iter()
            .map(|vendor| VendorRegistryEntry {
                canonical_name: vendor.name,
                aliases: Vec::new(),
                category: vendor.category,
            })
            .collect(),
    }
}

// ── Personas ───────────────────────────────────────────────────────

#[must_use]
pub fn personas() -> Personas {
    let table: [(&str, &str, &str, &[&str]); 8] = [
        (
            "Sarah Chen",
            "Project Manager",
            "ANF Store Development",
            &[
                "Let me check the numbers on that.",
                "I'll make sure that gets into the knowledge base.",
            ],
        ),
        (
            "Tom Wilson",
            "General Contractor",
            "BuildRight Construction",
            &[
                "That aligns with what we've seen in similar projects.",
                "We can hold that price if the schedule holds.",
            ],
        ),
        (
            "Jennifer Liu",
            "Procurement Manager",
            "ANF",
            &[
                "I'll follow up with the vendor today.",
                "Let's get a second quote before we commit.",
            ],
        ),
        (
            "Mike Rodriguez",
            "Store Manager",
            "ANF",
            &["Traffic peaks between noon and four.", "We can't close the floor for that."],
        ),
        (
            "David Park",
            "VP Store Development",
            "ANF",
            &["What does that do to our annual projections?", "Excellent work team."],
        ),
        (
            "Lisa Thompson",
            "Finance Analyst",
            "ANF Finance",
            &[
                "We should validate that against the historical data.",
                "From a budget perspective, that's material.",
            ],
        ),
        (
            "Carlos Martinez",
            "Design Lead",
            "ANF Design",
            &["The new spec is cleaner to build against.", "I'll update the drawing set."],
        ),
        (
            "Angela Wu",
            "Architect",
            "ANF Design",
            &["Code requires the upgraded panel either way.", "I'll review the load calcs."],
        ),
    ];

    Personas {
        participants: table
            .into_iter()
            .map(|(name, role, team, phrases)| Persona {
                name: name.to_string(),
                role: role.to_string(),
                team: team.to_string(),
                characteristic_phrases: to_strings(phrases),
            })
            .collect(),
    }
}

// ── Writing ────────────────────────────────────────────────────────

/// Materialize every fixture under `root`. Returns the number of files
/// written.
pub fn write_all(root: &Path, seed: u64, first_store_number: u32) -> Result<usize, DataError> {
    let mut written = 0;

    written += write_json(
        &root.join("01_Build_Templates").join("store_types.json"),
        &store_types(),
    )?;
    written += write_json(
        &root.join("01_Build_Templates").join("base_template.json"),
        &base_template(),
    )?;
    written += write_json(
        &root.join("02_Constraints").join("constraint_catalog.json"),
        &constraint_catalog(),
    )?;

    let projects = historical_projects(seed, first_store_number);
    written += write_json(
        &root
            .join("03_Historical_Projects")
            .join("historical_projects.json"),
        &projects,
    )?;
    written += write_historical_csv(
        &root
            .join("03_Historical_Projects")
            .join("historical_projects.csv"),
        &projects,
    )?;

    let modifiers = regional_modifiers();
    written += write_json(
        &root
            .join("04_Regional_Modifiers")
            .join("regional_modifiers.json"),
        &modifiers,
    )?;
    written += write_regional_csv(
        &root
            .join("04_Regional_Modifiers")
            .join("regional_modifiers.csv"),
        &modifiers,
    )?;

    written += write_json(
        &root
            .join("05_Cost_Models")
            .join("cost_model_suburban_standard.json"),
        &cost_model(),
    )?;

    written += write_json(
        &root.join("06_Vendor_Data").join("vendor_catalog.json"),
        &vendor_catalog(),
    )?;
    written += write_vendor_pricing_csv(&root.join("06_Vendor_Data").join("vendor_pricing.csv"))?;

    written += write_json(&root.join("config").join("personas.json"), &personas())?;
    written += write_json(
        &root.join("config").join("vendor_registry.json"),
        &vendor_registry(),
    )?;

    Ok(written)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<usize, DataError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json)?;
    Ok(1)
}

fn write_historical_csv(path: &Path, projects: &HistoricalProjects) -> Result<usize, DataError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for project in &projects.projects {
        writer.serialize(HistoricalProjectRecord::from(project))?;
    }
    writer.flush()?;
    Ok(1)
}

fn write_regional_csv(path: &Path, modifiers: &RegionalModifiers) -> Result<usize, DataError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for market in &modifiers.markets {
        writer.serialize(RegionalModifierRecord {
            market: market.market.clone(),
            state: market.state.clone(),
            tier: market.tier,
            construction: market.modifiers.construction,
            electrical: market.modifiers.electrical,
            hvac: market.modifiers.hvac,
            plumbing: market.modifiers.plumbing,
            fixtures: market.modifiers.fixtures,
            technology: market.modifiers.technology,
            soft_costs: market.modifiers.soft_costs,
            notes: market.notes.clone(),
        })?;
    }
    writer.flush()?;
    Ok(1)
}

fn write_vendor_pricing_csv(path: &Path) -> Result<usize, DataError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Vendor", "Category", "Item", "Price", "Unit", "Lead Time", "Notes"])?;

    let rows: [(&str, &str, &str, i64, &str, &str, &str); 13] = [
        ("CoolAir Systems", "HVAC", "Commercial unit 3500sqft", 16_500, "each", "10 weeks", "Volume discounts available"),
        ("TempMaster", "HVAC", "Commercial unit 3500sqft", 15_000, "each", "8 weeks", "9% under primary vendor"),
        ("PowerTech Solutions", "Electrical", "400A panel", 8_500, "each", "6 weeks", ""),
        ("PowerTech Solutions", "Electrical", "LED fixture", 412, "each", "6 weeks", ""),
        ("FlowMaster Plumbing", "Plumbing", "Fixture set", 2_850, "set", "4 weeks", ""),
        ("RetailFixtures Pro", "Fixtures", "Wall system", 185, "lf", "8 weeks", ""),
        ("RetailFixtures Pro", "Fixtures", "Floor fixture", 725, "each", "8 weeks", ""),
        ("RetailFixtures Pro", "Fixtures", "Mannequin", 385, "each", "8 weeks", ""),
        ("SmartStore Tech", "Technology", "POS system (3 terminals)", 12_500, "system", "6 weeks", ""),
        ("SmartStore Tech", "Technology", "Security camera", 875, "each", "6 weeks", ""),
        ("SmartStore Tech", "Technology", "Digital display", 2_150, "each", "6 weeks", ""),
        ("BuildSmart Design", "Design", "Design fee 3500sqft", 15_000, "project", "4 weeks", ""),
        ("BuildSmart Design", "Design", "Engineering fee", 8_500, "project", "4 weeks", ""),
    ];
    for (vendor, category, item, price, unit, lead_time, notes) in rows {
        writer.write_record([
            vendor,
            category,
            item,
            &price.to_string(),
            unit,
            lead_time,
            notes,
        ])?;
    }
    writer.flush()?;
    Ok(1)
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
