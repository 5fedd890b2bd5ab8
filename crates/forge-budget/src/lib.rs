//! # forge-budget
//!
//! The budget derivation pipeline: historical averages, scenario cost
//! projection, regional/timeline adjustment composition, the two build
//! strategy models, and the workbook document builders.
//!
//! Scenario multipliers are aggregate-only while the fast-track strategy
//! carries distinct per-category premiums; the two models describe the same
//! "accelerated schedule" idea with different numbers and are deliberately
//! kept as separate, named computations.

pub mod adjust;
pub mod average;
mod error;
pub mod plans;
pub mod scenario;
pub mod strategy;
pub mod workbook;

pub use error::BudgetError;
