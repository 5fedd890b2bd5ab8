//! # forge-data
//!
//! The fixture layer: typed loaders for the structured dataset, the seeder
//! that materializes it, and the append-only conversation index.
//!
//! Fixtures live under numbered folders mirroring the dataset layout:
//! `01_Build_Templates`, `02_Constraints`, `03_Historical_Projects`,
//! `04_Regional_Modifiers`, `05_Cost_Models`, `06_Vendor_Data`, plus a
//! `config/` folder for personas and the vendor registry.

mod error;
pub mod index;
pub mod loader;
pub mod seed;

pub use error::DataError;
