//! # forge-core
//!
//! Core types and error types for Storeforge.
//!
//! This crate provides the foundational types shared across all Storeforge
//! crates:
//! - Entity structs for all domain objects (store types, historical projects,
//!   regional modifiers, vendors, personas, transcripts, chat threads)
//! - The cost-category enum and money formatting helpers
//! - Cross-cutting error types
//! - Tolerant string-template substitution

pub mod entities;
pub mod enums;
pub mod errors;
pub mod money;
pub mod template;
