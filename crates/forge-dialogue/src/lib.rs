//! # forge-dialogue
//!
//! The scenario dialogue synthesizer: persona and topic driven speaker
//! selection, template-substituted dialogue with seeded pacing, byte-exact
//! transcript formatting, tag/action-item/reference extraction, and Teams
//! channel thread generation.

mod error;
pub mod extract;
pub mod speaker;
pub mod synth;
pub mod teams;
pub mod templates;
pub mod transcript;

pub use error::DialogueError;
