//! Entity structs for all Storeforge domain objects.
//!
//! Each entity maps to a fixture file or a generated artifact. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema generation.

mod base_template;
mod constraint;
mod cost;
mod cost_model;
mod historical;
mod persona;
mod regional;
mod scenario;
mod store_type;
mod thread;
mod transcript;
mod vendor;

pub use base_template::{BaseTemplate, TemplateCategory};
pub use constraint::{ConstraintCatalog, ConstraintExample, ConstraintType};
pub use cost::CostBreakdown;
pub use cost_model::{CostLineItem, CostModel, CostModelEntry, CategoryBreakdown};
pub use historical::{HistoricalAverage, HistoricalProject, HistoricalProjects};
pub use persona::{Persona, Personas};
pub use regional::{CategoryModifiers, MarketModifiers, RegionalModifiers};
pub use scenario::Scenario;
pub use store_type::{StoreType, StoreTypes};
pub use thread::{
    ChannelFile, ChannelMessage, Reaction, StructuredDataRef, Thread, ThreadParticipant,
    ThreadReferences,
};
pub use transcript::{ActionItem, DialogueTurn, Participant, Transcript};
pub use vendor::{Vendor, VendorCatalog, VendorPerformance, VendorRegistry, VendorRegistryEntry};
