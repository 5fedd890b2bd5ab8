use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ActionItem;

/// An emoji reaction with a count, attached to a chat message.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Reaction {
    pub emoji: String,
    pub count: u32,
}

/// One message in a channel thread.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChannelMessage {
    /// Wall-clock timestamp as `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    pub author: String,
    pub role: String,
    pub text: String,
    pub reactions: Vec<Reaction>,
    pub tags: Vec<String>,
}

/// Cross-references attached to a thread.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThreadReferences {
    pub stores: Vec<String>,
    pub vendors: Vec<String>,
    pub meetings: Vec<String>,
    pub structured_data: Vec<StructuredDataRef>,
}

/// Pointer into the structured fixture set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StructuredDataRef {
    pub source: String,
    pub file: String,
    pub field: String,
}

/// A grouped sequence of simulated chat messages with shared participants
/// and topic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Thread {
    pub thread_id: String,
    pub date: String,
    pub participants: Vec<ThreadParticipant>,
    pub messages: Vec<ChannelMessage>,
    pub summary: String,
    pub action_items: Vec<ActionItem>,
    pub references: ThreadReferences,
}

/// Thread participant: name/role/team triple without persona detail.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThreadParticipant {
    pub name: String,
    pub role: String,
    pub team: String,
}

/// Root document of a `{channel}.json` artifact.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChannelFile {
    pub channel: String,
    pub threads: Vec<Thread>,
}
