use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MeetingType;

/// One attendee line in the transcript header.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub role: String,
    pub team: String,
}

/// A single spoken line.
///
/// `offset_secs` is the accumulated offset from meeting start; the formatter
/// renders it as `[HH:MM:SS]`. Offsets are strictly increasing, each step
/// drawn from [30, 180] simulated seconds.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DialogueTurn {
    pub offset_secs: u32,
    pub speaker: String,
    pub role: String,
    pub text: String,
}

impl DialogueTurn {
    /// Render the offset as the transcript timestamp `[HH:MM:SS]`.
    #[must_use]
    pub fn timestamp(&self) -> String {
        let hours = self.offset_secs / 3600;
        let minutes = (self.offset_secs % 3600) / 60;
        let secs = self.offset_secs % 60;
        format!("[{hours:02}:{minutes:02}:{secs:02}]")
    }
}

/// An extracted follow-up commitment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionItem {
    pub description: String,
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// A complete synthesized meeting: ordered turns plus header metadata.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Transcript {
    pub meeting_type: MeetingType,
    /// Meeting date as `YYYY-MM-DD`.
    pub date: String,
    pub store_or_topic: String,
    pub participants: Vec<Participant>,
    /// Duration in minutes, printed in the header as `HH:MM`.
    pub duration_minutes: u32,
    pub dialogue: Vec<DialogueTurn>,
    pub tags: Vec<String>,
    pub action_items: Vec<ActionItem>,
    pub references: Vec<String>,
}
