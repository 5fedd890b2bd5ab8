use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A fictitious participant profile used to synthesize dialogue.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Persona {
    pub name: String,
    pub role: String,
    pub team: String,
    #[serde(default)]
    pub characteristic_phrases: Vec<String>,
}

/// Root document of `personas.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Personas {
    pub participants: Vec<Persona>,
}

impl Personas {
    /// Look up a persona by exact name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Persona> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// First persona matching a role, in declaration order.
    #[must_use]
    pub fn by_role(&self, role: &str) -> Option<&Persona> {
        self.participants.iter().find(|p| p.role == role)
    }
}
