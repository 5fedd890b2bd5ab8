//! Meeting template loading.
//!
//! One YAML template per meeting type: an ordered list of scenario lines,
//! each binding a speaker role (or a free-form topic for keyword-based
//! speaker selection) to a `{placeholder}` text template. Stock templates
//! are embedded in the binary; a file at
//! `{templates_dir}/meeting_templates/{meeting_type}.yaml` overrides them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use forge_core::enums::MeetingType;

use crate::DialogueError;

/// One scripted line: who speaks (by role or by topic lookup) and what the
/// text template is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DialogueScenario {
    /// Exact role of the speaker. Takes precedence over `topic`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_role: Option<String>,
    /// Topic string for keyword-based speaker selection when no role is
    /// bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub text: String,
}

/// A parsed meeting template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeetingTemplate {
    pub meeting_type: String,
    pub dialogue_scenarios: Vec<DialogueScenario>,
}

/// Stock template YAML embedded at compile time.
const fn stock_yaml(meeting_type: MeetingType) -> &'static str {
    match meeting_type {
        MeetingType::SiteVisitDebrief => include_str!("../templates/site_visit_debrief.yaml"),
        MeetingType::VendorNegotiation => include_str!("../templates/vendor_negotiation.yaml"),
        MeetingType::LessonsLearned => include_str!("../templates/lessons_learned.yaml"),
        MeetingType::DesignReview => include_str!("../templates/design_review.yaml"),
        MeetingType::WeeklyDevSync => include_str!("../templates/weekly_dev_sync.yaml"),
    }
}

/// Load the template for a meeting type.
///
/// A file at `{templates_dir}/meeting_templates/{meeting_type}.yaml` wins
/// over the embedded stock template; a parse failure in an override file is
/// an error, not a silent fallback.
pub fn load_template(
    meeting_type: MeetingType,
    templates_dir: &Path,
) -> Result<MeetingTemplate, DialogueError> {
    let override_path = templates_dir
        .join("meeting_templates")
        .join(format!("{}.yaml", meeting_type.as_str()));

    if override_path.exists() {
        let raw = std::fs::read_to_string(&override_path)?;
        return serde_yaml::from_str(&raw).map_err(|source| DialogueError::TemplateParse {
            path: override_path.display().to_string(),
            source,
        });
    }

    serde_yaml::from_str(stock_yaml(meeting_type)).map_err(|source| {
        DialogueError::TemplateParse {
            path: format!("embedded:{}", meeting_type.as_str()),
            source,
        }
    })
}

/// Roles referenced by a template, deduplicated in first-appearance order.
///
/// Drives auto-selection of participants when no explicit list is supplied.
#[must_use]
pub fn required_roles(template: &MeetingTemplate) -> Vec<&str> {
    let mut roles: Vec<&str> = Vec::new();
    for scenario in &template.dialogue_scenarios {
        if let Some(role) = scenario.speaker_role.as_deref() {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
    }
    roles
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_stock_template_parses() {
        for meeting_type in MeetingType::ALL {
            let template: MeetingTemplate =
                serde_yaml::from_str(stock_yaml(meeting_type)).expect("stock template parses");
            assert_eq!(template.meeting_type, meeting_type.as_str());
            assert!(!template.dialogue_scenarios.is_empty());
        }
    }

    #[test]
    fn required_roles_deduplicate_in_order() {
        let template: MeetingTemplate =
            serde_yaml::from_str(stock_yaml(MeetingType::LessonsLearned)).unwrap();
        let roles = required_roles(&template);
        assert_eq!(
            roles,
            [
                "Project Manager",
                "VP Store Development",
                "Finance Analyst",
                "General Contractor"
            ]
        );
    }

    #[test]
    fn override_file_wins_over_stock() {
        let dir = tempfile::tempdir().unwrap();
        let meeting_dir = dir.path().join("meeting_templates");
        std::fs::create_dir_all(&meeting_dir).unwrap();
        std::fs::write(
            meeting_dir.join("weekly_dev_sync.yaml"),
            "meeting_type: weekly_dev_sync\ndialogue_scenarios:\n  - speaker_role: Project Manager\n    text: \"Short sync today.\"\n",
        )
        .unwrap();

        let template = load_template(MeetingType::WeeklyDevSync, dir.path()).unwrap();
        assert_eq!(template.dialogue_scenarios.len(), 1);
        assert_eq!(template.dialogue_scenarios[0].text, "Short sync today.");
    }

    #[test]
    fn missing_override_falls_back_to_stock() {
        let dir = tempfile::tempdir().unwrap();
        let template = load_template(MeetingType::DesignReview, dir.path()).unwrap();
        assert!(template.dialogue_scenarios.len() >= 6);
    }

    #[test]
    fn malformed_override_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let meeting_dir = dir.path().join("meeting_templates");
        std::fs::create_dir_all(&meeting_dir).unwrap();
        std::fs::write(meeting_dir.join("design_review.yaml"), ":: not yaml ::").unwrap();

        let result = load_template(MeetingType::DesignReview, dir.path());
        assert!(matches!(
            result,
            Err(DialogueError::TemplateParse { .. })
        ));
    }
}
