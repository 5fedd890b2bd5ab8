//! Transcript text formatting and persistence.
//!
//! The text layout is a fixed external interface and is reproduced
//! byte-for-byte: header block, `---` separator, one line per dialogue turn
//! as `[HH:MM:SS] Speaker: text`, trailing `---`, `TAGS:`, then optional
//! `ACTION ITEMS:` and `REFERENCES:` bulleted blocks.

use std::fs;
use std::path::{Path, PathBuf};

use forge_core::entities::Transcript;

use crate::DialogueError;

/// Render a transcript to its canonical text form.
#[must_use]
pub fn format_transcript(transcript: &Transcript) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("MEETING: {}", transcript.meeting_type.title()));
    lines.push(format!("DATE: {}", transcript.date));
    lines.push("PARTICIPANTS:".to_string());
    for p in &transcript.participants {
        lines.push(format!("  - {} ({}) - {}", p.name, p.role, p.team));
    }
    lines.push(format!(
        "DURATION: {:02}:{:02}",
        transcript.duration_minutes / 60,
        transcript.duration_minutes % 60
    ));
    lines.push(format!("STORE/TOPIC: {}", transcript.store_or_topic));
    lines.push("---".to_string());
    lines.push(String::new());

    for turn in &transcript.dialogue {
        lines.push(format!("{} {}: {}", turn.timestamp(), turn.speaker, turn.text));
    }

    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(format!("TAGS: {}", transcript.tags.join(", ")));

    if !transcript.action_items.is_empty() {
        lines.push("ACTION ITEMS:".to_string());
        for item in &transcript.action_items {
            let due = item
                .due_date
                .as_ref()
                .map_or_else(String::new, |d| format!(", due: {d}"));
            lines.push(format!("  - {} [@{}{}]", item.description, item.owner, due));
        }
    }

    if !transcript.references.is_empty() {
        lines.push("REFERENCES:".to_string());
        for reference in &transcript.references {
            lines.push(format!("  - {reference}"));
        }
    }

    lines.join("\n")
}

/// Output file name: `{meeting_type}_{store_or_topic}_{date}.txt`.
#[must_use]
pub fn file_name(transcript: &Transcript) -> String {
    format!(
        "{}_{}_{}.txt",
        transcript.meeting_type.as_str(),
        transcript.store_or_topic,
        transcript.date
    )
}

/// Write the transcript under
/// `{output_dir}/meeting_transcripts/{meeting_type}/`, creating directories
/// as needed. Returns the file name written.
pub fn save(transcript: &Transcript, output_dir: &Path) -> Result<String, DialogueError> {
    let dir: PathBuf = output_dir
        .join("meeting_transcripts")
        .join(transcript.meeting_type.as_str());
    fs::create_dir_all(&dir)?;

    let name = file_name(transcript);
    fs::write(dir.join(&name), format_transcript(transcript))?;
    Ok(name)
}

#[cfg(test)]
mod tests {
    use forge_core::entities::{ActionItem, DialogueTurn, Participant};
    use forge_core::enums::MeetingType;
    use pretty_assertions::assert_eq;

    use super::*;

    fn transcript() -> Transcript {
        Transcript {
            meeting_type: MeetingType::LessonsLearned,
            date: "2025-03-10".into(),
            store_or_topic: "Store-189".into(),
            participants: vec![
                Participant {
                    name: "Sarah Chen".into(),
                    role: "Project Manager".into(),
                    team: "ANF Store Development".into(),
                },
                Participant {
                    name: "Tom Wilson".into(),
                    role: "General Contractor".into(),
                    team: "BuildRight Construction".into(),
                },
            ],
            duration_minutes: 60,
            dialogue: vec![
                DialogueTurn {
                    offset_secs: 0,
                    speaker: "Sarah Chen".into(),
                    role: "Project Manager".into(),
                    text: "Thanks everyone for joining.".into(),
                },
                DialogueTurn {
                    offset_secs: 95,
                    speaker: "Tom Wilson".into(),
                    role: "General Contractor".into(),
                    text: "We used TempMaster instead of our usual contractor.".into(),
                },
            ],
            tags: vec!["Store-189".into(), "cost-variance".into()],
            action_items: vec![ActionItem {
                description: "Add learnings to knowledge base".into(),
                owner: "Sarah Chen".into(),
                due_date: Some("2025-03-14".into()),
            }],
            references: vec!["Vendor: TempMaster (backup vendor with better pricing)".into()],
        }
    }

    #[test]
    fn formats_byte_exact_layout() {
        let expected = "\
MEETING: Lessons Learned
DATE: 2025-03-10
PARTICIPANTS:
  - Sarah Chen (Project Manager) - ANF Store Development
  - Tom Wilson (General Contractor) - BuildRight Construction
DURATION: 01:00
STORE/TOPIC: Store-189
---

[00:00:00] Sarah Chen: Thanks everyone for joining.
[00:01:35] Tom Wilson: We used TempMaster instead of our usual contractor.

---
TAGS: Store-189, cost-variance
ACTION ITEMS:
  - Add learnings to knowledge base [@Sarah Chen, due: 2025-03-14]
REFERENCES:
  - Vendor: TempMaster (backup vendor with better pricing)";
        assert_eq!(format_transcript(&transcript()), expected);
    }

    #[test]
    fn omits_empty_action_and_reference_blocks() {
        let mut t = transcript();
        t.action_items.clear();
        t.references.clear();
        let text = format_transcript(&t);
        assert!(!text.contains("ACTION ITEMS:"));
        assert!(!text.contains("REFERENCES:"));
        assert!(text.ends_with("TAGS: Store-189, cost-variance"));
    }

    #[test]
    fn file_name_follows_convention() {
        assert_eq!(
            file_name(&transcript()),
            "lessons_learned_Store-189_2025-03-10.txt"
        );
    }

    #[test]
    fn save_writes_under_meeting_type_directory() {
        let dir = tempfile::tempdir().unwrap();
        let name = save(&transcript(), dir.path()).unwrap();
        let written = dir
            .path()
            .join("meeting_transcripts")
            .join("lessons_learned")
            .join(&name);
        let raw = std::fs::read_to_string(written).unwrap();
        assert_eq!(raw, format_transcript(&transcript()));
    }
}
