//! Append-only conversation index.
//!
//! Every generated artifact (meeting transcript, channel thread) adds a row
//! to `{output}/metadata/conversation_index.csv` correlating it to a store
//! id, date, participants, and topic tags. Rows are only ever appended;
//! nothing rewrites the file.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::DataError;

/// One index row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationIndexEntry {
    pub store_id: String,
    /// `meeting` or `teams_thread`.
    pub conversation_type: String,
    /// Artifact file name; thread rows use `{channel}.json#{thread_id}`.
    pub filename: String,
    pub date: String,
    /// Pipe-joined participant names.
    pub participants: String,
    /// Pipe-joined topic tags.
    pub key_topics: String,
    pub cost_impact: i64,
    pub timeline_impact: i64,
}

impl ConversationIndexEntry {
    /// Row for a meeting transcript.
    #[must_use]
    pub fn meeting(
        store_id: &str,
        filename: &str,
        date: &str,
        participants: &[String],
        tags: &[String],
    ) -> Self {
        Self {
            store_id: store_id.to_string(),
            conversation_type: "meeting".to_string(),
            filename: filename.to_string(),
            date: date.to_string(),
            participants: participants.join("|"),
            key_topics: tags.join("|"),
            cost_impact: 0,
            timeline_impact: 0,
        }
    }

    /// Row for one store referenced by a channel thread.
    #[must_use]
    pub fn thread(
        store_id: &str,
        channel: &str,
        thread_id: &str,
        date: &str,
        participants: &[String],
        tags: &[String],
    ) -> Self {
        Self {
            store_id: store_id.to_string(),
            conversation_type: "teams_thread".to_string(),
            filename: format!("{channel}.json#{thread_id}"),
            date: date.to_string(),
            participants: participants.join("|"),
            key_topics: tags.join("|"),
            cost_impact: 0,
            timeline_impact: 0,
        }
    }
}

/// Path of the index under the output root.
#[must_use]
pub fn index_path(output_dir: &Path) -> PathBuf {
    output_dir.join("metadata").join("conversation_index.csv")
}

/// Append entries to the index, writing the header only when the file is
/// created.
pub fn append(output_dir: &Path, entries: &[ConversationIndexEntry]) -> Result<(), DataError> {
    if entries.is_empty() {
        return Ok(());
    }

    let path = index_path(output_dir);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let is_new = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);

    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read the whole index back (test and inspection helper).
pub fn read(output_dir: &Path) -> Result<Vec<ConversationIndexEntry>, DataError> {
    let path = index_path(output_dir);
    let mut reader = csv::Reader::from_path(&path)?;
    let mut entries = Vec::new();
    for record in reader.deserialize::<ConversationIndexEntry>() {
        entries.push(record?);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(store: &str) -> ConversationIndexEntry {
        ConversationIndexEntry::meeting(
            store,
            "lessons_learned_Store-189_2025-03-10.txt",
            "2025-03-10",
            &["Sarah Chen".to_string(), "Tom Wilson".to_string()],
            &["Store-189".to_string(), "cost-variance".to_string()],
        )
    }

    #[test]
    fn append_creates_file_with_header_once() {
        let dir = tempfile::tempdir().unwrap();
        append(dir.path(), &[entry("Store-189")]).unwrap();
        append(dir.path(), &[entry("Store-217")]).unwrap();

        let raw = std::fs::read_to_string(index_path(dir.path())).unwrap();
        let header_count = raw.matches("store_id,conversation_type").count();
        assert_eq!(header_count, 1, "header must be written exactly once");

        let entries = read(dir.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].store_id, "Store-189");
        assert_eq!(entries[1].store_id, "Store-217");
    }

    #[test]
    fn participants_and_topics_are_pipe_joined() {
        let e = entry("Store-189");
        assert_eq!(e.participants, "Sarah Chen|Tom Wilson");
        assert_eq!(e.key_topics, "Store-189|cost-variance");
    }

    #[test]
    fn thread_rows_point_into_the_channel_file() {
        let e = ConversationIndexEntry::thread(
            "Store-217",
            "construction-vendors",
            "cv_20250310_007",
            "2025-03-10",
            &[],
            &[],
        );
        assert_eq!(e.conversation_type, "teams_thread");
        assert_eq!(e.filename, "construction-vendors.json#cv_20250310_007");
    }

    #[test]
    fn empty_append_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        append(dir.path(), &[]).unwrap();
        assert!(!index_path(dir.path()).exists());
    }
}
