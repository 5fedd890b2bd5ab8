//! Tag and action-item extraction over assembled dialogue text.
//!
//! Pure pattern matching, not an NLP pipeline: store ids via `Store-<digits>`,
//! vendors by verbatim canonical-name search, action items through a small
//! fixed set of English action-phrase patterns. False positives and negatives
//! are accepted by design.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use forge_core::entities::{ActionItem, DialogueTurn, Participant, VendorRegistry};

fn store_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"Store-\d+").expect("static pattern"))
}

fn action_patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"(?i)I'?ll ([\w\s]+) by (\w+ \d+)").expect("static pattern"),
            Regex::new(r"(?i)(@[\w\s]+) (?:will|should) ([\w\s]+)").expect("static pattern"),
            Regex::new(r"(?i)(?:Need to|Must|Should) ([\w\s]+)").expect("static pattern"),
        ]
    })
}

/// Join dialogue texts with single spaces, the shape every extractor
/// matches against.
fn joined_text(dialogue: &[DialogueTurn]) -> String {
    dialogue
        .iter()
        .map(|turn| turn.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Union of explicit tags, `Store-<digits>` matches, and vendor canonical
/// names found verbatim in the dialogue. Sorted, deduplicated, and
/// idempotent: identical dialogue always yields the identical tag set.
#[must_use]
pub fn tags(
    dialogue: &[DialogueTurn],
    explicit: &[String],
    vendor_registry: &VendorRegistry,
) -> Vec<String> {
    let mut set: BTreeSet<String> = explicit
        .iter()
        .filter(|tag| !tag.is_empty())
        .cloned()
        .collect();

    let text = joined_text(dialogue);

    for found in store_id_pattern().find_iter(&text) {
        set.insert(found.as_str().to_string());
    }

    for name in vendor_registry.canonical_names() {
        if text.contains(name) {
            set.insert(name.to_string());
        }
    }

    set.into_iter().collect()
}

/// Action items matched out of the dialogue text, capped at five.
///
/// Ownership defaults to the first participant; due dates stay unset (they
/// could be parsed out of the text, but are not).
#[must_use]
pub fn action_items(dialogue: &[DialogueTurn], participants: &[Participant]) -> Vec<ActionItem> {
    let owner = participants
        .first()
        .map_or_else(String::new, |p| p.name.clone());
    let text = joined_text(dialogue);

    let mut items = Vec::new();
    for pattern in action_patterns() {
        for found in pattern.find_iter(&text) {
            items.push(ActionItem {
                description: found.as_str().to_string(),
                owner: owner.clone(),
                due_date: None,
            });
            if items.len() == 5 {
                return items;
            }
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use forge_core::entities::VendorRegistryEntry;
    use pretty_assertions::assert_eq;

    use super::*;

    fn turn(text: &str) -> DialogueTurn {
        DialogueTurn {
            offset_secs: 0,
            speaker: "Sarah Chen".into(),
            role: "Project Manager".into(),
            text: text.into(),
        }
    }

    fn registry() -> VendorRegistry {
        VendorRegistry {
            vendors: vec![
                VendorRegistryEntry {
                    canonical_name: "TempMaster".into(),
                    aliases: vec![],
                    category: "HVAC".into(),
                },
                VendorRegistryEntry {
                    canonical_name: "CoolAir Systems".into(),
                    aliases: vec![],
                    category: "HVAC".into(),
                },
            ],
        }
    }

    fn participants() -> Vec<Participant> {
        vec![Participant {
            name: "Sarah Chen".into(),
            role: "Project Manager".into(),
            team: "ANF Store Development".into(),
        }]
    }

    #[test]
    fn tags_union_explicit_stores_and_vendors() {
        let dialogue = vec![
            turn("Based on what we did at Store-189, costs look stable."),
            turn("TempMaster delivered on time again."),
        ];
        let result = tags(&dialogue, &["cost-variance".to_string()], &registry());
        assert_eq!(result, ["Store-189", "TempMaster", "cost-variance"]);
    }

    #[test]
    fn tags_are_sorted_and_deduplicated() {
        let dialogue = vec![
            turn("Store-217 and again Store-217."),
            turn("Store-101 wrapped last week."),
        ];
        let result = tags(&dialogue, &["Store-217".to_string()], &registry());
        assert_eq!(result, ["Store-101", "Store-217"]);
    }

    #[test]
    fn tag_extraction_is_idempotent() {
        let dialogue = vec![turn("Store-42 with CoolAir Systems.")];
        let first = tags(&dialogue, &[], &registry());
        let second = tags(&dialogue, &[], &registry());
        assert_eq!(first, second);
    }

    #[test]
    fn vendor_match_is_verbatim_only() {
        let dialogue = vec![turn("tempmaster lowercase should not match.")];
        let result = tags(&dialogue, &[], &registry());
        assert!(result.is_empty());
    }

    #[test]
    fn action_items_match_fixed_phrases() {
        let dialogue = vec![
            turn("I'll send the revised estimate by March 14."),
            turn("@Tom Wilson will confirm vendor availability."),
            turn("Need to validate the panel spec against the template."),
        ];
        let items = action_items(&dialogue, &participants());
        assert_eq!(items.len(), 3);
        assert!(items[0].description.starts_with("I'll send"));
        assert_eq!(items[0].owner, "Sarah Chen");
        assert_eq!(items[0].due_date, None);
    }

    #[test]
    fn action_items_cap_at_five() {
        let dialogue: Vec<DialogueTurn> = (0..8)
            .map(|i| turn(&format!("Need to follow up on item {i}.")))
            .collect();
        let items = action_items(&dialogue, &participants());
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn no_participants_leaves_owner_empty() {
        let dialogue = vec![turn("Must escalate the permit delay.")];
        let items = action_items(&dialogue, &[]);
        assert_eq!(items[0].owner, "");
    }
}
