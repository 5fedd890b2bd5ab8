//! Teams-style channel conversation generation.
//!
//! Threads are built from theme templates: a required-role list, a message
//! count range, and per-theme message text templates. Message timestamps
//! start at 09:00 on the thread date and advance 15 to 180 minutes per
//! message. Channel artifacts are `{channel}.json` documents holding a
//! `threads` list; regenerating a channel appends threads.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::sync::OnceLock;

use forge_core::entities::{
    ActionItem, ChannelFile, ChannelMessage, Personas, Reaction, StructuredDataRef, Thread,
    ThreadParticipant, ThreadReferences,
};
use forge_core::template::{Context, render};

use crate::DialogueError;

const EMOJIS: [&str; 6] = ["👍", "👏", "💡", "😬", "✅", "🙏"];

/// Theme shape: who talks and how much.
#[derive(Debug, Clone)]
pub struct ThemeSpec {
    pub required_roles: &'static [&'static str],
    pub message_count: (usize, usize),
}

/// Stock theme table. Unknown themes fall back to a short generic exchange.
#[must_use]
pub fn theme_spec(theme: &str) -> ThemeSpec {
    match theme {
        "supply-chain-delay" => ThemeSpec {
            required_roles: &["Procurement Manager", "Project Manager", "General Contractor"],
            message_count: (3, 6),
        },
        "site-visit-followup" => ThemeSpec {
            required_roles: &["Project Manager", "General Contractor"],
            message_count: (2, 4),
        },
        "template-update" => ThemeSpec {
            required_roles: &["Design Lead", "Project Manager", "Architect"],
            message_count: (3, 5),
        },
        "cost-variance-discussion" => ThemeSpec {
            required_roles: &["Finance Analyst", "Project Manager", "General Contractor"],
            message_count: (4, 7),
        },
        _ => ThemeSpec {
            required_roles: &["Project Manager"],
            message_count: (2, 3),
        },
    }
}

/// Message text templates per theme, substituted against `{store_id}`,
/// `{date}`, and `{author}`.
#[must_use]
pub fn message_templates(theme: &str) -> &'static [&'static str] {
    match theme {
        "supply-chain-delay" => &[
            "Heads up team - our primary HVAC vendor (CoolAir Systems) just notified me they're pushing lead times from 6 weeks to 10 weeks for all commercial units. This affects {store_id} and others in our pipeline.",
            "That's going to be a problem for {store_id} - we're already on a tight schedule. Can we explore the backup vendor we used for Store-189?",
            "Good idea. Store-189's backup vendor (TempMaster) came in about 15% higher on cost but delivered on time with good quality. For {store_id}, that would add roughly $8K to our HVAC budget but save us 4 weeks. Let me run the numbers.",
            "I can reach out to TempMaster today to confirm they can meet our timeline. The 15% premium might be worth it to avoid schedule delays.",
            "After running the numbers: 4-week delay would cost us ~$12K in extended fees and lost revenue. The $8K vendor premium is actually the cheaper option. Let's move forward with TempMaster.",
        ],
        "site-visit-followup" => &[
            "Following up from today's site visit for {store_id} - the electrical panel issue Tom identified is going to need immediate attention in our cost estimate.",
            "Agreed. I'm updating the estimate now with the $35K electrical upgrade. Also documenting the landlord vendor restriction we discovered.",
            "Thanks Sarah. Mike, can you send over the store traffic data so we can schedule the electrical work during lowest impact periods?",
            "Will do - sending that over by end of day.",
        ],
        "template-update" => &[
            "Heads up team - base template v2.3 is live as of {date}. All new stores now require 400A electrical panels instead of 200A.",
            "What's driving this change?",
            "Increased HVAC and lighting load requirements. We saw undersized panels causing issues in 3 stores last quarter.",
            "Makes sense. This will add about $5-8K to electrical costs per store, but better to spec it correctly upfront.",
            "Exactly. I've updated the cost model templates to reflect the new 400A standard.",
        ],
        "cost-variance-discussion" => &[
            "FYI - {store_id} came in $15K under budget on electrical work. Worth understanding what drove that variance.",
            "We used the backup vendor TempMaster who had better pricing than our usual contractor. Quality was good, no issues.",
            "Interesting. Is TempMaster someone we should add to our primary vendor rotation?",
            "I'd recommend it. They were responsive, delivered on time, and pricing was 12% lower than our standard rate.",
            "Let me reach out to them about establishing a preferred vendor relationship. Could generate savings across our portfolio.",
        ],
        _ => &[
            "Update on {store_id}.",
            "Thanks for the info.",
            "Let me follow up on that.",
        ],
    }
}

fn thread_summary(theme: &str, message_count: usize) -> String {
    match theme {
        "supply-chain-delay" => "Primary HVAC vendor extended lead times from 6 to 10 weeks. Team decided to switch to backup vendor despite 15% cost premium to avoid schedule delays.".to_string(),
        "site-visit-followup" => "Follow-up on site visit findings. Cost estimate updated with electrical upgrade and landlord constraint documented.".to_string(),
        "template-update" => "Base template v2.3 released with updated electrical panel requirements (200A → 400A) to address load issues.".to_string(),
        "cost-variance-discussion" => "Discussed cost variance on completed store. Identified backup vendor with better pricing for potential preferred vendor status.".to_string(),
        _ => format!("Discussion with {message_count} messages."),
    }
}

/// One thread to generate.
#[derive(Debug, Clone)]
pub struct ThreadSpec {
    pub channel: String,
    pub theme: String,
    pub store_id: String,
    /// Thread date as `YYYY-MM-DD`.
    pub date: String,
    /// Participant names; empty selects by the theme's required roles.
    pub participant_pool: Vec<String>,
}

/// Generates channel threads from theme templates.
#[derive(Debug, Clone)]
pub struct TeamsGenerator {
    personas: Personas,
    seed: u64,
}

impl TeamsGenerator {
    #[must_use]
    pub const fn new(personas: Personas, seed: u64) -> Self {
        Self { personas, seed }
    }

    /// Generate a single thread.
    pub fn generate_thread(&self, spec: &ThreadSpec) -> Result<Thread, DialogueError> {
        let mut rng = SmallRng::seed_from_u64(self.sub_seed(spec));
        let theme = theme_spec(&spec.theme);

        let participants = self.select_participants(&theme, &spec.participant_pool)?;
        if participants.is_empty() {
            return Err(DialogueError::PersonaNotFound(
                theme.required_roles.join(", "),
            ));
        }
        let thread_id = thread_id(&spec.channel, &spec.date, rng.random_range(1..=999));

        let messages = self.generate_messages(spec, &theme, &participants, &mut rng)?;
        let summary = thread_summary(&spec.theme, messages.len());
        let action_items = action_items_from_messages(&messages);
        let references = references(&messages, spec);

        Ok(Thread {
            thread_id,
            date: spec.date.clone(),
            participants,
            messages,
            summary,
            action_items,
            references,
        })
    }

    fn sub_seed(&self, spec: &ThreadSpec) -> u64 {
        let label = format!("{}/{}/{}/{}", spec.channel, spec.theme, spec.store_id, spec.date);
        label
            .bytes()
            .fold(self.seed, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)))
    }

    /// Explicit pool names (max four per thread) or first persona per
    /// required role.
    fn select_participants(
        &self,
        theme: &ThemeSpec,
        pool: &[String],
    ) -> Result<Vec<ThreadParticipant>, DialogueError> {
        let mut participants = Vec::new();

        if pool.is_empty() {
            for role in theme.required_roles {
                if let Some(persona) = self.personas.by_role(role) {
                    participants.push(ThreadParticipant {
                        name: persona.name.clone(),
                        role: persona.role.clone(),
                        team: persona.team.clone(),
                    });
                }
            }
        } else {
            for name in pool.iter().take(4) {
                let persona = self
                    .personas
                    .by_name(name)
                    .ok_or_else(|| DialogueError::PersonaNotFound(name.clone()))?;
                participants.push(ThreadParticipant {
                    name: persona.name.clone(),
                    role: persona.role.clone(),
                    team: persona.team.clone(),
                });
            }
        }

        Ok(participants)
    }

    fn generate_messages(
        &self,
        spec: &ThreadSpec,
        theme: &ThemeSpec,
        participants: &[ThreadParticipant],
        rng: &mut SmallRng,
    ) -> Result<Vec<ChannelMessage>, DialogueError> {
        let templates = message_templates(&spec.theme);
        let (low, high) = theme.message_count;
        let count = rng.random_range(low..=high).min(templates.len());

        let date = NaiveDate::parse_from_str(&spec.date, "%Y-%m-%d")
            .map_err(|_| DialogueError::InvalidDate(spec.date.clone()))?;
        let mut current: NaiveDateTime = date.and_hms_opt(9, 0, 0).expect("09:00 is valid");

        let mut messages = Vec::with_capacity(count);
        for (i, template) in templates.iter().take(count).enumerate() {
            let author = &participants[i % participants.len()];

            let mut ctx = Context::new();
            ctx.insert("store_id".into(), spec.store_id.clone());
            ctx.insert("date".into(), spec.date.clone());
            ctx.insert("author".into(), author.name.clone());
            let text = render(template, &ctx);

            let reactions = generate_reactions(i, count, rng);
            let tags = message_tags(&text, &spec.store_id);

            messages.push(ChannelMessage {
                timestamp: current.format("%Y-%m-%d %H:%M:%S").to_string(),
                author: author.name.clone(),
                role: author.role.clone(),
                text,
                reactions,
                tags,
            });

            current += Duration::minutes(i64::from(rng.random_range(15..=180_u32)));
        }

        Ok(messages)
    }
}

/// Thread id: channel initials, compact date, zero-padded counter.
fn thread_id(channel: &str, date: &str, counter: u32) -> String {
    let prefix: String = channel
        .split('-')
        .filter_map(|word| word.chars().next())
        .collect();
    let date_str = date.replace('-', "");
    format!("{prefix}_{date_str}_{counter:03}")
}

/// First and last messages draw more reactions than the middle.
fn generate_reactions(index: usize, total: usize, rng: &mut SmallRng) -> Vec<Reaction> {
    let count = if index == 0 || index + 1 == total {
        rng.random_range(3..=5)
    } else {
        rng.random_range(0..=3)
    };

    (0..count)
        .map(|_| Reaction {
            emoji: (*EMOJIS.choose(rng).expect("non-empty")).to_string(),
            count: rng.random_range(1..=4),
        })
        .collect()
}

/// Keyword tags on one message.
fn message_tags(text: &str, store_id: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tags = Vec::new();

    if lowered.contains("supply-chain") || lowered.contains("lead time") {
        tags.push("supply-chain".to_string());
    }
    if lowered.contains("hvac") {
        tags.push("hvac".to_string());
    }
    if lowered.contains("cost") || lowered.contains("budget") || text.contains('$') {
        tags.push("cost".to_string());
    }
    if lowered.contains("schedule") || lowered.contains("timeline") {
        tags.push("schedule".to_string());
    }
    if !store_id.is_empty() {
        tags.push(store_id.to_string());
    }

    tags
}

/// Commitment-sounding messages become open action items, capped at three.
fn action_items_from_messages(messages: &[ChannelMessage]) -> Vec<ActionItem> {
    let mut items = Vec::new();
    for message in messages {
        let lowered = message.text.to_lowercase();
        let committal = ["i can", "i'll", "let me", "will send"]
            .iter()
            .any(|phrase| lowered.contains(phrase));
        if committal {
            items.push(ActionItem {
                description: message.text.chars().take(100).collect(),
                owner: message.author.clone(),
                due_date: None,
            });
            if items.len() == 3 {
                break;
            }
        }
    }
    items
}

fn store_ref_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"Store[- ]#?(\d+)").expect("static pattern"))
}

fn vendor_ref_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([A-Z][a-zA-Z]+ (?:Systems|Solutions|Construction|Master))")
            .expect("static pattern")
    })
}

/// Build the thread references block out of the message text.
fn references(messages: &[ChannelMessage], spec: &ThreadSpec) -> ThreadReferences {
    let full_text = messages
        .iter()
        .map(|m| m.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let mut stores: Vec<String> = Vec::new();
    for capture in store_ref_pattern().captures_iter(&full_text) {
        let store = format!("Store-{}", &capture[1]);
        if !stores.contains(&store) {
            stores.push(store);
        }
    }

    let mut vendors: Vec<String> = Vec::new();
    for capture in vendor_ref_pattern().captures_iter(&full_text) {
        let vendor = capture[1].to_string();
        if !vendors.contains(&vendor) {
            vendors.push(vendor);
        }
    }

    let mut meetings = Vec::new();
    if spec.theme == "site-visit-followup" && !spec.store_id.is_empty() {
        meetings.push(format!(
            "site_visit_debrief_{}_{}.txt",
            spec.store_id, spec.date
        ));
    }

    let mut structured_data = Vec::new();
    if !spec.store_id.is_empty() {
        structured_data.push(StructuredDataRef {
            source: "03_Historical_Projects".to_string(),
            file: "historical_projects.csv".to_string(),
            field: spec.store_id.clone(),
        });
    }

    ThreadReferences {
        stores,
        vendors,
        meetings,
        structured_data,
    }
}

/// Load an existing channel file or start a fresh one.
pub fn load_or_new_channel(path: &Path, channel: &str) -> Result<ChannelFile, DialogueError> {
    if path.exists() {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    } else {
        Ok(ChannelFile {
            channel: channel.to_string(),
            threads: Vec::new(),
        })
    }
}

/// Path of a channel artifact under the output root.
#[must_use]
pub fn channel_path(output_dir: &Path, channel: &str) -> PathBuf {
    output_dir
        .join("teams_channels")
        .join(format!("{channel}.json"))
}

/// Persist a channel file, creating directories as needed.
pub fn save_channel(channel_file: &ChannelFile, path: &Path) -> Result<(), DialogueError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(channel_file)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use forge_core::entities::Persona;
    use pretty_assertions::assert_eq;

    use super::*;

    fn personas() -> Personas {
        let table = [
            ("Sarah Chen", "Project Manager", "ANF Store Development"),
            ("Tom Wilson", "General Contractor", "BuildRight Construction"),
            ("Jennifer Liu", "Procurement Manager", "ANF"),
            ("Lisa Thompson", "Finance Analyst", "ANF Finance"),
            ("Carlos Martinez", "Design Lead", "ANF Design"),
            ("Angela Wu", "Architect", "ANF Design"),
        ];
        Personas {
            participants: table
                .into_iter()
                .map(|(name, role, team)| Persona {
                    name: name.into(),
                    role: role.into(),
                    team: team.into(),
                    characteristic_phrases: vec![],
                })
                .collect(),
        }
    }

    fn spec() -> ThreadSpec {
        ThreadSpec {
            channel: "construction-vendors".into(),
            theme: "supply-chain-delay".into(),
            store_id: "Store-217".into(),
            date: "2025-03-10".into(),
            participant_pool: vec![],
        }
    }

    #[test]
    fn thread_id_uses_channel_initials_and_date() {
        assert_eq!(thread_id("construction-vendors", "2025-03-10", 7), "cv_20250310_007");
        assert_eq!(
            thread_id("store-development-general", "2024-12-01", 123),
            "sdg_20241201_123"
        );
    }

    #[test]
    fn thread_generation_is_deterministic() {
        let generator = TeamsGenerator::new(personas(), 42);
        let a = generator.generate_thread(&spec()).unwrap();
        let b = generator.generate_thread(&spec()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn required_roles_select_participants() {
        let generator = TeamsGenerator::new(personas(), 42);
        let thread = generator.generate_thread(&spec()).unwrap();
        let roles: Vec<&str> = thread.participants.iter().map(|p| p.role.as_str()).collect();
        assert_eq!(
            roles,
            ["Procurement Manager", "Project Manager", "General Contractor"]
        );
    }

    #[test]
    fn message_timestamps_start_at_nine_and_advance() {
        let generator = TeamsGenerator::new(personas(), 42);
        let thread = generator.generate_thread(&spec()).unwrap();
        assert!(thread.messages[0].timestamp.starts_with("2025-03-10 09:00:00"));
        let mut previous = thread.messages[0].timestamp.clone();
        for message in &thread.messages[1..] {
            assert!(message.timestamp > previous);
            previous = message.timestamp.clone();
        }
    }

    #[test]
    fn references_extract_stores_and_vendors() {
        let generator = TeamsGenerator::new(personas(), 42);
        let thread = generator.generate_thread(&spec()).unwrap();
        assert!(thread.references.stores.contains(&"Store-217".to_string()));
        // CoolAir Systems appears in the first supply-chain message.
        assert!(thread
            .references
            .vendors
            .iter()
            .any(|v| v == "CoolAir Systems"));
        assert_eq!(thread.references.structured_data[0].field, "Store-217");
    }

    #[test]
    fn followup_theme_links_the_site_visit_transcript() {
        let generator = TeamsGenerator::new(personas(), 42);
        let mut followup = spec();
        followup.theme = "site-visit-followup".into();
        let thread = generator.generate_thread(&followup).unwrap();
        assert_eq!(
            thread.references.meetings,
            vec!["site_visit_debrief_Store-217_2025-03-10.txt".to_string()]
        );
    }

    #[test]
    fn unknown_theme_uses_generic_exchange() {
        let generator = TeamsGenerator::new(personas(), 42);
        let mut odd = spec();
        odd.theme = "quality-concern".into();
        let thread = generator.generate_thread(&odd).unwrap();
        assert!(!thread.messages.is_empty());
        assert!(thread.summary.contains("messages"));
    }

    #[test]
    fn channel_files_append_threads() {
        let dir = tempfile::tempdir().unwrap();
        let path = channel_path(dir.path(), "construction-vendors");
        let generator = TeamsGenerator::new(personas(), 42);

        let mut channel = load_or_new_channel(&path, "construction-vendors").unwrap();
        channel.threads.push(generator.generate_thread(&spec()).unwrap());
        save_channel(&channel, &path).unwrap();

        let mut channel = load_or_new_channel(&path, "construction-vendors").unwrap();
        let mut second = spec();
        second.date = "2025-03-11".into();
        channel.threads.push(generator.generate_thread(&second).unwrap());
        save_channel(&channel, &path).unwrap();

        let reloaded = load_or_new_channel(&path, "construction-vendors").unwrap();
        assert_eq!(reloaded.threads.len(), 2);
    }

    #[test]
    fn pool_is_capped_at_four_participants() {
        let generator = TeamsGenerator::new(personas(), 42);
        let mut wide = spec();
        wide.participant_pool = vec![
            "Sarah Chen".into(),
            "Tom Wilson".into(),
            "Jennifer Liu".into(),
            "Lisa Thompson".into(),
            "Carlos Martinez".into(),
        ];
        let thread = generator.generate_thread(&wide).unwrap();
        assert_eq!(thread.participants.len(), 4);
    }
}
