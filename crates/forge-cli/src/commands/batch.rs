//! `storeforge batch` — full production generation run.
//!
//! Reproduces the production plan: 250 meeting transcripts spread over five
//! meeting formats, 250 channel threads across eight channels, a 12-month
//! temporal span, and 300 stores. Per-item failures are collected into an
//! error list and reported at the end of the run; partial output is an
//! accepted outcome and the process still exits 0.

use std::collections::BTreeSet;
use std::collections::HashMap;

use anyhow::Context;
use chrono::{Days, NaiveDate};
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use forge_config::ForgeConfig;
use forge_core::enums::MeetingType;
use forge_data::index::{self, ConversationIndexEntry};
use forge_data::loader;
use forge_dialogue::synth::{MeetingSpec, MeetingSynthesizer};
use forge_dialogue::teams::{
    TeamsGenerator, ThreadSpec, channel_path, load_or_new_channel, save_channel,
};
use forge_dialogue::templates::{self, MeetingTemplate};
use forge_dialogue::transcript;

use crate::cli::BatchArgs;
use crate::commands::conversations_root;
use crate::progress::Progress;

/// One channel's thread allocation.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelPlan {
    pub channel: String,
    pub threads: u32,
    pub themes: Vec<String>,
}

/// The batch plan; the stock plan mirrors the production dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BatchPlan {
    pub site_visits: u32,
    pub vendor_negotiations: u32,
    pub lessons_learned: u32,
    pub design_reviews: u32,
    pub weekly_syncs: u32,
    pub channels: Vec<ChannelPlan>,
}

impl Default for BatchPlan {
    fn default() -> Self {
        Self {
            site_visits: 50,
            vendor_negotiations: 50,
            lessons_learned: 80,
            design_reviews: 40,
            weekly_syncs: 30,
            channels: stock_channels(),
        }
    }
}

fn stock_channels() -> Vec<ChannelPlan> {
    let table: [(&str, u32, &[&str]); 8] = [
        (
            "store-development-general",
            40,
            &[
                "site-visit-followup",
                "cost-variance-discussion",
                "schedule-update",
                "vendor-question",
                "permit-status",
                "construction-milestone",
                "inspection-result",
            ],
        ),
        (
            "construction-vendors",
            50,
            &[
                "supply-chain-delay",
                "pricing-negotiation",
                "vendor-performance-issue",
                "emergency-procurement",
                "quality-concern",
                "delivery-coordination",
                "vendor-substitution",
                "warranty-question",
            ],
        ),
        (
            "design-standards-updates",
            30,
            &[
                "template-update",
                "design-standard-change",
                "material-specification",
                "compliance-question",
                "sustainability-requirement",
                "accessibility-standard",
                "brand-guideline-update",
            ],
        ),
        (
            "columbus-market-planning",
            25,
            &[
                "market-specific-constraint",
                "regional-vendor-discussion",
                "permitting-timeline",
                "market-expansion-plan",
                "local-regulation-update",
                "competitor-activity",
            ],
        ),
        (
            "cincinnati-market-planning",
            25,
            &[
                "labor-rate-discussion",
                "union-requirement",
                "market-specific-constraint",
                "landlord-negotiation",
                "local-incentive-program",
                "market-trend-analysis",
            ],
        ),
        (
            "finance-cost-tracking",
            30,
            &[
                "budget-variance-alert",
                "cost-model-update",
                "financial-reporting",
                "savings-opportunity",
                "portfolio-performance",
                "roi-analysis",
                "capital-planning",
            ],
        ),
        (
            "project-management-tools",
            25,
            &[
                "schedule-optimization",
                "resource-allocation",
                "risk-mitigation",
                "stakeholder-communication",
                "milestone-tracking",
                "process-improvement",
            ],
        ),
        (
            "quality-and-compliance",
            25,
            &[
                "safety-incident-report",
                "code-compliance-check",
                "quality-inspection-finding",
                "warranty-claim",
                "lessons-learned-share",
                "best-practice-discussion",
            ],
        ),
    ];

    table
        .into_iter()
        .map(|(channel, threads, themes)| ChannelPlan {
            channel: channel.to_string(),
            threads,
            themes: themes.iter().map(ToString::to_string).collect(),
        })
        .collect()
}

#[derive(Debug, Default)]
struct Stats {
    meetings_generated: u32,
    teams_threads_generated: u32,
    stores_covered: BTreeSet<String>,
    errors: Vec<String>,
}

pub fn run(args: &BatchArgs, config: &ForgeConfig) -> anyhow::Result<()> {
    let plan = load_plan(args.config.as_deref())?;
    let start_date = NaiveDate::parse_from_str(&args.start_date, "%Y-%m-%d")
        .with_context(|| format!("invalid --start-date '{}'", args.start_date))?;

    let fixtures_root = config.paths.fixtures_root();
    let personas = loader::load_personas(&fixtures_root).context("failed to load personas")?;
    let vendor_registry =
        loader::load_vendor_registry(&fixtures_root).context("failed to load vendor registry")?;

    let mut runner = BatchRunner {
        synthesizer: MeetingSynthesizer::new(
            personas.clone(),
            vendor_registry,
            config.general.seed,
        ),
        teams: TeamsGenerator::new(personas, config.general.seed),
        templates: HashMap::new(),
        config,
        start_date,
        stores: (1..=300).map(|i| format!("Store-{}", 100 + i)).collect(),
        stats: Stats::default(),
    };

    runner.generate_meetings(&plan)?;
    runner.generate_teams(&plan);
    runner.print_summary();
    Ok(())
}

fn load_plan(path: Option<&str>) -> anyhow::Result<BatchPlan> {
    path.map_or_else(
        || Ok(BatchPlan::default()),
        |path| {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read batch config {path}"))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse batch config {path}"))
        },
    )
}

struct BatchRunner<'a> {
    synthesizer: MeetingSynthesizer,
    teams: TeamsGenerator,
    templates: HashMap<MeetingType, MeetingTemplate>,
    config: &'a ForgeConfig,
    start_date: NaiveDate,
    stores: Vec<String>,
    stats: Stats,
}

impl BatchRunner<'_> {
    fn date_at(&self, days_offset: u64) -> String {
        (self.start_date + Days::new(days_offset))
            .format("%Y-%m-%d")
            .to_string()
    }

    fn template_for(&mut self, meeting_type: MeetingType) -> anyhow::Result<MeetingTemplate> {
        if let Some(template) = self.templates.get(&meeting_type) {
            return Ok(template.clone());
        }
        let template =
            templates::load_template(meeting_type, &self.config.paths.templates_root())?;
        self.templates.insert(meeting_type, template.clone());
        Ok(template)
    }

    /// Synthesize, save, and index one meeting; failures land in the error
    /// list.
    fn generate_meeting(&mut self, spec: MeetingSpec, label: &str) {
        let result = self
            .template_for(spec.meeting_type)
            .and_then(|template| Ok(self.synthesizer.synthesize(&spec, &template)?))
            .and_then(|transcript_value| {
                let output_root = conversations_root(self.config);
                let filename = transcript::save(&transcript_value, &output_root)?;
                let names: Vec<String> = transcript_value
                    .participants
                    .iter()
                    .map(|p| p.name.clone())
                    .collect();
                index::append(
                    &output_root,
                    &[ConversationIndexEntry::meeting(
                        &transcript_value.store_or_topic,
                        &filename,
                        &transcript_value.date,
                        &names,
                        &transcript_value.tags,
                    )],
                )?;
                Ok(())
            });

        match result {
            Ok(()) => {
                self.stats.meetings_generated += 1;
                if let Some(store_id) = &spec.store_id {
                    self.stats.stores_covered.insert(store_id.clone());
                }
            }
            Err(error) => self.stats.errors.push(format!("{label}: {error:#}")),
        }
    }

    fn generate_meetings(&mut self, plan: &BatchPlan) -> anyhow::Result<()> {
        println!("\n[1/6] Generating {} site visit debriefs...", plan.site_visits);
        let progress = Progress::bar(u64::from(plan.site_visits), "site visits");
        for i in 0..plan.site_visits {
            let store_id = self.stores[(i as usize * 6) % self.stores.len()].clone();
            let spec = MeetingSpec {
                meeting_type: MeetingType::SiteVisitDebrief,
                store_id: Some(store_id.clone()),
                topic: None,
                date: self.date_at(30 + u64::from(i) * 7),
                participants: participant_names(&["Sarah Chen", "Tom Wilson", "Mike Rodriguez"]),
                duration_minutes: None,
                extra_tags: Vec::new(),
                template_version: None,
            };
            self.generate_meeting(spec, &format!("Site visit {store_id}"));
            progress.inc();
        }
        progress.finish();

        println!(
            "\n[2/6] Generating {} vendor negotiations...",
            plan.vendor_negotiations
        );
        let topics = vendor_topics();
        let progress = Progress::bar(u64::from(plan.vendor_negotiations), "vendor negotiations");
        for (i, topic) in topics
            .iter()
            .take(plan.vendor_negotiations as usize)
            .enumerate()
        {
            let quarter = (i / 13) as u64;
            let days_offset = quarter * 90 + (i % 13) as u64 * 7;
            let spec = MeetingSpec {
                meeting_type: MeetingType::VendorNegotiation,
                store_id: None,
                topic: Some((*topic).to_string()),
                date: self.date_at(days_offset),
                participants: participant_names(&["Jennifer Liu", "Tom Wilson"]),
                duration_minutes: None,
                extra_tags: Vec::new(),
                template_version: None,
            };
            self.generate_meeting(spec, &format!("Vendor negotiation {topic}"));
            progress.inc();
        }
        progress.finish();

        println!(
            "\n[3/6] Generating {} lessons learned meetings...",
            plan.lessons_learned
        );
        let progress = Progress::bar(u64::from(plan.lessons_learned), "lessons learned");
        for i in 0..plan.lessons_learned {
            let store_id = format!("Store-{}", 50 + i);
            let spec = MeetingSpec {
                meeting_type: MeetingType::LessonsLearned,
                store_id: Some(store_id.clone()),
                topic: None,
                date: self.date_at(60 + u64::from(i) * 4),
                participants: participant_names(&[
                    "Sarah Chen",
                    "Tom Wilson",
                    "David Park",
                    "Lisa Thompson",
                ]),
                duration_minutes: None,
                extra_tags: Vec::new(),
                template_version: None,
            };
            self.generate_meeting(spec, &format!("Lessons learned {store_id}"));
            progress.inc();
        }
        progress.finish();

        println!("\n[4/6] Generating {} design reviews...", plan.design_reviews);
        let versions = template_versions(plan.design_reviews as usize);
        let progress = Progress::bar(u64::from(plan.design_reviews), "design reviews");
        for (i, version) in versions.iter().enumerate() {
            let spec = MeetingSpec {
                meeting_type: MeetingType::DesignReview,
                store_id: None,
                topic: Some(format!("template-{version}")),
                date: self.date_at(15 + i as u64 * 9),
                participants: participant_names(&["Carlos Martinez", "Angela Wu", "David Park"]),
                duration_minutes: None,
                extra_tags: Vec::new(),
                template_version: Some(version.clone()),
            };
            self.generate_meeting(spec, &format!("Design review {version}"));
            progress.inc();
        }
        progress.finish();

        println!("\n[5/6] Generating {} weekly dev syncs...", plan.weekly_syncs);
        let markets = sync_markets();
        let progress = Progress::bar(u64::from(plan.weekly_syncs), "weekly dev syncs");
        for i in 0..plan.weekly_syncs as usize {
            let market = markets[i % markets.len()];
            let spec = MeetingSpec {
                meeting_type: MeetingType::WeeklyDevSync,
                store_id: None,
                topic: Some(market.to_string()),
                date: self.date_at(7 + i as u64 * 12),
                participants: participant_names(&["Sarah Chen", "Jennifer Liu"]),
                duration_minutes: None,
                extra_tags: Vec::new(),
                template_version: None,
            };
            self.generate_meeting(spec, &format!("Weekly sync {market}"));
            progress.inc();
        }
        progress.finish();

        println!(
            "\n✓ Meetings generated: {}",
            self.stats.meetings_generated
        );
        Ok(())
    }

    fn generate_teams(&mut self, plan: &BatchPlan) {
        println!("\n[6/6] Generating channel threads...");
        let mut rng = SmallRng::seed_from_u64(self.config.general.seed);

        for channel_plan in &plan.channels {
            println!(
                "\nGenerating {} threads for '{}'...",
                channel_plan.threads, channel_plan.channel
            );
            let progress = Progress::bar(u64::from(channel_plan.threads), &channel_plan.channel);

            for _ in 0..channel_plan.threads {
                let theme = channel_plan
                    .themes
                    .choose(&mut rng)
                    .cloned()
                    .unwrap_or_else(|| "site-visit-followup".to_string());
                let store_id = self.stores[..150]
                    .choose(&mut rng)
                    .cloned()
                    .unwrap_or_else(|| "Store-101".to_string());
                let days_offset = rng.random_range(0..=365_u64);

                let spec = ThreadSpec {
                    channel: channel_plan.channel.clone(),
                    theme: theme.clone(),
                    store_id,
                    date: self.date_at(days_offset),
                    participant_pool: participant_names(&[
                        "Sarah Chen",
                        "Tom Wilson",
                        "Jennifer Liu",
                        "Mike Rodriguez",
                    ]),
                };

                if let Err(error) = self.generate_thread(&spec) {
                    self.stats.errors.push(format!(
                        "Teams thread {}/{theme}: {error:#}",
                        channel_plan.channel
                    ));
                }
                progress.inc();
            }
            progress.finish();
        }

        println!(
            "\n✓ Teams threads generated: {}",
            self.stats.teams_threads_generated
        );
    }

    fn generate_thread(&mut self, spec: &ThreadSpec) -> anyhow::Result<()> {
        let thread = self.teams.generate_thread(spec)?;
        let output_root = conversations_root(self.config);

        let path = channel_path(&output_root, &spec.channel);
        let mut channel_file = load_or_new_channel(&path, &spec.channel)?;
        channel_file.threads.push(thread.clone());
        save_channel(&channel_file, &path)?;

        let names: Vec<String> = thread.participants.iter().map(|p| p.name.clone()).collect();
        let mut topics: Vec<String> = Vec::new();
        for message in &thread.messages {
            for tag in &message.tags {
                if !topics.contains(tag) {
                    topics.push(tag.clone());
                }
            }
        }
        let entries: Vec<ConversationIndexEntry> = thread
            .references
            .stores
            .iter()
            .map(|store_id| {
                ConversationIndexEntry::thread(
                    store_id,
                    &spec.channel,
                    &thread.thread_id,
                    &thread.date,
                    &names,
                    &topics,
                )
            })
            .collect();
        index::append(&output_root, &entries)?;

        self.stats.teams_threads_generated += 1;
        self.stats.stores_covered.insert(spec.store_id.clone());
        Ok(())
    }

    fn print_summary(&self) {
        println!("\n{}", "=".repeat(60));
        println!("BATCH GENERATION COMPLETE");
        println!("{}", "=".repeat(60));
        println!("\nMeetings Generated:         {}", self.stats.meetings_generated);
        println!(
            "Teams Threads Generated:    {}",
            self.stats.teams_threads_generated
        );
        println!(
            "Stores Covered:             {}",
            self.stats.stores_covered.len()
        );

        if self.stats.errors.is_empty() {
            println!("\n✓ No errors encountered");
        } else {
            println!("\n⚠ Errors encountered:       {}", self.stats.errors.len());
            for error in self.stats.errors.iter().take(10) {
                println!("  - {error}");
            }
            if self.stats.errors.len() > 10 {
                println!("  ... and {} more", self.stats.errors.len() - 10);
            }
        }

        println!("\n{}", "=".repeat(60));
    }
}

fn participant_names(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Quarterly vendor negotiation topics, thirteen per quarter.
fn vendor_topics() -> Vec<&'static str> {
    vec![
        // Q1
        "hvac-vendors-q1-2025",
        "electrical-contractors-q1",
        "plumbing-vendors-q1",
        "general-contractors-northeast-q1",
        "lighting-suppliers-q1",
        "flooring-vendors-q1",
        "signage-vendors-q1",
        "security-systems-q1",
        "hvac-maintenance-q1",
        "fire-suppression-q1",
        "hvac-parts-q1",
        "hvac-service-q1",
        "electrical-parts-q1",
        // Q2
        "hvac-vendors-q2-2025",
        "electrical-contractors-q2",
        "plumbing-vendors-q2",
        "general-contractors-midwest-q2",
        "lighting-suppliers-q2",
        "flooring-vendors-q2",
        "signage-vendors-q2",
        "security-systems-q2",
        "hvac-maintenance-q2",
        "fire-suppression-q2",
        "hvac-parts-q2",
        "hvac-service-q2",
        "electrical-parts-q2",
        // Q3
        "hvac-vendors-q3-2025",
        "electrical-contractors-q3",
        "plumbing-vendors-q3",
        "general-contractors-south-q3",
        "lighting-suppliers-q3",
        "flooring-vendors-q3",
        "signage-vendors-q3",
        "security-systems-q3",
        "hvac-maintenance-q3",
        "fire-suppression-q3",
        "hvac-parts-q3",
        "hvac-service-q3",
        "electrical-parts-q3",
        // Q4
        "hvac-vendors-q4-2025",
        "electrical-contractors-q4",
        "plumbing-vendors-q4",
        "general-contractors-west-q4",
        "lighting-suppliers-q4",
        "flooring-vendors-q4",
        "signage-vendors-q4",
        "security-systems-q4",
        "hvac-maintenance-q4",
        "fire-suppression-q4",
        "hvac-annual-review",
        "electrical-annual-review",
    ]
}

/// Template version tags v2.0 onward.
fn template_versions(count: usize) -> Vec<String> {
    let mut versions = Vec::with_capacity(count);
    for major in 2..=5 {
        for minor in 0..10 {
            versions.push(format!("v{major}.{minor}"));
            if versions.len() == count {
                return versions;
            }
        }
    }
    versions
}

/// Market topics for weekly dev syncs.
fn sync_markets() -> Vec<&'static str> {
    vec![
        "Columbus-Market",
        "Cincinnati-Market",
        "Cleveland-Market",
        "Pittsburgh-Market",
        "Indianapolis-Market",
        "Louisville-Market",
        "Detroit-Market",
        "Nashville-Market",
        "Charlotte-Market",
        "Atlanta-Market",
        "Chicago-Market",
        "Milwaukee-Market",
        "Minneapolis-Market",
        "St-Louis-Market",
        "Kansas-City-Market",
        "Dallas-Market",
        "Houston-Market",
        "San-Antonio-Market",
        "Phoenix-Market",
        "Denver-Market",
        "Seattle-Market",
        "Portland-Market",
        "San-Francisco-Market",
        "Los-Angeles-Market",
        "San-Diego-Market",
        "Boston-Market",
        "Philadelphia-Market",
        "New-York-Market",
        "Baltimore-Market",
        "DC-Market",
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stock_plan_matches_production_targets() {
        let plan = BatchPlan::default();
        let meetings = plan.site_visits
            + plan.vendor_negotiations
            + plan.lessons_learned
            + plan.design_reviews
            + plan.weekly_syncs;
        assert_eq!(meetings, 250);

        let threads: u32 = plan.channels.iter().map(|c| c.threads).sum();
        assert_eq!(threads, 250);
        assert_eq!(plan.channels.len(), 8);
    }

    #[test]
    fn vendor_topics_cover_fifty_meetings() {
        assert!(vendor_topics().len() >= 50);
    }

    #[test]
    fn template_versions_start_at_v2() {
        let versions = template_versions(40);
        assert_eq!(versions.len(), 40);
        assert_eq!(versions[0], "v2.0");
        assert_eq!(versions[39], "v5.9");
    }

    #[test]
    fn plan_deserializes_from_partial_json() {
        let plan: BatchPlan =
            serde_json::from_str(r#"{"site_visits": 2, "channels": []}"#).unwrap();
        assert_eq!(plan.site_visits, 2);
        assert_eq!(plan.lessons_learned, 80);
        assert!(plan.channels.is_empty());
    }
}
