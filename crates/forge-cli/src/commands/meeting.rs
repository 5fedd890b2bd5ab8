//! `storeforge meeting` — generate one meeting transcript.

use anyhow::Context;
use forge_config::ForgeConfig;
use forge_core::enums::MeetingType;
use forge_data::index::{self, ConversationIndexEntry};
use forge_data::loader;
use forge_dialogue::synth::{MeetingSpec, MeetingSynthesizer};
use forge_dialogue::{templates, transcript};

use crate::cli::{MeetingArgs, split_names};
use crate::commands::{conversations_root, today};

pub fn run(args: &MeetingArgs, config: &ForgeConfig) -> anyhow::Result<()> {
    let meeting_type = MeetingType::from_str_opt(&args.meeting_type)
        .with_context(|| format!("unknown meeting type '{}'", args.meeting_type))?;

    let fixtures_root = config.paths.fixtures_root();
    let personas = loader::load_personas(&fixtures_root).context("failed to load personas")?;
    let vendor_registry =
        loader::load_vendor_registry(&fixtures_root).context("failed to load vendor registry")?;

    let spec = MeetingSpec {
        meeting_type,
        store_id: args.store_id.clone(),
        topic: args.topic.clone(),
        date: args.date.clone().unwrap_or_else(today),
        participants: split_names(args.participants.as_deref()),
        duration_minutes: args.duration,
        extra_tags: Vec::new(),
        template_version: args.template_version.clone(),
    };

    let template = templates::load_template(meeting_type, &config.paths.templates_root())?;
    let synthesizer =
        MeetingSynthesizer::new(personas, vendor_registry, config.general.seed);
    let result = synthesizer.synthesize(&spec, &template)?;

    let output_root = conversations_root(config);
    let filename = transcript::save(&result, &output_root)?;
    println!("✓ Saved transcript: {}", filename);

    let participant_names: Vec<String> =
        result.participants.iter().map(|p| p.name.clone()).collect();
    index::append(
        &output_root,
        &[ConversationIndexEntry::meeting(
            &result.store_or_topic,
            &filename,
            &result.date,
            &participant_names,
            &result.tags,
        )],
    )?;
    println!("✓ Updated conversation index");

    println!("\n✓ Generated transcript: {filename}");
    println!("  Tags: {}", result.tags.join(", "));
    println!("  Action Items: {}", result.action_items.len());
    Ok(())
}
