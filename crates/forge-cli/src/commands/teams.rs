//! `storeforge teams` — generate one Teams channel thread.

use anyhow::Context;
use forge_config::ForgeConfig;
use forge_data::index::{self, ConversationIndexEntry};
use forge_data::loader;
use forge_dialogue::teams::{
    TeamsGenerator, ThreadSpec, channel_path, load_or_new_channel, save_channel,
};

use crate::cli::{TeamsArgs, split_names};
use crate::commands::{conversations_root, today};

pub fn run(args: &TeamsArgs, config: &ForgeConfig) -> anyhow::Result<()> {
    let fixtures_root = config.paths.fixtures_root();
    let personas = loader::load_personas(&fixtures_root).context("failed to load personas")?;

    let spec = ThreadSpec {
        channel: args.channel.clone(),
        theme: args.theme.clone(),
        store_id: args.store_id.clone(),
        date: args.date.clone().unwrap_or_else(today),
        participant_pool: split_names(args.participants.as_deref()),
    };

    let generator = TeamsGenerator::new(personas, config.general.seed);
    let thread = generator.generate_thread(&spec)?;

    let output_root = conversations_root(config);
    let path = channel_path(&output_root, &spec.channel);
    let mut channel_file = load_or_new_channel(&path, &spec.channel)?;
    channel_file.threads.push(thread.clone());
    save_channel(&channel_file, &path)?;
    println!("✓ Saved channel: {}", path.display());
    println!("  Threads: {}", channel_file.threads.len());

    let participant_names: Vec<String> =
        thread.participants.iter().map(|p| p.name.clone()).collect();
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
                &participant_names,
                &topics,
            )
        })
        .collect();
    index::append(&output_root, &entries)?;
    if !entries.is_empty() {
        println!("✓ Updated conversation index ({} entries)", entries.len());
    }

    println!("\n✓ Generated thread {} for channel: {}", thread.thread_id, spec.channel);
    Ok(())
}
