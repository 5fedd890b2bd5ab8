//! End-to-end pipeline test: seed fixtures, derive budgets, synthesize a
//! meeting and a channel thread, and check the conversation index.

use forge_budget::average::historical_average;
use forge_budget::workbook::Cell;
use forge_budget::{adjust, plans, scenario};
use forge_core::enums::{CostCategory, MeetingType};
use forge_data::index::{self, ConversationIndexEntry};
use forge_data::loader::Fixtures;
use forge_data::seed;
use forge_dialogue::synth::{MeetingSpec, MeetingSynthesizer};
use forge_dialogue::teams::{TeamsGenerator, ThreadSpec, channel_path, load_or_new_channel, save_channel};
use forge_dialogue::{templates, transcript};

const SEED: u64 = 20_240_315;

#[test]
fn seeded_fixtures_drive_the_budget_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    seed::write_all(dir.path(), SEED, 50).unwrap();
    let fixtures = Fixtures::load(dir.path()).unwrap();

    // Historical averages exist for every store type in the distribution.
    let avg = historical_average("suburban_standard", &fixtures.historical_projects)
        .expect("80 suburban records");
    assert_eq!(avg.count, 80);

    // Mean total sits inside the ±15% variation band around $647,500.
    assert!(avg.total_cost > 550_000 && avg.total_cost < 745_000);

    // Category averages drift from the total only by truncation error plus
    // the untracked remainder of the fixed percentage split.
    let drift = avg.total_cost - avg.categories.total();
    assert!(drift >= 0, "truncation can only lose dollars");
    assert!(drift <= 14, "drift {drift} beyond fourteen truncation steps");

    // Scenario projections stay exact against the average.
    let projections = scenario::project(avg.total_cost, &scenario::stock_scenarios());
    for projection in &projections {
        assert_eq!(
            projection.cost,
            (avg.total_cost as f64 * projection.scenario.multiplier) as i64
        );
    }

    // A full budget plan renders with all five sheets.
    let store = fixtures.store_types.get("suburban_standard").unwrap();
    let workbook =
        plans::build_budget_plan(store, Some(&avg), &fixtures.cost_model, "2025-03-14").unwrap();
    assert_eq!(workbook.sheets.len(), 5);
    let saved = workbook.save(&dir.path().join("08_Budget_Artifacts/budget_plans")).unwrap();
    assert_eq!(saved, "Budget_Plan_suburban_standard_3500sqft.json");

    // The documented adjustment chain: regional (Cincinnati electrical
    // 1.08) before timeline (1.15), truncating at each step.
    let electrical_factor = fixtures
        .regional_modifiers
        .factor("Cincinnati", CostCategory::Electrical);
    assert_eq!(electrical_factor, 1.08);
    let adjusted = adjust::compose(
        647_500,
        Some(electrical_factor),
        Some(adjust::ACCELERATED_TIMELINE),
    );
    assert_eq!(adjusted, 804_194);
}

#[test]
fn zero_history_store_type_still_renders_a_plan() {
    let dir = tempfile::tempdir().unwrap();
    seed::write_all(dir.path(), SEED, 50).unwrap();
    let fixtures = Fixtures::load(dir.path()).unwrap();

    let mut empty = fixtures.historical_projects.clone();
    empty.projects.retain(|p| p.store_type != "prototype_innovation");
    let avg = historical_average("prototype_innovation", &empty);
    assert!(avg.is_none());

    let store = fixtures.store_types.get("prototype_innovation").unwrap();
    let workbook =
        plans::build_budget_plan(store, avg.as_ref(), &fixtures.cost_model, "2025-03-14").unwrap();
    let summary = workbook.sheet("Executive Summary").unwrap();
    assert!(
        !summary
            .rows
            .iter()
            .any(|row| row.first() == Some(&Cell::from("TOTAL PROJECT COST"))),
        "cost summary rows must be absent without history"
    );
}

#[test]
fn conversation_artifacts_share_one_index() {
    let dir = tempfile::tempdir().unwrap();
    seed::write_all(dir.path(), SEED, 50).unwrap();
    let fixtures = Fixtures::load(dir.path()).unwrap();
    let conversations = dir.path().join("07_Conversations");

    // One meeting transcript.
    let synthesizer =
        MeetingSynthesizer::new(fixtures.personas.clone(), fixtures.vendor_registry.clone(), SEED);
    let spec = MeetingSpec {
        meeting_type: MeetingType::LessonsLearned,
        store_id: Some("Store-189".into()),
        topic: None,
        date: "2025-03-10".into(),
        participants: vec![
            "Sarah Chen".into(),
            "Tom Wilson".into(),
            "David Park".into(),
            "Lisa Thompson".into(),
        ],
        duration_minutes: Some(60),
        extra_tags: vec![],
        template_version: None,
    };
    let template =
        templates::load_template(MeetingType::LessonsLearned, &dir.path().join("templates"))
            .unwrap();
    let result = synthesizer.synthesize(&spec, &template).unwrap();
    let filename = transcript::save(&result, &conversations).unwrap();
    assert_eq!(filename, "lessons_learned_Store-189_2025-03-10.txt");

    let text = std::fs::read_to_string(
        conversations
            .join("meeting_transcripts")
            .join("lessons_learned")
            .join(&filename),
    )
    .unwrap();
    assert!(text.starts_with("MEETING: Lessons Learned\nDATE: 2025-03-10\nPARTICIPANTS:\n"));
    assert!(text.contains("[00:00:00] Sarah Chen:"));
    assert!(text.contains("TAGS: "));

    let names: Vec<String> = result.participants.iter().map(|p| p.name.clone()).collect();
    index::append(
        &conversations,
        &[ConversationIndexEntry::meeting(
            &result.store_or_topic,
            &filename,
            &result.date,
            &names,
            &result.tags,
        )],
    )
    .unwrap();

    // One channel thread.
    let generator = TeamsGenerator::new(fixtures.personas.clone(), SEED);
    let thread_spec = ThreadSpec {
        channel: "construction-vendors".into(),
        theme: "supply-chain-delay".into(),
        store_id: "Store-217".into(),
        date: "2025-03-11".into(),
        participant_pool: vec![],
    };
    let thread = generator.generate_thread(&thread_spec).unwrap();
    let path = channel_path(&conversations, "construction-vendors");
    let mut channel_file = load_or_new_channel(&path, "construction-vendors").unwrap();
    channel_file.threads.push(thread.clone());
    save_channel(&channel_file, &path).unwrap();

    let entries: Vec<ConversationIndexEntry> = thread
        .references
        .stores
        .iter()
        .map(|store_id| {
            ConversationIndexEntry::thread(
                store_id,
                "construction-vendors",
                &thread.thread_id,
                &thread.date,
                &[],
                &[],
            )
        })
        .collect();
    index::append(&conversations, &entries).unwrap();

    // The index correlates both artifacts.
    let rows = index::read(&conversations).unwrap();
    assert!(rows.len() >= 2);
    assert_eq!(rows[0].conversation_type, "meeting");
    assert_eq!(rows[0].store_id, "Store-189");
    assert!(rows[1..].iter().all(|r| r.conversation_type == "teams_thread"));
    assert!(
        rows[1..]
            .iter()
            .any(|r| r.filename.starts_with("construction-vendors.json#"))
    );
}
