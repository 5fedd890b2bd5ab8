//! `storeforge budget` — generate the budget artifact workbooks.

use anyhow::Context;
use forge_budget::{average::historical_average, plans};
use forge_config::ForgeConfig;
use forge_data::loader::Fixtures;

use crate::cli::BudgetArgs;
use crate::commands::{budget_root, today};

pub fn run(args: &BudgetArgs, config: &ForgeConfig) -> anyhow::Result<()> {
    let fixtures_root = config.paths.fixtures_root();
    let fixtures = Fixtures::load(&fixtures_root)
        .with_context(|| format!("failed to load fixtures from {}", fixtures_root.display()))?;

    let generated = args.date.clone().unwrap_or_else(today);
    let root = budget_root(config);

    // Per-store-type budget plans.
    let plans_dir = root.join("budget_plans");
    let mut averages = Vec::new();
    for store in &fixtures.store_types.store_types {
        let avg = historical_average(&store.type_id, &fixtures.historical_projects);
        let workbook =
            plans::build_budget_plan(store, avg.as_ref(), &fixtures.cost_model, &generated)?;
        let file_name = workbook.save(&plans_dir)?;
        println!("  ✓ Created {file_name}");
        averages.push((store.type_id.clone(), avg));
    }
    println!(
        "  ✓ Created {} budget plan files",
        fixtures.store_types.store_types.len()
    );

    // Reusable configuration templates.
    let templates_dir = root.join("templates");
    plans::build_store_configuration_template(&generated).save(&templates_dir)?;
    plans::build_constraint_response_template(&generated).save(&templates_dir)?;
    println!("  ✓ Created 2 configuration template files");

    // Build strategy worksheets.
    let strategies_dir = root.join("strategy_worksheets");
    plans::build_fast_track_strategy(&generated).save(&strategies_dir)?;
    plans::build_value_engineering_strategy(&generated).save(&strategies_dir)?;
    println!("  ✓ Created 2 build strategy worksheet files");

    // Cross-reference and workflow workbooks.
    let tools_dir = root.join("agent_tools");
    plans::build_master_index(&fixtures.store_types, &averages, &generated).save(&tools_dir)?;
    plans::build_sample_workflow(&generated).save(&tools_dir)?;
    println!("  ✓ Created 2 agent tool files");

    println!(
        "Total workbook files: {}",
        fixtures.store_types.store_types.len() + 6
    );
    Ok(())
}
