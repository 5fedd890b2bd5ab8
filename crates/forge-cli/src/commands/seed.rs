//! `storeforge seed` — materialize the structured fixture dataset.

use anyhow::Context;
use forge_config::ForgeConfig;

use crate::cli::SeedArgs;

pub fn run(_args: &SeedArgs, config: &ForgeConfig) -> anyhow::Result<()> {
    let root = config.paths.fixtures_root();
    tracing::debug!(root = %root.display(), seed = config.general.seed, "seeding fixtures");

    let written = forge_data::seed::write_all(
        &root,
        config.general.seed,
        config.general.first_store_number,
    )
    .with_context(|| format!("failed to seed fixtures under {}", root.display()))?;

    println!("Seeded {written} fixture files under {}", root.display());
    println!("  01_Build_Templates: store types, base template");
    println!("  02_Constraints: constraint catalog");
    println!("  03_Historical_Projects: 160 projects (json + csv)");
    println!("  04_Regional_Modifiers: 10 markets (json + csv)");
    println!("  05_Cost_Models: suburban_standard line items");
    println!("  06_Vendor_Data: 8 vendors (catalog + pricing csv)");
    println!("  config: personas, vendor registry");
    Ok(())
}
