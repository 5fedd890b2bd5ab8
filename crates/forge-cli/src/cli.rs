//! Top-level CLI parser for the `storeforge` binary.

use clap::{Args, Parser, Subcommand};
use forge_config::ForgeConfig;

#[derive(Debug, Parser)]
#[command(
    name = "storeforge",
    version,
    about = "Storeforge - retail build-out fixture dataset synthesizer"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Fixture dataset root (defaults to config `paths.fixtures_dir`)
    #[arg(long, global = true)]
    pub fixtures: Option<String>,

    /// Output root for generated artifacts (defaults to config `paths.output_dir`)
    #[arg(long, global = true)]
    pub output: Option<String>,

    /// Meeting-template override directory (defaults to config `paths.templates_dir`)
    #[arg(long, global = true)]
    pub templates: Option<String>,

    /// Master seed for deterministic generation
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Layered config with CLI flags applied on top.
    pub fn effective_config(&self) -> Result<ForgeConfig, forge_config::ConfigError> {
        let mut config = ForgeConfig::load_with_dotenv()?;
        if let Some(fixtures) = &self.fixtures {
            config.paths.fixtures_dir.clone_from(fixtures);
        }
        if let Some(output) = &self.output {
            config.paths.output_dir.clone_from(output);
        }
        if let Some(templates) = &self.templates {
            config.paths.templates_dir.clone_from(templates);
        }
        if let Some(seed) = self.seed {
            config.general.seed = seed;
        }
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Materialize the structured fixture dataset (folders 01-06 plus config)
    Seed(SeedArgs),
    /// Generate the budget artifact workbooks (folder 08)
    Budget(BudgetArgs),
    /// Generate one meeting transcript
    Meeting(MeetingArgs),
    /// Generate one Teams channel thread
    Teams(TeamsArgs),
    /// Run a full production batch of meetings and channel threads
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
pub struct SeedArgs {}

#[derive(Debug, Args)]
pub struct BudgetArgs {
    /// Generation date stamped into workbooks (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Debug, Args)]
pub struct MeetingArgs {
    /// Meeting type
    #[arg(long, value_parser = [
        "site_visit_debrief",
        "vendor_negotiation",
        "lessons_learned",
        "design_review",
        "weekly_dev_sync",
    ])]
    pub meeting_type: String,

    /// Store ID (e.g. Store-217)
    #[arg(long)]
    pub store_id: Option<String>,

    /// Topic (for non-store meetings)
    #[arg(long)]
    pub topic: Option<String>,

    /// Meeting date (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<String>,

    /// Duration in minutes
    #[arg(long)]
    pub duration: Option<u32>,

    /// Pipe-separated participant names (default: auto-select by role)
    #[arg(long)]
    pub participants: Option<String>,

    /// Template version tag (design reviews)
    #[arg(long)]
    pub template_version: Option<String>,
}

#[derive(Debug, Args)]
pub struct TeamsArgs {
    /// Channel name
    #[arg(long, default_value = "construction-vendors")]
    pub channel: String,

    /// Conversation theme
    #[arg(long, default_value = "supply-chain-delay")]
    pub theme: String,

    /// Store ID referenced by the thread
    #[arg(long, default_value = "Store-217")]
    pub store_id: String,

    /// Thread date (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<String>,

    /// Pipe-separated participant pool (default: theme's required roles)
    #[arg(long)]
    pub participants: Option<String>,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Path to a JSON batch-configuration file (defaults to the stock
    /// production plan)
    #[arg(long)]
    pub config: Option<String>,

    /// First day of the generated 12-month span (YYYY-MM-DD)
    #[arg(long, default_value = "2024-06-01")]
    pub start_date: String,
}

/// Split a `a|b|c` participant flag into names.
#[must_use]
pub fn split_names(raw: Option<&str>) -> Vec<String> {
    raw.map_or_else(Vec::new, |value| {
        value
            .split('|')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, split_names};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "storeforge",
            "--seed",
            "7",
            "--output",
            "/tmp/forge",
            "seed",
        ])
        .expect("cli should parse");

        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.output.as_deref(), Some("/tmp/forge"));
        assert!(matches!(cli.command, Commands::Seed(_)));
    }

    #[test]
    fn meeting_args_parse() {
        let cli = Cli::try_parse_from([
            "storeforge",
            "meeting",
            "--meeting-type",
            "lessons_learned",
            "--store-id",
            "Store-189",
            "--date",
            "2025-03-10",
            "--participants",
            "Sarah Chen|Tom Wilson",
        ])
        .expect("cli should parse");

        let Commands::Meeting(args) = cli.command else {
            panic!("expected meeting command");
        };
        assert_eq!(args.meeting_type, "lessons_learned");
        assert_eq!(args.store_id.as_deref(), Some("Store-189"));
        assert_eq!(
            split_names(args.participants.as_deref()),
            ["Sarah Chen", "Tom Wilson"]
        );
    }

    #[test]
    fn unknown_meeting_type_is_rejected() {
        let parsed = Cli::try_parse_from([
            "storeforge",
            "meeting",
            "--meeting-type",
            "standup",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn teams_args_have_defaults() {
        let cli = Cli::try_parse_from(["storeforge", "teams"]).expect("cli should parse");
        let Commands::Teams(args) = cli.command else {
            panic!("expected teams command");
        };
        assert_eq!(args.channel, "construction-vendors");
        assert_eq!(args.theme, "supply-chain-delay");
        assert_eq!(args.store_id, "Store-217");
    }

    #[test]
    fn split_names_handles_empty_input() {
        assert!(split_names(None).is_empty());
        assert!(split_names(Some("")).is_empty());
        assert_eq!(split_names(Some(" a | b ")), ["a", "b"]);
    }
}
