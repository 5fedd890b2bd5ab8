use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod progress;

fn main() {
    if let Err(error) = run() {
        eprintln!("storeforge error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = cli
        .effective_config()
        .context("failed to load storeforge configuration")?;

    match cli.command {
        cli::Commands::Seed(args) => commands::seed::run(&args, &config),
        cli::Commands::Budget(args) => commands::budget::run(&args, &config),
        cli::Commands::Meeting(args) => commands::meeting::run(&args, &config),
        cli::Commands::Teams(args) => commands::teams::run(&args, &config),
        cli::Commands::Batch(args) => commands::batch::run(&args, &config),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("STOREFORGE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
