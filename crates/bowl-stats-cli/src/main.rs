//! bowl-stats - Build the bowlers.json dashboard feed from league score sheets
//!
//! Usage:
//!   bowl-stats            Read the sheets in the working directory, write bowlers.json
//!   bowl-stats --help     Show help

use anyhow::Context;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use bowl_stats_core::config::{Config, CONFIG_FILE};
use bowl_stats_core::StatsBuilder;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if let Some(arg) = args.first() {
        eprintln!("Error: unexpected argument '{}'", arg);
        eprintln!();
        print_help();
        std::process::exit(1);
    }

    init_logging();
    run()
}

fn print_help() {
    let defaults = Config::default();
    println!("bowl-stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Compute per-bowler statistics and export them for the dashboard");
    println!();
    println!("USAGE:");
    println!("    bowl-stats [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --help          Show this help message");
    println!();
    println!("FILES:");
    println!("    {:<16}Bowler names and hex codes", defaults.hex_path.display());
    println!("    {:<16}All recorded games", defaults.scores_path.display());
    println!("    {:<16}Generated output (overwritten)", defaults.output_path.display());
    println!();
    println!("Paths can be overridden in an optional {} file.", CONFIG_FILE);
}

fn init_logging() {
    // stdout carries the success message, logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    let summary = StatsBuilder::new(config)
        .run()
        .context("Failed to generate bowler statistics")?;

    println!("JSON file generated successfully.");
    println!(
        "{} bowlers, {} scores, {} months -> {}",
        summary.bowlers,
        summary.scores,
        summary.months,
        summary.output_path.display()
    );

    Ok(())
}
