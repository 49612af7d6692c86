use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taskmark::cli::args::{Cli, Commands};
use taskmark::cli::commands;
use taskmark::config::Config;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `TASKMARK_LOG` (e.g. `TASKMARK_LOG=taskmark=debug`).
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("TASKMARK_LOG").unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Scan(args) => commands::scan(args, &config, format)?,
        Commands::Line { text } => commands::line(&text, format)?,
        Commands::Completions { shell, install } => commands::completions(shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
