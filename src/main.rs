//! pagelens - overlay analytics metrics onto static-site source files.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use pagelens::cli::{self, Cli, Commands};
use pagelens::config::ProjectConfig;
use pagelens::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ProjectConfig::load(&cli)?;

    match &cli.command {
        Commands::Slug { files } => cli::slug::run_slug(files, &config),
        Commands::Resolve { url, first } => cli::resolve::run_resolve(url, *first, &config),
        Commands::Metrics { files, json } => cli::metrics::run_metrics(files, *json, &config),
        Commands::Scan { args } => cli::scan::run_scan(args, &config),
    }
}
