//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Overlay analytics metrics onto static-site source files
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: pagelens.toml)
    #[arg(short = 'C', long, global = true, default_value = "pagelens.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Content directory path (relative to workspace)
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Pages directory path (relative to workspace)
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub pages: Option<PathBuf>,

    /// Analytics snapshot file
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub snapshot: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the URL slug of source files
    Slug {
        /// Source files (relative to cwd or workspace)
        #[arg(required = true, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,
    },

    /// List source files that could serve a URL
    #[command(visible_alias = "r")]
    Resolve {
        /// Slug or full URL, e.g. `/blog/post/` or `https://site.dev/blog/post?ref=x`
        #[arg(value_name = "URL")]
        url: String,

        /// Print only the first candidate that exists
        #[arg(long)]
        first: bool,
    },

    /// Show metrics for source files
    #[command(visible_alias = "m")]
    Metrics {
        /// Source files (relative to cwd or workspace)
        #[arg(required = true, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute metrics for every source file
    #[command(visible_alias = "s")]
    Scan {
        #[command(flatten)]
        args: ScanArgs,
    },
}

/// Scan command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ScanArgs {
    /// Files or directories to scan. If omitted, scans both source roots.
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show only the N most viewed files
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// List only files without analytics data
    #[arg(long, conflicts_with = "top")]
    pub missing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "pagelens",
            "--content",
            "docs",
            "slug",
            "docs/a.md",
            "--snapshot",
            "ga.json",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.content, Some(PathBuf::from("docs")));
        assert_eq!(cli.snapshot, Some(PathBuf::from("ga.json")));
        assert_eq!(cli.config, PathBuf::from("pagelens.toml"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Slug { ref files } if files.len() == 1));
    }

    #[test]
    fn test_resolve_args() {
        let cli = Cli::try_parse_from(["pagelens", "resolve", "/blog/", "--first"]).unwrap();
        match cli.command {
            Commands::Resolve { url, first } => {
                assert_eq!(url, "/blog/");
                assert!(first);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_scan_args() {
        let cli = Cli::try_parse_from(["pagelens", "scan", "--top", "5", "--json"]).unwrap();
        match cli.command {
            Commands::Scan { args } => {
                assert!(args.paths.is_empty());
                assert_eq!(args.top, Some(5));
                assert!(args.json);
                assert!(!args.missing);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["pagelens", "scan", "--top", "5", "--missing"]).is_err());
    }

    #[test]
    fn test_files_required() {
        assert!(Cli::try_parse_from(["pagelens", "metrics"]).is_err());
    }
}
