//! `pagelens metrics` - show metrics for source files.

use std::path::PathBuf;

use anyhow::Result;
use owo_colors::Style;
use serde::Serialize;

use super::common::{describe_spec, load_snapshot, print_json, resolve_files};
use crate::analytics::{FileMetrics, PageMetrics, lookup};
use crate::config::{DisplayConfig, ProjectConfig};
use crate::utils::format::{format_count, format_duration, format_percent, styled};
use crate::utils::path::display_relative;

/// One file's metrics, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(flatten)]
    pub metrics: FileMetrics,
}

pub fn run_metrics(files: &[PathBuf], json: bool, config: &ProjectConfig) -> Result<()> {
    let layout = config.layout();
    let snapshot = load_snapshot(config)?;

    let reports: Vec<FileReport> = resolve_files(files, &layout)
        .into_iter()
        .map(|file| FileReport {
            metrics: lookup(&layout, &file, &snapshot),
            file: display_relative(&file, layout.workspace()),
        })
        .collect();

    if json {
        return print_json(&reports);
    }

    for report in &reports {
        println!("{}", styled(&report.file, Style::new().bold()));
        println!("  {}", describe_metrics(&report.metrics, &config.display));
    }

    Ok(())
}

/// Two-part description: what the file publishes, then its numbers.
pub fn describe_metrics(metrics: &FileMetrics, display: &DisplayConfig) -> String {
    let (what, data) = match metrics {
        FileMetrics::Page { slug, metrics } => (slug.to_string(), metrics.as_ref()),
        FileMetrics::Dynamic { spec, metrics } => (
            format!("dynamic ({})", describe_spec(spec)),
            metrics.as_ref(),
        ),
        FileMetrics::OutOfScope => {
            return styled("not a routable source file", Style::new().dimmed());
        }
    };

    let what = styled(what, Style::new().cyan());
    match data {
        Some(m) => format!("{what}  {}", format_summary(m, display)),
        None => format!("{what}  {}", styled("no analytics data", Style::new().dimmed())),
    }
}

/// `views 1,234  users 987  bounce 36.7%  avg 1m 23s`, bounce colored by health.
pub fn format_summary(m: &PageMetrics, display: &DisplayConfig) -> String {
    let bounce = display.health(m.bounce_rate).paint(&format_percent(m.bounce_rate));
    format!(
        "views {}  users {}  bounce {}  avg {}",
        format_count(m.views),
        format_count(m.users),
        bounce,
        format_duration(m.avg_session_duration)
    )
}
