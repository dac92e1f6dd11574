//! `pagelens scan` - metrics for every source file in the workspace.

use anyhow::Result;
use owo_colors::Style;
use rayon::prelude::*;

use super::ScanArgs;
use super::common::{collect_source_files, load_snapshot, print_json};
use super::metrics::{FileReport, describe_metrics, format_summary};
use crate::analytics::{MetricsSnapshot, lookup};
use crate::config::{DisplayConfig, ProjectConfig};
use crate::core::ProjectLayout;
use crate::log;
use crate::utils::format::{format_count, styled};
use crate::utils::{path::display_relative, plural_count};

pub fn run_scan(args: &ScanArgs, config: &ProjectConfig) -> Result<()> {
    let layout = config.layout();
    let files = collect_source_files(&args.paths, &layout)?;
    let snapshot = load_snapshot(config)?;

    let reports = select(scan_files(&files, &layout, &snapshot), args);

    if args.json {
        return print_json(&reports);
    }

    for report in &reports {
        println!(
            "{}  {}  {}",
            styled(
                format!("{:>9}", format_count(report.metrics.views())),
                Style::new().bold()
            ),
            report.file,
            describe_metrics(&report.metrics, &config.display)
        );
    }

    let with_data = reports
        .iter()
        .filter(|r| r.metrics.metrics().is_some())
        .count();
    log!(
        "scan";
        "{} shown, {} with data",
        plural_count(reports.len(), "file"),
        with_data
    );
    log!("metrics"; "{}", site_summary(&snapshot, &config.display));

    Ok(())
}

/// Footer line with the views-weighted totals of the whole snapshot.
fn site_summary(snapshot: &MetricsSnapshot, display: &DisplayConfig) -> String {
    format!(
        "site ({}): {}",
        plural_count(snapshot.len(), "page"),
        format_summary(&snapshot.totals(), display)
    )
}

/// Look up every file in parallel, sorted by views (desc) then path.
///
/// Files outside both roots are dropped.
pub fn scan_files(
    files: &[std::path::PathBuf],
    layout: &ProjectLayout,
    snapshot: &MetricsSnapshot,
) -> Vec<FileReport> {
    let mut reports: Vec<FileReport> = files
        .par_iter()
        .map(|file| FileReport {
            metrics: lookup(layout, file, snapshot),
            file: display_relative(file, layout.workspace()),
        })
        .filter(|r| r.metrics.is_in_scope())
        .collect();

    reports.sort_by(|a, b| {
        b.metrics
            .views()
            .cmp(&a.metrics.views())
            .then_with(|| a.file.cmp(&b.file))
    });
    reports
}

/// Apply `--missing` and `--top`.
fn select(reports: Vec<FileReport>, args: &ScanArgs) -> Vec<FileReport> {
    if args.missing {
        return reports
            .into_iter()
            .filter(|r| r.metrics.metrics().is_none())
            .collect();
    }

    match args.top {
        Some(n) => reports.into_iter().take(n).collect(),
        None => reports,
    }
}
