//! `pagelens resolve` - list source files that could serve a URL.

use std::path::Path;

use anyhow::{Result, bail};
use owo_colors::Style;

use crate::config::ProjectConfig;
use crate::core::Slug;
use crate::route::candidate_files;
use crate::utils::format::styled;
use crate::utils::path::{display_relative, first_existing};

pub fn run_resolve(url: &str, first: bool, config: &ProjectConfig) -> Result<()> {
    let layout = config.layout();
    let slug = Slug::from_browser(url);
    let candidates = candidate_files(&layout, &slug);
    crate::debug!("resolve"; "{} -> {} candidates", slug, candidates.len());

    if first {
        let Some(found) = first_existing(&candidates) else {
            bail!("No source file found for {slug}");
        };
        println!("{}", found.display());
        return Ok(());
    }

    for candidate in &candidates {
        println!("{}", format_candidate(candidate, layout.workspace()));
    }

    Ok(())
}

/// `✓ path` when the candidate exists on disk, `  path` otherwise.
fn format_candidate(candidate: &Path, workspace: &Path) -> String {
    let shown = display_relative(candidate, workspace);
    if candidate.is_file() {
        format!("{} {}", styled("✓", Style::new().green()), shown)
    } else {
        format!("  {}", styled(shown, Style::new().dimmed()))
    }
}
