//! Page metrics and the snapshot mapping page paths to them.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::SnapshotError;
use super::aggregate::weighted;
use crate::core::Slug;

/// Analytics for one page (or an aggregate over several, with an empty
/// `page_path`).
///
/// Wire format matches common analytics exports:
///
/// ```json
/// { "pagePath": "/blog/", "views": 120, "users": 80,
///   "bounceRate": 0.42, "avgSessionDuration": 73.5 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMetrics {
    /// Raw path as reported by the analytics source
    pub page_path: String,
    pub views: u64,
    pub users: u64,
    /// Fraction in `[0, 1]`
    pub bounce_rate: f64,
    /// Seconds
    pub avg_session_duration: f64,
}

/// Aggregated metrics share the page shape; `page_path` is empty.
pub type AggregatedMetrics = PageMetrics;

/// Accepted snapshot file shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    /// `{ "/blog": { "views": 1, ... }, ... }`
    Keyed(FxHashMap<String, PageMetrics>),
    /// `[ { "pagePath": "/blog", "views": 1, ... }, ... ]`
    Rows(Vec<PageMetrics>),
}

/// Canonical slug for a raw snapshot key.
///
/// Exports are inconsistent: ` /about `, `/about`, `about` and `/about/` all
/// name the same page. Trims, adds the leading slash, then normalizes.
pub fn page_slug(raw: &str) -> Slug {
    let trimmed = raw.trim();
    if trimmed.starts_with('/') {
        Slug::normalize(trimmed)
    } else {
        Slug::normalize(&format!("/{trimmed}"))
    }
}

/// Mapping from raw page path to metrics, as delivered by the analytics
/// source. Keys are kept verbatim and indexed by [`page_slug`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    pages: FxHashMap<String, PageMetrics>,
    /// Canonical slug -> raw key. Smallest raw key wins on collision.
    slugs: FxHashMap<Slug, String>,
}

impl MetricsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key rows by their own `page_path`. Later rows win on duplicate keys.
    pub fn from_rows(rows: impl IntoIterator<Item = PageMetrics>) -> Self {
        let mut snapshot = Self::new();
        for row in rows {
            snapshot.insert(row.page_path.clone(), row);
        }
        snapshot
    }

    pub fn insert(&mut self, path: impl Into<String>, mut metrics: PageMetrics) {
        let path = path.into();
        metrics.page_path.clone_from(&path);

        let slug = page_slug(&path);
        match self.slugs.get(&slug) {
            Some(existing) if *existing <= path => {}
            _ => {
                self.slugs.insert(slug, path.clone());
            }
        }
        self.pages.insert(path, metrics);
    }

    /// Parse a JSON snapshot (object keyed by path, or an array of rows).
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let snapshot = match serde_json::from_str::<SnapshotFile>(text)? {
            SnapshotFile::Keyed(pages) => {
                let mut snapshot = Self::new();
                for (path, metrics) in pages {
                    snapshot.insert(path, metrics);
                }
                snapshot
            }
            SnapshotFile::Rows(rows) => Self::from_rows(rows),
        };
        Ok(snapshot)
    }

    /// Read and parse a JSON snapshot file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let text =
            fs::read_to_string(path).map_err(|err| SnapshotError::Io(path.to_path_buf(), err))?;
        Self::from_json(&text)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All `(raw key, metrics)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageMetrics)> {
        self.pages.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Metrics for an exact page.
    ///
    /// An exact raw key match wins. Otherwise keys are compared by
    /// [`page_slug`], so `/blog`, `blog` and ` /blog/ ` all find `/blog/`.
    pub fn get(&self, slug: &Slug) -> Option<&PageMetrics> {
        if let Some(metrics) = self.pages.get(slug.as_str()) {
            return Some(metrics);
        }
        self.slugs
            .get(&page_slug(slug.as_str()))
            .and_then(|raw| self.pages.get(raw))
    }

    /// Views-weighted totals over the whole snapshot.
    pub fn totals(&self) -> AggregatedMetrics {
        weighted(self.pages.values())
    }
}

impl FromIterator<PageMetrics> for MetricsSnapshot {
    fn from_iter<I: IntoIterator<Item = PageMetrics>>(iter: I) -> Self {
        Self::from_rows(iter)
    }
}

#[cfg(test)]
pub(crate) fn page(path: &str, views: u64, users: u64, bounce_rate: f64, duration: f64) -> PageMetrics {
    PageMetrics {
        page_path: path.to_string(),
        views,
        users,
        bounce_rate,
        avg_session_duration: duration,
    }
}
