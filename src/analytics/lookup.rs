//! Per-file metrics lookup, the entry point for display code.

use std::path::Path;

use serde::Serialize;

use super::{AggregateOutcome, MetricsSnapshot, PageMetrics, aggregate_matching};
use crate::core::{ProjectLayout, Slug};
use crate::route::{FileRoute, MatchSpec, file_route};

/// Metrics attached to a source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FileMetrics {
    /// Static file: exact lookup by its slug
    Page {
        slug: Slug,
        metrics: Option<PageMetrics>,
    },
    /// Dynamic template: aggregate over every matching page
    Dynamic {
        spec: MatchSpec,
        metrics: Option<PageMetrics>,
    },
    /// Not a routable source file
    OutOfScope,
}

impl FileMetrics {
    /// Metrics to display, if any.
    pub fn metrics(&self) -> Option<&PageMetrics> {
        match self {
            Self::Page { metrics, .. } | Self::Dynamic { metrics, .. } => metrics.as_ref(),
            Self::OutOfScope => None,
        }
    }

    /// Views, `0` without data. Used for sorting.
    pub fn views(&self) -> u64 {
        self.metrics().map_or(0, |m| m.views)
    }

    #[inline]
    pub fn is_in_scope(&self) -> bool {
        !matches!(self, Self::OutOfScope)
    }
}

/// Look up the metrics for `file` in `snapshot`.
pub fn lookup(layout: &ProjectLayout, file: &Path, snapshot: &MetricsSnapshot) -> FileMetrics {
    match file_route(layout, file) {
        FileRoute::Static(slug) => {
            let metrics = snapshot.get(&slug).cloned();
            FileMetrics::Page { slug, metrics }
        }
        FileRoute::Dynamic(spec) => {
            let metrics = match aggregate_matching(spec, snapshot) {
                AggregateOutcome::Aggregated(metrics) => Some(metrics),
                AggregateOutcome::NoMatchingData | AggregateOutcome::NotDynamicRoute => None,
            };
            FileMetrics::Dynamic { spec, metrics }
        }
        FileRoute::Unsupported | FileRoute::OutsideRoot(_) => FileMetrics::OutOfScope,
    }
}
