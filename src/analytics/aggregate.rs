//! Metrics aggregation across dynamic routes.
//!
//! A template such as `src/pages/blog/[slug].astro` publishes many pages. Its
//! metrics are the views-weighted combination of every snapshot entry whose
//! path has the template's shape, so busy pages dominate the result.

use std::path::Path;

use super::metrics::page_slug;
use super::{AggregatedMetrics, MetricsSnapshot, PageMetrics};
use crate::core::ProjectLayout;
use crate::route::{MatchSpec, match_spec};

/// Result of aggregating a file.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateOutcome {
    /// The file is not a dynamic route template
    NotDynamicRoute,
    /// A template, but no snapshot entry has its shape
    NoMatchingData,
    /// Combined metrics of all matching entries
    Aggregated(AggregatedMetrics),
}

impl AggregateOutcome {
    /// Collapse to presence only.
    pub fn into_option(self) -> Option<AggregatedMetrics> {
        match self {
            Self::Aggregated(metrics) => Some(metrics),
            Self::NotDynamicRoute | Self::NoMatchingData => None,
        }
    }
}

/// Aggregate snapshot entries for a dynamic template file.
pub fn aggregate_outcome(
    layout: &ProjectLayout,
    file: &Path,
    metrics: &MetricsSnapshot,
) -> AggregateOutcome {
    match match_spec(layout, file) {
        Some(spec) => aggregate_matching(spec, metrics),
        None => AggregateOutcome::NotDynamicRoute,
    }
}

/// Presence-only form of [`aggregate_outcome`].
#[inline]
pub fn aggregate(
    layout: &ProjectLayout,
    file: &Path,
    metrics: &MetricsSnapshot,
) -> Option<AggregatedMetrics> {
    aggregate_outcome(layout, file, metrics).into_option()
}

/// Aggregate the entries whose normalized key satisfies `spec`.
pub fn aggregate_matching(spec: MatchSpec, metrics: &MetricsSnapshot) -> AggregateOutcome {
    let matched: Vec<&PageMetrics> = metrics
        .iter()
        .filter(|(key, _)| spec.matches(&page_slug(key)))
        .map(|(_, entry)| entry)
        .collect();

    if matched.is_empty() {
        return AggregateOutcome::NoMatchingData;
    }
    AggregateOutcome::Aggregated(weighted(matched))
}

/// Sum views and users; weight bounce rate and session duration by views.
///
/// With zero total views the weighted fields are `0`, never NaN.
#[allow(clippy::cast_precision_loss)] // view counts stay far below 2^52
pub fn weighted<'a>(entries: impl IntoIterator<Item = &'a PageMetrics>) -> AggregatedMetrics {
    let mut views = 0u64;
    let mut users = 0u64;
    let mut bounce_sum = 0.0;
    let mut duration_sum = 0.0;

    for entry in entries {
        views = views.saturating_add(entry.views);
        users = users.saturating_add(entry.users);
        bounce_sum += entry.bounce_rate * entry.views as f64;
        duration_sum += entry.avg_session_duration * entry.views as f64;
    }

    let (bounce_rate, avg_session_duration) = if views == 0 {
        (0.0, 0.0)
    } else {
        (bounce_sum / views as f64, duration_sum / views as f64)
    };

    PageMetrics {
        page_path: String::new(),
        views,
        users,
        bounce_rate,
        avg_session_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::metrics::page;

    const EPS: f64 = 1e-9;

    fn layout() -> ProjectLayout {
        ProjectLayout::new("/ws")
    }

    fn snapshot(rows: Vec<PageMetrics>) -> MetricsSnapshot {
        rows.into_iter().collect()
    }

    #[test]
    fn test_weighted_bounce_rate() {
        let metrics = snapshot(vec![
            page("/a/", 100, 80, 0.3, 60.0),
            page("/b/", 50, 40, 0.5, 120.0),
        ]);
        let result = aggregate(&layout(), Path::new("/ws/src/pages/[slug].astro"), &metrics)
            .expect("template with data");

        assert_eq!(result.views, 150);
        assert_eq!(result.users, 120);
        assert!((result.bounce_rate - (0.3 * 100.0 + 0.5 * 50.0) / 150.0).abs() < EPS);
        assert!((result.bounce_rate - 0.3667).abs() < 1e-4);
        assert!((result.avg_session_duration - 80.0).abs() < EPS);
        assert!(result.page_path.is_empty());
    }

    #[test]
    fn test_zero_traffic_is_not_nan() {
        let metrics = snapshot(vec![page("/a/", 0, 3, 0.9, 40.0), page("/b/", 0, 2, 0.1, 10.0)]);
        let result = aggregate(&layout(), Path::new("/ws/src/pages/[slug].astro"), &metrics).unwrap();

        assert_eq!(result.views, 0);
        assert_eq!(result.users, 5);
        assert_eq!(result.bounce_rate, 0.0);
        assert_eq!(result.avg_session_duration, 0.0);
    }

    #[test]
    fn test_only_matching_arity_counted() {
        let metrics = snapshot(vec![
            page("/", 1000, 900, 0.9, 5.0),
            page("/blog/a", 10, 10, 0.2, 10.0),
            page("/blog/b/", 30, 20, 0.4, 20.0),
            page("/about", 500, 400, 0.1, 99.0),
        ]);
        let result = aggregate(
            &layout(),
            Path::new("/ws/src/pages/blog/[slug].astro"),
            &metrics,
        )
        .unwrap();

        assert_eq!(result.views, 40);
        assert_eq!(result.users, 30);
        assert!((result.bounce_rate - (0.2 * 10.0 + 0.4 * 30.0) / 40.0).abs() < EPS);
    }

    #[test]
    fn test_catch_all_skips_root() {
        let metrics = snapshot(vec![
            page("/", 1000, 1, 0.0, 0.0),
            page("/a", 1, 1, 0.0, 0.0),
            page("/a/b/c", 2, 1, 0.0, 0.0),
        ]);
        let result = aggregate(
            &layout(),
            Path::new("/ws/src/pages/[...slug].astro"),
            &metrics,
        )
        .unwrap();
        assert_eq!(result.views, 3);
    }

    #[test]
    fn test_keys_are_normalized() {
        let metrics = snapshot(vec![page(" /a ", 7, 1, 0.0, 0.0), page("b", 3, 1, 0.0, 0.0)]);
        let result = aggregate(&layout(), Path::new("/ws/src/pages/[id].astro"), &metrics).unwrap();
        assert_eq!(result.views, 10);
    }

    #[test]
    fn test_outcome_variants() {
        let metrics = snapshot(vec![page("/a/b/", 1, 1, 0.0, 0.0)]);

        assert_eq!(
            aggregate_outcome(&layout(), Path::new("/ws/src/pages/about.astro"), &metrics),
            AggregateOutcome::NotDynamicRoute
        );
        assert_eq!(
            aggregate_outcome(&layout(), Path::new("/ws/src/content/a.md"), &metrics),
            AggregateOutcome::NotDynamicRoute
        );

        let outcome = aggregate_outcome(&layout(), Path::new("/ws/src/pages/[slug].astro"), &metrics);
        assert_eq!(outcome, AggregateOutcome::NoMatchingData);
        assert_eq!(outcome.into_option(), None);

        let outcome = aggregate_outcome(
            &layout(),
            Path::new("/ws/src/pages/[slug]/[id].astro"),
            &metrics,
        );
        assert!(matches!(outcome, AggregateOutcome::Aggregated(ref m) if m.views == 1));
    }

    #[test]
    fn test_empty_snapshot() {
        assert_eq!(
            aggregate_outcome(
                &layout(),
                Path::new("/ws/src/pages/[slug].astro"),
                &MetricsSnapshot::new()
            ),
            AggregateOutcome::NoMatchingData
        );
    }

    #[test]
    fn test_input_not_mutated() {
        let metrics = snapshot(vec![page("/a/", 10, 1, 0.5, 1.0)]);
        let before = metrics.clone();
        let _ = aggregate(&layout(), Path::new("/ws/src/pages/[slug].astro"), &metrics);
        assert_eq!(metrics, before);
    }

    #[test]
    fn test_weighted_empty() {
        let result = weighted(std::iter::empty());
        assert_eq!(result, PageMetrics::default());
    }
}
