//! Dynamic route templates and their structural match specs.
//!
//! A template segment is dynamic when it contains a bracketed parameter
//! (`[slug]`, `post-[id]`). A parameter whose name starts with `...` is a
//! catch-all (`[...path]`, or the unnamed `[...]`). Only the shape of a template is kept: how many
//! segments it spans and whether it swallows the rest of the path.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::core::{FileKind, ProjectLayout, Slug};

use super::strip_index;

/// `[name]`, `[...name]` or `[...]`; group 1 captures the catch-all marker.
static PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:(\.\.\.)[^\[\]/]*|[^\[\]/]+)\]").expect("parameter pattern is valid")
});

/// Whether a single path segment contains a parameter placeholder.
#[inline]
pub fn is_dynamic_segment(segment: &str) -> bool {
    PARAM.is_match(segment)
}

/// Whether a single path segment contains a catch-all placeholder.
pub fn is_catch_all_segment(segment: &str) -> bool {
    PARAM
        .captures_iter(segment)
        .any(|caps| caps.get(1).is_some())
}

/// Structural descriptor of a dynamic route template.
///
/// # Example
///
/// ```text
/// [slug].astro           -> { segment_count: 1, catch_all: false }
/// blog/[slug].astro      -> { segment_count: 2, catch_all: false }
/// docs/[...path].astro   -> { segment_count: 2, catch_all: true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSpec {
    /// Number of segments in the template, at least 1
    pub segment_count: usize,
    /// Template contains a catch-all parameter
    pub catch_all: bool,
}

impl MatchSpec {
    /// Build a spec from template segments (extension stripped, trailing
    /// `index` already collapsed). Returns `None` when no segment is dynamic.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Option<Self> {
        if !segments.iter().any(|s| is_dynamic_segment(s.as_ref())) {
            return None;
        }

        Some(Self {
            segment_count: segments.iter().filter(|s| !s.as_ref().is_empty()).count().max(1),
            catch_all: segments.iter().any(|s| is_catch_all_segment(s.as_ref())),
        })
    }

    /// Whether `slug` could have been produced by a template with this shape.
    ///
    /// A catch-all needs at least one segment, so the root never matches.
    /// Fixed-arity templates need exactly `segment_count` segments.
    pub fn matches(&self, slug: &Slug) -> bool {
        let count = slug.segment_count();
        if self.catch_all {
            count >= 1
        } else {
            count == self.segment_count
        }
    }
}

/// Match spec for a page template file, or `None` when the file is not a
/// dynamic route (wrong extension, outside the pages root, no parameter).
pub fn match_spec(layout: &ProjectLayout, file: &Path) -> Option<MatchSpec> {
    if layout.classify(file)? != FileKind::Page {
        return None;
    }
    let segments = strip_index(layout.relative_segments(FileKind::Page, file)?);
    MatchSpec::from_segments(segments.as_slice())
}
