//! File -> slug derivation.

use std::path::Path;

use crate::core::{FileKind, ProjectLayout, Slug};

use super::{MatchSpec, strip_index};

/// What a source file publishes.
///
/// # Example
///
/// ```text
/// src/content/index.md          -> Static("/")
/// src/content/blog/my-post.md   -> Static("/blog/my-post/")
/// src/pages/[slug].astro        -> Dynamic({ segment_count: 1, catch_all: false })
/// src/pages/script.ts           -> Unsupported
/// docs/readme.md                -> OutsideRoot(Content)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRoute {
    /// Exactly one published page
    Static(Slug),
    /// Parameterized template, publishes every slug matching the spec
    Dynamic(MatchSpec),
    /// Extension is neither content nor page
    Unsupported,
    /// Right extension, but not under the root for that kind
    OutsideRoot(FileKind),
}

impl FileRoute {
    /// The single slug for static files.
    pub fn slug(&self) -> Option<&Slug> {
        match self {
            Self::Static(slug) => Some(slug),
            _ => None,
        }
    }
}

/// Classify `file` and derive its route.
pub fn file_route(layout: &ProjectLayout, file: &Path) -> FileRoute {
    let Some(kind) = layout.classify(file) else {
        return FileRoute::Unsupported;
    };
    let Some(segments) = layout.relative_segments(kind, file) else {
        return FileRoute::OutsideRoot(kind);
    };
    let segments = strip_index(segments);

    // Only page templates are routed dynamically; content names are literal.
    if kind == FileKind::Page
        && let Some(spec) = MatchSpec::from_segments(segments.as_slice())
    {
        return FileRoute::Dynamic(spec);
    }

    FileRoute::Static(Slug::from_segments(segments.iter().map(String::as_str)))
}

/// Public slug of a static source file.
///
/// `None` when the file is out of scope or is itself a dynamic template
/// (use the aggregator for those).
pub fn derive_slug(layout: &ProjectLayout, file: &Path) -> Option<Slug> {
    match file_route(layout, file) {
        FileRoute::Static(slug) => Some(slug),
        _ => None,
    }
}
