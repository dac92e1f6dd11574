//! Source file <-> URL slug routing.
//!
//! All functions here are pure: no filesystem access, no shared state.
//!
//! - [`derive`]: file -> slug (static files), or why there is none
//! - [`pattern`]: dynamic route templates and structural matching
//! - [`resolve`]: slug -> ordered candidate source files

mod derive;
mod pattern;
mod resolve;

pub use derive::{FileRoute, derive_slug, file_route};
pub use pattern::{MatchSpec, is_catch_all_segment, is_dynamic_segment, match_spec};
pub use resolve::candidate_files;

/// Segment name that maps to its parent directory's URL.
const INDEX_SEGMENT: &str = "index";

/// Drop a trailing `index` segment (`blog/index` -> `blog`, `index` -> ``).
pub(crate) fn strip_index(mut segments: Vec<String>) -> Vec<String> {
    if segments.last().is_some_and(|s| s == INDEX_SEGMENT) {
        segments.pop();
    }
    segments
}
