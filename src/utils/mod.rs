//! Small shared helpers.
//!
//! - [`format`]: metric display formatting and health bucketing
//! - [`path`]: filesystem path normalization and candidate probing

pub mod format;
pub mod path;

pub use format::plural_count;
