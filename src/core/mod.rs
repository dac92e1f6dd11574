//! Core types - pure abstractions shared across the codebase.

mod category;
mod layout;
mod slug;

pub use category::FileKind;
pub use layout::ProjectLayout;
pub use slug::Slug;
