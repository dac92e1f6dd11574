//! File category definitions.

/// Kind of routable source file, determines which root it lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Document-style content (`.md`, `.mdx`) under the content root
    Content,
    /// Page template (`.astro`) under the pages root
    Page,
}

impl FileKind {
    /// Classify an extension (without the leading dot) against the configured
    /// extension sets. Comparison ignores ASCII case.
    pub fn from_extension(ext: &str, content_exts: &[String], page_ext: &str) -> Option<Self> {
        if content_exts.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
            Some(Self::Content)
        } else if page_ext.eq_ignore_ascii_case(ext) {
            Some(Self::Page)
        } else {
            None
        }
    }

    /// Display name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Page => "page",
        }
    }
}
