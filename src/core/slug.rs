//! Slug type for normalized page URL paths.
//!
//! - Internal representation: trimmed, always ends with `/`
//! - Browser boundary: `from_browser` strips origin, query and fragment and decodes

use std::borrow::{Borrow, Cow};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Normalized page URL path
///
/// Invariants:
/// - Surrounding whitespace is trimmed
/// - Always ends with `/` (the root is exactly `/`)
/// - Case-sensitive, query strings and fragments are not interpreted
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slug(Arc<str>);

impl Slug {
    /// Normalize a raw path: trim whitespace, ensure a trailing slash.
    ///
    /// Total and idempotent. An empty (or blank) input becomes `/`.
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.ends_with('/') {
            Self(Arc::from(trimmed))
        } else {
            Self(Arc::from(format!("{trimmed}/")))
        }
    }

    /// The site root `/`.
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    /// Build `/a/b/` from route segments. No segments yields the root.
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut slug = String::from("/");
        for segment in segments.into_iter().filter(|s| !s.is_empty()) {
            slug.push_str(segment);
            slug.push('/');
        }
        Self(Arc::from(slug))
    }

    /// Create from anything a user might paste: a bare path, a path with a
    /// query string, or a full URL. Percent-encoding is decoded.
    pub fn from_browser(input: &str) -> Self {
        use percent_encoding::percent_decode_str;

        let trimmed = input.trim();
        let path = match url::Url::parse(trimmed) {
            Ok(parsed) if parsed.has_host() => parsed.path().to_string(),
            _ => trimmed
                .split(['?', '#'])
                .next()
                .unwrap_or(trimmed)
                .to_string(),
        };

        let decoded = percent_decode_str(&path)
            .decode_utf8()
            .map(Cow::into_owned)
            .unwrap_or_else(|_| path.clone());

        if decoded.starts_with('/') {
            Self::normalize(&decoded)
        } else {
            Self::normalize(&format!("/{decoded}"))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty `/`-delimited segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    /// True for `/` (and anything else without a segment, such as `//`).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments().next().is_none()
    }

    /// The slug without its trailing slash (`/blog/` -> `/blog`, `/` -> ``).
    ///
    /// Analytics exports frequently key pages this way.
    #[inline]
    pub fn without_trailing_slash(&self) -> &str {
        self.0.strip_suffix('/').unwrap_or(&self.0)
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for Slug {
    fn default() -> Self {
        Self::root()
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for Slug {
    fn from(s: String) -> Self {
        Self::normalize(&s)
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for Slug {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::normalize(&s))
    }
}
