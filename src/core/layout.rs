//! Project layout - where content and page sources live.

use std::path::{Component, Path, PathBuf};

use super::FileKind;

/// Workspace root plus the two source roots the router reads from.
///
/// Roots are stored relative to the workspace and joined on demand, so the
/// same layout can be reused after the workspace moves.
///
/// ```text
/// /ws                      <- workspace
/// ├── src/content/         <- content root (.md, .mdx)
/// │   └── blog/my-post.md  -> /blog/my-post/
/// └── src/pages/           <- pages root (.astro)
///     ├── index.astro      -> /
///     └── [slug].astro     -> dynamic, one segment
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    workspace: PathBuf,
    content_root: PathBuf,
    pages_root: PathBuf,
    content_extensions: Vec<String>,
    page_extension: String,
}

impl ProjectLayout {
    pub const DEFAULT_CONTENT_ROOT: &'static str = "src/content";
    pub const DEFAULT_PAGES_ROOT: &'static str = "src/pages";
    pub const DEFAULT_CONTENT_EXTENSIONS: [&'static str; 2] = ["md", "mdx"];
    pub const DEFAULT_PAGE_EXTENSION: &'static str = "astro";

    /// Layout with the default roots and extensions.
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            content_root: PathBuf::from(Self::DEFAULT_CONTENT_ROOT),
            pages_root: PathBuf::from(Self::DEFAULT_PAGES_ROOT),
            content_extensions: Self::DEFAULT_CONTENT_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            page_extension: Self::DEFAULT_PAGE_EXTENSION.to_string(),
        }
    }

    /// Override the content and pages roots (relative to the workspace).
    pub fn with_roots(mut self, content: impl Into<PathBuf>, pages: impl Into<PathBuf>) -> Self {
        self.content_root = content.into();
        self.pages_root = pages.into();
        self
    }

    /// Override the extension sets (without leading dots).
    pub fn with_extensions(mut self, content: Vec<String>, page: impl Into<String>) -> Self {
        self.content_extensions = content;
        self.page_extension = page.into();
        self
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Absolute content directory.
    pub fn content_dir(&self) -> PathBuf {
        self.workspace.join(&self.content_root)
    }

    /// Absolute pages directory.
    pub fn pages_dir(&self) -> PathBuf {
        self.workspace.join(&self.pages_root)
    }

    pub fn content_extensions(&self) -> &[String] {
        &self.content_extensions
    }

    pub fn page_extension(&self) -> &str {
        &self.page_extension
    }

    /// Absolute root directory for files of `kind`.
    pub fn root_dir(&self, kind: FileKind) -> PathBuf {
        match kind {
            FileKind::Content => self.content_dir(),
            FileKind::Page => self.pages_dir(),
        }
    }

    /// Classify a file by extension alone.
    pub fn classify(&self, file: &Path) -> Option<FileKind> {
        let ext = file.extension()?.to_str()?;
        FileKind::from_extension(ext, &self.content_extensions, &self.page_extension)
    }

    /// Path segments of `file` relative to the root for `kind`, with the
    /// extension stripped from the last one.
    ///
    /// Returns `None` when the file does not lie under that root. The prefix
    /// test is component-wise, so `src/contents/x.md` is not under `src/content`.
    pub fn relative_segments(&self, kind: FileKind, file: &Path) -> Option<Vec<String>> {
        let rel = file.strip_prefix(self.root_dir(kind)).ok()?;
        let stem = rel.with_extension("");

        let segments: Vec<String> = stem
            .components()
            .filter_map(|component| match component {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect();

        // A bare root directory is not a file under it.
        if segments.is_empty() {
            return None;
        }
        Some(segments)
    }
}
