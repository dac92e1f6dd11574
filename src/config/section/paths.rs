//! `[paths]` section configuration.
//!
//! Where the router looks for source files.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! content = "src/content"             # Markdown collections
//! pages = "src/pages"                 # File-based routes
//! content_extensions = ["md", "mdx"]  # Without leading dot
//! page_extension = "astro"
//! ```

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::core::ProjectLayout;

/// Source roots and extensions, relative to the workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Content collection root.
    pub content: PathBuf,

    /// Page route root.
    pub pages: PathBuf,

    /// Extensions routed through the content root.
    pub content_extensions: Vec<String>,

    /// Extension routed through the pages root.
    pub page_extension: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from(ProjectLayout::DEFAULT_CONTENT_ROOT),
            pages: PathBuf::from(ProjectLayout::DEFAULT_PAGES_ROOT),
            content_extensions: ProjectLayout::DEFAULT_CONTENT_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            page_extension: ProjectLayout::DEFAULT_PAGE_EXTENSION.to_string(),
        }
    }
}

impl PathsConfig {
    /// Build the router layout for `workspace`.
    pub fn layout(&self, workspace: &Path) -> ProjectLayout {
        ProjectLayout::new(workspace)
            .with_roots(&self.content, &self.pages)
            .with_extensions(self.content_extensions.clone(), &self.page_extension)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        Self::validate_root("paths.content", &self.content, diag);
        Self::validate_root("paths.pages", &self.pages, diag);

        if !self.content.as_os_str().is_empty()
            && !self.pages.as_os_str().is_empty()
            && (self.content.starts_with(&self.pages) || self.pages.starts_with(&self.content))
        {
            diag.error_with_hint(
                "paths.pages",
                format!(
                    "`{}` and `{}` overlap",
                    self.content.display(),
                    self.pages.display()
                ),
                "content and pages roots must be disjoint directories",
            );
        }

        if self.content_extensions.is_empty() {
            diag.error("paths.content_extensions", "must list at least one extension");
        }
        for ext in &self.content_extensions {
            Self::validate_extension("paths.content_extensions", ext, diag);
        }
        Self::validate_extension("paths.page_extension", &self.page_extension, diag);

        if self
            .content_extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(&self.page_extension))
        {
            diag.error(
                "paths.page_extension",
                format!("`{}` is also a content extension", self.page_extension),
            );
        }
    }

    fn validate_root(field: &'static str, root: &Path, diag: &mut ConfigDiagnostics) {
        if root.as_os_str().is_empty() {
            diag.error(field, "must not be empty");
        } else if root.is_absolute() {
            diag.error_with_hint(
                field,
                format!("`{}` is absolute", root.display()),
                "use a path relative to the workspace",
            );
        } else if root
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            diag.error(field, format!("`{}` escapes the workspace", root.display()));
        }
    }

    fn validate_extension(field: &'static str, ext: &str, diag: &mut ConfigDiagnostics) {
        if ext.is_empty() {
            diag.error(field, "extension must not be empty");
        } else if let Some(bare) = ext.strip_prefix('.') {
            diag.error_with_hint(
                field,
                format!("`{ext}` has a leading dot"),
                format!("write `{bare}`"),
            );
        }
    }
}
