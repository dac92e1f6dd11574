//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_path` - resolve relative paths with fallback directory
//! - `first_existing` - probe resolver candidates

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a path that may be relative to cwd or to the workspace.
///
/// Always returns an absolute path.
///
/// Tries in order:
/// 1. If absolute, use as-is
/// 2. If exists relative to cwd, normalize to absolute
/// 3. Otherwise, resolve relative to `fallback_dir`
#[inline]
pub fn resolve_path(path: &Path, fallback_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize_path(path);
    }

    if path.exists() {
        return normalize_path(path);
    }

    normalize_path(&fallback_dir.join(path))
}

/// First candidate that exists on disk as a file.
pub fn first_existing(candidates: &[PathBuf]) -> Option<&PathBuf> {
    candidates.iter().find(|p| p.is_file())
}

/// Display `path` relative to `root` when possible.
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.txt"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_path_absolute() {
        let resolved = resolve_path(Path::new("/absolute/nonexistent"), Path::new("/fallback"));
        assert_eq!(resolved, PathBuf::from("/absolute/nonexistent"));
    }

    #[test]
    fn test_resolve_path_fallback() {
        let resolved = resolve_path(Path::new("nonexistent/path"), Path::new("/fallback"));
        assert_eq!(resolved, PathBuf::from("/fallback/nonexistent/path"));
    }

    #[test]
    fn test_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("blog.md");
        std::fs::write(&present, "# hi").unwrap();

        let candidates = vec![
            dir.path().join("blog/index.md"),
            present.clone(),
            dir.path().join("blog.mdx"),
        ];
        assert_eq!(first_existing(&candidates), Some(&present));
        assert_eq!(first_existing(&candidates[..1]), None);
    }

    #[test]
    fn test_first_existing_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("blog")).unwrap();
        let candidates = vec![dir.path().join("blog")];
        assert_eq!(first_existing(&candidates), None);
    }

    #[test]
    fn test_display_relative() {
        assert_eq!(
            display_relative(Path::new("/ws/src/pages/a.astro"), Path::new("/ws")),
            "src/pages/a.astro"
        );
        assert_eq!(
            display_relative(Path::new("/other/a.md"), Path::new("/ws")),
            "/other/a.md"
        );
    }
}
