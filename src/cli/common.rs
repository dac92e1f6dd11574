//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use serde::Serialize;

use crate::analytics::{FileSource, MetricsSnapshot, SnapshotSource};
use crate::config::ProjectConfig;
use crate::core::{FileKind, ProjectLayout};
use crate::route::MatchSpec;
use crate::utils::path::resolve_path;

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Recursively collect every file under `dir`.
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect()
}

/// Keep only files with a content or page extension.
pub fn filter_source_files(files: Vec<PathBuf>, layout: &ProjectLayout) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|p| layout.classify(p).is_some())
        .collect()
}

/// Collect source files based on CLI paths.
///
/// No paths: both source roots. `-`: paths read from stdin.
pub fn collect_source_files(paths: &[PathBuf], layout: &ProjectLayout) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        let mut all_files = Vec::new();
        for kind in [FileKind::Content, FileKind::Page] {
            let root = layout.root_dir(kind);
            if root.is_dir() {
                all_files.extend(filter_source_files(collect_all_files(&root), layout));
            } else {
                crate::debug!("scan"; "{} root {} does not exist", kind.name(), root.display());
            }
        }
        return Ok(all_files);
    }

    let mut all_files = Vec::new();
    for path in &paths {
        let resolved = resolve_path(path, layout.workspace());

        if resolved.is_file() {
            if layout.classify(&resolved).is_some() {
                all_files.push(resolved);
            } else {
                bail!("Not a supported source file: {}", path.display());
            }
        } else if resolved.is_dir() {
            all_files.extend(filter_source_files(collect_all_files(&resolved), layout));
        } else {
            bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                layout.workspace().join(path).display()
            );
        }
    }

    Ok(all_files)
}

/// Read file paths from stdin, one per line
pub fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}

/// Absolute paths for file arguments; the files need not exist.
pub fn resolve_files(files: &[PathBuf], layout: &ProjectLayout) -> Vec<PathBuf> {
    files
        .iter()
        .map(|f| resolve_path(f, layout.workspace()))
        .collect()
}

/// Load the analytics snapshot named by the config.
///
/// A command runs once, so it reads the file directly. Long-running callers
/// hold a [`MetricsCache`](crate::analytics::MetricsCache) instead.
pub fn load_snapshot(config: &ProjectConfig) -> Result<MetricsSnapshot> {
    let source = FileSource::new(config.snapshot_path());
    let snapshot = source.fetch().with_context(|| {
        format!(
            "Failed to load analytics snapshot {}",
            source.path().display()
        )
    })?;
    crate::debug!("metrics"; "loaded {} pages from {}", snapshot.len(), source.describe());
    Ok(snapshot)
}

/// Human description of a dynamic template's shape.
pub fn describe_spec(spec: &MatchSpec) -> String {
    if spec.catch_all {
        "catch-all, any depth".to_string()
    } else {
        crate::utils::plural_count(spec.segment_count, "segment")
    }
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn workspace() -> (tempfile::TempDir, ProjectLayout) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for file in [
            "src/content/index.md",
            "src/content/blog/post.mdx",
            "src/content/blog/cover.png",
            "src/pages/[slug].astro",
            "src/pages/util.ts",
            "src/pages/.DS_Store",
        ] {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        let layout = ProjectLayout::new(root);
        (dir, layout)
    }

    #[test]
    fn test_collect_both_roots() {
        let (dir, layout) = workspace();
        let files = collect_source_files(&[], &layout).unwrap();
        let rel: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(rel.len(), 3);
        assert!(rel.contains(&PathBuf::from("src/content/index.md")));
        assert!(rel.contains(&PathBuf::from("src/content/blog/post.mdx")));
        assert!(rel.contains(&PathBuf::from("src/pages/[slug].astro")));
    }

    #[test]
    fn test_collect_missing_roots() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        assert!(collect_source_files(&[], &layout).unwrap().is_empty());
    }

    #[test]
    fn test_collect_explicit_paths() {
        let (dir, layout) = workspace();
        let blog = dir.path().join("src/content/blog");
        let files = collect_source_files(&[blog], &layout).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("post.mdx"));
    }

    #[test]
    fn test_collect_rejects_unsupported_file() {
        let (dir, layout) = workspace();
        let ts = dir.path().join("src/pages/util.ts");
        assert!(collect_source_files(&[ts], &layout).is_err());
    }

    #[test]
    fn test_collect_missing_path() {
        let (_dir, layout) = workspace();
        let err = collect_source_files(&[PathBuf::from("no/such/dir")], &layout).unwrap_err();
        assert!(err.to_string().contains("Path not found"));
    }

    #[test]
    fn test_resolve_files_against_workspace() {
        let layout = ProjectLayout::new("/ws-missing");
        let files = resolve_files(&[PathBuf::from("src/content/a.md")], &layout);
        assert_eq!(files, vec![PathBuf::from("/ws-missing/src/content/a.md")]);
    }

    #[test]
    fn test_load_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("ga.json");
        fs::write(&snapshot, r#"[{"pagePath": "/blog/", "views": 3}]"#).unwrap();

        let mut config = ProjectConfig::default();
        config.set_root(dir.path());
        config.metrics.snapshot = snapshot;
        assert_eq!(load_snapshot(&config).unwrap().len(), 1);

        config.metrics.snapshot = dir.path().join("missing.json");
        assert!(load_snapshot(&config).is_err());
    }

    #[test]
    fn test_describe_spec() {
        let one = MatchSpec {
            segment_count: 1,
            catch_all: false,
        };
        let two = MatchSpec {
            segment_count: 2,
            catch_all: false,
        };
        let rest = MatchSpec {
            segment_count: 1,
            catch_all: true,
        };
        assert_eq!(describe_spec(&one), "1 segment");
        assert_eq!(describe_spec(&two), "2 segments");
        assert_eq!(describe_spec(&rest), "catch-all, any depth");
    }
}
