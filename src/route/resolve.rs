//! Slug -> candidate source files.
//!
//! Produces every file that could plausibly publish a slug, most
//! authoritative first. No filesystem access: the caller probes the list and
//! stops at the first file that exists.
//!
//! Order:
//! 1. content files (`{slug}/index.md`, then flat `{slug}.md`)
//! 2. static page files (`{slug}/index.astro`, then flat `{slug}.astro`)
//! 3. dynamic templates, guessed by common parameter names
//!
//! Two templates with the same shape (`[slug]` and `[id]`) are both listed;
//! which one really owns a slug cannot be decided from paths alone.

use std::path::{Path, PathBuf};

use crate::core::{ProjectLayout, Slug};

/// Parameter names tried for single-parameter templates, in order.
const PARAM_NAMES: [&str; 2] = ["slug", "id"];

/// Catch-all template tried last for any non-root slug.
const CATCH_ALL: &str = "[...slug]";

/// Ordered candidate files for `slug`. May contain duplicates and paths
/// that do not exist.
///
/// # Example
///
/// ```text
/// /blog/ -> src/content/blog/index.md
///           src/content/blog/index.mdx
///           src/content/blog.md
///           src/content/blog.mdx
///           src/pages/blog/index.astro
///           src/pages/blog.astro
///           src/pages/[slug].astro
///           src/pages/[id].astro
///           src/pages/[...slug].astro
/// ```
pub fn candidate_files(layout: &ProjectLayout, slug: &Slug) -> Vec<PathBuf> {
    let segments: Vec<&str> = slug.segments().collect();
    let page_ext = [layout.page_extension().to_string()];
    let pages_dir = layout.pages_dir();

    let mut candidates = Vec::new();
    push_static(
        &mut candidates,
        &layout.content_dir(),
        &segments,
        layout.content_extensions(),
    );
    push_static(&mut candidates, &pages_dir, &segments, &page_ext);
    push_templates(&mut candidates, &pages_dir, &segments, layout.page_extension());
    candidates
}

/// `{root}/{segments}/index.{ext}` for each extension, then the flat
/// `{root}/{segments}.{ext}` form. The root slug only has the index form.
fn push_static(out: &mut Vec<PathBuf>, root: &Path, segments: &[&str], exts: &[String]) {
    let Some((last, parent)) = segments.split_last() else {
        out.extend(exts.iter().map(|ext| root.join(format!("index.{ext}"))));
        return;
    };

    let dir = join_segments(root, segments);
    out.extend(exts.iter().map(|ext| dir.join(format!("index.{ext}"))));

    let parent_dir = join_segments(root, parent);
    out.extend(exts.iter().map(|ext| parent_dir.join(format!("{last}.{ext}"))));
}

fn push_templates(out: &mut Vec<PathBuf>, root: &Path, segments: &[&str], ext: &str) {
    let Some((_, parent)) = segments.split_last() else {
        return;
    };

    match segments.len() {
        1 => out.extend(
            PARAM_NAMES
                .iter()
                .map(|name| root.join(format!("[{name}].{ext}"))),
        ),
        2 => {
            let [first, second] = PARAM_NAMES;
            out.push(root.join(format!("[{first}]")).join(format!("[{second}].{ext}")));
            out.push(root.join(format!("[{second}]")).join(format!("[{first}].{ext}")));
        }
        _ => {}
    }

    // Parameter under a literal parent directory (`blog/[slug].astro`).
    if !parent.is_empty() {
        let parent_dir = join_segments(root, parent);
        out.extend(
            PARAM_NAMES
                .iter()
                .map(|name| parent_dir.join(format!("[{name}].{ext}"))),
        );
    }

    out.push(root.join(format!("{CATCH_ALL}.{ext}")));
}

fn join_segments(root: &Path, segments: &[&str]) -> PathBuf {
    segments
        .iter()
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(slug: &str) -> Vec<String> {
        candidate_files(&ProjectLayout::new("/ws"), &Slug::normalize(slug))
            .into_iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_single_segment_order() {
        assert_eq!(
            candidates("/blog/"),
            vec![
                "/ws/src/content/blog/index.md",
                "/ws/src/content/blog/index.mdx",
                "/ws/src/content/blog.md",
                "/ws/src/content/blog.mdx",
                "/ws/src/pages/blog/index.astro",
                "/ws/src/pages/blog.astro",
                "/ws/src/pages/[slug].astro",
                "/ws/src/pages/[id].astro",
                "/ws/src/pages/[...slug].astro",
            ]
        );
    }

    #[test]
    fn test_root_has_no_templates() {
        assert_eq!(
            candidates("/"),
            vec![
                "/ws/src/content/index.md",
                "/ws/src/content/index.mdx",
                "/ws/src/pages/index.astro",
            ]
        );
        assert_eq!(candidates(""), candidates("/"));
    }

    #[test]
    fn test_two_segments() {
        assert_eq!(
            candidates("/blog/my-post"),
            vec![
                "/ws/src/content/blog/my-post/index.md",
                "/ws/src/content/blog/my-post/index.mdx",
                "/ws/src/content/blog/my-post.md",
                "/ws/src/content/blog/my-post.mdx",
                "/ws/src/pages/blog/my-post/index.astro",
                "/ws/src/pages/blog/my-post.astro",
                "/ws/src/pages/[slug]/[id].astro",
                "/ws/src/pages/[id]/[slug].astro",
                "/ws/src/pages/blog/[slug].astro",
                "/ws/src/pages/blog/[id].astro",
                "/ws/src/pages/[...slug].astro",
            ]
        );
    }

    #[test]
    fn test_deep_path_templates() {
        let list = candidates("/docs/guide/intro/");
        let templates: Vec<&str> = list
            .iter()
            .map(String::as_str)
            .skip_while(|p| !p.contains('['))
            .collect();
        assert_eq!(
            templates,
            vec![
                "/ws/src/pages/docs/guide/[slug].astro",
                "/ws/src/pages/docs/guide/[id].astro",
                "/ws/src/pages/[...slug].astro",
            ]
        );
    }

    #[test]
    fn test_static_before_templates() {
        let list = candidates("/karriere/");
        let first_template = list.iter().position(|p| p.contains('[')).unwrap();
        assert!(list[..first_template].iter().all(|p| !p.contains('[')));
        assert_eq!(list.last().unwrap(), "/ws/src/pages/[...slug].astro");
    }

    #[test]
    fn test_custom_extensions() {
        let layout = ProjectLayout::new("/ws")
            .with_roots("content", "pages")
            .with_extensions(vec!["md".to_string()], "svelte");
        let list: Vec<PathBuf> = candidate_files(&layout, &Slug::normalize("/about/"));
        assert_eq!(
            list,
            vec![
                PathBuf::from("/ws/content/about/index.md"),
                PathBuf::from("/ws/content/about.md"),
                PathBuf::from("/ws/pages/about/index.svelte"),
                PathBuf::from("/ws/pages/about.svelte"),
                PathBuf::from("/ws/pages/[slug].svelte"),
                PathBuf::from("/ws/pages/[id].svelte"),
                PathBuf::from("/ws/pages/[...slug].svelte"),
            ]
        );
    }

    #[test]
    fn test_unnormalized_slug_input() {
        assert_eq!(candidates("blog"), candidates("/blog/"));
    }
}
