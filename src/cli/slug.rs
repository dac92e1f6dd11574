//! `pagelens slug` - print the URL slug of source files.

use std::path::{Path, PathBuf};

use anyhow::Result;
use owo_colors::Style;

use super::common::{describe_spec, resolve_files};
use crate::config::ProjectConfig;
use crate::core::ProjectLayout;
use crate::route::{FileRoute, file_route};
use crate::utils::format::styled;
use crate::utils::path::display_relative;

pub fn run_slug(files: &[PathBuf], config: &ProjectConfig) -> Result<()> {
    let layout = config.layout();

    for file in resolve_files(files, &layout) {
        let shown = display_relative(&file, layout.workspace());
        println!("{shown}\t{}", describe_route(&layout, &file));
    }

    Ok(())
}

/// One-line answer for a file: its slug, or why it has none.
fn describe_route(layout: &ProjectLayout, file: &Path) -> String {
    match file_route(layout, file) {
        FileRoute::Static(slug) => slug.to_string(),
        FileRoute::Dynamic(spec) => format!(
            "{} ({})",
            styled("dynamic", Style::new().yellow()),
            styled(describe_spec(&spec), Style::new().dimmed())
        ),
        FileRoute::Unsupported => styled("unsupported extension", Style::new().dimmed()),
        FileRoute::OutsideRoot(kind) => {
            let root = display_relative(&layout.root_dir(kind), layout.workspace());
            styled(
                format!("outside {} root {root}", kind.name()),
                Style::new().dimmed(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ProjectLayout {
        ProjectLayout::new("/ws")
    }

    #[test]
    fn test_describe_static() {
        assert_eq!(
            describe_route(&layout(), Path::new("/ws/src/content/blog/my-post.md")),
            "/blog/my-post/"
        );
        assert_eq!(
            describe_route(&layout(), Path::new("/ws/src/pages/index.astro")),
            "/"
        );
    }

    #[test]
    fn test_describe_out_of_scope() {
        owo_colors::set_override(false);
        assert_eq!(
            describe_route(&layout(), Path::new("/ws/src/pages/util.ts")),
            "unsupported extension"
        );
        assert_eq!(
            describe_route(&layout(), Path::new("/ws/docs/readme.md")),
            "outside content root src/content"
        );
        assert_eq!(
            describe_route(&layout(), Path::new("/ws/src/pages/blog/[slug].astro")),
            "dynamic (2 segments)"
        );
    }
}
