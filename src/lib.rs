//! pagelens - web analytics overlaid on static-site source files.
//!
//! Maps content and page files to the URL slugs they publish, finds the
//! files behind a URL, and aggregates analytics for dynamic route templates.
//!
//! ```text
//! src/content/blog/post.md  ──derive_slug──▶  /blog/post/  ──snapshot──▶ metrics
//! src/pages/[slug].astro    ──match_spec───▶  {1 segment} ──aggregate──▶ metrics
//! /blog/post/               ──candidate_files──▶ [src/content/blog/post/index.md, ...]
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod route;
pub mod utils;
