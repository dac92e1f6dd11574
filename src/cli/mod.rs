//! Command-line interface module.

mod args;
pub mod common;
pub mod metrics;
pub mod resolve;
pub mod scan;
pub mod slug;

pub use args::{Cli, Commands, ScanArgs};
