//! Configuration section definitions.
//!
//! Each module corresponds to a section in `pagelens.toml`:
//!
//! | Module    | TOML Section  | Purpose                              |
//! |-----------|---------------|--------------------------------------|
//! | `paths`   | `[paths]`     | Source roots and extensions          |
//! | `metrics` | `[metrics]`   | Analytics snapshot and cache TTL     |
//! | `display` | `[display]`   | Bounce-rate color thresholds         |

mod display;
mod metrics;
mod paths;

pub use display::DisplayConfig;
pub use metrics::MetricsConfig;
pub use paths::PathsConfig;
