//! `[metrics]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [metrics]
//! snapshot = ".pagelens/analytics.json"   # Exported analytics snapshot
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Analytics snapshot location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Snapshot file, relative to the workspace unless absolute.
    pub snapshot: PathBuf,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from(".pagelens/analytics.json"),
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.snapshot.as_os_str().is_empty() {
            diag.error("metrics.snapshot", "must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_metrics_defaults() {
        let config = test_parse_config("");
        assert_eq!(
            config.metrics.snapshot,
            PathBuf::from(".pagelens/analytics.json")
        );
    }

    #[test]
    fn test_metrics_override() {
        let config = test_parse_config("[metrics]\nsnapshot = \"ga.json\"");
        assert_eq!(config.metrics.snapshot, PathBuf::from("ga.json"));
    }

    #[test]
    fn test_empty_snapshot_rejected() {
        let metrics = MetricsConfig {
            snapshot: PathBuf::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        metrics.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
