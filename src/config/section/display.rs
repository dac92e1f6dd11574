//! `[display]` section configuration.
//!
//! Bounce-rate thresholds used to color metric summaries.
//!
//! # Example
//!
//! ```toml
//! [display]
//! bounce_good = 0.4   # At or below: green
//! bounce_warn = 0.7   # At or below: yellow, above: red
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::utils::format::Health;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub bounce_good: f64,
    pub bounce_warn: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bounce_good: 0.4,
            bounce_warn: 0.7,
        }
    }
}

impl DisplayConfig {
    /// Health bucket for a bounce rate.
    pub fn health(&self, bounce_rate: f64) -> Health {
        Health::from_bounce_rate(bounce_rate, self.bounce_good, self.bounce_warn)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let in_range = |v: f64| (0.0..=1.0).contains(&v);

        if !in_range(self.bounce_good) {
            diag.error("display.bounce_good", "must be between 0 and 1");
        }
        if !in_range(self.bounce_warn) {
            diag.error("display.bounce_warn", "must be between 0 and 1");
        }
        if self.bounce_good > self.bounce_warn {
            diag.error_with_hint(
                "display.bounce_good",
                format!(
                    "{} is above bounce_warn ({})",
                    self.bounce_good, self.bounce_warn
                ),
                "bounce_good must be <= bounce_warn",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_display_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.display.bounce_good, 0.4);
        assert_eq!(config.display.bounce_warn, 0.7);
        assert_eq!(config.display.health(0.3), Health::Good);
        assert_eq!(config.display.health(0.8), Health::Bad);
    }

    #[test]
    fn test_display_partial_override() {
        let config = test_parse_config("[display]\nbounce_warn = 0.9");
        assert_eq!(config.display.bounce_good, 0.4);
        assert_eq!(config.display.health(0.8), Health::Warn);
    }

    #[test]
    fn test_thresholds_validated() {
        let display = DisplayConfig {
            bounce_good: 0.8,
            bounce_warn: 1.5,
        };
        let mut diag = ConfigDiagnostics::new();
        display.validate(&mut diag);
        // only bounce_warn is out of range
        assert_eq!(diag.len(), 1);

        let display = DisplayConfig {
            bounce_good: 0.6,
            bounce_warn: 0.5,
        };
        let mut diag = ConfigDiagnostics::new();
        display.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, "display.bounce_good");
    }
}
