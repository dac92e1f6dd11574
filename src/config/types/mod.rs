//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error and diagnostics types    |

mod error;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
