//! # Safety Telemetry
//!
//! Structured logging for the Safety Center.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use safety_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_tracing(&config).expect("Failed to init tracing");
//!     // Subsystem logs are now emitted
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SC_SERVICE_NAME` | `safety-center` | Service name logged once at startup |
//! | `SC_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `SC_JSON_LOGS` | `false` | Emit JSON lines instead of human-readable output |
//! | `SC_THREAD_IDS` | `true` | Include thread ids on each event |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}
