//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name recorded on startup
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error, or a full directive)
    pub log_level: String,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Whether to include thread ids (useful when chasing lock contention)
    pub thread_ids: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "safety-center".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            thread_ids: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SC_SERVICE_NAME`: Service name (default: safety-center)
    /// - `SC_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `SC_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `SC_THREAD_IDS`: Include thread ids (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`TelemetryConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            service_name: lookup("SC_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("SC_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("SC_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),

            thread_ids: lookup("SC_THREAD_IDS")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.thread_ids),
        }
    }
}
