// ABOUTME: Application constants re-exported from the core crate
// ABOUTME: Keeps `crate::constants::*` paths stable for routes, config, and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ecg_core::constants::*;

/// Environment variable names read at startup
pub mod env_vars {
    /// Listening port
    pub const PORT: &str = "PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Any value adds file and line to log records
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Any value adds thread ids and names to log records
    pub const LOG_INCLUDE_THREAD: &str = "LOG_INCLUDE_THREAD";
    /// Any value emits span open and close events
    pub const LOG_INCLUDE_SPANS: &str = "LOG_INCLUDE_SPANS";
    /// Service name attached to startup records
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Request body limit in bytes
    pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Rolling-mean window in seconds
    pub const ECG_WINDOW_SECONDS: &str = "ECG_WINDOW_SECONDS";
    /// Lowest plausible heart rate for peak fitting
    pub const ECG_BPM_MIN: &str = "ECG_BPM_MIN";
    /// Highest plausible heart rate for peak fitting
    pub const ECG_BPM_MAX: &str = "ECG_BPM_MAX";
    /// Maximum samples per request
    pub const ECG_MAX_SAMPLES: &str = "ECG_MAX_SAMPLES";
}
