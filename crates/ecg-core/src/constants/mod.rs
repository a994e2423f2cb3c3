// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service identity, network defaults, request limits, and response labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large list.

/// Service identity used in logs and health payloads
pub mod service_names {
    /// Canonical service name
    pub const ECG_HRV_API: &str = "ecg-hrv-api";
}

/// API endpoints
pub mod endpoints {
    /// Static status probe
    pub const ROOT: &str = "/";
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
    /// ECG analysis endpoint
    pub const ANALYZE_ECG: &str = "/analyze-ecg";
}

/// Network defaults
pub mod network {
    /// Default HTTP port when `PORT` is unset
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
    /// Default bind address (all interfaces)
    pub const DEFAULT_HOST: &str = "0.0.0.0";
}

/// Request size and time limits
pub mod limits {
    /// Maximum request body size in bytes (8 MiB)
    pub const DEFAULT_MAX_BODY_BYTES: usize = 8 * 1024 * 1024;
    /// Request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Maximum number of ECG samples accepted in one request
    pub const DEFAULT_MAX_SAMPLES: usize = 500_000;
}

/// Header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Fixed strings that appear in API responses
pub mod messages {
    /// Payload of `GET /`
    pub const ROOT_STATUS: &str = "ECG API running";
    /// Prefix of every `/analyze-ecg` error detail
    pub const ANALYZE_ERROR_PREFIX: &str = "Error analyzing ECG: ";
    /// Rendering of an absent statistic
    pub const NOT_AVAILABLE: &str = "N/A";
    /// Summary text when the AFib heuristic fires
    pub const AFIB_DETECTED: &str = "Possible AFib detected";
    /// Summary text otherwise
    pub const AFIB_NOT_DETECTED: &str = "Normal rhythm";
}
