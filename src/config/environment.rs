// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use ecg_analysis::AnalysisConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{env_vars, limits, network};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Normal operational messages
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    ///
    /// Accepts a bare level or an `EnvFilter` directive list; the first bare level
    /// found wins, so `"debug,hyper=warn"` reads as `Debug`.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.split(',')
            .map(str::trim)
            .find_map(|directive| match directive.to_lowercase().as_str() {
                "error" => Some(Self::Error),
                "warn" => Some(Self::Warn),
                "info" => Some(Self::Info),
                "debug" => Some(Self::Debug),
                "trace" => Some(Self::Trace),
                _ => None,
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Listener and request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Bind address
    pub host: String,
    /// Listening port
    pub port: u16,
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl HttpConfig {
    /// Socket address to bind
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an IP address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: network::DEFAULT_HOST.to_owned(),
            port: network::DEFAULT_HTTP_PORT,
            max_body_bytes: limits::DEFAULT_MAX_BODY_BYTES,
            request_timeout_secs: limits::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated list of origins
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Listener and request limits
    pub http: HttpConfig,
    /// Cross-origin settings
    pub cors: CorsConfig,
    /// Peak detection parameters and input limits
    pub analysis: AnalysisConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable or out-of-range value
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let defaults = AnalysisConfig::default();
        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_vars::RUST_LOG, "info")),
            http: HttpConfig {
                host: env_var_or(env_vars::HOST, network::DEFAULT_HOST),
                port: env_parse_or(env_vars::PORT, network::DEFAULT_HTTP_PORT)?,
                max_body_bytes: env_parse_or(
                    env_vars::MAX_BODY_BYTES,
                    limits::DEFAULT_MAX_BODY_BYTES,
                )?,
                request_timeout_secs: env_parse_or(
                    env_vars::REQUEST_TIMEOUT_SECS,
                    limits::DEFAULT_REQUEST_TIMEOUT_SECS,
                )?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or(env_vars::CORS_ALLOWED_ORIGINS, "*"),
            },
            analysis: AnalysisConfig {
                window_seconds: env_parse_or(env_vars::ECG_WINDOW_SECONDS, defaults.window_seconds)?,
                bpm_min: env_parse_or(env_vars::ECG_BPM_MIN, defaults.bpm_min)?,
                bpm_max: env_parse_or(env_vars::ECG_BPM_MAX, defaults.bpm_max)?,
                max_samples: env_parse_or(env_vars::ECG_MAX_SAMPLES, defaults.max_samples)?,
                ma_percentages: defaults.ma_percentages,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting
    pub fn validate(&self) -> Result<()> {
        self.http.socket_addr()?;

        if self.http.max_body_bytes == 0 {
            return Err(anyhow!("{} must be greater than 0", env_vars::MAX_BODY_BYTES));
        }
        if self.http.request_timeout_secs == 0 {
            return Err(anyhow!(
                "{} must be greater than 0",
                env_vars::REQUEST_TIMEOUT_SECS
            ));
        }

        self.analysis
            .validate()
            .map_err(|e| anyhow!("Invalid analysis configuration: {}", e.message))
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "ECG HRV API Configuration:\n\
             - Environment: {}\n\
             - Bind Address: {}:{}\n\
             - Log Level: {}\n\
             - CORS Origins: {}\n\
             - Max Body: {} bytes\n\
             - Request Timeout: {}s\n\
             - Analysis Window: {}s\n\
             - BPM Range: {}-{}\n\
             - Max Samples: {}",
            self.environment,
            self.http.host,
            self.http.port,
            self.log_level,
            self.cors.allowed_origins,
            self.http.max_body_bytes,
            self.http.request_timeout_secs,
            self.analysis.window_seconds,
            self.analysis.bpm_min,
            self.analysis.bpm_max,
            self.analysis.max_samples,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset or empty
fn env_parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid {key} value '{raw}': {e}")),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_binds_all_interfaces() {
        let config = ServerConfig::default();

        assert_eq!(
            config.http.socket_addr().unwrap(),
            "0.0.0.0:8080".parse().unwrap()
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_host() {
        let mut config = ServerConfig::default();
        config.http.host = "not an address".to_owned();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_bpm_range() {
        let mut config = ServerConfig::default();
        config.analysis.bpm_min = 200.0;

        let error = config.validate().unwrap_err().to_string();
        assert!(error.contains("bpm range"));
    }

    #[test]
    fn test_summary_mentions_port() {
        let summary = ServerConfig::default().summary();

        assert!(summary.contains("0.0.0.0:8080"));
        assert!(summary.contains("Max Samples: 500000"));
    }
}
