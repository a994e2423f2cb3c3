// ABOUTME: Tests for environment-driven server configuration
// ABOUTME: Validates parsing, defaults, overrides, and rejection of bad values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use ecg_hrv_api::config::environment::{Environment, LogLevel, ServerConfig};
use ecg_hrv_api::logging::LoggingConfig;
use serial_test::serial;

const MANAGED_VARS: [&str; 13] = [
    "PORT",
    "HOST",
    "ENVIRONMENT",
    "RUST_LOG",
    "CORS_ALLOWED_ORIGINS",
    "MAX_BODY_BYTES",
    "REQUEST_TIMEOUT_SECS",
    "ECG_WINDOW_SECONDS",
    "ECG_BPM_MIN",
    "ECG_BPM_MAX",
    "ECG_MAX_SAMPLES",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
];

fn clear_env() {
    for key in MANAGED_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("hyper=warn,trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    ); // Default fallback
    assert!(Environment::Production.is_production());
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http.port, 8080);
    assert_eq!(config.http.host, "0.0.0.0");
    assert_eq!(config.http.max_body_bytes, 8 * 1024 * 1024);
    assert_eq!(config.http.request_timeout_secs, 30);
    assert_eq!(config.cors.allowed_origins, "*");
    assert_eq!(config.environment, Environment::Development);
    assert!((config.analysis.window_seconds - 0.75).abs() < f64::EPSILON);
    assert_eq!(config.analysis.max_samples, 500_000);
}

#[test]
#[serial]
fn test_values_from_environment() {
    clear_env();
    env::set_var("PORT", "9090");
    env::set_var("HOST", "127.0.0.1");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("ECG_BPM_MAX", "200");
    env::set_var("ECG_MAX_SAMPLES", "1000");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http.port, 9090);
    assert_eq!(config.http.socket_addr().unwrap().to_string(), "127.0.0.1:9090");
    assert!(config.environment.is_production());
    assert!((config.analysis.bpm_max - 200.0).abs() < f64::EPSILON);
    assert_eq!(config.analysis.max_samples, 1000);
}

#[test]
#[serial]
fn test_empty_values_fall_back_to_defaults() {
    clear_env();
    env::set_var("PORT", "");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http.port, 8080);
}

#[test]
#[serial]
fn test_unparseable_port_is_rejected() {
    clear_env();
    env::set_var("PORT", "eighty");

    let error = ServerConfig::from_env().unwrap_err().to_string();
    clear_env();

    assert!(error.contains("PORT"), "unexpected error: {error}");
}

#[test]
#[serial]
fn test_invalid_analysis_settings_are_rejected() {
    clear_env();
    env::set_var("ECG_BPM_MIN", "190");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_zero_timeout_is_rejected() {
    clear_env();
    env::set_var("REQUEST_TIMEOUT_SECS", "0");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_logging_and_server_agree_on_environment() {
    clear_env();
    env::set_var("ENVIRONMENT", "prod");
    env::set_var("RUST_LOG", "debug,hyper=warn");

    let server = ServerConfig::from_env().unwrap();
    let logging = LoggingConfig::from_env();
    clear_env();

    assert_eq!(server.environment, Environment::Production);
    assert_eq!(logging.environment, server.environment);
    assert!(logging.include_location);
    assert!(logging.include_thread);
    assert_eq!(server.log_level, LogLevel::Debug);
    assert_eq!(logging.level, "debug,hyper=warn");
}

#[test]
#[serial]
fn test_logging_defaults_match_server_defaults() {
    clear_env();

    let server = ServerConfig::from_env().unwrap();
    let logging = LoggingConfig::from_env();

    assert_eq!(logging.environment, server.environment);
    assert_eq!(logging.level, server.log_level.to_string());
    assert!(!logging.include_location);
}
