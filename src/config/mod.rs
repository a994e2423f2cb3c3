// ABOUTME: Configuration module for the ECG HRV API
// ABOUTME: Environment-only configuration with typed deployment, HTTP, CORS, and analysis settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! All settings come from environment variables; there is no configuration file.
//! Command-line flags on the server binary override the listening address.

/// Environment-based server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, HttpConfig, LogLevel, ServerConfig};
