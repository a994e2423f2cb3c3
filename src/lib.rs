// ABOUTME: Main library entry point for the ECG heart-rate-variability API
// ABOUTME: Wires configuration, logging, middleware, and routes around the analysis engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ECG HRV API
//!
//! An HTTP service that accepts raw ECG samples and a sample rate and returns
//! heart-rate-variability metrics (BPM, IBI, RMSSD, SDNN, pNN20, pNN50), a heuristic
//! atrial-fibrillation flag, and a categorical rhythm label.
//!
//! ## Architecture
//!
//! - **`ecg-core`**: error codes, the JSON error envelope, shared constants
//! - **`ecg-analysis`**: peak detection, RR intervals, HRV measures, rhythm rules
//! - **this crate**: environment configuration, logging, middleware, routes, and
//!   response formatting
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ecg_hrv_api::config::environment::ServerConfig;
//! use ecg_hrv_api::server::{EcgApiServer, ServerResources};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::new(Arc::new(config)));
//!     EcgApiServer::new(resources).run().await
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Application constants, shared with the core crate
pub mod constants;

/// Unified error handling, shared with the core crate
pub mod errors;

/// Display formatting for HRV metrics
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request IDs)
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
