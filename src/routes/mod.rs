// ABOUTME: Route module organization for the ECG HRV API HTTP endpoints
// ABOUTME: Status probes and the ECG analysis endpoint, each exposing a `routes()` constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains route definitions and thin handlers; analysis work
//! is delegated to the `ecg-analysis` crate through [`crate::server::ServerResources`].

/// ECG analysis routes
pub mod ecg;
/// Root status, health, and readiness routes
pub mod health;

pub use ecg::{AnalysisSummary, EcgAnalysisRequest, EcgAnalysisResponse, EcgRoutes};
pub use health::HealthRoutes;
