// ABOUTME: HRV analysis engine turning raw ECG samples into heart-rate-variability statistics
// ABOUTME: Exposes the HrvAnalyzer seam plus the rolling-mean peak-fit implementation behind it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ECG Analysis
//!
//! The pipeline, in order:
//!
//! 1. [`signal`] validates samples and computes the rolling mean
//! 2. [`peaks`] finds R-peaks for a set of threshold lifts and keeps the best fit
//! 3. [`intervals`] turns peaks into RR intervals and rejects outliers
//! 4. [`measures`] computes time-domain and Poincaré statistics
//! 5. [`rhythm`] applies fixed thresholds to label the rhythm
//!
//! [`analyzer::PeakFitAnalyzer`] wires steps 1-4 together behind the
//! [`analyzer::HrvAnalyzer`] trait so callers can substitute their own engine.

/// The analyzer trait and its default implementation
pub mod analyzer;
/// Tunable analysis parameters and rhythm thresholds
pub mod config;
/// Analysis error type and its mapping onto `AppError`
pub mod error;
/// RR interval extraction and outlier rejection
pub mod intervals;
/// HRV statistics computed from RR intervals
pub mod measures;
/// Rolling-mean R-peak detection
pub mod peaks;
/// AFib heuristic and rhythm classification
pub mod rhythm;
/// Validated ECG signal and moving-average smoothing
pub mod signal;

/// Synthetic ECG generators for tests and benchmarks
#[cfg(any(test, feature = "testing"))]
pub mod synthetic;

pub use analyzer::{HrvAnalyzer, PeakFitAnalyzer};
pub use config::{AnalysisConfig, RhythmThresholds};
pub use error::AnalysisError;
pub use measures::{HrvStatistics, Statistic};
pub use rhythm::{RhythmAssessment, RhythmStatus};
pub use signal::EcgSignal;
