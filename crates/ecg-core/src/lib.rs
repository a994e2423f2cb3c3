// ABOUTME: Core types and constants for the ECG heart-rate-variability API
// ABOUTME: Foundation crate with error handling and constants shared by the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ECG Core
//!
//! Foundation crate providing shared types and constants for the ECG HRV API.
//! It changes rarely, so the analysis engine and the HTTP server can both depend
//! on it without pulling each other in.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the HTTP envelope
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;
