// ABOUTME: Unified error handling re-exported from the core crate
// ABOUTME: AppError, ErrorCode, and the JSON error envelope used by every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Error types live in `ecg-core` so the analysis crate can convert into them
//! without depending on the server. With the `http-response` feature enabled,
//! [`AppError`] implements `IntoResponse` and renders as
//! `{"detail": "...", "code": "..."}`.

pub use ecg_core::errors::*;
