// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides the root status probe plus health and readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `GET /` answers unconditionally with a fixed payload that existing clients poll.
//! `/health` and `/ready` add timestamps for load balancers.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::constants::{endpoints, messages, service_names};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all status routes
    pub fn routes() -> Router {
        Router::new()
            .route(endpoints::ROOT, get(Self::handle_root))
            .route(endpoints::HEALTH_CHECK, get(Self::handle_health))
            .route(endpoints::READY, get(Self::handle_ready))
    }

    async fn handle_root() -> Json<Value> {
        Json(json!({ "status": messages::ROOT_STATUS }))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::ECG_HRV_API,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready() -> Json<Value> {
        Json(json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
