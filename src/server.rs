// ABOUTME: Router assembly and HTTP server lifecycle for the ECG HRV API
// ABOUTME: Holds shared resources, layers middleware around the routes, and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP server
//!
//! [`ServerResources`] is built once at startup and shared immutably by every
//! request. Layers, outermost first: request ID, CORS, tracing, timeout, body limit.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, http::Uri, middleware, Router};
use ecg_analysis::{HrvAnalyzer, PeakFitAnalyzer, RhythmThresholds};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::constants::endpoints;
use crate::errors::AppError;
use crate::middleware::{request_id_middleware, setup_cors};
use crate::routes::{EcgRoutes, HealthRoutes};

/// Shared, read-only state handed to route handlers
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// HRV engine
    pub analyzer: Arc<dyn HrvAnalyzer>,
    /// AFib and rhythm thresholds
    pub thresholds: RhythmThresholds,
}

impl ServerResources {
    /// Resources backed by the default peak-fit analyzer
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let analyzer = Arc::new(PeakFitAnalyzer::new(config.analysis.clone()));
        Self::with_analyzer(config, analyzer)
    }

    /// Resources backed by a caller-supplied analyzer
    #[must_use]
    pub fn with_analyzer(config: Arc<ServerConfig>, analyzer: Arc<dyn HrvAnalyzer>) -> Self {
        Self {
            config,
            analyzer,
            thresholds: RhythmThresholds::default(),
        }
    }
}

/// Build the complete application router
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let http = &resources.config.http;

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(EcgRoutes::routes(Arc::clone(resources)))
        .fallback(handle_not_found)
        .layer(DefaultBodyLimit::max(http.max_body_bytes))
        .layer(TimeoutLayer::new(http.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(&resources.config.cors))
        .layer(middleware::from_fn(request_id_middleware))
}

/// Unknown paths answer with the JSON error envelope
async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// The ECG HRV API server
pub struct EcgApiServer {
    resources: Arc<ServerResources>,
}

impl EcgApiServer {
    /// Create a server over the given resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Application router, without binding a socket
    pub fn router(&self) -> Router {
        build_router(&self.resources)
    }

    /// Bind the configured address and serve until ctrl-c
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid, the port cannot be bound, or the
    /// server fails while running
    pub async fn run(self) -> Result<()> {
        let addr = self.resources.config.http.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("ECG HRV API listening on http://{addr}");
        info!(
            "Endpoints: GET {}, GET {}, GET {}, POST {}",
            endpoints::ROOT,
            endpoints::HEALTH_CHECK,
            endpoints::READY,
            endpoints::ANALYZE_ECG
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("ECG HRV API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for ctrl-c: {e}");
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
