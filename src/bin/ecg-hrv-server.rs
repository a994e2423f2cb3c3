// ABOUTME: Server binary for the ECG HRV API
// ABOUTME: Loads environment configuration, applies CLI overrides, initializes logging, and serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # ECG HRV API Server Binary
//!
//! Starts the HTTP service that analyzes ECG samples for heart-rate variability.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use ecg_hrv_api::{
    config::environment::ServerConfig,
    logging,
    server::{EcgApiServer, ServerResources},
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "ecg-hrv-server")]
#[command(about = "ECG HRV API - heart-rate variability and rhythm screening over HTTP")]
#[command(version)]
pub struct Args {
    /// Override the listening port (default: PORT or 8080)
    #[arg(long)]
    port: Option<u16>,

    /// Override the bind address (default: HOST or 0.0.0.0)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http.port = port;
    }
    if let Some(host) = args.host {
        config.http.host = host;
    }
    config.validate()?;

    info!("Starting ECG HRV API");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new(Arc::new(config)));
    let server = EcgApiServer::new(resources);

    if let Err(e) = server.run().await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
