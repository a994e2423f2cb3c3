// ABOUTME: Router fixtures for integration tests
// ABOUTME: Builds the full application router over the real analyzer or a fixed-output stub
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::Router;
use ecg_analysis::{AnalysisError, EcgSignal, HrvAnalyzer, HrvStatistics};
use ecg_hrv_api::config::ServerConfig;
use ecg_hrv_api::server::{build_router, ServerResources};

/// Analyzer that ignores the signal and returns preset statistics
pub struct StubAnalyzer {
    stats: HrvStatistics,
}

impl StubAnalyzer {
    pub fn new(stats: HrvStatistics) -> Self {
        Self { stats }
    }
}

impl HrvAnalyzer for StubAnalyzer {
    fn analyze(&self, _signal: &EcgSignal) -> Result<HrvStatistics, AnalysisError> {
        Ok(self.stats.clone())
    }
}

/// Full router over the default analyzer and default configuration
pub fn default_router() -> Router {
    router_with_config(ServerConfig::default())
}

/// Full router over the default analyzer
pub fn router_with_config(config: ServerConfig) -> Router {
    build_router(&Arc::new(ServerResources::new(Arc::new(config))))
}

/// Full router whose analyzer always returns `stats`
#[allow(dead_code)]
pub fn stub_router(stats: HrvStatistics) -> Router {
    let resources = ServerResources::with_analyzer(
        Arc::new(ServerConfig::default()),
        Arc::new(StubAnalyzer::new(stats)),
    );
    build_router(&Arc::new(resources))
}

/// Statistics with the four AFib inputs set
#[allow(dead_code)]
pub fn stats(bpm: f64, rmssd: f64, sdnn: f64, pnn50: f64) -> HrvStatistics {
    HrvStatistics {
        bpm: Some(bpm),
        ibi: Some(60_000.0 / bpm),
        rmssd: Some(rmssd),
        sdnn: Some(sdnn),
        pnn20: Some(pnn50),
        pnn50: Some(pnn50),
        ..HrvStatistics::default()
    }
}
