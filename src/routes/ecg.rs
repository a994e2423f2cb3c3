// ABOUTME: ECG analysis route handler turning raw samples into formatted HRV metrics
// ABOUTME: Runs the analyzer on a blocking worker and applies the AFib and rhythm rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! ECG analysis routes
//!
//! `POST /analyze-ecg` accepts `{"ecg_values": [...], "sample_rate": ...}`. Every
//! failure, including malformed JSON, answers with a `detail` that starts with
//! `Error analyzing ECG: `.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Extension, Json, Router,
};
use ecg_analysis::{AnalysisError, EcgSignal, HrvStatistics, RhythmAssessment, RhythmStatus};
use serde::{Deserialize, Serialize};
use tokio::task;
use tracing::{error, info};

use crate::constants::{endpoints, messages};
use crate::errors::{AppError, ErrorCode};
use crate::formatters::{
    format_metric, MetricUnit, METRIC_PRECISION, PNN_PRECISION, SUMMARY_PNN_PRECISION,
};
use crate::middleware::RequestId;
use crate::server::ServerResources;

/// Body of `POST /analyze-ecg`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcgAnalysisRequest {
    /// Raw ECG samples
    pub ecg_values: Vec<f64>,
    /// Sampling frequency in Hz
    pub sample_rate: f64,
}

/// Human-readable digest of one analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Same text as the top-level `bpm`
    pub heart_rate: String,
    /// `"SDNN: <sdnn>, RMSSD: <rmssd>"`
    pub variability: String,
    /// `"pNN20: <pnn20>, pNN50: <pnn50>"`
    pub pnn: String,
    /// AFib verdict as a sentence
    pub afib_status: String,
    /// Rhythm label
    pub rhythm_status: RhythmStatus,
}

/// Successful `POST /analyze-ecg` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcgAnalysisResponse {
    /// Heart rate, e.g. `"72.0 BPM"`
    pub bpm: String,
    /// Mean inter-beat interval, e.g. `"833.33 ms"`
    pub ibi: String,
    /// RMSSD in ms
    pub rmssd: String,
    /// SDNN in ms
    pub sdnn: String,
    /// pNN20, e.g. `"12.5%"`
    pub pnn20: String,
    /// pNN50
    pub pnn50: String,
    /// AFib heuristic result
    pub afib: bool,
    /// Rhythm label
    pub rhythm_status: RhythmStatus,
    /// Display digest
    pub summary: AnalysisSummary,
    /// Always `true`; failures use the error envelope instead
    pub success: bool,
}

impl EcgAnalysisResponse {
    /// Format statistics and a rhythm assessment for the wire
    #[must_use]
    pub fn from_analysis(stats: &HrvStatistics, rhythm: RhythmAssessment) -> Self {
        let bpm = format_metric(stats.bpm, METRIC_PRECISION, MetricUnit::Bpm);
        let sdnn = format_metric(stats.sdnn, METRIC_PRECISION, MetricUnit::Milliseconds);
        let rmssd = format_metric(stats.rmssd, METRIC_PRECISION, MetricUnit::Milliseconds);

        let summary = AnalysisSummary {
            heart_rate: bpm.clone(),
            variability: format!("SDNN: {sdnn}, RMSSD: {rmssd}"),
            pnn: format!(
                "pNN20: {}, pNN50: {}",
                format_metric(stats.pnn20, SUMMARY_PNN_PRECISION, MetricUnit::Percent),
                format_metric(stats.pnn50, SUMMARY_PNN_PRECISION, MetricUnit::Percent),
            ),
            afib_status: if rhythm.afib {
                messages::AFIB_DETECTED
            } else {
                messages::AFIB_NOT_DETECTED
            }
            .to_owned(),
            rhythm_status: rhythm.status,
        };

        Self {
            bpm,
            ibi: format_metric(stats.ibi, METRIC_PRECISION, MetricUnit::Milliseconds),
            rmssd,
            sdnn,
            pnn20: format_metric(stats.pnn20, PNN_PRECISION, MetricUnit::Percent),
            pnn50: format_metric(stats.pnn50, PNN_PRECISION, MetricUnit::Percent),
            afib: rhythm.afib,
            rhythm_status: rhythm.status,
            summary,
            success: true,
        }
    }
}

/// ECG analysis routes
pub struct EcgRoutes;

impl EcgRoutes {
    /// Create the analysis route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::ANALYZE_ECG, post(Self::handle_analyze_ecg))
            .with_state(resources)
    }

    /// Handle `POST /analyze-ecg`
    async fn handle_analyze_ecg(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        payload: Result<Json<EcgAnalysisRequest>, JsonRejection>,
    ) -> Result<Json<EcgAnalysisResponse>, AppError> {
        let request_id = request_id.map(|Extension(id)| id);
        let tag = |error: AppError| {
            let error = error.with_prefix(messages::ANALYZE_ERROR_PREFIX);
            match &request_id {
                Some(id) => error.with_request_id(id.as_str()),
                None => error,
            }
        };

        let Json(request) = payload.map_err(|rejection| tag(rejection_error(&rejection)))?;
        info!(
            samples = request.ecg_values.len(),
            sample_rate = request.sample_rate,
            "Analyzing ECG signal"
        );

        let stats = Self::run_analysis(&resources, request).await.map_err(tag)?;
        let rhythm = RhythmAssessment::assess(&stats, &resources.thresholds);

        info!(
            bpm = ?stats.bpm,
            rmssd = ?stats.rmssd,
            afib = rhythm.afib,
            rhythm_status = %rhythm.status,
            "ECG analysis complete"
        );
        Ok(Json(EcgAnalysisResponse::from_analysis(&stats, rhythm)))
    }

    /// Validate the payload and run the analyzer off the async executor
    async fn run_analysis(
        resources: &Arc<ServerResources>,
        request: EcgAnalysisRequest,
    ) -> Result<HrvStatistics, AppError> {
        let analyzer = Arc::clone(&resources.analyzer);
        let max_samples = resources.config.analysis.max_samples;
        let EcgAnalysisRequest {
            ecg_values,
            sample_rate,
        } = request;

        let outcome = task::spawn_blocking(move || {
            let signal = EcgSignal::new(ecg_values, sample_rate)?;
            if signal.len() > max_samples {
                return Err(AnalysisError::TooManySamples {
                    count: signal.len(),
                    max: max_samples,
                });
            }
            analyzer.analyze(&signal)
        })
        .await;

        match outcome {
            Ok(result) => result.map_err(AppError::from),
            Err(join_error) => {
                error!(error = %join_error, "Analysis worker failed");
                Err(AppError::internal("internal error while analyzing the signal")
                    .with_source(join_error))
            }
        }
    }
}

/// Map a JSON extraction failure onto an error code
fn rejection_error(rejection: &JsonRejection) -> AppError {
    let text = rejection.body_text();
    let code = match rejection {
        JsonRejection::JsonDataError(_) if text.contains("missing field") => {
            ErrorCode::MissingRequiredField
        }
        JsonRejection::BytesRejection(_) => ErrorCode::ValueOutOfRange,
        _ => ErrorCode::InvalidFormat,
    };
    AppError::new(code, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> HrvStatistics {
        HrvStatistics {
            bpm: Some(72.0),
            ibi: Some(833.333_333),
            sdnn: Some(42.5),
            rmssd: Some(30.0),
            pnn20: Some(33.333_333),
            pnn50: Some(12.345_678),
            ..HrvStatistics::default()
        }
    }

    #[test]
    fn test_response_formatting() {
        let rhythm = RhythmAssessment {
            afib: false,
            status: RhythmStatus::NormalRhythm,
        };
        let response = EcgAnalysisResponse::from_analysis(&stats(), rhythm);

        assert_eq!(response.bpm, "72.0 BPM");
        assert_eq!(response.ibi, "833.33 ms");
        assert_eq!(response.sdnn, "42.5 ms");
        assert_eq!(response.pnn20, "33.3%");
        assert_eq!(response.pnn50, "12.3%");
        assert_eq!(response.summary.heart_rate, "72.0 BPM");
        assert_eq!(response.summary.variability, "SDNN: 42.5 ms, RMSSD: 30.0 ms");
        assert_eq!(response.summary.pnn, "pNN20: 33.33%, pNN50: 12.35%");
        assert_eq!(response.summary.afib_status, "Normal rhythm");
        assert!(response.success);
    }

    #[test]
    fn test_missing_statistics_render_not_available() {
        let rhythm = RhythmAssessment {
            afib: false,
            status: RhythmStatus::NormalRhythm,
        };
        let response = EcgAnalysisResponse::from_analysis(&HrvStatistics::default(), rhythm);

        assert_eq!(response.bpm, "N/A");
        assert_eq!(response.summary.variability, "SDNN: N/A, RMSSD: N/A");
        assert_eq!(response.summary.pnn, "pNN20: N/A, pNN50: N/A");
    }

    #[test]
    fn test_afib_summary_text() {
        let rhythm = RhythmAssessment {
            afib: true,
            status: RhythmStatus::PossibleAfib,
        };
        let response = EcgAnalysisResponse::from_analysis(&stats(), rhythm);

        assert_eq!(response.summary.afib_status, "Possible AFib detected");
        assert_eq!(
            serde_json::to_value(&response).unwrap()["rhythm_status"],
            "Possible AFib"
        );
    }
}
