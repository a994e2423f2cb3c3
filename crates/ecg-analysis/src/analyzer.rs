// ABOUTME: HrvAnalyzer trait and the rolling-mean peak-fit implementation behind it
// ABOUTME: Turns a validated ECG signal into peaks, RR intervals, and HRV statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{debug, info_span};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::intervals::RrIntervals;
use crate::measures::HrvStatistics;
use crate::peaks::fit_peaks;
use crate::signal::{rolling_mean, EcgSignal};

/// Anything that can turn an ECG signal into HRV statistics
///
/// Implementations run synchronously and may be CPU-heavy; async callers should
/// move the call onto a blocking thread.
pub trait HrvAnalyzer: Send + Sync {
    /// Analyze one signal
    ///
    /// # Errors
    ///
    /// Returns an [`AnalysisError`] when the signal is unusable or no heartbeat
    /// pattern can be extracted
    fn analyze(&self, signal: &EcgSignal) -> Result<HrvStatistics, AnalysisError>;
}

/// Default analyzer: rolling-mean peak detection with best-fit threshold selection
#[derive(Debug, Clone, Default)]
pub struct PeakFitAnalyzer {
    config: AnalysisConfig,
}

impl PeakFitAnalyzer {
    /// Create an analyzer with the given parameters
    #[must_use]
    pub const fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }
}

impl HrvAnalyzer for PeakFitAnalyzer {
    fn analyze(&self, signal: &EcgSignal) -> Result<HrvStatistics, AnalysisError> {
        let span = info_span!(
            "hrv_analysis",
            samples = signal.len(),
            sample_rate = signal.sample_rate()
        );
        let _guard = span.enter();

        if signal.len() > self.config.max_samples {
            return Err(AnalysisError::TooManySamples {
                count: signal.len(),
                max: self.config.max_samples,
            });
        }

        let samples = signal.samples();
        let sample_rate = signal.sample_rate();
        let smoothed = rolling_mean(samples, self.config.window_seconds, sample_rate)?;
        let fit = fit_peaks(samples, &smoothed, sample_rate, &self.config)?;

        let mut intervals = RrIntervals::from_peaks(fit.peaks, sample_rate);
        let rejected = intervals.reject_outliers();
        let accepted = intervals.accepted_intervals();
        if accepted.is_empty() {
            return Err(AnalysisError::InsufficientBeats);
        }

        debug!(
            peaks = intervals.peaks().len(),
            rejected,
            accepted = accepted.len(),
            "RR intervals extracted"
        );

        let mut stats = HrvStatistics::from_intervals(&accepted);
        stats.rejected_peaks = intervals.rejected_peaks();
        stats.peaks = intervals.peaks().to_vec();
        Ok(stats)
    }
}
