// ABOUTME: Tunable parameters for peak detection and the rhythm classifier
// ABOUTME: Defaults follow the common rolling-mean HRV toolkit settings and fixed AFib thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis Configuration
//!
//! # References
//!
//! - van Gent, P., et al. (2019). `HeartPy`: A novel heart rate algorithm for the analysis
//!   of noisy signals. *Transportation Research Part F*, 66, 368-378.
//!   <https://doi.org/10.1016/j.trf.2019.09.015>
//! - Task Force of the ESC and NASPE (1996). Heart rate variability: standards of
//!   measurement, physiological interpretation and clinical use. *Circulation*, 93(5).

use ecg_core::constants::limits;
use ecg_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Threshold lifts, in percent of the mean rolling mean, tried during peak fitting
pub const DEFAULT_MA_PERCENTAGES: [f64; 18] = [
    5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0,
    150.0, 200.0, 300.0,
];

/// Peak detection and input limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Rolling mean window in seconds
    pub window_seconds: f64,
    /// Lowest plausible heart rate for a candidate fit
    pub bpm_min: f64,
    /// Highest plausible heart rate for a candidate fit
    pub bpm_max: f64,
    /// Threshold lifts evaluated during peak fitting
    pub ma_percentages: Vec<f64>,
    /// Maximum number of samples per signal
    pub max_samples: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_seconds: 0.75,
            bpm_min: 40.0,
            bpm_max: 180.0,
            ma_percentages: DEFAULT_MA_PERCENTAGES.to_vec(),
            max_samples: limits::DEFAULT_MAX_SAMPLES,
        }
    }
}

impl AnalysisConfig {
    /// Check the parameters are usable
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error naming the first bad parameter
    pub fn validate(&self) -> AppResult<()> {
        if !(self.window_seconds.is_finite() && self.window_seconds > 0.0) {
            return Err(AppError::config_invalid(format!(
                "window_seconds must be positive, got {}",
                self.window_seconds
            )));
        }
        if !(self.bpm_min > 0.0 && self.bpm_min < self.bpm_max) {
            return Err(AppError::config_invalid(format!(
                "bpm range must satisfy 0 < min < max, got {}..{}",
                self.bpm_min, self.bpm_max
            )));
        }
        if self.ma_percentages.is_empty() {
            return Err(AppError::config_invalid("ma_percentages must not be empty"));
        }
        if self.max_samples == 0 {
            return Err(AppError::config_invalid("max_samples must be at least 1"));
        }
        Ok(())
    }
}

/// Fixed thresholds for the AFib heuristic and rhythm labels
///
/// AFib fires only when every `afib_*` bound is exceeded. These are screening
/// heuristics, not clinical criteria.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RhythmThresholds {
    /// BPM must exceed this for AFib
    pub afib_bpm: f64,
    /// RMSSD (ms) must exceed this for AFib
    pub afib_rmssd: f64,
    /// SDNN (ms) must exceed this for AFib
    pub afib_sdnn: f64,
    /// pNN50 (%) must exceed this for AFib
    pub afib_pnn50: f64,
    /// RMSSD below this (together with SDNN) means low variability
    pub low_rmssd: f64,
    /// SDNN below this (together with RMSSD) means low variability
    pub low_sdnn: f64,
    /// RMSSD above this means an irregular rhythm
    pub irregular_rmssd: f64,
    /// SDNN above this means an irregular rhythm
    pub irregular_sdnn: f64,
}

impl Default for RhythmThresholds {
    fn default() -> Self {
        Self {
            afib_bpm: 100.0,
            afib_rmssd: 50.0,
            afib_sdnn: 50.0,
            afib_pnn50: 10.0,
            low_rmssd: 15.0,
            low_sdnn: 20.0,
            irregular_rmssd: 100.0,
            irregular_sdnn: 100.0,
        }
    }
}
