// ABOUTME: Validated ECG signal container and rolling-mean smoothing
// ABOUTME: Rejects empty, non-finite, or unsampled input before any analysis runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::error::AnalysisError;

/// Raw ECG samples together with their sampling frequency
#[derive(Debug, Clone, PartialEq)]
pub struct EcgSignal {
    samples: Vec<f64>,
    sample_rate: f64,
}

impl EcgSignal {
    /// Validate and wrap a sample sequence
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::EmptySignal`] when `samples` is empty
    /// - [`AnalysisError::InvalidSampleRate`] when `sample_rate` is not a positive finite number
    /// - [`AnalysisError::NonFiniteSample`] when any sample is NaN or infinite
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> Result<Self, AnalysisError> {
        if samples.is_empty() {
            return Err(AnalysisError::EmptySignal);
        }
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(AnalysisError::InvalidSampleRate(sample_rate));
        }
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(AnalysisError::NonFiniteSample { index });
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// The samples
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sampling frequency in Hz
    #[must_use]
    pub const fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a constructed signal; present for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Signal duration in seconds
    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }
}

/// Number of samples covered by `window_seconds`, never less than one
#[must_use]
pub fn window_len(window_seconds: f64, sample_rate: f64) -> usize {
    ((window_seconds * sample_rate) as usize).max(1)
}

/// Centered moving average with the same length as `samples`
///
/// Each full window contributes one mean; the `window - 1` positions that have no
/// full window are padded with the nearest full-window mean, split evenly between
/// the start and the end.
///
/// # Errors
///
/// Returns [`AnalysisError::SignalTooShort`] when `samples` is shorter than one window
pub fn rolling_mean(
    samples: &[f64],
    window_seconds: f64,
    sample_rate: f64,
) -> Result<Vec<f64>, AnalysisError> {
    let window = window_len(window_seconds, sample_rate);
    if samples.len() < window {
        return Err(AnalysisError::SignalTooShort {
            samples: samples.len(),
            window,
        });
    }

    let mut prefix = Vec::with_capacity(samples.len() + 1);
    prefix.push(0.0);
    let mut running = 0.0;
    for sample in samples {
        running += sample;
        prefix.push(running);
    }

    let width = window as f64;
    let means: Vec<f64> = (0..=samples.len() - window)
        .map(|start| (prefix[start + window] - prefix[start]) / width)
        .collect();

    let missing = samples.len() - means.len();
    let front = missing / 2;
    let back = missing - front;
    let first = means[0];
    let last = means[means.len() - 1];

    let mut smoothed = Vec::with_capacity(samples.len());
    smoothed.extend(std::iter::repeat(first).take(front));
    smoothed.extend_from_slice(&means);
    smoothed.extend(std::iter::repeat(last).take(back));
    Ok(smoothed)
}
