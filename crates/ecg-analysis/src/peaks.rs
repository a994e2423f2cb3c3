// ABOUTME: R-peak detection against a lifted rolling mean, with best-fit threshold selection
// ABOUTME: Candidate lifts are evaluated in parallel and scored by RR-interval regularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Peak Detection
//!
//! A sample belongs to a region of interest when it lies strictly above the rolling
//! mean raised by a percentage of its own average. Each contiguous region yields a
//! single peak at its maximum. Because the right lift depends on signal amplitude and
//! noise, several lifts are tried and the one giving the most regular RR series within
//! a plausible heart-rate band wins.

use rayon::prelude::*;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::measures::{mean, std_dev};

/// The winning threshold lift and the peaks it produced
#[derive(Debug, Clone, PartialEq)]
pub struct PeakFit {
    /// Lift applied to the rolling mean, in percent
    pub ma_percentage: f64,
    /// Sample indices of detected peaks
    pub peaks: Vec<usize>,
    /// Heart rate implied by the raw peak spacing
    pub bpm: f64,
    /// Standard deviation of the raw RR intervals in ms
    pub rr_sd: f64,
}

/// Find one peak per region where `samples` exceeds the lifted rolling mean
///
/// `rolling_mean` must be the same length as `samples`. Ties within a region resolve
/// to the earliest sample.
#[must_use]
pub fn detect_peaks(samples: &[f64], rolling_mean: &[f64], ma_percentage: f64) -> Vec<usize> {
    let lift = mean(rolling_mean) / 100.0 * ma_percentage;

    let mut peaks = Vec::new();
    let mut current: Option<usize> = None;

    for (index, (&sample, &baseline)) in samples.iter().zip(rolling_mean).enumerate() {
        if sample > baseline + lift {
            current = match current {
                Some(best) if samples[best] >= sample => Some(best),
                _ => Some(index),
            };
        } else if let Some(best) = current.take() {
            peaks.push(best);
        }
    }
    if let Some(best) = current {
        peaks.push(best);
    }

    peaks
}

/// RR intervals in milliseconds between consecutive peaks
#[must_use]
pub fn peak_intervals_ms(peaks: &[usize], sample_rate: f64) -> Vec<f64> {
    peaks
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) as f64 * 1000.0 / sample_rate)
        .collect()
}

/// Try every configured lift and keep the most regular plausible result
///
/// # Errors
///
/// Returns [`AnalysisError::NoValidFit`] when no lift yields at least two peaks with a
/// heart rate inside `[bpm_min, bpm_max]`
pub fn fit_peaks(
    samples: &[f64],
    rolling_mean: &[f64],
    sample_rate: f64,
    config: &AnalysisConfig,
) -> Result<PeakFit, AnalysisError> {
    let candidates: Vec<Option<PeakFit>> = config
        .ma_percentages
        .par_iter()
        .map(|&ma_percentage| {
            let peaks = detect_peaks(samples, rolling_mean, ma_percentage);
            if peaks.len() < 2 {
                return None;
            }
            let intervals = peak_intervals_ms(&peaks, sample_rate);
            let bpm = 60_000.0 / mean(&intervals);
            if !(config.bpm_min..=config.bpm_max).contains(&bpm) {
                return None;
            }
            Some(PeakFit {
                ma_percentage,
                rr_sd: std_dev(&intervals),
                bpm,
                peaks,
            })
        })
        .collect();

    let best = candidates
        .into_iter()
        .flatten()
        .min_by(|a, b| a.rr_sd.total_cmp(&b.rr_sd))
        .ok_or(AnalysisError::NoValidFit)?;

    debug!(
        ma_percentage = best.ma_percentage,
        peaks = best.peaks.len(),
        bpm = best.bpm,
        rr_sd = best.rr_sd,
        "Selected peak fit"
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::rolling_mean;
    use crate::synthetic::synthetic_ecg;

    #[test]
    fn test_one_peak_per_region_at_its_maximum() {
        let samples = [0.0, 0.0, 2.0, 5.0, 3.0, 0.0, 0.0, 4.0, 4.0, 0.0];
        let baseline = [1.0; 10];

        assert_eq!(detect_peaks(&samples, &baseline, 0.0), vec![3, 7]);
    }

    #[test]
    fn test_region_touching_the_end_is_kept() {
        let samples = [0.0, 0.0, 0.0, 6.0];
        let baseline = [1.0; 4];

        assert_eq!(detect_peaks(&samples, &baseline, 0.0), vec![3]);
    }

    #[test]
    fn test_lift_raises_the_threshold() {
        let samples = [0.0, 1.5, 0.0, 3.0, 0.0];
        let baseline = [1.0; 5];

        // lift = mean(1.0) / 100 * 100 = 1.0, so only 3.0 clears 2.0
        assert_eq!(detect_peaks(&samples, &baseline, 100.0), vec![3]);
    }

    #[test]
    fn test_intervals_in_milliseconds() {
        assert_eq!(peak_intervals_ms(&[100, 300, 550], 250.0), vec![800.0, 1000.0]);
    }

    #[test]
    fn test_fit_finds_every_synthetic_beat() {
        let rr = vec![800.0; 11];
        let samples = synthetic_ecg(&rr, 250.0);
        let config = AnalysisConfig::default();
        let smoothed = rolling_mean(&samples, config.window_seconds, 250.0).unwrap();

        let fit = fit_peaks(&samples, &smoothed, 250.0, &config).unwrap();

        assert_eq!(fit.peaks.len(), 12);
        assert_eq!(fit.peaks[0], 100);
        assert!((fit.bpm - 75.0).abs() < 1e-9);
        assert!(fit.rr_sd.abs() < 1e-9);
    }

    #[test]
    fn test_flat_signal_has_no_fit() {
        let samples = vec![0.0; 2_500];
        let config = AnalysisConfig::default();
        let smoothed = rolling_mean(&samples, config.window_seconds, 250.0).unwrap();

        assert_eq!(
            fit_peaks(&samples, &smoothed, 250.0, &config),
            Err(AnalysisError::NoValidFit)
        );
    }

    #[test]
    fn test_implausible_rate_has_no_fit() {
        // Beats every 250 ms are 240 BPM, above the default 180 ceiling
        let rr = vec![250.0; 20];
        let samples = synthetic_ecg(&rr, 200.0);
        let config = AnalysisConfig::default();
        let smoothed = rolling_mean(&samples, config.window_seconds, 200.0).unwrap();

        assert_eq!(
            fit_peaks(&samples, &smoothed, 200.0, &config),
            Err(AnalysisError::NoValidFit)
        );
    }
}
