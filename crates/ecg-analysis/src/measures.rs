// ABOUTME: Time-domain and Poincaré HRV statistics computed from accepted RR intervals
// ABOUTME: Every statistic is optional so "not computable" never masquerades as zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HRV Measures
//!
//! Statistics that need successive differences (RMSSD, SDSD, pNNx, Poincaré) require
//! at least two intervals; with a single interval only BPM, IBI, SDNN and MAD exist.
//!
//! # References
//!
//! - Shaffer, F., & Ginsberg, J.P. (2017). An overview of heart rate variability metrics
//!   and norms. *Frontiers in Public Health*, 5, 258. <https://doi.org/10.3389/fpubh.2017.00258>
//! - Brennan, M., et al. (2001). Do existing measures of Poincaré plot geometry reflect
//!   nonlinear features of heart rate variability? *IEEE TBME*, 48(11), 1342-1347.

use std::f64::consts::{PI, SQRT_2};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Dispersions below this are treated as zero when used as a divisor
const MIN_DISPERSION: f64 = 1e-9;

/// Names of the statistics an analysis can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    /// Beats per minute
    Bpm,
    /// Mean inter-beat interval (ms)
    Ibi,
    /// Standard deviation of NN intervals (ms)
    Sdnn,
    /// Standard deviation of successive differences (ms)
    Sdsd,
    /// Root mean square of successive differences (ms)
    Rmssd,
    /// Percent of successive differences above 20 ms
    Pnn20,
    /// Percent of successive differences above 50 ms
    Pnn50,
    /// Median absolute deviation of RR intervals (ms)
    HrMad,
    /// Poincaré short-axis dispersion (ms)
    Sd1,
    /// Poincaré long-axis dispersion (ms)
    Sd2,
    /// Poincaré ellipse area
    S,
    /// SD1 / SD2 ratio
    Sd1Sd2,
}

impl Statistic {
    /// Every statistic, in reporting order
    pub const ALL: [Self; 12] = [
        Self::Bpm,
        Self::Ibi,
        Self::Sdnn,
        Self::Sdsd,
        Self::Rmssd,
        Self::Pnn20,
        Self::Pnn50,
        Self::HrMad,
        Self::Sd1,
        Self::Sd2,
        Self::S,
        Self::Sd1Sd2,
    ];

    /// Lookup key as used in serialized results
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bpm => "bpm",
            Self::Ibi => "ibi",
            Self::Sdnn => "sdnn",
            Self::Sdsd => "sdsd",
            Self::Rmssd => "rmssd",
            Self::Pnn20 => "pnn20",
            Self::Pnn50 => "pnn50",
            Self::HrMad => "hr_mad",
            Self::Sd1 => "sd1",
            Self::Sd2 => "sd2",
            Self::S => "s",
            Self::Sd1Sd2 => "sd1_sd2",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Result of analyzing one signal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HrvStatistics {
    /// Beats per minute
    pub bpm: Option<f64>,
    /// Mean inter-beat interval (ms)
    pub ibi: Option<f64>,
    /// Standard deviation of NN intervals (ms)
    pub sdnn: Option<f64>,
    /// Standard deviation of successive differences (ms)
    pub sdsd: Option<f64>,
    /// Root mean square of successive differences (ms)
    pub rmssd: Option<f64>,
    /// Percent of successive differences above 20 ms
    pub pnn20: Option<f64>,
    /// Percent of successive differences above 50 ms
    pub pnn50: Option<f64>,
    /// Median absolute deviation of RR intervals (ms)
    pub hr_mad: Option<f64>,
    /// Poincaré short-axis dispersion (ms)
    pub sd1: Option<f64>,
    /// Poincaré long-axis dispersion (ms)
    pub sd2: Option<f64>,
    /// Poincaré ellipse area
    pub s: Option<f64>,
    /// SD1 / SD2 ratio
    pub sd1_sd2: Option<f64>,
    /// Sample indices of every detected peak
    pub peaks: Vec<usize>,
    /// Sample indices of peaks dropped as outliers
    pub rejected_peaks: Vec<usize>,
    /// Accepted RR intervals (ms)
    pub rr_intervals: Vec<f64>,
}

impl HrvStatistics {
    /// Compute all statistics from accepted RR intervals
    ///
    /// Peak bookkeeping fields are left empty for the caller to fill.
    #[must_use]
    pub fn from_intervals(rr_intervals: &[f64]) -> Self {
        let mut stats = Self {
            rr_intervals: rr_intervals.to_vec(),
            ..Self::default()
        };
        if rr_intervals.is_empty() {
            return stats;
        }

        let ibi = mean(rr_intervals);
        stats.ibi = Some(ibi);
        stats.bpm = (ibi > 0.0).then(|| 60_000.0 / ibi);
        stats.sdnn = Some(std_dev(rr_intervals));
        stats.hr_mad = Some(median_absolute_deviation(rr_intervals));

        let diffs = successive_differences(rr_intervals);
        if !diffs.is_empty() {
            let abs_diffs: Vec<f64> = diffs.iter().map(|d| d.abs()).collect();
            stats.sdsd = Some(std_dev(&abs_diffs));
            stats.rmssd = Some(mean(&diffs.iter().map(|d| d * d).collect::<Vec<_>>()).sqrt());
            stats.pnn20 = Some(percent_above(&abs_diffs, 20.0));
            stats.pnn50 = Some(percent_above(&abs_diffs, 50.0));

            let (sd1, sd2) = poincare(rr_intervals);
            stats.sd1 = Some(sd1);
            stats.sd2 = Some(sd2);
            stats.s = Some(PI * sd1 * sd2);
            stats.sd1_sd2 = (sd2 > MIN_DISPERSION).then(|| sd1 / sd2);
        }

        stats
    }

    /// Look a statistic up by name
    #[must_use]
    pub const fn get(&self, statistic: Statistic) -> Option<f64> {
        match statistic {
            Statistic::Bpm => self.bpm,
            Statistic::Ibi => self.ibi,
            Statistic::Sdnn => self.sdnn,
            Statistic::Sdsd => self.sdsd,
            Statistic::Rmssd => self.rmssd,
            Statistic::Pnn20 => self.pnn20,
            Statistic::Pnn50 => self.pnn50,
            Statistic::HrMad => self.hr_mad,
            Statistic::Sd1 => self.sd1,
            Statistic::Sd2 => self.sd2,
            Statistic::S => self.s,
            Statistic::Sd1Sd2 => self.sd1_sd2,
        }
    }

    /// Statistics that could not be computed
    #[must_use]
    pub fn missing(&self) -> Vec<Statistic> {
        Statistic::ALL
            .into_iter()
            .filter(|s| self.get(*s).is_none())
            .collect()
    }
}

/// Arithmetic mean, 0 for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation, 0 for an empty slice
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    (values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64).sqrt()
}

/// Median, 0 for an empty slice
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn median_absolute_deviation(values: &[f64]) -> f64 {
    let center = median(values);
    let deviations: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
    median(&deviations)
}

fn successive_differences(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

fn percent_above(abs_diffs: &[f64], limit: f64) -> f64 {
    let count = abs_diffs.iter().filter(|d| **d > limit).count();
    count as f64 / abs_diffs.len() as f64 * 100.0
}

/// (SD1, SD2) of the Poincaré plot of successive interval pairs
fn poincare(rr_intervals: &[f64]) -> (f64, f64) {
    let (minor, major): (Vec<f64>, Vec<f64>) = rr_intervals
        .windows(2)
        .map(|pair| {
            (
                (pair[0] - pair[1]) / SQRT_2,
                (pair[0] + pair[1]) / SQRT_2,
            )
        })
        .unzip();
    (std_dev(&minor), std_dev(&major))
}
