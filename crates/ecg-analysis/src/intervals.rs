// ABOUTME: RR interval extraction from detected peaks with outlier peak rejection
// ABOUTME: Only intervals bounded by two accepted peaks feed the HRV statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::measures::mean;
use crate::peaks::peak_intervals_ms;

/// Tolerance band as a fraction of the mean interval
const RELATIVE_TOLERANCE: f64 = 0.3;
/// Minimum half-width of the tolerance band in milliseconds
const MIN_TOLERANCE_MS: f64 = 300.0;

/// Peaks, the intervals between them, and which peaks survived rejection
#[derive(Debug, Clone, PartialEq)]
pub struct RrIntervals {
    peaks: Vec<usize>,
    accepted: Vec<bool>,
    intervals_ms: Vec<f64>,
}

impl RrIntervals {
    /// Build intervals from peak sample indices; every peak starts accepted
    #[must_use]
    pub fn from_peaks(peaks: Vec<usize>, sample_rate: f64) -> Self {
        let intervals_ms = peak_intervals_ms(&peaks, sample_rate);
        let accepted = vec![true; peaks.len()];
        Self {
            peaks,
            accepted,
            intervals_ms,
        }
    }

    /// Reject every peak whose preceding interval falls outside the tolerance band
    ///
    /// The band is `mean ± max(0.3 * mean, 300 ms)`; values on the boundary are
    /// rejected. Returns the number of peaks rejected by this call.
    pub fn reject_outliers(&mut self) -> usize {
        if self.intervals_ms.is_empty() {
            return 0;
        }
        let center = mean(&self.intervals_ms);
        let tolerance = (center * RELATIVE_TOLERANCE).max(MIN_TOLERANCE_MS);
        let (lower, upper) = (center - tolerance, center + tolerance);

        let mut rejected = 0;
        for (index, &interval) in self.intervals_ms.iter().enumerate() {
            if (interval <= lower || interval >= upper) && self.accepted[index + 1] {
                self.accepted[index + 1] = false;
                rejected += 1;
            }
        }
        rejected
    }

    /// All detected peaks
    #[must_use]
    pub fn peaks(&self) -> &[usize] {
        &self.peaks
    }

    /// Peaks marked as outliers
    #[must_use]
    pub fn rejected_peaks(&self) -> Vec<usize> {
        self.peaks
            .iter()
            .zip(&self.accepted)
            .filter(|(_, accepted)| !**accepted)
            .map(|(peak, _)| *peak)
            .collect()
    }

    /// Intervals whose two bounding peaks are both accepted
    #[must_use]
    pub fn accepted_intervals(&self) -> Vec<f64> {
        self.intervals_ms
            .iter()
            .enumerate()
            .filter(|(index, _)| self.accepted[*index] && self.accepted[index + 1])
            .map(|(_, interval)| *interval)
            .collect()
    }
}
