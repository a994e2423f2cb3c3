// ABOUTME: Threshold-based AFib heuristic and rhythm status classification
// ABOUTME: Absent statistics never satisfy a threshold, so missing data cannot trigger a label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rhythm Classification
//!
//! Labels are checked in precedence order: AFib first, then low variability, then
//! irregular rhythm, falling back to normal. AFib wins even when the same RMSSD or SDNN
//! would also qualify as irregular.
//!
//! This is a screening heuristic over four scalar statistics. It is not a diagnosis.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::RhythmThresholds;
use crate::measures::HrvStatistics;

/// Categorical rhythm label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RhythmStatus {
    /// All four AFib thresholds exceeded
    #[serde(rename = "Possible AFib")]
    PossibleAfib,
    /// Both RMSSD and SDNN unusually low
    #[serde(rename = "Low Variability")]
    LowVariability,
    /// RMSSD or SDNN unusually high
    #[serde(rename = "Irregular Rhythm")]
    IrregularRhythm,
    /// None of the above
    #[serde(rename = "Normal Rhythm")]
    NormalRhythm,
}

impl RhythmStatus {
    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PossibleAfib => "Possible AFib",
            Self::LowVariability => "Low Variability",
            Self::IrregularRhythm => "Irregular Rhythm",
            Self::NormalRhythm => "Normal Rhythm",
        }
    }
}

impl fmt::Display for RhythmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AFib flag and rhythm label for one analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhythmAssessment {
    /// AFib heuristic result
    pub afib: bool,
    /// Rhythm label
    pub status: RhythmStatus,
}

impl RhythmAssessment {
    /// Run the AFib check and the classifier
    #[must_use]
    pub fn assess(stats: &HrvStatistics, thresholds: &RhythmThresholds) -> Self {
        let afib = detect_afib(stats, thresholds);
        Self {
            afib,
            status: classify(stats, afib, thresholds),
        }
    }
}

fn above(value: Option<f64>, limit: f64) -> bool {
    value.is_some_and(|v| v > limit)
}

fn below(value: Option<f64>, limit: f64) -> bool {
    value.is_some_and(|v| v < limit)
}

/// True iff BPM, RMSSD, SDNN and pNN50 all strictly exceed their AFib thresholds
#[must_use]
pub fn detect_afib(stats: &HrvStatistics, thresholds: &RhythmThresholds) -> bool {
    above(stats.bpm, thresholds.afib_bpm)
        && above(stats.rmssd, thresholds.afib_rmssd)
        && above(stats.sdnn, thresholds.afib_sdnn)
        && above(stats.pnn50, thresholds.afib_pnn50)
}

/// Rhythm label given the statistics and a precomputed AFib flag
#[must_use]
pub fn classify(stats: &HrvStatistics, afib: bool, thresholds: &RhythmThresholds) -> RhythmStatus {
    if afib {
        RhythmStatus::PossibleAfib
    } else if below(stats.rmssd, thresholds.low_rmssd) && below(stats.sdnn, thresholds.low_sdnn) {
        RhythmStatus::LowVariability
    } else if above(stats.rmssd, thresholds.irregular_rmssd)
        || above(stats.sdnn, thresholds.irregular_sdnn)
    {
        RhythmStatus::IrregularRhythm
    } else {
        RhythmStatus::NormalRhythm
    }
}
