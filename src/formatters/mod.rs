// ABOUTME: Display formatting for HRV metrics in API responses
// ABOUTME: Rounds to a fixed precision, keeps at least one decimal, and appends the unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric Formatting
//!
//! Values are rounded to the field precision and then printed in their shortest
//! form that still carries a fractional digit, so `75` renders as `75.0` and
//! `833.3333` at precision 2 renders as `833.33`. Trailing zeros beyond the first
//! decimal are not padded: `72.10` renders as `72.1`.
//!
//! ## Usage
//!
//! ```rust
//! use ecg_hrv_api::formatters::{format_metric, MetricUnit};
//!
//! assert_eq!(format_metric(Some(75.0), 2, MetricUnit::Bpm), "75.0 BPM");
//! assert_eq!(format_metric(Some(12.345), 1, MetricUnit::Percent), "12.3%");
//! assert_eq!(format_metric(None, 2, MetricUnit::Milliseconds), "N/A");
//! ```

use std::fmt;

use crate::constants::messages;

/// Precision for BPM, IBI, RMSSD and SDNN
pub const METRIC_PRECISION: usize = 2;
/// Precision for the top-level pNN20 and pNN50 fields
pub const PNN_PRECISION: usize = 1;
/// Precision for the pNN values inside the summary string
pub const SUMMARY_PNN_PRECISION: usize = 2;

/// Unit suffix appended to a formatted value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricUnit {
    /// Beats per minute, `" BPM"`
    Bpm,
    /// Milliseconds, `" ms"`
    Milliseconds,
    /// Percentage, `"%"` with no space
    Percent,
}

impl MetricUnit {
    /// Suffix including any leading space
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Bpm => " BPM",
            Self::Milliseconds => " ms",
            Self::Percent => "%",
        }
    }
}

impl fmt::Display for MetricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Round half-to-even on the exact decimal expansion of `value`
#[must_use]
pub fn round_to(value: f64, precision: usize) -> f64 {
    format!("{value:.precision$}").parse().unwrap_or(value)
}

/// Rounded value in shortest form with at least one decimal digit
#[must_use]
pub fn format_decimal(value: f64, precision: usize) -> String {
    let rounded = round_to(value, precision);
    let text = rounded.to_string();
    if rounded.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Format an optional statistic with its unit, or `N/A` when absent or not finite
#[must_use]
pub fn format_metric(value: Option<f64>, precision: usize, unit: MetricUnit) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}{unit}", format_decimal(v, precision)),
        _ => messages::NOT_AVAILABLE.to_owned(),
    }
}
