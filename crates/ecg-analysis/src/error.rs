// ABOUTME: Error type for the HRV analysis pipeline
// ABOUTME: Separates caller-fixable input errors from signals that cannot be analyzed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ecg_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised while validating or analyzing an ECG signal
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// No samples were supplied
    #[error("ecg_values must contain at least one sample")]
    EmptySignal,

    /// Sample rate is zero, negative, or not finite
    #[error("sample_rate must be a positive number, got {0}")]
    InvalidSampleRate(f64),

    /// A sample is NaN or infinite
    #[error("ecg_values[{index}] is not a finite number")]
    NonFiniteSample {
        /// Position of the offending sample
        index: usize,
    },

    /// More samples than the configured limit
    #[error("ecg_values has {count} samples, the limit is {max}")]
    TooManySamples {
        /// Number of samples received
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// Signal does not cover one rolling-mean window
    #[error("signal of {samples} samples is shorter than the {window}-sample analysis window")]
    SignalTooShort {
        /// Number of samples received
        samples: usize,
        /// Rolling window length in samples
        window: usize,
    },

    /// No threshold lift produced a plausible heart rate
    #[error("could not determine a best fit for the given signal, please check the source signal")]
    NoValidFit,

    /// Outlier rejection left nothing to measure
    #[error("no usable beat intervals remained after outlier rejection")]
    InsufficientBeats,
}

impl AnalysisError {
    /// Whether the caller can fix this by sending a different request
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, Self::NoValidFit | Self::InsufficientBeats)
    }

    /// Error code reported to API clients
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptySignal | Self::NonFiniteSample { .. } | Self::SignalTooShort { .. } => {
                ErrorCode::InvalidInput
            }
            Self::InvalidSampleRate(_) | Self::TooManySamples { .. } => ErrorCode::ValueOutOfRange,
            Self::NoValidFit | Self::InsufficientBeats => ErrorCode::AnalysisFailed,
        }
    }
}

impl From<AnalysisError> for AppError {
    fn from(error: AnalysisError) -> Self {
        Self::new(error.error_code(), error.to_string())
    }
}
