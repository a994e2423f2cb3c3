// ABOUTME: Synthetic ECG generators with R-waves at exact, caller-chosen RR intervals
// ABOUTME: Used by unit tests, integration tests, and benchmarks; never by production code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Silence before the first and after the last R-wave
const LEAD_IN_MS: f64 = 400.0;
/// R-wave half-width in samples (Gaussian sigma)
const R_WAVE_SIGMA: f64 = 3.0;
/// R-wave amplitude
const R_WAVE_AMPLITUDE: f64 = 1.0;

/// Sample positions of the R-waves produced by [`synthetic_ecg`]
#[must_use]
pub fn r_wave_positions(rr_ms: &[f64], sample_rate: f64) -> Vec<usize> {
    let to_samples = |ms: f64| (ms * sample_rate / 1000.0).round() as usize;

    let mut elapsed = LEAD_IN_MS;
    let mut positions = vec![to_samples(elapsed)];
    for interval in rr_ms {
        elapsed += interval;
        positions.push(to_samples(elapsed));
    }
    positions
}

/// Flat baseline with a Gaussian R-wave before and after each interval in `rr_ms`
///
/// With intervals that are whole multiples of the sample period, the detected peaks
/// land exactly on the generated positions.
#[must_use]
pub fn synthetic_ecg(rr_ms: &[f64], sample_rate: f64) -> Vec<f64> {
    let positions = r_wave_positions(rr_ms, sample_rate);
    let tail = (LEAD_IN_MS * sample_rate / 1000.0).round() as usize;
    let len = positions.last().map_or(0, |last| last + tail + 1);
    let reach = (R_WAVE_SIGMA * 5.0) as usize;

    let mut samples = vec![0.0; len];
    for &center in &positions {
        let start = center.saturating_sub(reach);
        let end = (center + reach).min(len - 1);
        for (index, sample) in samples.iter_mut().enumerate().take(end + 1).skip(start) {
            let distance = index as f64 - center as f64;
            *sample += R_WAVE_AMPLITUDE
                * (-(distance * distance) / (2.0 * R_WAVE_SIGMA * R_WAVE_SIGMA)).exp();
        }
    }
    samples
}

/// `beats` R-waves at a constant heart rate
#[must_use]
pub fn regular_ecg(bpm: f64, beats: usize, sample_rate: f64) -> Vec<f64> {
    let interval = 60_000.0 / bpm;
    synthetic_ecg(&vec![interval; beats.saturating_sub(1)], sample_rate)
}

/// R-waves whose intervals alternate between `short_ms` and `long_ms`
#[must_use]
pub fn alternating_ecg(short_ms: f64, long_ms: f64, intervals: usize, sample_rate: f64) -> Vec<f64> {
    let rr: Vec<f64> = (0..intervals)
        .map(|i| if i % 2 == 0 { short_ms } else { long_ms })
        .collect();
    synthetic_ecg(&rr, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_intervals() {
        assert_eq!(r_wave_positions(&[800.0, 800.0], 250.0), vec![100, 300, 500]);
    }

    #[test]
    fn test_r_wave_peaks_at_its_center() {
        let samples = synthetic_ecg(&[800.0], 250.0);

        assert_eq!(samples.len(), 401);
        assert!((samples[100] - 1.0).abs() < 1e-12);
        assert!(samples[99] < samples[100]);
        assert!(samples[101] < samples[100]);
        assert!(samples[200].abs() < f64::EPSILON);
    }

    #[test]
    fn test_regular_ecg_beat_count() {
        let samples = regular_ecg(60.0, 5, 100.0);
        // 40 samples lead-in, 4 intervals of 100, 40 samples tail
        assert_eq!(samples.len(), 40 + 400 + 40 + 1);
    }
}
