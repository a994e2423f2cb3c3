// ABOUTME: Criterion benchmarks for the HRV analysis pipeline
// ABOUTME: Measures rolling mean, peak fitting, and full analysis across recording lengths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the HRV analysis pipeline.
//!
//! Recordings are synthetic 75 BPM traces at 250 Hz, from one minute up to ten.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ecg_analysis::peaks::fit_peaks;
use ecg_analysis::signal::rolling_mean;
use ecg_analysis::synthetic::regular_ecg;
use ecg_analysis::{AnalysisConfig, EcgSignal, HrvAnalyzer, PeakFitAnalyzer};

const SAMPLE_RATE: f64 = 250.0;
const RECORDING_MINUTES: [usize; 3] = [1, 5, 10];

fn recording(minutes: usize) -> Vec<f64> {
    regular_ecg(75.0, minutes * 75, SAMPLE_RATE)
}

fn bench_rolling_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_mean");
    for minutes in RECORDING_MINUTES {
        let samples = recording(minutes);
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(minutes), &samples, |b, samples| {
            b.iter(|| rolling_mean(black_box(samples), 0.75, SAMPLE_RATE));
        });
    }
    group.finish();
}

fn bench_peak_fit(c: &mut Criterion) {
    let config = AnalysisConfig::default();
    let mut group = c.benchmark_group("peak_fit");
    for minutes in RECORDING_MINUTES {
        let samples = recording(minutes);
        let Ok(smoothed) = rolling_mean(&samples, config.window_seconds, SAMPLE_RATE) else {
            continue;
        };
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(minutes), &samples, |b, samples| {
            b.iter(|| fit_peaks(black_box(samples), &smoothed, SAMPLE_RATE, &config));
        });
    }
    group.finish();
}

fn bench_full_analysis(c: &mut Criterion) {
    let analyzer = PeakFitAnalyzer::default();
    let mut group = c.benchmark_group("full_analysis");
    group.sample_size(20);
    for minutes in RECORDING_MINUTES {
        let Ok(signal) = EcgSignal::new(recording(minutes), SAMPLE_RATE) else {
            continue;
        };
        group.throughput(Throughput::Elements(signal.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(minutes), &signal, |b, signal| {
            b.iter(|| analyzer.analyze(black_box(signal)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_rolling_mean,
    bench_peak_fit,
    bench_full_analysis
);
criterion_main!(benches);
