// SPDX-License-Identifier: LGPL-3.0-or-later
//
// End-to-end scenarios: design a filter, run realistic signals through the
// runtime, and check the output where it matters (finiteness, band
// rejection, zero-phase behavior). Noise inputs are seeded so every run is
// reproducible.

use iirdsp::{
    Real, design_bandpass, design_lowpass, design_notch, magnitude_at,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const PI: Real = std::f64::consts::PI as Real;

fn sine(freq: Real, fs: Real, n: usize) -> Vec<Real> {
    (0..n)
        .map(|i| (2.0 * PI * freq * i as Real / fs).sin())
        .collect()
}

/// Single-bin amplitude estimate by correlation against a complex
/// exponential over the central part of the buffer (edges carry filter
/// transients).
fn amplitude_at(signal: &[Real], freq: Real, fs: Real) -> Real {
    let n = signal.len();
    let margin = n / 10;
    let window = &signal[margin..n - margin];
    let mut re = 0.0;
    let mut im = 0.0;
    for (i, &x) in window.iter().enumerate() {
        let phase = 2.0 * PI * freq * i as Real / fs;
        re += x * phase.cos();
        im += x * phase.sin();
    }
    let scale = 2.0 / window.len() as Real;
    (re * re + im * im).sqrt() * scale
}

#[test]
fn lowpass_drift_filter_on_long_signal() {
    // order 4 at 0.5 Hz / fs 500: two sections, and 2500 samples of a
    // noisy multi-tone signal must stay finite and bounded throughout.
    let fs = 500.0;
    let mut filter = design_lowpass(4, 0.5, fs).unwrap();
    assert_eq!(filter.num_sections(), 2);

    let mut rng = ChaCha8Rng::seed_from_u64(0x1EAF);
    let n = 2500;
    let src: Vec<Real> = (0..n)
        .map(|i| {
            let t = i as Real / fs;
            (2.0 * PI * 0.2 * t).sin()
                + 0.5 * (2.0 * PI * 17.0 * t).sin()
                + 0.1 * rng.gen_range(-1.0..1.0) as Real
        })
        .collect();

    let mut out = vec![0.0; n];
    filter.process_block(&mut out, &src);

    for (i, &y) in out.iter().enumerate() {
        assert!(y.is_finite(), "non-finite output at sample {i}");
        assert!(y.abs() < 10.0, "unbounded output {y} at sample {i}");
    }
}

#[test]
fn notch_removes_mains_interference() {
    // 20 Hz signal buried under 50 Hz interference; zero-phase notching
    // must strip the mains tone while leaving the signal band intact.
    let fs = 500.0;
    let n = 2500;
    let signal = sine(20.0, fs, n);
    let mains = sine(50.0, fs, n);
    let src: Vec<Real> = signal.iter().zip(&mains).map(|(&s, &m)| s + m).collect();

    let mut notch = design_notch(50.0, 30.0, fs).unwrap();
    let out = notch.zero_phase_filter(&src).unwrap();

    let in_50 = amplitude_at(&src, 50.0, fs);
    let out_50 = amplitude_at(&out, 50.0, fs);
    let out_20 = amplitude_at(&out, 20.0, fs);

    assert!(out_50 < 0.05 * in_50, "mains residue {out_50} (was {in_50})");
    assert!(out_20 > 0.9, "signal band damaged: amplitude {out_20}");
}

#[test]
fn bandpass_impulse_response_via_zero_phase() {
    // Physiological-band filter (0.5-40 Hz at fs 500): the zero-phase
    // impulse response must be non-trivial.
    let mut bp = design_bandpass(4, 0.5, 40.0, 500.0).unwrap();

    let mut impulse = vec![0.0; 100];
    impulse[0] = 1.0;
    let response = bp.zero_phase_filter(&impulse).unwrap();

    let max = response.iter().fold(0.0 as Real, |m, &y| m.max(y.abs()));
    assert!(max > 0.0, "impulse response is identically zero");
    assert!(response.iter().all(|y| y.is_finite()));
}

#[test]
fn streaming_noise_stays_bounded() {
    // Push seeded white noise through every design kind in small blocks,
    // as an interrupt-driven consumer would, and verify bounded output.
    let fs = 48000.0;
    let mut filters = vec![
        design_lowpass(8, 2000.0, fs).unwrap(),
        design_bandpass(3, 300.0, 3000.0, fs).unwrap(),
        design_notch(1000.0, 10.0, fs).unwrap(),
    ];

    let mut rng = ChaCha8Rng::seed_from_u64(0xB0B);
    let noise: Vec<Real> = (0..8192).map(|_| rng.gen_range(-1.0..1.0) as Real).collect();

    for filter in &mut filters {
        let mut out = vec![0.0; noise.len()];
        for (dst, src) in out.chunks_mut(64).zip(noise.chunks(64)) {
            filter.process_block(dst, src);
        }
        assert!(out.iter().all(|y| y.is_finite() && y.abs() < 100.0));
    }
}

#[test]
fn design_is_pure_across_processing() {
    // Processing mutates state but never coefficients: a reset filter
    // behaves exactly like a freshly designed one.
    let fs = 48000.0;
    let mut used = design_lowpass(6, 4000.0, fs).unwrap();
    let mut fresh = design_lowpass(6, 4000.0, fs).unwrap();

    let noise = sine(700.0, fs, 512);
    let mut sink = vec![0.0; 512];
    used.process_block(&mut sink, &noise);
    used.reset();

    let mut out_used = vec![0.0; 512];
    let mut out_fresh = vec![0.0; 512];
    used.process_block(&mut out_used, &noise);
    fresh.process_block(&mut out_fresh, &noise);
    assert_eq!(out_used, out_fresh);

    // And the response helper agrees on both values.
    let w = 2.0 * PI * 700.0 / fs;
    assert_eq!(magnitude_at(&used, w), magnitude_at(&fresh, w));
}
