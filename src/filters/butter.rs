// SPDX-License-Identifier: LGPL-3.0-or-later

//! Butterworth filter design via the classical digital IIR pipeline:
//!
//! 1. Analog Butterworth prototype poles (s-plane, unit cutoff)
//! 2. Frequency transformation (scaling, pole inversion, or the band-pass
//!    quadratic substitution)
//! 3. Bilinear transform with pre-warped cutoff frequencies
//! 4. Pole/zero pairing into second-order sections
//! 5. Gain normalization at a per-kind reference frequency
//!
//! Zeros are placed by policy rather than derived from the prototype: all at
//! `z = -1` for low-pass, all at `z = +1` for high-pass, and split evenly
//! between the two for band-pass. The cascade is then rescaled so that its
//! magnitude response is exactly 1 at DC (low-pass), Nyquist (high-pass), or
//! the geometric-mean center frequency (band-pass).
//!
//! Design is pure: identical parameters produce bit-identical coefficients,
//! and every parameter error is detected before any section is built.

use num_complex::Complex;

use crate::error::Error;
use crate::response::response_at;
use crate::sos::SosFilter;
use crate::types::{Biquad, MAX_SECTIONS, PI, Real};

/// Maximum analog pole count, which bounds the low-pass/high-pass order.
/// Band-pass doubles its pole count, so its order is bounded by half this.
const MAX_ORDER: usize = 2 * MAX_SECTIONS;

/// Gains at or below this magnitude are considered degenerate and left
/// unnormalized.
const GAIN_EPSILON: Real = 1e-8;

type Pole = Complex<Real>;

/// Left-half-plane poles of the unit-cutoff, unit-gain analog Butterworth
/// prototype of the given order.
///
/// Pole `k` sits at `exp(j*π*(2k + N + 1)/(2N))` for `k = 0..N-1`; exactly
/// the N stable poles, spread symmetrically around the negative real axis.
/// Entries `k` and `N-1-k` are conjugates, so the first `⌈N/2⌉` poles carry
/// non-negative imaginary parts and represent every conjugate pair once
/// (plus the lone real pole at -1 when N is odd). This step cannot fail for
/// a valid order.
fn butter_prototype(order: usize, poles: &mut [Pole; MAX_ORDER]) {
    for k in 0..order {
        let theta = PI * (2 * k + order + 1) as Real / (2 * order) as Real;
        poles[k] = Complex::from_polar(1.0, theta);
    }
}

/// Pre-warped angular cutoff for the bilinear transform.
///
/// The bilinear map compresses the analog frequency axis; warping the
/// design frequency by `2*fs*tan(π*fc/fs)` makes the digital filter hit its
/// target at exactly `fc`.
fn prewarp(fc_hz: Real, fs_hz: Real) -> Real {
    2.0 * fs_hz * (PI * fc_hz / fs_hz).tan()
}

/// Map an analog pole to the z-plane: `pz = (1 + p/(2fs)) / (1 - p/(2fs))`.
fn bilinear(p: Pole, fs_hz: Real) -> Pole {
    let half = p / (2.0 * fs_hz);
    (Complex::new(1.0, 0.0) + half) / (Complex::new(1.0, 0.0) - half)
}

/// Build one section from a digital pole pair and a fixed numerator.
///
/// The denominator expands `(z - p1)(z - p2)` into monic form, so
/// `a1 = -(p1 + p2)` and `a2 = p1*p2`. The pair is either a conjugate pair
/// or two real poles; the imaginary parts cancel and only the real parts
/// are kept.
fn section(num: (Real, Real, Real), p1: Pole, p2: Pole) -> Biquad {
    let a1 = -(p1 + p2).re;
    let a2 = (p1 * p2).re;
    Biquad::from_coeffs(num.0, num.1, num.2, a1, a2)
}

/// Rescale the cascade so its magnitude response at `w_ref` is exactly 1.
///
/// Only the first section's numerator is scaled; cascaded responses
/// multiply, so one section carries the whole correction. Near-zero gain is
/// the documented degenerate case and is deliberately left alone.
fn normalize_gain(filter: &mut SosFilter, w_ref: Real) {
    let gain = response_at(filter, w_ref).norm();
    if gain <= GAIN_EPSILON {
        return;
    }
    let first = &mut filter.sections_mut()[0];
    first.b0 /= gain;
    first.b1 /= gain;
    first.b2 /= gain;
}

fn check_cutoff(cutoff_hz: Real, fs_hz: Real) -> Result<(), Error> {
    if !(fs_hz > 0.0 && cutoff_hz > 0.0 && cutoff_hz < 0.5 * fs_hz) {
        return Err(Error::InvalidCutoff);
    }
    Ok(())
}

/// Design a Butterworth low-pass filter.
///
/// `order` may be 1 to `2 * MAX_SECTIONS`; `cutoff_hz` must lie strictly
/// between 0 and Nyquist. The prototype poles are scaled by the pre-warped
/// cutoff, mapped through the bilinear transform, and paired with double
/// zeros at `z = -1`; the cascade is normalized to unity gain at DC.
pub fn design_lowpass(order: usize, cutoff_hz: Real, fs_hz: Real) -> Result<SosFilter, Error> {
    if order == 0 || order > MAX_ORDER {
        return Err(Error::InvalidOrder);
    }
    check_cutoff(cutoff_hz, fs_hz)?;

    let warp = prewarp(cutoff_hz, fs_hz);
    let mut poles = [Complex::new(0.0, 0.0); MAX_ORDER];
    butter_prototype(order, &mut poles);

    let mut filter = SosFilter::identity();
    for k in 0..order.div_ceil(2) {
        let pz = bilinear(poles[k] * warp, fs_hz);
        filter.push(section((1.0, 2.0, 1.0), pz, pz.conj()));
    }

    normalize_gain(&mut filter, 0.0);
    Ok(filter)
}

/// Design a Butterworth high-pass filter.
///
/// The low-pass prototype poles are inverted through the pre-warped cutoff
/// (`p -> wc / p`), mapped to the z-plane, and paired with double zeros at
/// `z = +1`; the cascade is normalized to unity gain at Nyquist.
pub fn design_highpass(order: usize, cutoff_hz: Real, fs_hz: Real) -> Result<SosFilter, Error> {
    if order == 0 || order > MAX_ORDER {
        return Err(Error::InvalidOrder);
    }
    check_cutoff(cutoff_hz, fs_hz)?;

    let warp = prewarp(cutoff_hz, fs_hz);
    let mut poles = [Complex::new(0.0, 0.0); MAX_ORDER];
    butter_prototype(order, &mut poles);

    let mut filter = SosFilter::identity();
    for k in 0..order.div_ceil(2) {
        let hp = Complex::new(warp, 0.0) / poles[k];
        let pz = bilinear(hp, fs_hz);
        filter.push(section((1.0, -2.0, 1.0), pz, pz.conj()));
    }

    normalize_gain(&mut filter, PI);
    Ok(filter)
}

/// Design a Butterworth band-pass filter.
///
/// Each prototype pole `p` is substituted into the band-pass quadratic
/// `s² - p*BW*s + w0² = 0` with `w0 = sqrt(wc1*wc2)` and `BW = wc2 - wc1`
/// (both pre-warped), yielding two analog poles per prototype pole — the
/// filter ends up with `2*order` poles, so `order` is bounded by
/// [`MAX_SECTIONS`]. The quadratic is solved in complex arithmetic, which
/// covers both discriminant branches: a real prototype pole with a wide
/// band produces two real roots, anything else a conjugate-style pair.
/// Zeros are split evenly between `z = -1` and `z = +1`, and the cascade is
/// normalized to unity gain at the geometric-mean center frequency.
pub fn design_bandpass(
    order: usize,
    f_low_hz: Real,
    f_high_hz: Real,
    fs_hz: Real,
) -> Result<SosFilter, Error> {
    // 2*order poles must fit in MAX_SECTIONS sections; reject before any
    // pole computation.
    if order == 0 || 2 * order > MAX_ORDER {
        return Err(Error::InvalidOrder);
    }
    if !(fs_hz > 0.0) {
        return Err(Error::InvalidCutoff);
    }
    if !(f_low_hz > 0.0 && f_low_hz < f_high_hz && f_high_hz < 0.5 * fs_hz) {
        return Err(Error::InvalidBand);
    }

    let wc1 = prewarp(f_low_hz, fs_hz);
    let wc2 = prewarp(f_high_hz, fs_hz);
    let w0_sq = wc1 * wc2;
    let bw = wc2 - wc1;

    let mut poles = [Complex::new(0.0, 0.0); MAX_ORDER];
    butter_prototype(order, &mut poles);

    let num = (1.0, 0.0, -1.0);
    let mut filter = SosFilter::identity();
    for k in 0..order.div_ceil(2) {
        let pbw = poles[k] * bw;
        let sqrt_disc = (pbw * pbw - Complex::new(4.0 * w0_sq, 0.0)).sqrt();
        let s1 = (pbw + sqrt_disc) * 0.5;
        let s2 = (pbw - sqrt_disc) * 0.5;

        if order % 2 == 1 && k == order / 2 {
            // The lone real prototype pole: its two roots are already a
            // real pair or a conjugate pair and form a single section.
            filter.push(section(num, bilinear(s1, fs_hz), bilinear(s2, fs_hz)));
        } else {
            let pz1 = bilinear(s1, fs_hz);
            let pz2 = bilinear(s2, fs_hz);
            filter.push(section(num, pz1, pz1.conj()));
            filter.push(section(num, pz2, pz2.conj()));
        }
    }

    let f_center = (f_low_hz * f_high_hz).sqrt();
    normalize_gain(&mut filter, 2.0 * PI * f_center / fs_hz);
    Ok(filter)
}
