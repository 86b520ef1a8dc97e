// SPDX-License-Identifier: LGPL-3.0-or-later

//! Frequency-response evaluation of an SOS cascade.
//!
//! Cascaded transfer functions multiply, so the response is accumulated as
//! a running complex product of per-section contributions. Each section
//! evaluates its numerator and denominator polynomials at `e^{-jw}` and
//! `e^{-j2w}` and divides.
//!
//! The gain normalizer uses this to measure the cascade at its reference
//! frequency; tests use it to verify passband/stopband magnitudes.

use num_complex::Complex;

use crate::sos::SosFilter;
use crate::types::Real;

/// Complex response `H(e^{jw})` at normalized angular frequency `w`
/// (radians per sample, `0..=π`).
pub fn response_at(filter: &SosFilter, w: Real) -> Complex<Real> {
    let z1 = Complex::from_polar(1.0, -w);
    let z2 = Complex::from_polar(1.0, -2.0 * w);

    let mut h = Complex::new(1.0, 0.0);
    for s in filter.sections() {
        let num = Complex::new(s.b0, 0.0) + z1 * s.b1 + z2 * s.b2;
        let den = Complex::new(1.0, 0.0) + z1 * s.a1 + z2 * s.a2;
        h *= num / den;
    }
    h
}

/// Magnitude response `|H(e^{jw})|` at normalized angular frequency `w`.
pub fn magnitude_at(filter: &SosFilter, w: Real) -> Real {
    response_at(filter, w).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Biquad, PI};
    use float_cmp::assert_approx_eq;

    #[test]
    fn identity_has_unit_response_everywhere() {
        let f = SosFilter::identity();
        for &w in &[0.0, 0.1, 1.0, PI] {
            assert_approx_eq!(Real, magnitude_at(&f, w), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn dc_response_is_coefficient_sum_ratio() {
        // At w = 0, z = 1 and H = (b0+b1+b2) / (1+a1+a2).
        let bq = Biquad::from_coeffs(0.3, 0.4, 0.1, -0.2, 0.05);
        let f = SosFilter::from_sections(&[bq]).unwrap();
        let expected = (0.3 + 0.4 + 0.1) / (1.0 - 0.2 + 0.05);
        let h = response_at(&f, 0.0);
        assert_approx_eq!(Real, h.re, expected, epsilon = 1e-12);
        assert_approx_eq!(Real, h.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn nyquist_response_is_alternating_sum_ratio() {
        // At w = π, z = -1 and H = (b0-b1+b2) / (1-a1+a2).
        let bq = Biquad::from_coeffs(0.3, 0.4, 0.1, -0.2, 0.05);
        let f = SosFilter::from_sections(&[bq]).unwrap();
        let expected = (0.3 - 0.4 + 0.1) / (1.0 + 0.2 + 0.05);
        assert_approx_eq!(Real, response_at(&f, PI).re, expected, epsilon = 1e-9);
    }

    #[test]
    fn cascade_response_multiplies() {
        let bq = Biquad::from_coeffs(0.5, 0.2, 0.1, -0.3, 0.05);
        let single = SosFilter::from_sections(&[bq]).unwrap();
        let double = SosFilter::from_sections(&[bq, bq]).unwrap();
        let w = 0.37;
        assert_approx_eq!(
            Real,
            magnitude_at(&double, w),
            magnitude_at(&single, w) * magnitude_at(&single, w),
            epsilon = 1e-9
        );
    }
}
