// SPDX-License-Identifier: LGPL-3.0-or-later

//! Core data types for the filter toolkit.
//!
//! The scalar type [`Real`] is chosen at build time: `f64` by default, or
//! `f32` when the `f32` feature is enabled. The choice applies uniformly to
//! coefficients, state variables and sample I/O — precision is never a
//! runtime parameter.

/// Scalar sample/coefficient type (single precision build).
#[cfg(feature = "f32")]
pub type Real = f32;

/// Scalar sample/coefficient type (double precision build).
#[cfg(not(feature = "f32"))]
pub type Real = f64;

/// π at the precision of [`Real`].
pub(crate) const PI: Real = core::f64::consts::PI as Real;

/// Maximum number of second-order sections in a filter cascade.
///
/// This bounds the low-pass/high-pass order to `2 * MAX_SECTIONS` and the
/// band-pass order to `MAX_SECTIONS` (the band-pass transformation doubles
/// the pole count).
pub const MAX_SECTIONS: usize = 8;

/// A single biquad (second-order section).
///
/// Coefficients follow the standard convention with `a0` normalized to 1:
///
/// ```text
///   H(z) = (b0 + b1*z^-1 + b2*z^-2) / (1 + a1*z^-1 + a2*z^-2)
/// ```
///
/// The two state variables `z1`, `z2` implement the Direct Form II
/// Transposed recurrence:
///
/// ```text
///   y  = b0*x + z1
///   z1 = b1*x - a1*y + z2
///   z2 = b2*x - a2*y
/// ```
///
/// Coefficients alone determine the section's frequency response; the state
/// is independent and mutated by every processing call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Biquad {
    pub b0: Real,
    pub b1: Real,
    pub b2: Real,
    pub a1: Real,
    pub a2: Real,
    /// First delay element.
    pub z1: Real,
    /// Second delay element.
    pub z2: Real,
}

impl Biquad {
    /// Build a section from its five coefficients, with cleared state.
    pub fn from_coeffs(b0: Real, b1: Real, b2: Real, a1: Real, a2: Real) -> Self {
        Self {
            b0,
            b1,
            b2,
            a1,
            a2,
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// Run one sample through the section (Direct Form II Transposed).
    #[inline]
    pub fn process_sample(&mut self, x: Real) -> Real {
        let y = self.b0 * x + self.z1;
        self.z1 = self.b1 * x - self.a1 * y + self.z2;
        self.z2 = self.b2 * x - self.a2 * y;
        y
    }

    /// Zero the delay memory. Coefficients are untouched.
    pub fn reset(&mut self) {
        self.z1 = 0.0;
        self.z2 = 0.0;
    }
}
