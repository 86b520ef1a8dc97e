// SPDX-License-Identifier: LGPL-3.0-or-later

//! Closed-form second-order notch filter.
//!
//! Unlike the Butterworth designs, the notch skips the prototype /
//! transform / bilinear pipeline entirely: the Audio EQ Cookbook gives its
//! coefficients directly from the center frequency and quality factor. The
//! zeros land on the unit circle at the notch frequency, so the response
//! there is (numerically) zero, while the poles just inside the circle pull
//! the response back to unity away from the notch. Higher Q narrows the
//! rejected band.

use crate::error::Error;
use crate::sos::SosFilter;
use crate::types::{Biquad, PI, Real};

/// Design a second-order notch filter centered at `f0_hz`.
///
/// With `w0 = 2π*f0/fs`, `α = sin(w0)/(2Q)` and `c = cos(w0)`:
///
/// ```text
///   b = (1, -2c, 1)        a = (1 + α, -2c, 1 - α)
/// ```
///
/// All five coefficients are stored divided by `a0 = 1 + α`, yielding a
/// single section. Rejects `Q <= 0` ([`Error::InvalidQ`]) and center
/// frequencies outside `(0, fs/2)` or a non-positive sampling rate
/// ([`Error::InvalidCutoff`]).
pub fn design_notch(f0_hz: Real, q: Real, fs_hz: Real) -> Result<SosFilter, Error> {
    if !(q > 0.0) {
        return Err(Error::InvalidQ);
    }
    if !(fs_hz > 0.0 && f0_hz > 0.0 && f0_hz < 0.5 * fs_hz) {
        return Err(Error::InvalidCutoff);
    }

    let w0 = 2.0 * PI * f0_hz / fs_hz;
    let alpha = w0.sin() / (2.0 * q);
    let cos_w0 = w0.cos();
    let a0 = 1.0 + alpha;

    let mut filter = SosFilter::identity();
    filter.push(Biquad::from_coeffs(
        1.0 / a0,
        -2.0 * cos_w0 / a0,
        1.0 / a0,
        -2.0 * cos_w0 / a0,
        (1.0 - alpha) / a0,
    ));
    Ok(filter)
}
