// SPDX-License-Identifier: LGPL-3.0-or-later

//! Filter design entry points.
//!
//! All four design paths converge on the same [`SosFilter`] output and the
//! same runtime — a designed filter carries no memory of how it was built.
//! The free functions are the primary interface; [`FilterDesign`] models
//! the parameters as a tagged value for callers that select the filter kind
//! at runtime.

pub mod butter;
pub mod notch;

pub use butter::{design_bandpass, design_highpass, design_lowpass};
pub use notch::design_notch;

use crate::error::Error;
use crate::sos::SosFilter;
use crate::types::Real;

/// Design parameters, tagged by filter kind.
///
/// Transient input to [`FilterDesign::design`]; none of it is retained in
/// the resulting filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterDesign {
    /// Butterworth low-pass.
    Lowpass {
        order: usize,
        cutoff_hz: Real,
        fs_hz: Real,
    },
    /// Butterworth high-pass.
    Highpass {
        order: usize,
        cutoff_hz: Real,
        fs_hz: Real,
    },
    /// Butterworth band-pass. The transformation doubles the pole count,
    /// so `order` is limited to [`crate::MAX_SECTIONS`].
    Bandpass {
        order: usize,
        f_low_hz: Real,
        f_high_hz: Real,
        fs_hz: Real,
    },
    /// Second-order notch.
    Notch { f0_hz: Real, q: Real, fs_hz: Real },
}

impl FilterDesign {
    /// Dispatch to the matching design operation.
    pub fn design(&self) -> Result<SosFilter, Error> {
        match *self {
            FilterDesign::Lowpass {
                order,
                cutoff_hz,
                fs_hz,
            } => design_lowpass(order, cutoff_hz, fs_hz),
            FilterDesign::Highpass {
                order,
                cutoff_hz,
                fs_hz,
            } => design_highpass(order, cutoff_hz, fs_hz),
            FilterDesign::Bandpass {
                order,
                f_low_hz,
                f_high_hz,
                fs_hz,
            } => design_bandpass(order, f_low_hz, f_high_hz, fs_hz),
            FilterDesign::Notch { f0_hz, q, fs_hz } => design_notch(f0_hz, q, fs_hz),
        }
    }
}
