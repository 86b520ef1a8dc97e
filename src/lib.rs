// SPDX-License-Identifier: LGPL-3.0-or-later

//! # iirdsp
//!
//! Butterworth and notch IIR filter design with a fixed-capacity
//! second-order-section (SOS) runtime.
//!
//! A design operation turns parameters into an [`SosFilter`] — a cascade of
//! biquads with a compile-time section bound — which then processes samples
//! with no allocation and deterministic per-sample cost. Design and
//! execution are fully decoupled: any filter value is processed identically,
//! regardless of how it was built.
//!
//! - **Design**: [`design_lowpass`], [`design_highpass`], [`design_bandpass`]
//!   (Butterworth, via prototype poles → frequency transform → bilinear map
//!   → SOS pairing → gain normalization) and [`design_notch`] (closed-form).
//! - **Runtime**: [`SosFilter::process_sample`], [`SosFilter::process_block`],
//!   [`SosFilter::reset`], and offline zero-phase filtering via
//!   [`SosFilter::zero_phase_filter`].
//!
//! Precision is a build-time choice: [`Real`] is `f64` by default and `f32`
//! with the `f32` feature.
//!
//! ## Example
//!
//! ```
//! use iirdsp::{design_lowpass, Real};
//!
//! let mut filter = design_lowpass(4, 1000.0, 48000.0)?;
//! let input: Vec<Real> = (0..256).map(|i| (i as Real * 0.1).sin()).collect();
//! let mut output = vec![0.0; input.len()];
//! filter.process_block(&mut output, &input);
//! # Ok::<(), iirdsp::Error>(())
//! ```

pub mod error;
pub mod filters;
pub mod response;
pub mod sos;
pub mod types;

pub use error::Error;
pub use filters::{
    FilterDesign, design_bandpass, design_highpass, design_lowpass, design_notch,
};
pub use response::{magnitude_at, response_at};
pub use sos::SosFilter;
pub use types::{Biquad, MAX_SECTIONS, Real};
