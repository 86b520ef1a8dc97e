// SPDX-License-Identifier: LGPL-3.0-or-later

//! Second-order-section cascade runtime.
//!
//! [`SosFilter`] is a fixed-capacity cascade of biquads: an inline array of
//! [`MAX_SECTIONS`] sections plus an in-use count. Processing a sample runs
//! it through every active section in order, each consuming the previous
//! section's output. The sample and block paths perform no allocation and
//! have deterministic cost proportional to the section count, which makes
//! them suitable for interrupt-service and hard-real-time contexts.
//!
//! Zero-phase filtering ([`SosFilter::zero_phase_filter`]) is the single
//! exception: it is an offline, whole-buffer operation that allocates one
//! temporary buffer sized to the input.
//!
//! A filter value must not be driven by more than one thread at a time —
//! state updates are not atomic and cascade correctness depends on strict
//! sample ordering. Distinct filter values are fully independent.

use crate::error::Error;
use crate::types::{Biquad, MAX_SECTIONS, Real};

/// IIR filter as a fixed-capacity cascade of second-order sections.
///
/// A filter with zero sections is the identity (pass-through) filter.
/// Coefficients are fixed at design time; only the per-section delay state
/// changes during processing. The value is `Copy`-free but cheap to clone,
/// owns no heap memory, and needs no explicit cleanup.
#[derive(Debug, Clone)]
pub struct SosFilter {
    pub(crate) sections: [Biquad; MAX_SECTIONS],
    pub(crate) num_sections: usize,
}

impl Default for SosFilter {
    fn default() -> Self {
        Self::identity()
    }
}

impl SosFilter {
    /// The identity filter: zero sections, passes samples through unchanged.
    pub fn identity() -> Self {
        Self {
            sections: [Biquad::default(); MAX_SECTIONS],
            num_sections: 0,
        }
    }

    /// Build a cascade from explicit sections.
    ///
    /// Fails with [`Error::InvalidOrder`] if more than [`MAX_SECTIONS`]
    /// sections are supplied. However a filter is constructed, it is
    /// processed identically.
    pub fn from_sections(sections: &[Biquad]) -> Result<Self, Error> {
        if sections.len() > MAX_SECTIONS {
            return Err(Error::InvalidOrder);
        }
        let mut f = Self::identity();
        for &s in sections {
            f.push(s);
        }
        Ok(f)
    }

    /// Append a section to the cascade. Capacity is checked by the callers'
    /// order bounds before any section is built.
    pub(crate) fn push(&mut self, section: Biquad) {
        debug_assert!(self.num_sections < MAX_SECTIONS);
        self.sections[self.num_sections] = section;
        self.num_sections += 1;
    }

    /// Number of sections in use.
    pub fn num_sections(&self) -> usize {
        self.num_sections
    }

    /// The active sections, in cascade order.
    pub fn sections(&self) -> &[Biquad] {
        &self.sections[..self.num_sections]
    }

    pub(crate) fn sections_mut(&mut self) -> &mut [Biquad] {
        &mut self.sections[..self.num_sections]
    }

    /// Zero every section's delay state. Coefficients are untouched.
    pub fn reset(&mut self) {
        for s in &mut self.sections[..self.num_sections] {
            s.reset();
        }
    }

    /// Run a single sample through the cascade.
    #[inline]
    pub fn process_sample(&mut self, x: Real) -> Real {
        let mut y = x;
        for s in &mut self.sections[..self.num_sections] {
            y = s.process_sample(y);
        }
        y
    }

    /// Filter `src` into `dst`, up to the shorter of the two lengths.
    ///
    /// State carries over between calls, so a long signal may be streamed
    /// through in arbitrary block sizes.
    pub fn process_block(&mut self, dst: &mut [Real], src: &[Real]) {
        for (out, &inp) in dst.iter_mut().zip(src.iter()) {
            *out = self.process_sample(inp);
        }
    }

    /// Filter a buffer in place.
    pub fn process_inplace(&mut self, buf: &mut [Real]) {
        for x in buf.iter_mut() {
            *x = self.process_sample(*x);
        }
    }

    /// Zero-phase (forward-backward) filtering.
    ///
    /// The signal is filtered forward, reversed, filtered forward again and
    /// reversed back, which cancels the cascade's net phase distortion. The
    /// filter state is reset before each pass; on return the state reflects
    /// the backward pass and should be reset before any streaming use.
    ///
    /// This is an offline operation: it needs the whole signal up front and
    /// one temporary buffer of the same length. The allocation is the only
    /// failure mode and is reported as [`Error::AllocationFailure`]; callers
    /// under memory pressure can reduce the buffer size or defer.
    pub fn zero_phase_filter(&mut self, src: &[Real]) -> Result<Vec<Real>, Error> {
        let mut buf: Vec<Real> = Vec::new();
        buf.try_reserve_exact(src.len())
            .map_err(|_| Error::AllocationFailure)?;

        self.reset();
        buf.extend(src.iter().map(|&x| self.process_sample(x)));

        self.reset();
        buf.reverse();
        for x in buf.iter_mut() {
            *x = self.process_sample(*x);
        }
        buf.reverse();

        Ok(buf)
    }
}
