// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error type for filter design and offline processing.

use std::fmt;

/// Failure modes of the design operations and of zero-phase filtering.
///
/// Design failures are deterministic functions of the input parameters:
/// retrying with identical inputs is meaningless, callers must correct the
/// parameters. [`Error::AllocationFailure`] is the one recoverable runtime
/// failure and is raised only by the offline zero-phase path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Order is zero or exceeds the section capacity (for band-pass, the
    /// doubled post-transform pole count is what must fit).
    InvalidOrder,
    /// Cutoff or center frequency outside (0, Nyquist), or a non-positive
    /// sampling rate.
    InvalidCutoff,
    /// Band edges reversed, equal, or outside (0, Nyquist).
    InvalidBand,
    /// Quality factor is not strictly positive.
    InvalidQ,
    /// The temporary buffer for zero-phase filtering could not be allocated.
    AllocationFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::InvalidOrder => "filter order is zero or exceeds the section capacity",
            Error::InvalidCutoff => "cutoff frequency must lie in (0, Nyquist)",
            Error::InvalidBand => "band edges must satisfy 0 < low < high < Nyquist",
            Error::InvalidQ => "quality factor must be positive",
            Error::AllocationFailure => "failed to allocate zero-phase working buffer",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_nonempty() {
        for e in [
            Error::InvalidOrder,
            Error::InvalidCutoff,
            Error::InvalidBand,
            Error::InvalidQ,
            Error::AllocationFailure,
        ] {
            assert!(!e.to_string().is_empty());
        }
    }
}
