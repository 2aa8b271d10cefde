//! Sketch configuration.
//!
//! A configuration pairs a precision `p` with a correction policy. The policy fixes the
//! hash width and the largest precision:
//! - [`StandardCorrection`](crate::StandardCorrection): 32-bit hashes, `p` in [4..16].
//! - [`BiasCorrection`](crate::BiasCorrection): 64-bit hashes, `p` in [4..18].
//!
//! Requested register counts are rounded up to the next power of two, e.g. a request
//! for 250 registers gives `p = 8` and `m = 256`.

use log::debug;

use crate::error::{Result, SketchError};
use crate::estimator::{Correction, CorrectionPolicy};

/// Smallest supported precision
pub const MIN_PRECISION: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    precision: u32,
    correction: Correction,
}

impl Config {
    /// Configuration for at least `requested` registers.
    ///
    /// `requested` must be in `[2^4, 2^max_precision]` of the correction policy.
    pub fn new(requested: usize, correction: impl Into<Correction>) -> Result<Self> {
        let correction = correction.into();
        let min = 1usize << MIN_PRECISION;
        let max = 1usize << correction.max_precision();
        if requested < min || requested > max {
            debug!("rejecting register count {requested}, supported range is [{min}, {max}]");
            return Err(SketchError::InvalidRegisterCount { requested, min, max });
        }
        let precision = requested.next_power_of_two().trailing_zeros();
        Ok(Self {
            precision,
            correction,
        })
    }

    /// Configuration with exactly `2^precision` registers.
    pub fn with_precision(precision: u32, correction: impl Into<Correction>) -> Result<Self> {
        let correction = correction.into();
        let max = correction.max_precision();
        if !(MIN_PRECISION..=max).contains(&precision) {
            debug!("rejecting precision {precision}, supported range is [{MIN_PRECISION}, {max}]");
            return Err(SketchError::InvalidPrecision {
                precision,
                min: MIN_PRECISION,
                max,
            });
        }
        Ok(Self {
            precision,
            correction,
        })
    }

    /// Number of bits selecting a register
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Number of registers, `2^precision`
    #[inline]
    pub fn register_count(&self) -> usize {
        1 << self.precision
    }

    #[inline]
    pub fn hash_width(&self) -> u32 {
        self.correction.hash_width()
    }

    /// Largest value a register can hold
    #[inline]
    pub fn max_rank(&self) -> u8 {
        (self.hash_width() - self.precision + 1) as u8
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        crate::estimator::alpha(self.register_count())
    }

    /// Expected relative standard error, `1.04 / sqrt(m)`
    #[inline]
    pub fn error_bound(&self) -> f64 {
        1.04 / (self.register_count() as f64).sqrt()
    }

    #[inline]
    pub fn correction(&self) -> Correction {
        self.correction
    }

    /// Linear counting threshold, for policies using one
    #[inline]
    pub fn threshold(&self) -> Option<f64> {
        self.correction.threshold(self.precision)
    }
}
