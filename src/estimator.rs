//! Cardinality estimation from register statistics.
//!
//! Both policies start from the harmonic mean raw estimate
//! `E = alpha(m) * m^2 / sum(2^-register)` and differ in how they correct it:
//!
//! ## Standard correction (32-bit hashes, precision in [4..16])
//! 1. Small range: if `E <= 2.5m` and some registers are zero, linear counting.
//! 2. Large range: if `E > 2^32 / 30`, `-2^32 * ln(1 - E / 2^32)`.
//! 3. Otherwise `E` as is.
//!
//! ## Bias table correction (64-bit hashes, precision in [4..18])
//! 1. If some registers are zero and linear counting gives at most the precision's
//!    threshold, linear counting.
//! 2. Otherwise `E`, minus its interpolated empirical bias if `E <= 5m`.
//!
//! No large range correction is needed with 64-bit hashes.
//!
//! [HyperLogLog paper](https://algo.inria.fr/flajolet/Publications/FlFuGaMe07.pdf),
//! [HyperLogLog++ paper](https://static.googleusercontent.com/media/research.google.com/en//pubs/archive/40671.pdf)

use enum_dispatch::enum_dispatch;
use log::trace;

use crate::bias::{self, BiasModel, DEFAULT_NEIGHBORS};
use crate::error::{Result, SketchError};
use crate::registers::Registers;

/// Size of the 32-bit hash space
const HASH_SPACE_32: f64 = 4_294_967_296.0;

/// Correction policies a sketch can be configured with
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[enum_dispatch]
pub enum Correction {
    Standard(StandardCorrection),
    BiasTable(BiasCorrection),
}

/// Policy turning registers into a cardinality estimate.
#[enum_dispatch(Correction)]
pub trait CorrectionPolicy {
    /// Number of hash bits the policy expects
    fn hash_width(&self) -> u32;
    /// Largest supported precision
    fn max_precision(&self) -> u32;
    /// Linear counting threshold for `precision`, if the policy uses one
    fn threshold(&self, precision: u32) -> Option<f64>;
    /// Corrected cardinality estimate
    fn estimate(&self, registers: &Registers, precision: u32) -> f64;
}

impl Default for Correction {
    fn default() -> Self {
        Correction::Standard(StandardCorrection)
    }
}

/// Classic HyperLogLog corrections for 32-bit hashes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardCorrection;

impl CorrectionPolicy for StandardCorrection {
    #[inline]
    fn hash_width(&self) -> u32 {
        32
    }

    #[inline]
    fn max_precision(&self) -> u32 {
        16
    }

    #[inline]
    fn threshold(&self, _precision: u32) -> Option<f64> {
        None
    }

    fn estimate(&self, registers: &Registers, _precision: u32) -> f64 {
        let m = registers.len();
        let raw = raw_estimate(registers);

        if raw <= 2.5 * m as f64 {
            let zeros = registers.zero_count();
            if zeros > 0 {
                trace!("small range correction: raw = {raw}, zeros = {zeros}");
                return linear_counting(m, zeros);
            }
        }

        if raw > HASH_SPACE_32 / 30.0 {
            trace!("large range correction: raw = {raw}");
            let ratio = 1.0 - raw / HASH_SPACE_32;
            // hash space exhausted
            if ratio <= 0.0 {
                return f64::INFINITY;
            }
            return -HASH_SPACE_32 * ratio.ln();
        }

        raw
    }
}

/// HyperLogLog++ style empirical bias correction for 64-bit hashes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiasCorrection {
    neighbors: usize,
}

impl BiasCorrection {
    /// Interpolate biases from `neighbors` nearest samples
    pub fn new(neighbors: usize) -> Result<Self> {
        if neighbors == 0 {
            return Err(SketchError::InvalidNeighbors(neighbors));
        }
        Ok(Self { neighbors })
    }

    #[inline]
    pub fn neighbors(&self) -> usize {
        self.neighbors
    }
}

impl Default for BiasCorrection {
    fn default() -> Self {
        Self {
            neighbors: DEFAULT_NEIGHBORS,
        }
    }
}

impl CorrectionPolicy for BiasCorrection {
    #[inline]
    fn hash_width(&self) -> u32 {
        64
    }

    #[inline]
    fn max_precision(&self) -> u32 {
        bias::MAX_PRECISION
    }

    #[inline]
    fn threshold(&self, precision: u32) -> Option<f64> {
        bias::threshold(precision)
    }

    fn estimate(&self, registers: &Registers, precision: u32) -> f64 {
        let m = registers.len();
        let model = BiasModel::for_precision(precision);

        let zeros = registers.zero_count();
        if zeros > 0 {
            let estimate = linear_counting(m, zeros);
            if model.is_some_and(|model| estimate <= model.threshold()) {
                trace!("linear counting: estimate = {estimate}, zeros = {zeros}");
                return estimate;
            }
        }

        let raw = raw_estimate(registers);
        match model {
            Some(model) if raw <= 5.0 * m as f64 => {
                trace!("bias correction: raw = {raw}");
                model.correct(raw, self.neighbors)
            }
            _ => raw,
        }
    }
}

/// Parameter for bias correction
#[inline]
pub fn alpha(m: usize) -> f64 {
    match m {
        16 => 0.673,
        32 => 0.697,
        64 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / (m as f64)),
    }
}

/// Harmonic mean estimate before any correction
#[inline]
pub fn raw_estimate(registers: &Registers) -> f64 {
    let m = registers.len() as f64;
    alpha(registers.len()) * m * m / registers.harmonic_sum()
}

/// Linear counting estimate from the number of zero registers
#[inline]
pub fn linear_counting(m: usize, zeros: usize) -> f64 {
    let m = m as f64;
    m * (m / zeros as f64).ln()
}
