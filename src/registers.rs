//! Register array of a sketch.
//!
//! Every register stores the largest rank observed among the elements hashed to it,
//! so register values only ever grow, both on update and on merge.

use crate::error::{Result, SketchError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registers(Vec<u8>);

impl Registers {
    /// Create `len` registers set to zero
    pub fn new(len: usize) -> Self {
        Self(vec![0; len])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Raise register `index` to `rank` if it is currently lower.
    /// Returns whether the register changed.
    #[inline]
    pub fn update(&mut self, index: usize, rank: u8) -> bool {
        let register = &mut self.0[index];
        if rank > *register {
            *register = rank;
            true
        } else {
            false
        }
    }

    /// Set every register to the maximum of itself and the corresponding register of
    /// each of `others`. All arrays must have the same length; on mismatch nothing is
    /// modified.
    pub fn merge_max(&mut self, others: &[&Registers]) -> Result<()> {
        if let Some(other) = others.iter().find(|other| other.len() != self.len()) {
            return Err(SketchError::IncompatibleSketches {
                expected: format!("{} registers", self.len()),
                found: format!("{} registers", other.len()),
            });
        }
        for other in others {
            for (lhs, &rhs) in self.0.iter_mut().zip(other.0.iter()) {
                *lhs = (*lhs).max(rhs);
            }
        }
        Ok(())
    }

    /// Number of registers never updated
    #[inline]
    pub fn zero_count(&self) -> usize {
        self.0.iter().filter(|&&r| r == 0).count()
    }

    /// Sum of `2^-register` over all registers
    pub fn harmonic_sum(&self) -> f64 {
        self.0.iter().map(|&r| 0.5f64.powi(i32::from(r))).sum()
    }
}

impl From<Vec<u8>> for Registers {
    fn from(registers: Vec<u8>) -> Self {
        Self(registers)
    }
}

impl From<Registers> for Vec<u8> {
    fn from(registers: Registers) -> Self {
        registers.0
    }
}
