//! `hll-sketch` estimates the number of distinct elements in a stream or dataset with
//! HyperLogLog sketches using a fixed, small amount of memory.
//!
//! Two variants are provided:
//! - [`Sketch::new`]: 32-bit hashes with the classic small and large range corrections.
//! - [`Sketch::high_precision`]: 64-bit hashes with HyperLogLog++ style empirical bias
//!   correction, which is considerably more accurate at low cardinalities.
//!
//! Sketches with the same register count and hash width can be merged, so partial
//! sketches built over disjoint shards of the input can be combined afterwards.
//!
//! ```
//! use hll_sketch::Sketch;
//!
//! let mut sketch = Sketch::high_precision(4096).unwrap();
//! sketch.extend(["apple", "banana", "apple"]);
//! assert!((sketch.cardinality() - 2.0).abs() < 0.1);
//! ```
mod bias;
mod bias_data;
pub mod config;
pub mod element;
pub mod error;
pub mod estimator;
pub mod hash;
pub mod registers;
#[cfg(feature = "with_serde")]
mod serde;
pub mod sketch;

pub use bias::{BiasModel, DEFAULT_NEIGHBORS, MAX_PRECISION};
pub use config::{Config, MIN_PRECISION};
pub use element::Element;
pub use error::{Result, SketchError};
pub use estimator::{BiasCorrection, Correction, CorrectionPolicy, StandardCorrection};
pub use hash::{hash_rank, ElementHasher, Sha1Hasher, WyHashBuilder};
pub use registers::Registers;
pub use sketch::{estimate_distinct, Sketch};
