//! `Sketch` estimates the number of distinct elements appended to it using `m = 2^p`
//! registers, with relative standard error around `1.04 / sqrt(m)`:
//!     m = 256:   6.50%
//!     m = 4096:  1.62%
//!     m = 65536: 0.41%
//!
//! # Lifecycle
//! A sketch is created from a requested register count, a correction policy and a
//! hasher. It only changes through `append`, `extend` and `merge`, and register values
//! only ever grow. `cardinality` may be read at any time and never changes the sketch.
//!
//! # Sharding
//! Merging takes the register-wise maximum, which is commutative and associative.
//! Independent sketches can therefore be built over disjoint partitions of the input
//! (threads, processes, machines) and reduced in any order or tree shape afterwards.
//! A single sketch is not meant to be mutated from several threads at once.

use std::fmt::{Debug, Formatter};
use std::ops::Add;

use log::debug;

use crate::config::Config;
use crate::element::Element;
use crate::error::{Result, SketchError};
use crate::estimator::{BiasCorrection, Correction, CorrectionPolicy, StandardCorrection};
use crate::hash::{hash_rank, ElementHasher, Sha1Hasher};
use crate::registers::Registers;

pub struct Sketch<H: ElementHasher = Sha1Hasher> {
    config: Config,
    registers: Registers,
    hasher: H,
}

impl Sketch<Sha1Hasher> {
    /// Standard 32-bit sketch with at least `requested` registers, in `[2^4, 2^16]`
    pub fn new(requested: usize) -> Result<Self> {
        Self::with_hasher(requested, StandardCorrection, Sha1Hasher)
    }

    /// Bias-corrected 64-bit sketch with at least `requested` registers, in `[2^4, 2^18]`
    pub fn high_precision(requested: usize) -> Result<Self> {
        Self::with_hasher(requested, BiasCorrection::default(), Sha1Hasher)
    }
}

impl<H: ElementHasher> Sketch<H> {
    /// Create new sketch with explicit correction policy and hasher
    pub fn with_hasher(
        requested: usize,
        correction: impl Into<Correction>,
        hasher: H,
    ) -> Result<Self> {
        let config = Config::new(requested, correction)?;
        Ok(Self::from_config(config, hasher))
    }

    /// Create new empty sketch from a validated configuration
    pub fn from_config(config: Config, hasher: H) -> Self {
        Self {
            config,
            registers: Registers::new(config.register_count()),
            hasher,
        }
    }

    /// Append element to the sketch
    #[inline]
    pub fn append<T: Element + ?Sized>(&mut self, element: &T) {
        let hash = self.hasher.hash_bytes(&element.canonical_bytes());
        self.append_hash(hash);
    }

    /// Append element given by its 64-bit digest
    #[inline]
    pub fn append_hash(&mut self, hash: u64) {
        let (idx, rank) = hash_rank(hash, self.config.precision(), self.config.hash_width());
        self.registers.update(idx, rank);
    }

    /// Append every element in turn. Order does not matter.
    pub fn extend<I>(&mut self, elements: I)
    where
        I: IntoIterator,
        I::Item: Element,
    {
        for element in elements {
            self.append(&element);
        }
    }

    /// Merge `others` into this sketch.
    ///
    /// All operands must have the same register count and hash width as `self`;
    /// otherwise no sketch is modified and an error is returned.
    pub fn merge<'a, I>(&mut self, others: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Self>,
        H: 'a,
    {
        let others: Vec<&Self> = others.into_iter().collect();
        for other in &others {
            self.check_compatible(other)?;
        }
        let registers: Vec<&Registers> = others.iter().map(|other| &other.registers).collect();
        self.registers.merge_max(&registers)
    }

    /// Fresh sketch with `a`'s configuration and hasher holding the union of `a` and `b`
    pub fn combine(a: &Self, b: &Self) -> Result<Self> {
        let mut combined = Self::from_config(a.config, a.hasher.clone());
        combined.merge([a, b])?;
        Ok(combined)
    }

    /// Reduce partial sketches into one. Returns `None` when there is nothing to reduce.
    pub fn merge_all<I>(sketches: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut sketches = sketches.into_iter();
        let Some(mut merged) = sketches.next() else {
            return Ok(None);
        };
        for sketch in sketches {
            merged.merge([&sketch])?;
        }
        Ok(Some(merged))
    }

    /// Estimated number of distinct elements
    #[inline]
    pub fn cardinality(&self) -> f64 {
        self.config
            .correction()
            .estimate(&self.registers, self.config.precision())
    }

    /// Harmonic mean estimate before any correction
    #[inline]
    pub fn raw_estimate(&self) -> f64 {
        crate::estimator::raw_estimate(&self.registers)
    }

    #[inline]
    pub fn precision(&self) -> u32 {
        self.config.precision()
    }

    #[inline]
    pub fn register_count(&self) -> usize {
        self.config.register_count()
    }

    /// Expected relative standard error, `1.04 / sqrt(m)`
    #[inline]
    pub fn error_bound(&self) -> f64 {
        self.config.error_bound()
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.config.alpha()
    }

    #[inline]
    pub fn hash_width(&self) -> u32 {
        self.config.hash_width()
    }

    /// Linear counting threshold of bias-corrected sketches
    #[inline]
    pub fn threshold(&self) -> Option<f64> {
        self.config.threshold()
    }

    #[inline]
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Rebuild a sketch from saved registers, validating register count and values
    pub fn from_parts(config: Config, registers: Vec<u8>, hasher: H) -> Result<Self> {
        if registers.len() != config.register_count() {
            return Err(SketchError::InvalidState(format!(
                "expected {} registers, found {}",
                config.register_count(),
                registers.len()
            )));
        }
        if let Some(&rank) = registers.iter().find(|&&r| r > config.max_rank()) {
            return Err(SketchError::InvalidState(format!(
                "register value {rank} exceeds maximum rank {}",
                config.max_rank()
            )));
        }
        Ok(Self {
            config,
            registers: Registers::from(registers),
            hasher,
        })
    }

    fn check_compatible(&self, other: &Self) -> Result<()> {
        let (lhs, rhs) = (&self.config, &other.config);
        if lhs.register_count() != rhs.register_count() || lhs.hash_width() != rhs.hash_width() {
            debug!(
                "rejecting merge of {} registers / {}-bit hashes into {} registers / {}-bit hashes",
                rhs.register_count(),
                rhs.hash_width(),
                lhs.register_count(),
                lhs.hash_width()
            );
            return Err(SketchError::IncompatibleSketches {
                expected: format!(
                    "{} registers with {}-bit hashes",
                    lhs.register_count(),
                    lhs.hash_width()
                ),
                found: format!(
                    "{} registers with {}-bit hashes",
                    rhs.register_count(),
                    rhs.hash_width()
                ),
            });
        }
        Ok(())
    }
}

impl<H: ElementHasher> Clone for Sketch<H> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            registers: self.registers.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

impl<H: ElementHasher> PartialEq for Sketch<H> {
    /// Sketches are equal when configuration and registers are equal
    fn eq(&self, rhs: &Self) -> bool {
        self.config == rhs.config && self.registers == rhs.registers
    }
}

impl<H: ElementHasher> Debug for Sketch<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ precision: {}, hash_width: {}, estimate: {:.4} }}",
            self.precision(),
            self.hash_width(),
            self.cardinality()
        )
    }
}

impl<H: ElementHasher> Add for &Sketch<H> {
    type Output = Result<Sketch<H>>;

    /// Same as [`Sketch::combine`]
    fn add(self, rhs: Self) -> Self::Output {
        Sketch::combine(self, rhs)
    }
}

/// Estimate the number of distinct `items` with a bias-corrected sketch of at least
/// `requested` registers
pub fn estimate_distinct<I>(items: I, requested: usize) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Element,
{
    let mut sketch = Sketch::high_precision(requested)?;
    sketch.extend(items);
    Ok(sketch.cardinality())
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::hash::WyHashBuilder;
    use test_case::test_case;

    const DATA: [&str; 3] = ["abc", "def", "ghi"];
    const DATA_DUPLICATE: [&str; 5] = ["abc", "def", "ghi", "def", "abc"];
    const NUM_DATA: [f64; 5] = [11.0, 11.717, 12.207, 12.7896, 11.0];

    fn non_zero(sketch: &Sketch) -> Vec<(usize, u8)> {
        sketch
            .registers()
            .as_slice()
            .iter()
            .enumerate()
            .filter(|(_, &r)| r > 0)
            .map(|(i, &r)| (i, r))
            .collect()
    }

    #[test]
    fn test_parameters() {
        let sketch = Sketch::new(250).unwrap();
        assert_eq!(sketch.precision(), 8);
        assert_eq!(sketch.register_count(), 256);
        assert_eq!(sketch.hash_width(), 32);
        assert!((sketch.alpha() - 0.7182725932495458).abs() < 1e-12);
        assert!((sketch.error_bound() - 0.065).abs() < 1e-12);
        assert_eq!(sketch.threshold(), None);

        let sketch = Sketch::high_precision(1 << 17).unwrap();
        assert_eq!(sketch.precision(), 17);
        assert_eq!(sketch.hash_width(), 64);
        assert_eq!(sketch.threshold(), Some(120000.0));
    }

    #[test_case(2; "too small")]
    #[test_case(1 << 17; "too large")]
    fn test_init_error(requested: usize) {
        let err = Sketch::new(requested).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("register count {requested} should be in range [16, 65536]")
        );
    }

    #[test]
    fn test_registers() {
        let mut sketch = Sketch::new(250).unwrap();
        sketch.append("abc");
        assert_eq!(non_zero(&sketch), vec![(54, 1)]);
        sketch.extend(DATA);
        assert_eq!(non_zero(&sketch), vec![(51, 2), (54, 1), (214, 2)]);

        let mut sketch = Sketch::new(250).unwrap();
        sketch.extend(DATA_DUPLICATE);
        assert_eq!(non_zero(&sketch), vec![(51, 2), (54, 1), (214, 2)]);

        // 11.0 renders as "11", like the integer 11
        let mut sketch = Sketch::new(250).unwrap();
        sketch.extend(NUM_DATA);
        assert_eq!(non_zero(&sketch), vec![(17, 3), (144, 2), (145, 4), (182, 2)]);
    }

    #[test]
    fn test_register_collision_keeps_max() {
        let mut sketch = Sketch::new(250).unwrap();
        sketch.append(&654941.845);
        assert_eq!(non_zero(&sketch), vec![(0, 1)]);
        sketch.append(&400.2024);
        assert_eq!(non_zero(&sketch), vec![(0, 2)]);

        let mut sketch = Sketch::new(250).unwrap();
        sketch.append(&400.2024);
        assert_eq!(non_zero(&sketch), vec![(0, 2)]);
        sketch.append(&654941.845);
        assert_eq!(non_zero(&sketch), vec![(0, 2)]);
    }

    #[test]
    fn test_cardinality_low_range() {
        let mut sketch = Sketch::new(250).unwrap();
        sketch.extend(DATA);
        assert!((sketch.cardinality() - 3.017716672522796).abs() < 1e-5);
        assert!((sketch.raw_estimate() - 185.32564043780408).abs() < 1e-5);

        let mut sketch = Sketch::high_precision(1 << 17).unwrap();
        sketch.extend(DATA);
        assert!((sketch.cardinality() - 3.0000343327992325).abs() < 1e-5);
    }

    #[test]
    fn test_cardinality_is_read_only() {
        let mut sketch = Sketch::high_precision(1024).unwrap();
        sketch.extend(0..5000u32);
        let before = sketch.clone();
        let first = sketch.cardinality();
        assert_eq!(sketch.cardinality(), first);
        assert_eq!(sketch, before);
    }

    #[test]
    fn test_merge_and_add() {
        let mut a = Sketch::new(250).unwrap();
        a.extend(DATA);
        let mut b = Sketch::new(250).unwrap();
        b.extend(NUM_DATA);
        let expected = vec![
            (17, 3),
            (51, 2),
            (54, 1),
            (144, 2),
            (145, 4),
            (182, 2),
            (214, 2),
        ];

        let mut merged = a.clone();
        merged.merge([&b]).unwrap();
        assert_eq!(non_zero(&merged), expected);

        let mut merged = b.clone();
        merged.merge([&a]).unwrap();
        assert_eq!(non_zero(&merged), expected);

        assert_eq!(non_zero(&(&a + &b).unwrap()), expected);
        assert_eq!(non_zero(&(&b + &a).unwrap()), expected);
        // inputs untouched
        assert_eq!(non_zero(&a), vec![(51, 2), (54, 1), (214, 2)]);
    }

    #[test]
    fn test_merge_collision() {
        let mut a = Sketch::new(250).unwrap();
        a.append(&654941.845);
        let mut b = Sketch::new(250).unwrap();
        b.append(&400.2024);

        let mut merged = a.clone();
        merged.merge([&b]).unwrap();
        assert_eq!(merged.registers().get(0), Some(2));
        let mut merged = b.clone();
        merged.merge([&a]).unwrap();
        assert_eq!(merged.registers().get(0), Some(2));
        assert_eq!((&a + &b).unwrap().registers().get(0), Some(2));
        assert_eq!((&b + &a).unwrap().registers().get(0), Some(2));
    }

    #[test]
    fn test_merge_several() {
        let mut merged = Sketch::new(256).unwrap();
        let parts: Vec<Sketch> = DATA
            .iter()
            .map(|item| {
                let mut sketch = Sketch::new(256).unwrap();
                sketch.append(item);
                sketch
            })
            .collect();
        merged.merge(&parts).unwrap();

        let mut expected = Sketch::new(256).unwrap();
        expected.extend(DATA);
        assert_eq!(merged, expected);
    }

    #[test_case(Sketch::new(512).unwrap(); "different register count")]
    #[test_case(Sketch::high_precision(256).unwrap(); "different hash width")]
    fn test_merge_rejected(mut other: Sketch) {
        let mut sketch = Sketch::new(256).unwrap();
        sketch.extend(DATA);
        other.extend(NUM_DATA);
        let (sketch_before, other_before) = (sketch.clone(), other.clone());

        let err = sketch.merge([&other]).unwrap_err();
        assert!(matches!(err, SketchError::IncompatibleSketches { .. }));
        assert!(!err.is_configuration_error());
        assert_eq!(sketch, sketch_before);
        assert_eq!(other, other_before);
        assert!((&sketch + &other).is_err());
    }

    #[test]
    fn test_merge_rejected_leaves_receiver_untouched_with_valid_operands() {
        let mut sketch = Sketch::new(256).unwrap();
        let mut ok = Sketch::new(256).unwrap();
        ok.extend(DATA);
        let bad = Sketch::new(1024).unwrap();
        assert!(sketch.merge([&ok, &bad]).is_err());
        assert_eq!(sketch.registers().zero_count(), 256);
    }

    #[test]
    fn test_merge_all() {
        assert_eq!(Sketch::merge_all(Vec::<Sketch>::new()).unwrap(), None);

        let parts = (0..4u32).map(|shard| {
            let mut sketch = Sketch::new(1024).unwrap();
            sketch.extend((shard * 1000)..((shard + 1) * 1000));
            sketch
        });
        let merged = Sketch::merge_all(parts).unwrap().unwrap();

        let mut expected = Sketch::new(1024).unwrap();
        expected.extend(0..4000u32);
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_custom_hasher() {
        let mut sketch =
            Sketch::with_hasher(4096, BiasCorrection::default(), WyHashBuilder::default())
                .unwrap();
        sketch.extend(0..10_000u64);
        let error = (sketch.cardinality() - 10_000.0).abs() / 10_000.0;
        assert!(error < 4.0 * sketch.error_bound(), "{error}");
    }

    #[test]
    fn test_append_hash() {
        let mut sketch = Sketch::new(16).unwrap();
        sketch.append_hash(0);
        assert_eq!(sketch.registers().get(0), Some(29));
        sketch.append_hash(u64::MAX);
        assert_eq!(sketch.registers().get(15), Some(1));
    }

    #[test]
    fn test_estimate_distinct() {
        let items = (0..2000u32).chain(0..2000u32);
        let estimate = estimate_distinct(items, 4096).unwrap();
        assert!((estimate - 2000.0).abs() < 0.05 * 2000.0, "{estimate}");
        assert!(estimate_distinct(0..10u32, 1 << 19).is_err());
    }

    #[test]
    fn test_from_parts() {
        let mut original = Sketch::new(64).unwrap();
        original.extend(DATA);
        let registers: Vec<u8> = original.registers().clone().into();
        let config = *original.config();
        let rebuilt = Sketch::from_parts(config, registers.clone(), Sha1Hasher).unwrap();
        assert_eq!(rebuilt, original);

        assert!(Sketch::from_parts(config, registers[1..].to_vec(), Sha1Hasher).is_err());
        let mut overflow = registers;
        overflow[0] = config.max_rank() + 1;
        let err = Sketch::from_parts(config, overflow, Sha1Hasher).unwrap_err();
        assert!(matches!(err, SketchError::InvalidState(_)));
    }

    #[test]
    fn test_debug() {
        let mut sketch = Sketch::new(250).unwrap();
        sketch.extend(DATA);
        assert_eq!(
            format!("{:?}", sketch),
            "{ precision: 8, hash_width: 32, estimate: 3.0177 }"
        );
    }
}
