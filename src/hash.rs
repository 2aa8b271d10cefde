//! Hashing and ranking of elements.
//!
//! A sketch asks its [`ElementHasher`] for the leading 64 bits of a digest and keeps the
//! top `hash_width` bits of it (32 for the standard sketch, 64 for the bias-corrected
//! one). Of those bits:
//! - the low `precision` bits select the register,
//! - the remaining `hash_width - precision` bits yield the rank, i.e. one plus the
//!   number of leading zeros counted from their most significant end.

use std::hash::{BuildHasher, BuildHasherDefault, Hasher};

use sha1::{Digest, Sha1};
use wyhash::WyHash;

/// Capability mapping canonical element bytes to a digest.
///
/// Implementations must be deterministic: equal inputs give equal outputs,
/// and all sketches that are merged together must use equivalent hashers.
pub trait ElementHasher: Clone {
    /// Returns the leading 64 bits of the digest of `bytes`, most significant bit first.
    fn hash_bytes(&self, bytes: &[u8]) -> u64;
}

/// SHA-1 based hasher, using the first 8 bytes of the digest in big-endian order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha1Hasher;

impl ElementHasher for Sha1Hasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        let digest = Sha1::digest(bytes);
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(head)
    }
}

/// Any std hasher with a consistent `Default` can be used as an element hasher.
impl<H: Hasher + Default> ElementHasher for BuildHasherDefault<H> {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        let mut hasher = self.build_hasher();
        hasher.write(bytes);
        hasher.finish()
    }
}

/// Fast non-cryptographic alternative to [`Sha1Hasher`].
pub type WyHashBuilder = BuildHasherDefault<WyHash>;

/// Split `hash` into a register index and a rank.
///
/// `hash_width` must be in `(precision, 64]`. The returned rank is in
/// `[1, hash_width - precision + 1]`; it saturates at the upper bound when
/// all rank bits are zero.
#[inline]
pub fn hash_rank(hash: u64, precision: u32, hash_width: u32) -> (usize, u8) {
    let value = hash >> (u64::BITS - hash_width);
    let index = (value & ((1 << precision) - 1)) as usize;
    let rest = value >> precision;
    let bit_length = u64::BITS - rest.leading_zeros();
    let rank = hash_width - precision - bit_length + 1;
    (index, rank as u8)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("abc" => 0xa999_3e36_4706_816a; "abc")]
    #[test_case("def" => 0x589c_2233_5a38_1f12; "def")]
    #[test_case("ghi" => 0x4817_43d6_32b8_0d39; "ghi")]
    fn test_sha1_head(input: &str) -> u64 {
        Sha1Hasher.hash_bytes(input.as_bytes())
    }

    #[test_case("abc", 8, 32 => (54, 1); "abc standard")]
    #[test_case("def", 8, 32 => (51, 2); "def standard")]
    #[test_case("ghi", 8, 32 => (214, 2); "ghi standard")]
    #[test_case("abc", 17, 64 => (33130, 1); "abc high precision")]
    #[test_case("def", 17, 64 => (7954, 2); "def high precision")]
    #[test_case("ghi", 8, 64 => (57, 2); "ghi wide hash")]
    fn test_hash_rank_sha1(input: &str, precision: u32, hash_width: u32) -> (usize, u8) {
        hash_rank(Sha1Hasher.hash_bytes(input.as_bytes()), precision, hash_width)
    }

    #[test_case(0, 8, 32 => (0, 25); "zero hash saturates standard")]
    #[test_case(0, 4, 64 => (0, 61); "zero hash saturates wide")]
    #[test_case(u64::MAX, 8, 32 => (255, 1); "all ones")]
    #[test_case(0x0000_01ff_0000_0000, 8, 32 => (255, 24); "one rank bit set")]
    #[test_case(0x8000_0000_0000_0000, 16, 32 => (0, 1); "top bit set")]
    #[test_case(0x0000_0000_0001_0000, 16, 64 => (0, 48); "lowest rank bit of wide hash")]
    fn test_hash_rank(hash: u64, precision: u32, hash_width: u32) -> (usize, u8) {
        hash_rank(hash, precision, hash_width)
    }

    #[test]
    fn test_rank_range() {
        let hasher = WyHashBuilder::default();
        for precision in 4..=16 {
            for width in [32, 64] {
                let max_rank = (width - precision + 1) as u8;
                for i in 0u32..1000 {
                    let hash = hasher.hash_bytes(&i.to_le_bytes());
                    let (index, rank) = hash_rank(hash, precision, width);
                    assert!(index < 1 << precision);
                    assert!((1..=max_rank).contains(&rank));
                }
            }
        }
    }

    #[test]
    fn test_build_hasher_is_deterministic() {
        let a = WyHashBuilder::default();
        let b = a.clone();
        assert_eq!(a.hash_bytes(b"element"), b.hash_bytes(b"element"));
        assert_ne!(a.hash_bytes(b"element"), a.hash_bytes(b"other element"));
    }
}
