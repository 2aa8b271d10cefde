//! # Serde module for Sketch
//!
//! A sketch is serialized as the tuple `(correction, precision, registers)`. The hasher is
//! not part of the serialized form: deserialization uses `H::default()`, so a sketch must
//! be read back with the same hasher type it was written with.
//!
//! Deserialization validates the tuple the same way construction does. The precision must
//! be supported by the correction policy, the register count must be `2^precision` and no
//! register may exceed the largest possible rank.
//!
//! Refer to the serde documentation for more details on custom serialization and deserialization:
//! - [Serialization](https://serde.rs/impl-serialize.html)
//! - [Deserialization](https://serde.rs/impl-deserialize.html)
use serde::de::Error;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::SketchError;
use crate::estimator::{BiasCorrection, Correction};
use crate::hash::ElementHasher;
use crate::sketch::Sketch;

impl<H: ElementHasher> Serialize for Sketch<H> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut tup = serializer.serialize_tuple(3)?;
        tup.serialize_element(&self.config().correction())?;
        tup.serialize_element(&self.precision())?;
        tup.serialize_element(self.registers().as_slice())?;
        tup.end()
    }
}

impl<'de, H: ElementHasher + Default> Deserialize<'de> for Sketch<H> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (correction, precision, registers): (Correction, u32, Vec<u8>) =
            Deserialize::deserialize(deserializer)?;
        from_tuple(correction, precision, registers).map_err(Error::custom)
    }
}

fn from_tuple<H: ElementHasher + Default>(
    correction: Correction,
    precision: u32,
    registers: Vec<u8>,
) -> Result<Sketch<H>, SketchError> {
    // derived deserialization skips the neighbors check of `BiasCorrection::new`
    let correction = match correction {
        Correction::BiasTable(bias) => BiasCorrection::new(bias.neighbors())?.into(),
        standard => standard,
    };
    let config = Config::with_precision(precision, correction)?;
    Sketch::from_parts(config, registers, H::default())
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::hash::WyHashBuilder;
    use test_case::test_case;

    #[test_case(0; "empty set")]
    #[test_case(1; "single element")]
    #[test_case(2; "two distinct elements")]
    #[test_case(100; "hundred distinct elements")]
    #[test_case(10000; "ten thousand distinct elements")]
    fn test_serde(n: usize) {
        for mut original in [Sketch::new(256).unwrap(), Sketch::high_precision(256).unwrap()] {
            for i in 0..n {
                original.append(&format!("item{}", i));
            }

            let serialized = serde_json::to_string(&original).expect("serialization failed");
            assert!(
                !serialized.is_empty(),
                "serialized string should not be empty"
            );

            let deserialized: Sketch = serde_json::from_str(&serialized).expect("deserialization failed");
            assert_eq!(original, deserialized);
            assert_eq!(original.cardinality(), deserialized.cardinality());
        }
    }

    #[test]
    fn test_serialized_form() {
        let mut sketch = Sketch::new(16).unwrap();
        sketch.append_hash(0);
        assert_eq!(
            serde_json::to_string(&sketch).unwrap(),
            r#"[{"Standard":null},4,[29,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]]"#
        );

        let sketch = Sketch::high_precision(16).unwrap();
        assert_eq!(
            serde_json::to_string(&sketch).unwrap(),
            r#"[{"BiasTable":{"neighbors":6}},4,[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]]"#
        );
    }

    #[test]
    fn test_custom_hasher_roundtrip() {
        let mut original =
            Sketch::with_hasher(64, BiasCorrection::default(), WyHashBuilder::default()).unwrap();
        original.extend(0..100u32);
        let serialized = serde_json::to_vec(&original).unwrap();
        let deserialized: Sketch<WyHashBuilder> = serde_json::from_slice(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_deserialize_invalid_json() {
        let invalid_json = "{ invalid_json_string }";
        let result: Result<Sketch, _> = serde_json::from_str(invalid_json);

        assert!(
            result.is_err(),
            "Deserialization should fail for invalid JSON"
        );
    }

    #[test_case(r#"[{"Standard":null},3,[0,0,0,0,0,0,0,0]]"#; "precision too small")]
    #[test_case(r#"[{"Standard":null},17,[]]"#; "precision too large for standard")]
    #[test_case(r#"[{"Standard":null},4,[0,0,0]]"#; "register count mismatch")]
    #[test_case(r#"[{"Standard":null},4,[30,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]]"#; "rank too large")]
    #[test_case(r#"[{"BiasTable":{"neighbors":0}},4,[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]]"#; "zero neighbors")]
    #[test_case(r#"[{"Unknown":null},4,[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]]"#; "unknown correction")]
    #[test_case(r#"[{"Standard":null},4]"#; "missing registers")]
    fn test_failed_deserialization(input: &str) {
        let result: Result<Sketch, _> = serde_json::from_str(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialized_rank_bound() {
        // 64-bit hashes allow ranks up to 61 at precision 4
        let mut registers = vec![0u8; 16];
        registers[3] = 61;
        let json = serde_json::to_string(&(
            Correction::from(BiasCorrection::default()),
            4u32,
            registers,
        ))
        .unwrap();
        let sketch: Sketch = serde_json::from_str(&json).unwrap();
        assert_eq!(sketch.registers().get(3), Some(61));
    }
}
