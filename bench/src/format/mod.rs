//! Serialization formats and the common `BenchFormat` trait.
//!
//! Two implementations are provided:
//! - [`json::JsonFormat`] — text, via `serde_json`
//! - [`binary::BincodeFormat`] — binary, via bincode's native encoding

pub mod binary;
pub mod json;

use anyhow::Result;
use serbench_core::value::Value;

/// Trait implemented by each serialization format under comparison.
///
/// The harness only ever sees formats through this trait, so any two
/// implementations can be benchmarked against each other.
pub trait BenchFormat {
    /// Name printed in the report's Method column.
    fn name(&self) -> &'static str;

    /// Serialize one record into a standalone buffer entry.
    fn dump(&self, record: &Value) -> Result<Vec<u8>>;

    /// Deserialize one buffer entry produced by [`BenchFormat::dump`].
    fn load(&self, entry: &[u8]) -> Result<Value>;
}

#[cfg(test)]
mod tests {
    use super::binary::BincodeFormat;
    use super::json::JsonFormat;
    use super::BenchFormat;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serbench_core::generator::generate_record;

    fn formats() -> Vec<Box<dyn BenchFormat>> {
        vec![Box::new(JsonFormat::new()), Box::new(BincodeFormat::new())]
    }

    #[test]
    fn every_shape_round_trips() {
        let mut rng = StdRng::seed_from_u64(7);
        let triple = generate_record(&mut rng, 50).unwrap();

        for format in formats() {
            for record in [&triple.sequence, &triple.flat, &triple.nested] {
                let entry = format.dump(record).unwrap();
                let loaded = format.load(&entry).unwrap();
                assert_eq!(&loaded, record, "{} round trip", format.name());
            }
        }
    }

    #[test]
    fn binary_is_smaller_than_text() {
        let mut rng = StdRng::seed_from_u64(7);
        let triple = generate_record(&mut rng, 50).unwrap();
        let json = JsonFormat::new().dump(&triple.nested).unwrap();
        let bin = BincodeFormat::new().dump(&triple.nested).unwrap();
        assert!(bin.len() < json.len());
    }

    #[test]
    fn garbage_fails_to_load() {
        for format in formats() {
            assert!(format.load(&[0xff, 0xfe, 0x00]).is_err(), "{}", format.name());
        }
    }
}
