use super::BenchFormat;
use anyhow::{ensure, Context, Result};
use bincode::config::{self, Configuration};
use serbench_core::value::Value;

/// Binary encoding via bincode's native `Encode`/`Decode` with the standard
/// (little-endian, varint) configuration.
#[derive(Clone, Copy)]
pub struct BincodeFormat {
    config: Configuration,
}

impl BincodeFormat {
    pub fn new() -> Self {
        Self {
            config: config::standard(),
        }
    }
}

// bincode's config marker types don't implement `Debug`, so it can't be derived.
impl std::fmt::Debug for BincodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BincodeFormat").finish_non_exhaustive()
    }
}

impl Default for BincodeFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchFormat for BincodeFormat {
    fn name(&self) -> &'static str {
        "Bincode"
    }

    fn dump(&self, record: &Value) -> Result<Vec<u8>> {
        bincode::encode_to_vec(record, self.config).context("bincode encode failed")
    }

    fn load(&self, entry: &[u8]) -> Result<Value> {
        let (value, read): (Value, usize) =
            bincode::decode_from_slice(entry, self.config).context("bincode decode failed")?;
        ensure!(
            read == entry.len(),
            "bincode decode left {} trailing bytes",
            entry.len() - read
        );
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_record_layout() {
        // variant 0, varint length 2, then the bytes
        let entry = BincodeFormat::new().dump(&Value::from("Ab")).unwrap();
        assert_eq!(entry, vec![0, 2, b'A', b'b']);
    }

    #[test]
    fn load_rejects_trailing_bytes() {
        let format = BincodeFormat::new();
        let mut entry = format.dump(&Value::from("Ab")).unwrap();
        entry.push(0);
        assert!(format.load(&entry).is_err());
    }

    #[test]
    fn load_rejects_truncated_entry() {
        let format = BincodeFormat::new();
        let entry = format.dump(&Value::from("Lorem ipsum")).unwrap();
        assert!(format.load(&entry[..entry.len() - 1]).is_err());
    }
}
