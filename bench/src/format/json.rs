use super::BenchFormat;
use anyhow::{Context, Result};
use serbench_core::value::Value;

/// JSON text encoding via `serde_json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat;

impl JsonFormat {
    pub fn new() -> Self {
        Self
    }
}

impl BenchFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn dump(&self, record: &Value) -> Result<Vec<u8>> {
        serde_json::to_vec(record).context("JSON encode failed")
    }

    fn load(&self, entry: &[u8]) -> Result<Value> {
        serde_json::from_slice(entry).context("JSON decode failed")
    }
}
