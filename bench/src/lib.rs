//! Serialization Throughput Benchmark
//!
//! Compares a text format (JSON) with a binary format (bincode) by repeatedly
//! dumping and loading a corpus of synthetic lorem-ipsum records:
//! - **Sequence** records: lists of short phrases
//! - **Flat mapping** records: word → phrase maps
//! - **Nested mapping** records: three levels of maps and lists with integer keys
//!
//! Run the benchmark table: `cargo run --release`
//! Run criterion benches: `cargo bench`
//! Run tests: `cargo test`

pub mod buffer;
pub mod format;
pub mod harness;
pub mod report;
