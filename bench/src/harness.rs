//! Benchmark harness: times dump and load passes over the shared corpus.
//!
//! For every repetition count the harness runs, in order:
//!
//! | Row | Pass | Format | Length column            |
//! |-----|------|--------|--------------------------|
//! | 1   | dump | A      | bytes in A's buffer      |
//! | 2   | load | A      | `-`                      |
//! | 3   | dump | B      | bytes in B's buffer      |
//! | 4   | load | B      | `-`                      |
//!
//! Each row is written as soon as its pass is timed. Buffers are cleared
//! only after all four rows are written, so each load
//! pass deserializes `repetitions` copies of the corpus.

use crate::buffer::ResultBuffer;
use crate::format::BenchFormat;
use crate::report::{self, Measurement, Pass};
use anyhow::{Context, Result};
use serbench_core::value::Value;
use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

/// Repetition counts used by the standard run.
pub const REPETITIONS: [u32; 4] = [10, 20, 50, 100];

/// Rows written per repetition count.
pub const ROWS_PER_REPETITION: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub repetitions: Vec<u32>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            repetitions: REPETITIONS.to_vec(),
        }
    }
}

/// Serialize every corpus record in order, appending each entry to `buffer`.
pub fn dump_pass(
    format: &dyn BenchFormat,
    corpus: &[Value],
    buffer: &mut ResultBuffer,
) -> Result<()> {
    for record in corpus {
        buffer.push(format.dump(record)?);
    }
    Ok(())
}

/// Deserialize every buffer entry in order and discard the result.
pub fn load_pass(format: &dyn BenchFormat, buffer: &ResultBuffer) -> Result<()> {
    for entry in buffer.entries() {
        black_box(format.load(entry)?);
    }
    Ok(())
}

/// One format under test together with the buffer its dump passes fill.
struct Lane<'a> {
    format: &'a dyn BenchFormat,
    buffer: ResultBuffer,
}

impl Lane<'_> {
    fn time_dump(&mut self, corpus: &[Value], repetitions: u32) -> Result<Measurement> {
        let start = Instant::now();
        for _ in 0..repetitions {
            dump_pass(self.format, corpus, &mut self.buffer)?;
        }
        let elapsed = start.elapsed();

        Ok(Measurement {
            pass: Pass::Dump,
            repetitions,
            format: self.format.name(),
            elapsed,
            length: Some(self.buffer.total_len()),
        })
    }

    fn time_load(&self, repetitions: u32) -> Result<Measurement> {
        let start = Instant::now();
        for _ in 0..repetitions {
            load_pass(self.format, &self.buffer)?;
        }
        let elapsed = start.elapsed();

        Ok(Measurement {
            pass: Pass::Load,
            repetitions,
            format: self.format.name(),
            elapsed,
            length: None,
        })
    }
}

/// Runs the dump/load comparison of two formats over one corpus.
///
/// The corpus is borrowed read-only for the whole run; the harness owns the
/// two result buffers.
pub struct Harness<'a> {
    corpus: &'a [Value],
    lanes: [Lane<'a>; 2],
}

impl<'a> Harness<'a> {
    pub fn new(
        corpus: &'a [Value],
        first: &'a dyn BenchFormat,
        second: &'a dyn BenchFormat,
    ) -> Self {
        let lane = |format: &'a dyn BenchFormat| Lane {
            format,
            buffer: ResultBuffer::new(),
        };
        Self {
            corpus,
            lanes: [lane(first), lane(second)],
        }
    }

    /// Measures the four rows for one repetition count, writing each to `out`
    /// as soon as it is timed, then clears both buffers.
    pub fn run_repetition<W: Write + ?Sized>(
        &mut self,
        repetitions: u32,
        out: &mut W,
    ) -> Result<Vec<Measurement>> {
        let mut rows = Vec::with_capacity(ROWS_PER_REPETITION);
        for lane in self.lanes.iter_mut() {
            let dump = lane.time_dump(self.corpus, repetitions)?;
            report::write_row(out, &dump).context("failed to write report row")?;
            rows.push(dump);

            let load = lane.time_load(repetitions)?;
            report::write_row(out, &load).context("failed to write report row")?;
            rows.push(load);
        }

        for lane in self.lanes.iter_mut() {
            lane.buffer.clear();
        }

        Ok(rows)
    }

    /// Writes the header, then four rows per configured repetition count.
    /// Returns every row.
    pub fn run<W: Write + ?Sized>(
        &mut self,
        config: &HarnessConfig,
        out: &mut W,
    ) -> Result<Vec<Measurement>> {
        report::write_header(out).context("failed to write report header")?;

        let mut all = Vec::with_capacity(config.repetitions.len() * ROWS_PER_REPETITION);
        for &repetitions in &config.repetitions {
            log::debug!(
                "Timing {} repetitions over {} records",
                repetitions,
                self.corpus.len()
            );
            all.extend(self.run_repetition(repetitions, out)?);
        }

        Ok(all)
    }
}
