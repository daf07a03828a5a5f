//! Report module: tab-separated benchmark rows.

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

pub const HEADER: &str = "Dir\tEntries\tMethod\tTime\tLength";

/// Placeholder printed in the Length column of load rows.
pub const NO_LENGTH: &str = "-";

/// Which direction a pass serializes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Dump,
    Load,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Dump => f.write_str("dump"),
            Pass::Load => f.write_str("load"),
        }
    }
}

/// One timed (pass, repetitions, format) measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub pass: Pass,
    pub repetitions: u32,
    pub format: &'static str,
    pub elapsed: Duration,
    /// Total serialized length after the pass; `None` for load passes.
    pub length: Option<usize>,
}

impl Measurement {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Writes the header line followed by a blank line.
pub fn write_header<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    writeln!(out)
}

pub fn format_row(m: &Measurement) -> String {
    let length = match m.length {
        Some(len) => len.to_string(),
        None => NO_LENGTH.to_string(),
    };
    format!(
        "{}\t{}\t{}\t{:.3}\t{}",
        m.pass,
        m.repetitions,
        m.format,
        m.elapsed_secs(),
        length
    )
}

/// Writes one row and flushes so it shows up before the next pass starts.
pub fn write_row<W: Write + ?Sized>(out: &mut W, row: &Measurement) -> io::Result<()> {
    writeln!(out, "{}", format_row(row))?;
    out.flush()
}
