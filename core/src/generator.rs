//! Synthetic record generation.
//!
//! Builds the three record shapes (sequence, flat mapping, nested mapping)
//! out of random windows of the placeholder text in [`crate::lipsum`].
//! Randomness is injected so callers can pick a fixed seed for reproducible
//! corpora.

use crate::lipsum;
use crate::string_operations::capitalize;
use crate::value::{Key, Value};
use anyhow::{bail, Result};
use rand::Rng;
use std::collections::BTreeMap;

/// Number of records produced per batch: one of each shape.
pub const SHAPES_PER_BATCH: usize = 3;

/// Controls how large the generated corpus is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusParams {
    /// How many record triples to generate.
    pub batches: usize,
    /// The `count` passed to [`generate_record`] for every batch.
    pub records_per_shape: usize,
}

impl CorpusParams {
    /// 10 batches of 50 entries per shape: 30 records in total.
    pub fn standard() -> Self {
        Self {
            batches: 10,
            records_per_shape: 50,
        }
    }

    pub fn total_records(&self) -> usize {
        self.batches * SHAPES_PER_BATCH
    }
}

/// One record of each shape, as produced by [`generate_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTriple {
    pub sequence: Value,
    pub flat: Value,
    pub nested: Value,
}

impl RecordTriple {
    pub fn into_records(self) -> [Value; SHAPES_PER_BATCH] {
        [self.sequence, self.flat, self.nested]
    }
}

/// Picks `word_count` consecutive words at a random offset, joins them with
/// single spaces and capitalizes the result.
///
/// The start offset is drawn from `0..total_words - word_count`, so asking for
/// the whole text (or more) is an error.
pub fn random_phrase<R: Rng + ?Sized>(rng: &mut R, word_count: usize) -> Result<String> {
    let words = lipsum::words();
    if word_count >= words.len() {
        bail!(
            "cannot take a {word_count}-word phrase from a text of {} words",
            words.len()
        );
    }

    let max_start = words.len() - word_count;
    let start = rng.gen_range(0..max_start);

    Ok(capitalize(&words[start..start + word_count].join(" ")))
}

fn phrase<R: Rng + ?Sized>(rng: &mut R, word_count: usize) -> Result<Value> {
    random_phrase(rng, word_count).map(Value::Text)
}

/// Generates a sequence, a flat mapping and a nested mapping, each from
/// `count` random phrases.
///
/// Mapping keys are single random words, so a later entry can overwrite an
/// earlier one and both mappings may end up with fewer than `count` entries.
pub fn generate_record<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<RecordTriple> {
    let mut sequence = Vec::with_capacity(count);
    let mut flat = BTreeMap::new();
    let mut nested = BTreeMap::new();

    for i in 0..count as u64 {
        let value = phrase(rng, 10)?;
        flat.insert(Key::Text(random_phrase(rng, 1)?), value);

        sequence.push(phrase(rng, 3)?);

        let value = nested_entry(rng, i)?;
        nested.insert(Key::Text(random_phrase(rng, 1)?), value);
    }

    Ok(RecordTriple {
        sequence: Value::List(sequence),
        flat: Value::Map(flat),
        nested: Value::Map(nested),
    })
}

/// `{i: word, i+1: [2, 4, 3 words], i+2: {i: 3 words, i+1: 4 words, i+2: [2, 3 words]}}`
fn nested_entry<R: Rng + ?Sized>(rng: &mut R, i: u64) -> Result<Value> {
    let mut entry = BTreeMap::new();
    entry.insert(Key::Int(i), phrase(rng, 1)?);
    entry.insert(
        Key::Int(i + 1),
        Value::List(vec![phrase(rng, 2)?, phrase(rng, 4)?, phrase(rng, 3)?]),
    );

    let mut innermost = BTreeMap::new();
    innermost.insert(Key::Int(i), phrase(rng, 3)?);
    innermost.insert(Key::Int(i + 1), phrase(rng, 4)?);
    innermost.insert(
        Key::Int(i + 2),
        Value::List(vec![phrase(rng, 2)?, phrase(rng, 3)?]),
    );
    entry.insert(Key::Int(i + 2), Value::Map(innermost));

    Ok(Value::Map(entry))
}

/// Generates `params.batches` record triples and flattens them into one
/// ordered corpus: sequence, flat, nested, sequence, flat, nested, ...
pub fn generate_corpus<R: Rng + ?Sized>(rng: &mut R, params: &CorpusParams) -> Result<Vec<Value>> {
    let mut corpus = Vec::with_capacity(params.total_records());
    for _ in 0..params.batches {
        corpus.extend(generate_record(rng, params.records_per_shape)?.into_records());
    }

    log::debug!(
        "Generated corpus of {} records ({} batches x {} entries)",
        corpus.len(),
        params.batches,
        params.records_per_shape
    );

    Ok(corpus)
}
