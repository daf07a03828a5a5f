//! Integration tests: corpus generation, format round trips and the full
//! benchmark table.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serbench::format::binary::BincodeFormat;
use serbench::format::json::JsonFormat;
use serbench::format::BenchFormat;
use serbench::harness::{Harness, HarnessConfig, REPETITIONS};
use serbench::report::{Pass, HEADER};
use serbench_core::generator::{generate_corpus, CorpusParams};
use serbench_core::value::Value;

fn small_params() -> CorpusParams {
    CorpusParams {
        batches: 2,
        records_per_shape: 4,
    }
}

fn corpus(params: &CorpusParams) -> Vec<Value> {
    generate_corpus(&mut StdRng::seed_from_u64(0xC0FFEE), params).expect("generate corpus")
}

// ── Round trips ─────────────────────────────────────────────────────

#[test]
fn json_round_trips_standard_corpus() {
    let corpus = corpus(&CorpusParams::standard());
    let format = JsonFormat::new();
    for record in &corpus {
        let entry = format.dump(record).unwrap();
        assert_eq!(&format.load(&entry).unwrap(), record);
    }
}

#[test]
fn bincode_round_trips_standard_corpus() {
    let corpus = corpus(&CorpusParams::standard());
    let format = BincodeFormat::new();
    for record in &corpus {
        let entry = format.dump(record).unwrap();
        assert_eq!(&format.load(&entry).unwrap(), record);
    }
}

// ── Full run ────────────────────────────────────────────────────────

#[test]
fn standard_repetitions_produce_sixteen_rows() {
    let corpus = corpus(&small_params());
    let (json, bin) = (JsonFormat::new(), BincodeFormat::new());

    let mut out = Vec::new();
    let rows = Harness::new(&corpus, &json, &bin)
        .run(&HarnessConfig::default(), &mut out)
        .unwrap();
    assert_eq!(rows.len(), 16);

    let expected_order = [
        (Pass::Dump, "JSON"),
        (Pass::Load, "JSON"),
        (Pass::Dump, "Bincode"),
        (Pass::Load, "Bincode"),
    ];
    for (block, reps) in rows.chunks(4).zip(REPETITIONS) {
        for (row, (pass, format)) in block.iter().zip(expected_order) {
            assert_eq!(row.pass, pass);
            assert_eq!(row.format, format);
            assert_eq!(row.repetitions, reps);
            assert!(row.elapsed_secs() >= 0.0);
            match pass {
                Pass::Dump => assert!(row.length.unwrap() > 0),
                Pass::Load => assert_eq!(row.length, None),
            }
        }
    }

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2 + 16);
    assert_eq!(lines[0], HEADER);
    assert!(lines[1].is_empty());
    for line in &lines[2..] {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 5, "bad row {line:?}");
        let (_, decimals) = fields[3].split_once('.').expect("time has decimals");
        assert_eq!(decimals.len(), 3);
    }
}

#[test]
fn dump_lengths_grow_linearly_and_do_not_accumulate() {
    let corpus = corpus(&small_params());
    let (json, bin) = (JsonFormat::new(), BincodeFormat::new());
    let config = HarnessConfig {
        repetitions: vec![1, 3, 1],
    };

    let rows = Harness::new(&corpus, &json, &bin)
        .run(&config, &mut std::io::sink())
        .unwrap();

    let json_lengths: Vec<usize> = rows
        .iter()
        .filter(|r| r.pass == Pass::Dump && r.format == "JSON")
        .map(|r| r.length.unwrap())
        .collect();
    let one = json_lengths[0];
    assert_eq!(json_lengths, vec![one, one * 3, one]);

    let bin_lengths: Vec<usize> = rows
        .iter()
        .filter(|r| r.pass == Pass::Dump && r.format == "Bincode")
        .map(|r| r.length.unwrap())
        .collect();
    assert!(bin_lengths[0] < one);
}
