mod common;

use parser::{Command, ConcurrencyArgs, LibraryArgs, OutputArg, PairedReadArgs};
use pretty_assertions::assert_eq;

/// R1 has 10 records, R2 only 7: the paired reader must stop at the shorter
/// stream, so only 7 pairs are ever classified. Every record on both sides
/// is the same construct's probe, so the resulting count doubles as a
/// record-pair count: 7, not 10.
#[test]
fn scenario_f_truncated_r2_stream_caps_pairs_processed() {
    let dir = tempfile::tempdir().unwrap();
    let spacers = common::write_table(dir.path(), "spacers.tsv", common::SCENARIO_A_SPACERS);
    let constants = common::write_table(dir.path(), "constants.tsv", common::SCENARIO_A_CONSTANTS);

    let lib = classifier::load_library(&LibraryArgs { spacers: spacers.clone(), constants: constants.clone() }).unwrap();
    let construct = &lib.constructs[0];

    let r1_records: Vec<(String, String)> =
        (0..10).map(|i| (format!("@r{i}"), construct.r1_probe.clone())).collect();
    let r2_records: Vec<(String, String)> = (0..7).map(|i| (format!("@r{i}"), construct.r2_probe.clone())).collect();
    let r1_refs: Vec<(&str, &str)> = r1_records.iter().map(|(h, s)| (h.as_str(), s.as_str())).collect();
    let r2_refs: Vec<(&str, &str)> = r2_records.iter().map(|(h, s)| (h.as_str(), s.as_str())).collect();

    let r1 = common::write_fastq(dir.path(), "r1.fastq", &r1_refs);
    let r2 = common::write_fastq(dir.path(), "r2.fastq", &r2_refs);
    let output = dir.path().join("counts.tsv");

    let command = Command::Constructs {
        library: LibraryArgs { spacers, constants },
        reads: PairedReadArgs { r1, r2 },
        output: OutputArg { output: Some(output.clone()) },
        concurrency: ConcurrencyArgs { threads: 1 },
    };
    classifier::run(&command).unwrap();

    assert_eq!(common::read_to_string(&output), "ConstructID\tCounts\n0\t7\n");
}
