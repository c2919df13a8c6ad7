mod common;

use parser::{Command, ConcurrencyArgs, LibraryArgs, OutputArg, PairedReadArgs};
use pretty_assertions::assert_eq;

fn digits_to_nt(s: &str) -> String {
    s.chars().map(|c| match c { '0' => 'A', '1' => 'C', '2' => 'G', '3' => 'T', other => other }).collect()
}

#[test]
fn scenario_d_tuples_classifier_is_constant_agnostic() {
    let dir = tempfile::tempdir().unwrap();

    let mut spacer_rows = Vec::new();
    for cid in 0..4u32 {
        spacer_rows.push(format!("{}\t{cid}\t0", digits_to_nt(&format!("AAAA{cid}{cid}"))));
        spacer_rows.push(format!("{}\t{cid}\t1", digits_to_nt(&format!("CCCC{cid}{cid}"))));
        spacer_rows.push(format!("{}\t{cid}\t2", digits_to_nt(&format!("GGGG{cid}{cid}"))));
        spacer_rows.push(format!("{}\t{cid}\t3", digits_to_nt(&format!("TTTT{cid}{cid}"))));
    }
    let spacer_row_refs: Vec<&str> = spacer_rows.iter().map(String::as_str).collect();
    let constant_rows: Vec<&str> = vec!["ACAC\t0", "CAGT\t1", "GTGT\t2", "TGTG\t3"];

    let spacers = common::write_table(dir.path(), "spacers.tsv", &spacer_row_refs);
    let constants = common::write_table(dir.path(), "constants.tsv", &constant_rows);

    let lib = classifier::load_library(&LibraryArgs { spacers: spacers.clone(), constants: constants.clone() }).unwrap();
    let target = &lib.constructs[3];

    // Spacers 0,1 embedded in a mutated-constant R1; spacers 2,3 in R2.
    let r1_seq = format!("XXXX{}YYYY{}ZZZZ", target.spacers[0].sequence, target.spacers[1].sequence);
    let r2_seq = format!("XXXX{}YYYY{}ZZZZ", target.spacers[2].sequence, target.spacers[3].sequence);

    let r1 = common::write_fastq(dir.path(), "r1.fastq", &[("@pair0", &r1_seq)]);
    let r2 = common::write_fastq(dir.path(), "r2.fastq", &[("@pair0", &r2_seq)]);
    let output = dir.path().join("counts.tsv");

    let command = Command::Tuples {
        library: LibraryArgs { spacers, constants },
        reads: PairedReadArgs { r1, r2 },
        output: OutputArg { output: Some(output.clone()) },
        concurrency: ConcurrencyArgs { threads: 1 },
    };
    classifier::run(&command).unwrap();

    assert_eq!(common::read_to_string(&output), "ConstructID\tCounts\n3\t1\n");
}
