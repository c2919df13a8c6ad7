use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `lines` (already tab-separated) to `name` inside `dir`, one per line.
pub fn write_table(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(f, "{line}").unwrap();
    }
    path
}

/// Write a plain FASTQ file of `(header, sequence)` records to `name` inside `dir`.
pub fn write_fastq(dir: &Path, name: &str, records: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    for (header, sequence) in records {
        writeln!(f, "{header}").unwrap();
        writeln!(f, "{sequence}").unwrap();
        writeln!(f, "+").unwrap();
        writeln!(f, "{}", "I".repeat(sequence.len())).unwrap();
    }
    path
}

pub fn read_to_string(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

/// Scenario A's library tables (4-plex, single construct).
pub const SCENARIO_A_SPACERS: &[&str] = &["AAAAAA\t0\t0", "CCCCCC\t0\t1", "GGGGGG\t0\t2", "TTTTTT\t0\t3"];
pub const SCENARIO_A_CONSTANTS: &[&str] = &["ACAC\t0", "CAGT\t1", "GTGT\t2", "TGTG\t3"];
