use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A generic writer targeting either a file or standard output, mirroring
/// the corpus's `Writer` (boxed `Write`, one line per `write_iter` item).
pub struct Writer {
    sink: BufWriter<Box<dyn Write>>,
}

impl Writer {
    /// # Errors
    /// Propagates [`std::io::Error`] if `path` cannot be created.
    pub fn new(path: Option<&Path>) -> io::Result<Writer> {
        let sink: Box<dyn Write> = match path {
            Some(path) => Box::new(File::create(path)?),
            None => Box::new(io::stdout()),
        };
        Ok(Writer { sink: BufWriter::new(sink) })
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.sink.write_all(line.as_bytes())?;
        self.sink.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

/// Write the §6 Count TSV: header `ConstructID\tCounts`, one row per
/// observed construct in ascending id order. Constructs never observed are
/// omitted entirely (not even as a zero row), per §4.5.
///
/// # Errors
/// Propagates [`std::io::Error`].
pub fn write_counts(path: Option<&Path>, counts: &BTreeMap<u32, u64>) -> io::Result<()> {
    let mut writer = Writer::new(path)?;
    writer.write_line("ConstructID\tCounts")?;
    for (id, count) in counts {
        writer.write_line(&format!("{id}\t{count}"))?;
    }
    writer.flush()
}

/// Write the §6 FASTA of synthesized construct sequences: `>cid_<id>\n<seq>\n`,
/// ids ascending.
///
/// # Errors
/// Propagates [`std::io::Error`].
pub fn write_fasta(path: Option<&Path>, library: &library::Library) -> io::Result<()> {
    let mut writer = Writer::new(path)?;
    for construct in &library.constructs {
        writer.write_line(&format!(">cid_{}", construct.construct_id))?;
        writer.write_line(&construct.full_sequence())?;
    }
    writer.flush()
}

/// One row of the §6 Describe TSV.
#[derive(Debug, Clone, Default)]
pub struct DescribeRow {
    pub index: u64,
    pub dr: [Option<String>; 6],
    pub spacer: [Option<String>; 6],
}

const DESCRIBE_HEADER: &str =
    "index\tdr1\tdr2\tdr3\tspacer1\tspacer2\tspacer3\tdr4\tdr5\tdr6\tspacer4\tspacer5\tspacer6";

/// Write the §6 Describe TSV. Field order in each row follows the header
/// exactly: `index, dr1..3, spacer1..3, dr4..6, spacer4..6`.
///
/// # Errors
/// Propagates [`std::io::Error`].
pub fn write_describe(path: Option<&Path>, rows: impl IntoIterator<Item = DescribeRow>) -> io::Result<()> {
    let mut writer = Writer::new(path)?;
    writer.write_line(DESCRIBE_HEADER)?;
    for row in rows {
        let field = |opt: &Option<String>| opt.clone().unwrap_or_default();
        let line = format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.index,
            field(&row.dr[0]), field(&row.dr[1]), field(&row.dr[2]),
            field(&row.spacer[0]), field(&row.spacer[1]), field(&row.spacer[2]),
            field(&row.dr[3]), field(&row.dr[4]), field(&row.dr[5]),
            field(&row.spacer[3]), field(&row.spacer[4]), field(&row.spacer[5]),
        );
        writer.write_line(&line)?;
    }
    writer.flush()
}

/// One row of the `spacers` command's per-read report (§9's open question,
/// resolved in `SPEC_FULL.md`): `record_index<TAB>spacer_sequence<TAB>count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacerReportRow {
    pub record_index: u64,
    pub spacer_sequence: String,
    pub count: u64,
}

/// # Errors
/// Propagates [`std::io::Error`].
pub fn write_spacer_report(path: Option<&Path>, rows: impl IntoIterator<Item = SpacerReportRow>) -> io::Result<()> {
    let mut writer = Writer::new(path)?;
    writer.write_line("record_index\tspacer_sequence\tcount")?;
    for row in rows {
        writer.write_line(&format!("{}\t{}\t{}", row.record_index, row.spacer_sequence, row.count))?;
    }
    writer.flush()
}
