//! External-interface adapters for the core engine: TSV table parsing,
//! FASTQ reading (plain or gzip), and TSV/FASTA output writers. Deliberately
//! outside "the core" per §1 — byte-level parsing and gzip framing.

mod error;
mod fastq;
mod table;
mod writer;

pub use error::PlexIoError;
pub use fastq::{open_fastq, FastqFileReader, FastqRecord, FastqSource, PairedFastqReader};
#[cfg(any(test, feature = "mock"))]
pub use fastq::MockFastqSource;
pub use table::{read_constant_table, read_spacer_table};
pub use writer::{write_counts, write_describe, write_fasta, write_spacer_report, DescribeRow, SpacerReportRow, Writer};
