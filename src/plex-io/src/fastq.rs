use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use mockall::automock;

use crate::error::PlexIoError;

/// One parsed FASTQ record. Only the header and sequence lines are kept;
/// the separator and quality lines are read and discarded per §6.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub header: String,
    pub sequence: String,
}

/// A source of successive FASTQ records. Abstracts over plain/gzip files so
/// the streaming engine in `classifier` can be tested against an in-memory
/// mock instead of real files.
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait FastqSource {
    /// Read the next record, or `Ok(None)` at a clean end of stream.
    ///
    /// # Errors
    /// Returns [`PlexIoError`] on I/O failure or a truncated record (a
    /// stream that ends partway through a 4-line record).
    fn next_record(&mut self) -> Result<Option<FastqRecord>, PlexIoError>;
}

/// Open a FASTQ file, transparently decompressing it if `path` ends in
/// `.gz`. Uses a multi-member gzip decoder so concatenated `.fastq.gz`
/// files (the common output of sequencer demultiplexing) decode in full,
/// not just their first member.
///
/// # Errors
/// [`PlexIoError::FileNotFound`] if `path` cannot be opened.
pub fn open_fastq(path: &Path) -> Result<FastqFileReader, PlexIoError> {
    let file = File::open(path).map_err(|source| PlexIoError::FileNotFound { path: path.to_path_buf(), source })?;
    let source: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(FastqFileReader { source, path: path.to_path_buf() })
}

/// A [`FastqSource`] backed by a plain or gzip-decompressed file.
pub struct FastqFileReader {
    source: Box<dyn BufRead>,
    path: PathBuf,
}

impl FastqFileReader {
    fn read_line(&mut self) -> Result<Option<String>, PlexIoError> {
        let mut buf = String::new();
        let n = self
            .source
            .read_line(&mut buf)
            .map_err(|source| PlexIoError::TruncatedGzip { path: self.path.clone(), source })?;
        if n == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}

impl FastqSource for FastqFileReader {
    fn next_record(&mut self) -> Result<Option<FastqRecord>, PlexIoError> {
        let Some(header) = self.read_line()? else {
            return Ok(None); // clean end of stream between records
        };
        let malformed = || PlexIoError::MalformedRow {
            path: self.path.clone(),
            line: header.clone(),
            reason: "truncated FASTQ record (expected 4 lines)".to_string(),
        };
        let sequence = self.read_line()?.ok_or_else(malformed)?;
        let _separator = self.read_line()?.ok_or_else(malformed)?;
        let _quality = self.read_line()?.ok_or_else(malformed)?;
        Ok(Some(FastqRecord { header, sequence }))
    }
}

/// Walks two [`FastqSource`]s in lockstep, stopping at the shorter of the
/// two per §4.5's input-length tolerance.
pub struct PairedFastqReader<A, B> {
    r1: A,
    r2: B,
}

impl<A: FastqSource, B: FastqSource> PairedFastqReader<A, B> {
    pub fn new(r1: A, r2: B) -> Self {
        PairedFastqReader { r1, r2 }
    }

    /// Read the next synchronized record pair, or `Ok(None)` once either
    /// stream is exhausted.
    ///
    /// # Errors
    /// Propagates [`PlexIoError`] from either underlying source.
    pub fn next_pair(&mut self) -> Result<Option<(FastqRecord, FastqRecord)>, PlexIoError> {
        match (self.r1.next_record()?, self.r2.next_record()?) {
            (Some(a), Some(b)) => Ok(Some((a, b))),
            _ => Ok(None),
        }
    }
}
