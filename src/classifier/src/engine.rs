use std::collections::BTreeMap;

use indicatif::ProgressBar;
use log::warn;
use plex_io::{FastqRecord, FastqSource, PairedFastqReader, PlexIoError};
use probe_index::{PairMatch, ProbeIndex, SpacerIndex, TupleIndex};
use rayon::prelude::*;

use crate::diagnostics::Diagnostics;

type Counts = BTreeMap<u32, u64>;

fn merge_counts(mut a: Counts, b: Counts) -> Counts {
    for (id, count) in b {
        *a.entry(id).or_insert(0) += count;
    }
    a
}

fn record_match(counts: &mut Counts, diagnostics: &mut Diagnostics, outcome: PairMatch) {
    diagnostics.record_processed();
    match outcome {
        PairMatch::Unique(id) => {
            *counts.entry(id).or_insert(0) += 1;
            diagnostics.record_classified();
        }
        PairMatch::Ambiguous(ids) => warn!("ambiguous match across constructs {ids:?}, pair left unclassified"),
        PairMatch::None => {}
    }
}

/// Drain `reads` into bounded batches, classifying each with `classify` and
/// folding the per-batch results into one running total. When `threads <= 1`
/// the batch is classified in-line; otherwise it is sharded across a
/// `rayon` thread pool and fold-merged, per `SPEC_FULL.md` §4.5.
fn stream<A, B>(
    reads: &mut PairedFastqReader<A, B>,
    threads: usize,
    progress: Option<&ProgressBar>,
    classify_pair: impl Fn(&FastqRecord, &FastqRecord) -> PairMatch + Sync,
) -> Result<(Counts, Diagnostics), PlexIoError>
where
    A: FastqSource,
    B: FastqSource,
{
    const BATCH_SIZE: usize = 4096;
    let mut counts = Counts::new();
    let mut diagnostics = Diagnostics::default();

    if threads <= 1 {
        while let Some((r1, r2)) = reads.next_pair()? {
            record_match(&mut counts, &mut diagnostics, classify_pair(&r1, &r2));
            if let Some(pb) = progress {
                pb.inc(1);
            }
        }
        return Ok((counts, diagnostics));
    }

    loop {
        let mut batch = Vec::with_capacity(BATCH_SIZE);
        while batch.len() < BATCH_SIZE {
            match reads.next_pair()? {
                Some(pair) => batch.push(pair),
                None => break,
            }
        }
        if batch.is_empty() {
            break;
        }
        let batch_len = batch.len();
        let (batch_counts, batch_diagnostics) = batch
            .par_iter()
            .fold(
                || (Counts::new(), Diagnostics::default()),
                |(mut c, mut d), (r1, r2)| {
                    record_match(&mut c, &mut d, classify_pair(r1, r2));
                    (c, d)
                },
            )
            .reduce(
                || (Counts::new(), Diagnostics::default()),
                |a, b| (merge_counts(a.0, b.0), a.1.merge(b.1)),
            );
        counts = merge_counts(counts, batch_counts);
        diagnostics = diagnostics.merge(batch_diagnostics);
        if let Some(pb) = progress {
            pb.inc(batch_len as u64);
        }
        if batch_len < BATCH_SIZE {
            break;
        }
    }
    Ok((counts, diagnostics))
}

/// Classify every record pair by probe-substring match (the `constructs` command).
///
/// # Errors
/// Propagates [`PlexIoError`] from the underlying FASTQ streams.
pub fn classify_constructs<A, B>(
    reads: &mut PairedFastqReader<A, B>,
    index: &ProbeIndex,
    threads: usize,
    progress: Option<&ProgressBar>,
) -> Result<(Counts, Diagnostics), PlexIoError>
where
    A: FastqSource,
    B: FastqSource,
{
    stream(reads, threads, progress, |r1, r2| index.classify_pair(&r1.sequence, &r2.sequence))
}

/// Classify every record pair by recovered spacer tuple (the `tuples` command).
///
/// # Errors
/// Propagates [`PlexIoError`] from the underlying FASTQ streams.
pub fn classify_tuples<A, B>(
    reads: &mut PairedFastqReader<A, B>,
    tuple_index: &TupleIndex,
    spacer_index: &SpacerIndex,
    threads: usize,
    progress: Option<&ProgressBar>,
) -> Result<(Counts, Diagnostics), PlexIoError>
where
    A: FastqSource,
    B: FastqSource,
{
    stream(reads, threads, progress, |r1, r2| {
        match tuple_index.classify_pair_by_tuple(&r1.sequence, &r2.sequence, spacer_index) {
            Some(id) => PairMatch::Unique(id),
            None => PairMatch::None,
        }
    })
}
