use plex_io::{DescribeRow, FastqSource, PairedFastqReader, PlexIoError, SpacerReportRow};
use probe_index::{KmerSet, SpacerIndex};

/// Append `sequence` to `hits`, merging it into an existing entry (by
/// sequence) if one is already present, preserving first-discovery order —
/// the `spacers` command's per-pair row stream is small enough per pair
/// (at most `2P` hits) that a linear scan beats pulling in an ordered-map
/// dependency for it.
fn bump(hits: &mut Vec<(String, u64)>, sequence: String) {
    match hits.iter_mut().find(|(s, _)| *s == sequence) {
        Some((_, count)) => *count += 1,
        None => hits.push((sequence, 1)),
    }
}

/// Stream the `spacers` command's report: every distinct spacer sequence
/// found in either mate of each record pair, with its occurrence count
/// across both mates, in first-discovery order. Pairs with no hits emit no
/// rows.
///
/// # Errors
/// Propagates [`PlexIoError`] from the underlying FASTQ streams.
pub fn spacer_report<A, B>(
    reads: &mut PairedFastqReader<A, B>,
    spacer_index: &SpacerIndex,
) -> Result<Vec<SpacerReportRow>, PlexIoError>
where
    A: FastqSource,
    B: FastqSource,
{
    let mut rows = Vec::new();
    let mut record_index = 0u64;
    while let Some((r1, r2)) = reads.next_pair()? {
        let mut hits: Vec<(String, u64)> = Vec::new();
        for sequence in spacer_index.find_spacers(&r1.sequence, None) {
            bump(&mut hits, sequence);
        }
        for sequence in spacer_index.find_spacers(&r2.sequence, None) {
            bump(&mut hits, sequence);
        }
        for (spacer_sequence, count) in hits {
            rows.push(SpacerReportRow { record_index, spacer_sequence, count });
        }
        record_index += 1;
    }
    Ok(rows)
}

fn capped_fields(mut hits: Vec<String>) -> [Option<String>; 3] {
    hits.truncate(3);
    let mut fields: [Option<String>; 3] = Default::default();
    for (slot, hit) in fields.iter_mut().zip(hits) {
        *slot = Some(hit);
    }
    fields
}

/// Build the `describe` command's per-pair report: up to 3 constants and up
/// to 3 spacers located in each mate, with R2's lists reversed before
/// output, per §6's Describe TSV layout.
///
/// # Errors
/// Propagates [`PlexIoError`] from the underlying FASTQ streams.
pub fn describe_report<A, B>(
    reads: &mut PairedFastqReader<A, B>,
    constant_index: &KmerSet,
    spacer_index: &SpacerIndex,
) -> Result<Vec<DescribeRow>, PlexIoError>
where
    A: FastqSource,
    B: FastqSource,
{
    let mut rows = Vec::new();
    let mut index = 0u64;
    while let Some((r1, r2)) = reads.next_pair()? {
        let mut dr: [Option<String>; 6] = Default::default();
        let mut spacer: [Option<String>; 6] = Default::default();

        dr[0..3].clone_from_slice(&capped_fields(constant_index.find(&r1.sequence, Some(3))));
        spacer[0..3].clone_from_slice(&capped_fields(spacer_index.find_spacers(&r1.sequence, Some(3))));

        let mut r2_constants = constant_index.find(&r2.sequence, Some(3));
        r2_constants.reverse();
        let mut r2_spacers = spacer_index.find_spacers(&r2.sequence, Some(3));
        r2_spacers.reverse();

        dr[3..6].clone_from_slice(&capped_fields(r2_constants));
        spacer[3..6].clone_from_slice(&capped_fields(r2_spacers));

        rows.push(DescribeRow { index, dr, spacer });
        index += 1;
    }
    Ok(rows)
}

/// Build the `KmerSet` of every constant sequence in the library, used by
/// the `describe` command. Every construct shares the same ordered prefix
/// of the library's constants, so the first construct's is representative.
#[must_use]
pub fn build_constant_set(library: &library::Library) -> KmerSet {
    let sequences = library.constructs[0].constants.iter().map(|c| c.sequence.clone());
    KmerSet::new(sequences, library.constant_len)
}
