//! The in-memory data model for a library of multiplexed CRISPR constructs:
//! [`Spacer`], [`Constant`], and the derived [`Construct`], plus the
//! [`Library::build`] assembly step that turns parsed tables into a
//! validated, read-only library.

mod constant;
mod construct;
mod error;
mod spacer;

pub use constant::Constant;
pub use construct::{take_count, Construct};
pub use error::LibraryError;
pub use spacer::Spacer;

/// A complete, validated library: all constructs, plus the common spacer
/// and constant lengths and the inferred plexity shared by every construct.
#[derive(Debug, Clone)]
pub struct Library {
    pub constructs: Vec<Construct>,
    pub plexity: usize,
    pub spacer_len: usize,
    pub constant_len: usize,
}

impl Library {
    /// Assemble a [`Library`] from the raw, unsorted rows parsed from the
    /// spacer and constant tables.
    ///
    /// # Errors
    /// Returns [`LibraryError`] if the tables are internally inconsistent:
    /// mismatched sequence lengths, a plexity outside `3..=10`, a spacer
    /// count that isn't a multiple of the inferred plexity, too few
    /// constants, a non-nucleotide character, or spacers that are not
    /// contiguous runs of one construct in `variant_id` order.
    pub fn build(mut spacers: Vec<Spacer>, mut constants: Vec<Constant>) -> Result<Library, LibraryError> {
        if spacers.is_empty() {
            return Err(LibraryError::EmptyLibrary);
        }

        let spacer_len = spacers[0].sequence.len();
        for s in &spacers {
            if s.sequence.len() != spacer_len {
                return Err(LibraryError::MismatchedSpacerLength {
                    sequence: s.sequence.clone(),
                    expected: spacer_len,
                    actual: s.sequence.len(),
                });
            }
            if let Some(c) = s.sequence.chars().find(|c| !seqops::is_nucleotide(*c)) {
                return Err(LibraryError::NonNucleotide(c));
            }
        }

        let constant_len = constants.first().map(|c| c.sequence.len()).unwrap_or(0);
        for c in &constants {
            if c.sequence.len() != constant_len {
                return Err(LibraryError::MismatchedConstantLength {
                    sequence: c.sequence.clone(),
                    expected: constant_len,
                    actual: c.sequence.len(),
                });
            }
            if let Some(bad) = c.sequence.chars().find(|c| !seqops::is_nucleotide(*c)) {
                return Err(LibraryError::NonNucleotide(bad));
            }
        }

        // Sort by (construct_id, variant_id) per §9's design note: probe
        // derivation is order-sensitive.
        spacers.sort_by_key(|s| (s.construct_id, s.variant_id));
        constants.sort_by_key(|c| c.position_id);

        let plexity = infer_plexity(&spacers)?;
        if spacers.len() % plexity != 0 {
            return Err(LibraryError::SpacerCountNotMultiple { count: spacers.len(), plexity });
        }
        if constants.len() < plexity {
            return Err(LibraryError::InsufficientConstants { need: plexity, have: constants.len() });
        }

        let n = spacers.len() / plexity;
        let mut constructs = Vec::with_capacity(n);
        for (i, chunk) in spacers.chunks(plexity).enumerate() {
            let construct_id = i as u32;
            for (j, s) in chunk.iter().enumerate() {
                if s.variant_id != j as u32 || s.construct_id != construct_id {
                    return Err(LibraryError::InconsistentSpacerOrdering {
                        construct_id,
                        expected_variant_id: j as u32,
                        actual_variant_id: s.variant_id,
                        actual_construct_id: s.construct_id,
                    });
                }
            }
            let chunk_constants: Vec<Constant> = constants.iter().take(plexity).cloned().collect();
            let (r1_probe, r2_probe) = construct::derive_probes(chunk, &chunk_constants)?;
            constructs.push(Construct {
                construct_id,
                spacers: chunk.to_vec(),
                constants: chunk_constants,
                r1_probe,
                r2_probe,
            });
        }

        Ok(Library { constructs, plexity, spacer_len, constant_len })
    }

    #[must_use]
    pub fn construct_count(&self) -> usize {
        self.constructs.len()
    }
}

/// Infer the plexity `P` from the leading run of equal `construct_id` in a
/// sorted spacer list, per §4.2.
fn infer_plexity(sorted_spacers: &[Spacer]) -> Result<usize, LibraryError> {
    let first_id = sorted_spacers[0].construct_id;
    let run_len = sorted_spacers.iter().take_while(|s| s.construct_id == first_id).count();
    if (3..=10).contains(&run_len) {
        Ok(run_len)
    } else {
        Err(LibraryError::PlexityOutOfRange { run_len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scenario_a() -> (Vec<Spacer>, Vec<Constant>) {
        let spacers = vec![
            Spacer::new("AAAAAA", 0, 0),
            Spacer::new("CCCCCC", 0, 1),
            Spacer::new("GGGGGG", 0, 2),
            Spacer::new("TTTTTT", 0, 3),
        ];
        let constants = vec![
            Constant::new("ACAC", 0),
            Constant::new("CAGT", 1),
            Constant::new("GTGT", 2),
            Constant::new("TGTG", 3),
        ];
        (spacers, constants)
    }

    #[test]
    fn scenario_a_builds_single_construct() {
        let (spacers, constants) = scenario_a();
        let lib = Library::build(spacers, constants).unwrap();
        assert_eq!(lib.plexity, 4);
        assert_eq!(lib.construct_count(), 1);
        let c = &lib.constructs[0];
        assert_eq!(c.construct_id, 0);
        assert_eq!(c.r1_probe, "ACACAAAAAACAGTCCCCCC");
        assert_eq!(c.r2_probe, seqops::reverse_complement("GTGTGGGGGGTGTGTTTTTT").unwrap());
        assert_eq!(c.full_sequence(), "ACACAAAAAACAGTCCCCCCGTGTGGGGGGTGTGTTTTTT");
    }

    #[test]
    fn probe_lengths_match_take_count_formula() {
        let (spacers, constants) = scenario_a();
        let lib = Library::build(spacers, constants).unwrap();
        let c = &lib.constructs[0];
        let t = take_count(4).unwrap();
        assert_eq!(c.r1_probe.len(), t * (lib.constant_len + lib.spacer_len));
        assert_eq!(c.r2_probe.len(), t * (lib.constant_len + lib.spacer_len));
    }

    #[test]
    fn rejects_plexity_out_of_range() {
        let spacers = vec![Spacer::new("AA", 0, 0), Spacer::new("CC", 0, 1)];
        let constants = vec![Constant::new("GG", 0), Constant::new("TT", 1)];
        let err = Library::build(spacers, constants).unwrap_err();
        assert_eq!(err, LibraryError::PlexityOutOfRange { run_len: 2 });
    }

    #[test]
    fn rejects_spacer_count_not_multiple_of_plexity() {
        // Plexity inferred as 3 (first run), but 7 total spacers.
        let mut spacers = vec![
            Spacer::new("AAA", 0, 0),
            Spacer::new("CCC", 0, 1),
            Spacer::new("GGG", 0, 2),
            Spacer::new("TTT", 1, 0),
            Spacer::new("AAT", 1, 1),
            Spacer::new("ACA", 1, 2),
            Spacer::new("ACC", 2, 0),
        ];
        spacers.sort_by_key(|s| (s.construct_id, s.variant_id));
        let constants = vec![Constant::new("GGGG", 0), Constant::new("TTTT", 1), Constant::new("AAAA", 2)];
        let err = Library::build(spacers, constants).unwrap_err();
        assert_eq!(err, LibraryError::SpacerCountNotMultiple { count: 7, plexity: 3 });
    }

    #[test]
    fn rejects_mismatched_spacer_length() {
        let spacers = vec![Spacer::new("AAAA", 0, 0), Spacer::new("CC", 0, 1), Spacer::new("GG", 0, 2)];
        let constants = vec![Constant::new("GG", 0), Constant::new("TT", 1), Constant::new("AA", 2)];
        assert!(matches!(Library::build(spacers, constants), Err(LibraryError::MismatchedSpacerLength { .. })));
    }

    #[test]
    fn rejects_non_nucleotide_spacer() {
        let spacers = vec![Spacer::new("AAN", 0, 0), Spacer::new("CCC", 0, 1), Spacer::new("GGG", 0, 2)];
        let constants = vec![Constant::new("GG", 0), Constant::new("TT", 1), Constant::new("AA", 2)];
        assert_eq!(Library::build(spacers, constants).unwrap_err(), LibraryError::NonNucleotide('N'));
    }

    fn base4_seq(mut n: u32, len: usize) -> String {
        let bases = ['A', 'C', 'G', 'T'];
        let mut out = vec!['A'; len];
        for slot in out.iter_mut().rev() {
            *slot = bases[(n % 4) as usize];
            n /= 4;
        }
        out.into_iter().collect()
    }

    #[test]
    fn multiple_constructs_get_contiguous_ids() {
        let mut spacers = Vec::new();
        for cid in 0..3u32 {
            for vid in 0..3u32 {
                spacers.push(Spacer::new(base4_seq(cid * 3 + vid, 4), cid, vid));
            }
        }
        let constants = vec![Constant::new("GGGG", 0), Constant::new("TTTT", 1), Constant::new("AAAA", 2)];
        let lib = Library::build(spacers, constants).unwrap();
        assert_eq!(lib.construct_count(), 3);
        for (i, c) in lib.constructs.iter().enumerate() {
            assert_eq!(c.construct_id, i as u32);
        }
    }
}
