use crate::KmerSet;
use library::Library;

/// A set of every spacer sequence in the library plus the common spacer
/// length, used to recover which spacers (if any) occur in a read,
/// independent of the constants around them.
#[derive(Debug, Clone)]
pub struct SpacerIndex {
    set: KmerSet,
}

impl SpacerIndex {
    #[must_use]
    pub fn build(library: &Library) -> SpacerIndex {
        let sequences = library.constructs.iter().flat_map(|c| c.spacers.iter().map(|s| s.sequence.clone()));
        SpacerIndex { set: KmerSet::new(sequences, library.spacer_len) }
    }

    /// Walk `kmers(read, L_s)` in order, appending every library spacer
    /// found (duplicates permitted). `cap`, if given, halts enumeration
    /// after that many hits.
    #[must_use]
    pub fn find_spacers(&self, read: &str, cap: Option<usize>) -> Vec<String> {
        self.set.find(read, cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use library::{Constant, Spacer};

    fn lib() -> Library {
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
        Library::build(spacers, constants).unwrap()
    }

    #[test]
    fn a_library_spacer_finds_itself() {
        let idx = SpacerIndex::build(&lib());
        assert_eq!(idx.find_spacers("AAAAAA", None), vec!["AAAAAA"]);
    }

    #[test]
    fn non_member_sequence_yields_nothing() {
        let idx = SpacerIndex::build(&lib());
        assert!(idx.find_spacers("NNNNNN", None).is_empty());
    }
}
