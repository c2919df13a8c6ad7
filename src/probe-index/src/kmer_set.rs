use ahash::AHashSet;
use seqops::kmers;

/// A fixed-length k-mer membership set: a set of sequences of length `k`
/// plus the discovery-order scanning operation shared by [`SpacerIndex`]
/// and the `describe` command's constant lookup.
///
/// [`SpacerIndex`]: crate::SpacerIndex
#[derive(Debug, Clone)]
pub struct KmerSet {
    sequences: AHashSet<String>,
    k: usize,
}

impl KmerSet {
    #[must_use]
    pub fn new<I, S>(sequences: I, k: usize) -> KmerSet
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KmerSet { sequences: sequences.into_iter().map(Into::into).collect(), k }
    }

    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    #[must_use]
    pub fn contains(&self, sequence: &str) -> bool {
        self.sequences.contains(sequence)
    }

    /// Walk `kmers(read, self.k)` in order, appending each member k-mer to
    /// the output (duplicates permitted, discovery order preserved). Stops
    /// early once `cap` hits have been collected, if given.
    #[must_use]
    pub fn find(&self, read: &str, cap: Option<usize>) -> Vec<String> {
        let mut hits = Vec::new();
        for kmer in kmers(read, self.k) {
            if self.sequences.contains(kmer) {
                hits.push(kmer.to_string());
                if cap.is_some_and(|c| hits.len() >= c) {
                    break;
                }
            }
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_member_kmers_in_order() {
        let set = KmerSet::new(["AAAAAA", "GGGGGG"], 6);
        let hits = set.find("NNAAAAAANNGGGGGGNN", None);
        assert_eq!(hits, vec!["AAAAAA", "GGGGGG"]);
    }

    #[test]
    fn find_respects_cap() {
        let set = KmerSet::new(["AA"], 2);
        let hits = set.find("AAAA", Some(1));
        assert_eq!(hits, vec!["AA"]);
    }

    #[test]
    fn a_bare_spacer_finds_itself() {
        let set = KmerSet::new(["ACGTAC"], 6);
        assert_eq!(set.find("ACGTAC", None), vec!["ACGTAC"]);
    }
}
