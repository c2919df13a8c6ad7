use ahash::{AHashMap, AHashSet};
use library::Library;

/// The outcome of intersecting a read pair's R1 and R2 probe matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairMatch {
    /// Exactly one construct's probes were both found; this is the call.
    Unique(u32),
    /// More than one construct qualified; §7's `AmbiguousMatch` diagnostic.
    Ambiguous(Vec<u32>),
    /// Neither mate matched any construct's probe, or the two mates'
    /// matches do not intersect.
    None,
}

/// Two lookup tables (one per mate) mapping a construct's synthesized probe
/// sequence back to its construct id. Built once from a [`Library`] and
/// read-only thereafter.
#[derive(Debug, Clone)]
pub struct ProbeIndex {
    r1_map: AHashMap<String, AHashSet<u32>>,
    r2_map: AHashMap<String, AHashSet<u32>>,
}

impl ProbeIndex {
    /// Build the index from every construct's derived R1/R2 probes.
    #[must_use]
    pub fn build(library: &Library) -> ProbeIndex {
        let mut r1_map: AHashMap<String, AHashSet<u32>> = AHashMap::new();
        let mut r2_map: AHashMap<String, AHashSet<u32>> = AHashMap::new();
        for construct in &library.constructs {
            r1_map.entry(construct.r1_probe.clone()).or_default().insert(construct.construct_id);
            r2_map.entry(construct.r2_probe.clone()).or_default().insert(construct.construct_id);
        }
        ProbeIndex { r1_map, r2_map }
    }

    /// The union of construct ids whose R1 probe occurs as a substring of
    /// `read`. Naive O(|map| * |read|) substring scan; an implementation
    /// may swap this for an Aho-Corasick automaton without changing the
    /// observable result.
    #[must_use]
    pub fn lookup_r1(&self, read: &str) -> AHashSet<u32> {
        Self::lookup(&self.r1_map, read)
    }

    /// Symmetric to [`ProbeIndex::lookup_r1`], against the R2 probes.
    #[must_use]
    pub fn lookup_r2(&self, read: &str) -> AHashSet<u32> {
        Self::lookup(&self.r2_map, read)
    }

    fn lookup(map: &AHashMap<String, AHashSet<u32>>, read: &str) -> AHashSet<u32> {
        let mut hits = AHashSet::new();
        for (probe, ids) in map {
            if read.contains(probe.as_str()) {
                hits.extend(ids.iter().copied());
            }
        }
        hits
    }

    /// Classify a read pair: intersect the R1 and R2 matches. Exactly one
    /// shared construct id is a [`PairMatch::Unique`] call; zero or two-plus
    /// is [`PairMatch::Ambiguous`]/[`PairMatch::None`] respectively.
    #[must_use]
    pub fn classify_pair(&self, r1: &str, r2: &str) -> PairMatch {
        let r1_hits = self.lookup_r1(r1);
        if r1_hits.is_empty() {
            return PairMatch::None;
        }
        let r2_hits = self.lookup_r2(r2);
        let mut shared: Vec<u32> = r1_hits.intersection(&r2_hits).copied().collect();
        shared.sort_unstable();
        match shared.len() {
            0 => PairMatch::None,
            1 => PairMatch::Unique(shared[0]),
            _ => PairMatch::Ambiguous(shared),
        }
    }
}
