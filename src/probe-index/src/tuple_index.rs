use ahash::AHashMap;
use library::Library;

use crate::{ProbeIndexError, SpacerIndex};

/// Identifies a construct from the ordered tuple of all `P` of its spacers,
/// independent of the constants. Only buildable for plexity 4 or 6.
#[derive(Debug, Clone)]
pub struct TupleIndex {
    /// Number of consecutive spacers drawn from each mate (`P / 2`).
    window: usize,
    tuple_map: AHashMap<Vec<String>, u32>,
}

impl TupleIndex {
    /// # Errors
    /// Returns [`ProbeIndexError::UnsupportedPlexity`] unless
    /// `library.plexity` is 4 or 6.
    pub fn build(library: &Library) -> Result<TupleIndex, ProbeIndexError> {
        if library.plexity != 4 && library.plexity != 6 {
            return Err(ProbeIndexError::UnsupportedPlexity { actual: library.plexity });
        }
        let window = library.plexity / 2;
        let mut tuple_map = AHashMap::new();
        for construct in &library.constructs {
            let tuple: Vec<String> = construct.spacers.iter().map(|s| s.sequence.clone()).collect();
            tuple_map.insert(tuple, construct.construct_id);
        }
        Ok(TupleIndex { window, tuple_map })
    }

    /// Identify a construct by recovering its ordered spacer tuple from the
    /// two reads independently of the constants (§4.4). For plexity 4,
    /// slides consecutive pairs over each mate's discovered spacers; for
    /// plexity 6, consecutive triples. Returns the first construct id found
    /// in `r1`-outer, `r2`-inner scan order.
    #[must_use]
    pub fn classify_pair_by_tuple(&self, r1: &str, r2: &str, spacer_index: &SpacerIndex) -> Option<u32> {
        let s1 = spacer_index.find_spacers(r1, None);
        let s2 = spacer_index.find_spacers(r2, None);
        let w = self.window;
        if s1.len() < w || s2.len() < w {
            return None;
        }
        for i in 0..=(s1.len() - w) {
            for j in 0..=(s2.len() - w) {
                let mut tuple: Vec<String> = s1[i..i + w].to_vec();
                tuple.extend(s2[j..j + w].iter().cloned());
                if let Some(&cid) = self.tuple_map.get(&tuple) {
                    return Some(cid);
                }
            }
        }
        None
    }
}
