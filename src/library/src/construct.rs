use crate::{Constant, LibraryError, Spacer};

/// A derived, read-only record assembled from a contiguous run of `P`
/// spacers plus the library's shared ordered constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construct {
    pub construct_id: u32,
    pub spacers: Vec<Spacer>,
    pub constants: Vec<Constant>,
    pub r1_probe: String,
    pub r2_probe: String,
}

impl Construct {
    /// Plexity (number of spacer positions) of this construct.
    #[must_use]
    pub fn plexity(&self) -> usize {
        self.spacers.len()
    }

    /// The full left-to-right concatenation of every constant/spacer pair,
    /// as emitted by the `build` command (§4.6). No reverse complement, no
    /// trimming.
    #[must_use]
    pub fn full_sequence(&self) -> String {
        let mut out = String::new();
        for (constant, spacer) in self.constants.iter().zip(self.spacers.iter()) {
            out.push_str(&constant.sequence);
            out.push_str(&spacer.sequence);
        }
        out
    }
}

/// Number of constant/spacer pairs ("take count") contributed to each probe,
/// as a function of plexity `p`. Must match this table exactly; it is
/// equivalent to `ceil((p+1)/2)` for odd `p` and `p/2` for even `p`, but the
/// table is authoritative.
#[must_use]
pub fn take_count(p: usize) -> Option<usize> {
    match p {
        3 => Some(2),
        4 => Some(2),
        5 => Some(3),
        6 => Some(3),
        7 => Some(4),
        8 => Some(4),
        9 => Some(5),
        10 => Some(5),
        _ => None,
    }
}

/// Derive `(r1_probe, r2_probe)` for a construct from its ordered spacers
/// and the library's ordered constants (only the leading `plexity` entries
/// of `constants` are used).
pub(crate) fn derive_probes(
    spacers: &[Spacer],
    constants: &[Constant],
) -> Result<(String, String), LibraryError> {
    let p = spacers.len();
    let t = take_count(p).ok_or(LibraryError::PlexityOutOfRange { run_len: p })?;
    if constants.len() < p {
        return Err(LibraryError::InsufficientConstants { need: p, have: constants.len() });
    }

    let mut r1 = String::new();
    for i in 0..t {
        r1.push_str(&constants[i].sequence);
        r1.push_str(&spacers[i].sequence);
    }

    let mut r2_fwd = String::new();
    for i in (p - t)..p {
        r2_fwd.push_str(&constants[i].sequence);
        r2_fwd.push_str(&spacers[i].sequence);
    }
    let r2 = seqops::reverse_complement(&r2_fwd)
        .map_err(|e| match e {
            seqops::SeqOpsError::NonNucleotide(c) => LibraryError::NonNucleotide(c),
        })?;

    Ok((r1, r2))
}
