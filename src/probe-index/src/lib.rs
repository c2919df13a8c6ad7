//! Lookup structures that map construct probe/spacer sequences back to
//! construct identifiers: [`ProbeIndex`] for the §4.3 probe-substring
//! classifier and [`SpacerIndex`]/[`TupleIndex`] for the §4.4 tuple
//! classifier.

mod error;
mod kmer_set;
mod probe_index;
mod spacer_index;
mod tuple_index;

pub use error::ProbeIndexError;
pub use kmer_set::KmerSet;
pub use probe_index::{PairMatch, ProbeIndex};
pub use spacer_index::SpacerIndex;
pub use tuple_index::TupleIndex;
