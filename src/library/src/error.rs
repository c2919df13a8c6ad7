use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("library is empty: no spacers were provided")]
    EmptyLibrary,

    #[error("spacer '{sequence}' has length {actual}, expected {expected} (all spacers must share a common length)")]
    MismatchedSpacerLength { sequence: String, expected: usize, actual: usize },

    #[error("constant '{sequence}' has length {actual}, expected {expected} (all constants must share a common length)")]
    MismatchedConstantLength { sequence: String, expected: usize, actual: usize },

    #[error("inferred plexity {run_len} is out of the supported range 3..=10")]
    PlexityOutOfRange { run_len: usize },

    #[error("spacer count {count} is not a multiple of the inferred plexity {plexity}")]
    SpacerCountNotMultiple { count: usize, plexity: usize },

    #[error("construct requires at least {need} constants (plexity {need}) but only {have} were provided")]
    InsufficientConstants { need: usize, have: usize },

    #[error("non-nucleotide character '{0}' in a library sequence")]
    NonNucleotide(char),

    #[error("construct {construct_id}: expected spacer at position {expected_variant_id} but found variant_id={actual_variant_id}, construct_id={actual_construct_id}")]
    InconsistentSpacerOrdering {
        construct_id: u32,
        expected_variant_id: u32,
        actual_variant_id: u32,
        actual_construct_id: u32,
    },
}
