use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqOpsError {
    #[error("non-nucleotide character '{0}' encountered")]
    NonNucleotide(char),
}
