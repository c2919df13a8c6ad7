use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeIndexError {
    #[error("tuple/describe operations require plexity 4 or 6, library has plexity {actual}")]
    UnsupportedPlexity { actual: usize },
}
