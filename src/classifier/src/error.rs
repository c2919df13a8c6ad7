use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("the '{command}' command requires a library of plexity 4 or 6, got {actual}")]
    UnsupportedPlexity { command: &'static str, actual: usize },
}
