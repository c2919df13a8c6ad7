use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("failed to serialize command line arguments to yaml: [{0}]")]
    Serialize(#[from] serde_yaml::Error),

    #[error("failed to write serialized arguments to {path}: [{source}]")]
    Write { path: String, source: std::io::Error },

    #[error("failed to read yaml configuration from {path}: [{source}]")]
    Read { path: String, source: std::io::Error },
}
