#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid source configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("failed to reach the directory source: {0}")]
    Transport(reqwest::Error),
    #[error("directory source returned HTTP status {0}")]
    Status(u16),
    #[error("failed to decode the directory document: {0}")]
    Decode(reqwest::Error),
    #[error("directory document is not a JSON array")]
    InvalidFormat,
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;
