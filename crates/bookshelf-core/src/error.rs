use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown confidence band: {0}")]
    UnknownConfidenceBand(String),
}
