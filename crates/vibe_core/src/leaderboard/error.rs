use crate::error::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Score out of range: {0}")]
    ScoreOutOfRange(u8),
}

impl From<LeaderboardError> for CoreError {
    fn from(err: LeaderboardError) -> Self {
        match err {
            LeaderboardError::Io(e) => CoreError::IoError(e.to_string()),
            LeaderboardError::Serialization(e) => CoreError::SerializationError(e.to_string()),
            e @ LeaderboardError::ScoreOutOfRange(_) => CoreError::ValidationError(e.to_string()),
        }
    }
}
