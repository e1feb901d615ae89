use crate::domain::ledger::Tokens;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown card id: {0}")]
    UnknownCard(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("no bets placed")]
    NoBets,
    #[error("insufficient tokens: need {needed}, have {available}")]
    InsufficientTokens { needed: Tokens, available: Tokens },
    #[error("round already in progress")]
    RoundInProgress,
    #[error("no resolved round to collect")]
    NoResolvedRound,
    #[error("internal error: {0}")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for GameError {
    fn from(e: rocksdb::Error) -> Self {
        GameError::Internal(Box::new(e))
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Internal(Box::new(e))
    }
}
