use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid cost factor {0} (accepted range is 4..=31)")]
    InvalidCost(u32),

    #[error("Hashing failed: {0}")]
    Hashing(String),

    #[error("Hashing worker failed: {0}")]
    WorkerFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
