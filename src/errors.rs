// errors.rs
use crate::scraper::FetchError;
use thiserror::Error;

/// Failure writing the state document. Reading never fails: a missing or
/// corrupt document loads as an empty store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("State file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("State serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The only errors that leave a reconciliation pass.
#[derive(Debug, Error)]
pub enum PassError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Saving state failed: {0}")]
    Store(#[from] StoreError),
}
