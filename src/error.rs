use thiserror::Error;

/// The one error kind surfaced by the store.
///
/// Missing rows, connection failures and undecodable values all arrive
/// here; callers only check for presence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
