use thiserror::Error;

/// Failures reported by the user store.
///
/// The display text of each variant is the exact status line shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Wrong name")]
    InvalidName,
    #[error("Wrong age")]
    InvalidAge,
    #[error("User not found")]
    NotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
