//! Error types for lift-store.

use thiserror::Error;

/// Failures a store backend can surface.
///
/// The in-memory backends never fail; the variants exist for the contract.
/// Missing records are deliberately NOT an error anywhere in the API —
/// `get` returns `Option`, removal of an absent id is a no-op — per the
/// benign-`NotFound` rule of the error taxonomy.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transient backend failure (remote store unreachable, timeout).
    /// The tick loop retries once and otherwise defers the affected
    /// elevator's step to the next tick.
    #[error("store temporarily unavailable: {0}")]
    Unavailable(String),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
