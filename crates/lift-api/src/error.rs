use lift_core::{Direction, Floor};
use lift_dispatch::DispatchError;
use lift_store::StoreError;
use thiserror::Error;

/// Errors a command caller can see.
///
/// Missing records are NOT here: selecting a destination on an unknown
/// elevator is a benign no-op, matching the store contracts.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("floor {floor} outside the serviced range 1..={count}")]
    FloorOutOfRange { floor: Floor, count: u8 },

    #[error("a hall call must travel up or down, got {0}")]
    InvalidDirection(Direction),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("store unavailable: {0}")]
    Store(#[from] StoreError),
}

pub type ApiResult<T> = Result<T, ApiError>;
