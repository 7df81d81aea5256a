use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The elevator list was empty.  A bank always has at least one car, so
    /// this is a startup configuration error, never a runtime condition to
    /// retry.
    #[error("no elevators available for assignment")]
    NoElevatorsAvailable,
}

pub type DispatchResult<T> = Result<T, DispatchError>;
