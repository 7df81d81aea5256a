use lift_core::LiftError;
use thiserror::Error;

/// Fatal simulation errors.
///
/// Only configuration problems kill a run.  Transient store unavailability
/// is retried once and then deferred to the next tick; a car that fails the
/// engine's invariant check is logged, reported to the observer, and skipped
/// for the tick while its siblings continue.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] LiftError),
}

pub type SimResult<T> = Result<T, SimError>;
