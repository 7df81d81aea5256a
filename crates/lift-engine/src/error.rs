//! Error types for the elevator engine.

use lift_core::ElevatorId;
use thiserror::Error;

/// Errors surfaced while stepping a car.
///
/// The engine refuses to step a car whose state breaks the core invariant
/// (moving ⇔ non-empty destination set). A violation means the snapshot was
/// corrupted before it reached the engine; stepping it would only compound
/// the damage.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The car's direction and destination set disagree.
    #[error("invariant violation on elevator {id}: {detail}")]
    InvariantViolation {
        id:     ElevatorId,
        detail: &'static str,
    },
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
