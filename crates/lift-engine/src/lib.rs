//! # lift-engine
//!
//! The per-elevator state machine. One call to [`ElevatorEngine::step`]
//! performs exactly one action for one car: accept a hall call while idle,
//! travel one floor toward the next stop, or handle an arrival (doors open,
//! riders leave and board, direction is re-evaluated).
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`engine`] | [`ElevatorEngine`] and the stepping rules            |
//! | [`outcome`]| [`StepOutcome`] and the [`StepEvent`] trace          |
//! | [`error`]  | [`EngineError`] / [`EngineResult`]                   |
//!
//! The engine is pure with respect to storage: it consumes a snapshot of the
//! car and the pending calls and returns the updated car plus the id of any
//! call it consumed. Persisting both is the caller's job, which keeps every
//! step atomic from the stores' point of view.

pub mod engine;
pub mod error;
pub mod outcome;

pub use engine::ElevatorEngine;
pub use error::{EngineError, EngineResult};
pub use outcome::{StepEvent, StepOutcome};
