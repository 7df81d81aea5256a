//! Framework error type.
//!
//! Sub-crates define their own error enums for their own failure modes and
//! wrap or convert `LiftError` where it appears; only failures shared across
//! crates live here.

use thiserror::Error;

use crate::Floor;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    /// Fatal at startup — bad knob values, zero elevators, zero floors.
    /// Never retried.
    #[error("configuration error: {0}")]
    Config(String),

    /// A floor outside the serviced `1..=count` range.
    #[error("floor {floor} outside serviced range 1..={count}")]
    FloorOutOfRange { floor: Floor, count: u8 },
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
