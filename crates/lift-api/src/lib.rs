//! `lift-api` — the inbound command surface of the rust_lift controller.
//!
//! Plain functions over the store contracts, shaped the way an HTTP or
//! message transport would call them:
//!
//! | Operation                   | Effect                                       |
//! |-----------------------------|----------------------------------------------|
//! | [`request_elevator`]        | press a hall button: dispatch + enqueue call |
//! | [`select_destination`]      | press a cabin button on a specific car       |
//! | [`elevator_status`]         | consistent read-only snapshot of the bank    |
//!
//! # Advisory assignment
//!
//! [`request_elevator`] records the dispatcher's pick in the call's
//! `assigned_elevator`, but nothing binds that car to the pickup — the
//! engine's own idle-assignment step decides which car actually answers.
//! The two paths are deliberately independent; tests cover each on its own.

pub mod commands;
pub mod error;
pub mod status;

#[cfg(test)]
mod tests;

pub use commands::{CallTicket, request_elevator, select_destination};
pub use error::{ApiError, ApiResult};
pub use status::{ElevatorStatus, elevator_status};
