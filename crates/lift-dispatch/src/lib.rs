//! `lift-dispatch` — the hall-call → elevator assignment heuristic.
//!
//! # Crate layout
//!
//! | Module         | Contents                                  |
//! |----------------|-------------------------------------------|
//! | [`dispatcher`] | `Dispatcher::assign` selection rule       |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`      |
//!
//! # Advisory assignment
//!
//! `assign` has no side effects on elevator state.  The caller records the
//! chosen id on the persisted call for observability, but the elevator that
//! actually performs the pickup is decided independently, per tick, by the
//! engine's floor-match logic.  The two paths are deliberately left
//! decoupled — see DESIGN.md.

pub mod dispatcher;
pub mod error;

#[cfg(test)]
mod tests;

pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
