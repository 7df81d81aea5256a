//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`ids`]       | `ElevatorId`, `RequestId`                           |
//! | [`floor`]     | `Floor`, `Floors` (the serviced 1..=N range)        |
//! | [`direction`] | `Direction` enum (`Up`, `Down`, `Idle`)             |
//! | [`time`]      | `Tick`, `SimClock`                                  |
//! | [`config`]    | `SimConfig` — every tunable knob of the simulation  |
//! | [`rng`]       | `SimRng` — deterministic seeded RNG                 |
//! | [`error`]     | `LiftError`, `LiftResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use floor::{Floor, Floors};
pub use ids::{ElevatorId, RequestId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
