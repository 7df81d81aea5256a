//! `lift-store` — durable state of the bank: entities and their stores.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`elevator`] | `Elevator` — one car's floor, direction, destinations, riders  |
//! | [`request`]  | `FloorRequest` / `NewRequest` — pending hall calls             |
//! | [`store`]    | `ElevatorStore` / `RequestStore` contracts + in-memory backends|
//! | [`error`]    | `StoreError`, `StoreResult<T>`                                 |
//!
//! # Ownership model
//!
//! The store is the sole owner of durable state between ticks.  The dispatch
//! and engine crates receive owned snapshots, mutate copies, and hand them
//! back to the sim loop to persist — they never hold references into a store
//! across a tick boundary.
//!
//! The contracts are traits so that a remote backend can slot in later; the
//! provided backends are volatile in-memory `BTreeMap`s (persistence
//! durability is an explicit non-goal).  `BTreeMap` keys give the
//! ascending-id iteration order the tick loop relies on for free.

pub mod elevator;
pub mod error;
pub mod request;
pub mod store;


pub use elevator::Elevator;
pub use error::{StoreError, StoreResult};
pub use request::{FloorRequest, NewRequest};
pub use store::{ElevatorStore, MemoryElevatorStore, MemoryRequestStore, RequestStore};
