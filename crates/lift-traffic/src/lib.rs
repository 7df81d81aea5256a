//! `lift-traffic` — where riders come from.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`model`]    | `TrafficModel` trait — the stochastic extension point       |
//! | [`random`]   | `RandomTraffic` — the production model (uniform random)     |
//! | [`noop`]     | `NoTraffic` — nobody ever calls, nobody ever boards         |
//! | [`scripted`] | `ScriptedTraffic` — replay exact sequences in tests         |
//!
//! # Design notes
//!
//! Every stochastic decision the simulation makes — whether a hall call
//! appears this tick, where it appears, how many riders board at a pickup
//! and where each is going — flows through [`TrafficModel`].  The sim and
//! engine own the deterministic mechanics; this crate owns the dice.
//! Injecting a scripted model turns any end-to-end scenario into a
//! reproducible unit test without touching the RNG plumbing.

pub mod model;
pub mod noop;
pub mod random;
pub mod scripted;


pub use model::TrafficModel;
pub use noop::NoTraffic;
pub use random::RandomTraffic;
pub use scripted::ScriptedTraffic;
