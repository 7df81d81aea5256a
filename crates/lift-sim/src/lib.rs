//! `lift-sim` — tick loop orchestrator for the rust_lift controller.
//!
//! # The tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks (or until the stop handle fires):
//!   ① Traffic  — ask the TrafficModel for at most one new hall call and
//!                insert it into the request store.
//!   ② Step     — for each elevator in ascending id order:
//!                  re-read the pending calls (siblings may have consumed
//!                  some earlier this tick), run ElevatorEngine::step,
//!                  persist the car, remove any consumed call, accrue the
//!                  step's simulated wait on the clock.
//!   ③ Report   — observer callbacks with the end-of-tick car states.
//! ```
//!
//! The per-car pending re-read inside one tick is what prevents two cars
//! from answering the same button press.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//! use lift_traffic::RandomTraffic;
//!
//! let config  = SimConfig::default();
//! let traffic = RandomTraffic::from_config(&config);
//! let mut sim = SimBuilder::in_memory(config, traffic).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stop;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stop::{StopHandle, StopToken};
