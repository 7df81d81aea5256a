//! Simulation observer trait for progress reporting and data collection.

use lift_core::{SimClock, Tick};
use lift_engine::{EngineError, StepOutcome};
use lift_store::{Elevator, FloorRequest};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — call logger
///
/// ```rust,ignore
/// struct CallLogger;
///
/// impl SimObserver for CallLogger {
///     fn on_hall_call(&mut self, tick: Tick, call: &FloorRequest) {
///         println!("{tick}: {} pressed at floor {}", call.direction, call.floor);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before traffic synthesis.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when a new hall call enters the pending queue, whether
    /// synthesized by the traffic model or injected through the command API
    /// before the tick.
    fn on_hall_call(&mut self, _tick: Tick, _call: &FloorRequest) {}

    /// Called after each car's step has been persisted.
    ///
    /// The outcome carries the car's post-step state and the event trace of
    /// what it did.
    fn on_elevator_step(&mut self, _tick: Tick, _outcome: &StepOutcome) {}

    /// Called when a car's stored state fails the engine's invariant check.
    /// The car is skipped for the tick; the run continues.
    fn on_invariant_violation(&mut self, _tick: Tick, _error: &EngineError) {}

    /// Called at the end of each tick with the end-of-tick car states and
    /// the number of still-pending hall calls.
    fn on_tick_end(
        &mut self,
        _tick:      Tick,
        _elevators: &[Elevator],
        _pending:   usize,
        _clock:     &SimClock,
    ) {
    }

    /// Called once after the final tick completes (or a stop was requested).
    fn on_sim_end(&mut self, _clock: &SimClock) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
