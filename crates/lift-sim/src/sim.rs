//! The `Sim` struct and its tick loop.

use lift_core::{SimClock, SimConfig, SimRng, Tick};
use lift_engine::ElevatorEngine;
use lift_store::{ElevatorStore, FloorRequest, NewRequest, RequestStore, StoreError, StoreResult};
use lift_traffic::TrafficModel;

use crate::stop::{StopHandle, StopToken};
use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<E, R, T>` owns the stores, the traffic model, the engine and the
/// clock, and drives the three-phase tick loop (traffic → step each car →
/// report).  Create via [`SimBuilder`][crate::SimBuilder].
///
/// # Store failure policy
///
/// `StoreError::Unavailable` is transient by contract.  Every store call is
/// retried once; if it fails again the affected unit of work is deferred to
/// the next tick with a `log::warn!` and the run continues.  A hall call
/// that could not be removed stays pending and is consumed again at the next
/// arrival, which is harmless — removal is idempotent.
pub struct Sim<E: ElevatorStore, R: RequestStore, T: TrafficModel> {
    /// Global configuration (floor count, delays, total ticks, seed, …).
    pub config: SimConfig,

    /// Simulation clock — current tick plus accrued virtual waits.
    pub clock: SimClock,

    /// Elevator records.  `list()` order (ascending id) is the order cars
    /// are stepped in.
    pub elevators: E,

    /// Pending hall calls.
    pub requests: R,

    /// Source of synthesized calls and boarding parties.
    pub traffic: T,

    /// The per-car state machine.
    pub engine: ElevatorEngine,

    /// The run's deterministic RNG, handed to the traffic model.
    pub rng: SimRng,

    pub(crate) stop: StopToken,
}

impl<E: ElevatorStore, R: RequestStore, T: TrafficModel> Sim<E, R, T> {
    // ── Public API ────────────────────────────────────────────────────────

    /// A handle that stops the run at the next tick boundary, safe to hand
    /// to another thread or a signal hook.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.handle()
    }

    /// Run from the current tick until `config.total_ticks` or until the
    /// stop handle fires, whichever comes first.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= Tick(self.config.total_ticks) || self.stop.is_stopped() {
                break;
            }
            observer.on_tick_start(now);
            self.process_tick(now, observer)?;
            self.clock.advance();
        }
        observer.on_sim_end(&self.clock);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position, ignoring
    /// `total_ticks` and the stop handle.
    ///
    /// Useful for tests and for paced runners that sleep between ticks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            self.process_tick(now, observer)?;
            self.clock.advance();
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        // ── Phase 1: traffic synthesis ────────────────────────────────────
        //
        // At most one new hall call per tick.  Synthesized calls carry no
        // advisory assignment; whichever car reaches the floor first serves
        // them.
        if let Some((floor, direction)) = self.traffic.hall_call(&mut self.rng, self.config.floors())
        {
            let request = NewRequest::unassigned(floor, direction);
            match with_retry("insert hall call", || self.requests.add(request)) {
                Some(id) => {
                    let call = FloorRequest {
                        id,
                        floor,
                        direction,
                        assigned_elevator: None,
                    };
                    observer.on_hall_call(now, &call);
                }
                None => log::warn!("{now}: dropping synthesized call at floor {floor}"),
            }
        }

        // ── Phase 2: step each car, ascending id ──────────────────────────
        //
        // The pending queue is re-read for every car so that a call consumed
        // by a lower-id car this tick is invisible to its siblings.
        let Some(cars) = with_retry("list elevators", || self.elevators.list()) else {
            log::warn!("{now}: elevator list unavailable, skipping tick");
            return Ok(());
        };

        for car in cars {
            let car_id = car.id;
            let Some(pending) = with_retry("read pending calls", || self.requests.pending()) else {
                log::warn!("{now}: pending calls unavailable, elevator {car_id} skips this tick");
                continue;
            };

            // Invariant violations mark a corrupted record, not a failure of
            // the loop: the car is skipped for this tick, its siblings carry
            // on.
            let outcome = match self.engine.step(car, &pending, &self.traffic, &mut self.rng) {
                Ok(outcome) => outcome,
                Err(error) => {
                    log::warn!("{now}: {error}, skipping elevator {car_id} this tick");
                    observer.on_invariant_violation(now, &error);
                    continue;
                }
            };
            self.clock.wait(outcome.wait_secs);

            let updated = outcome.elevator.clone();
            if with_retry("persist elevator", || self.elevators.upsert(updated.clone())).is_none()
            {
                log::warn!("{now}: persist failed, elevator {car_id} loses this step");
                continue;
            }
            if let Some(id) = outcome.consumed_call
                && with_retry("remove hall call", || self.requests.remove(id)).is_none()
            {
                log::warn!("{now}: call {id} not removed, will be re-consumed on next arrival");
            }

            observer.on_elevator_step(now, &outcome);
        }

        // ── Phase 3: end-of-tick report ───────────────────────────────────
        let cars = with_retry("list elevators", || self.elevators.list()).unwrap_or_default();
        let pending = with_retry("read pending calls", || self.requests.pending())
            .map(|calls| calls.len())
            .unwrap_or(0);
        observer.on_tick_end(now, &cars, pending, &self.clock);

        Ok(())
    }
}

// ── Transient-failure retry ───────────────────────────────────────────────────

/// Run a store operation, retrying once on `Unavailable`.
///
/// `None` means both attempts failed; the caller defers the work to the next
/// tick.  Warnings carry `what` so operators can tell which access path is
/// flapping.
fn with_retry<V>(what: &str, mut op: impl FnMut() -> StoreResult<V>) -> Option<V> {
    match op() {
        Ok(value) => Some(value),
        Err(StoreError::Unavailable(detail)) => {
            log::warn!("store unavailable ({what}): {detail}, retrying");
            match op() {
                Ok(value) => Some(value),
                Err(StoreError::Unavailable(detail)) => {
                    log::warn!("store unavailable ({what}) on retry: {detail}, deferring");
                    None
                }
            }
        }
    }
}
