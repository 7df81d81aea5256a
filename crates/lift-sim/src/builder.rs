//! Fluent builder for constructing a [`Sim`].

use lift_core::{SimConfig, SimRng};
use lift_engine::ElevatorEngine;
use lift_store::{ElevatorStore, MemoryElevatorStore, MemoryRequestStore, RequestStore};
use lift_traffic::TrafficModel;

use crate::stop::StopToken;
use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<E, R, T>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — floor count, delays, total ticks, seed, …
/// - `E: ElevatorStore`, `R: RequestStore` — the storage backends
/// - `T: TrafficModel` — call and rider synthesis
///
/// [`SimBuilder::in_memory`] covers the common case: volatile stores with a
/// freshly seeded bank of `config.elevator_count` cars.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::in_memory(config, RandomTraffic::from_config(&config))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<E: ElevatorStore, R: RequestStore, T: TrafficModel> {
    config:    SimConfig,
    elevators: E,
    requests:  R,
    traffic:   T,
}

impl<T: TrafficModel> SimBuilder<MemoryElevatorStore, MemoryRequestStore, T> {
    /// A builder with in-memory stores and a bank of idle cars at floor 1,
    /// ids `1..=config.elevator_count`.
    pub fn in_memory(config: SimConfig, traffic: T) -> Self {
        let elevators = MemoryElevatorStore::bank(config.elevator_count);
        Self {
            config,
            elevators,
            requests: MemoryRequestStore::new(),
            traffic,
        }
    }
}

impl<E: ElevatorStore, R: RequestStore, T: TrafficModel> SimBuilder<E, R, T> {
    /// A builder over caller-supplied stores.  The elevator store must
    /// already contain the bank.
    pub fn new(config: SimConfig, elevators: E, requests: R, traffic: T) -> Self {
        Self { config, elevators, requests, traffic }
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<E, R, T>> {
        self.config.validate()?;

        Ok(Sim {
            clock:     self.config.make_clock(),
            engine:    ElevatorEngine::new(&self.config),
            rng:       SimRng::new(self.config.seed),
            elevators: self.elevators,
            requests:  self.requests,
            traffic:   self.traffic,
            stop:      StopToken::new(),
            config:    self.config,
        })
    }
}
