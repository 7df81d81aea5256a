//! Top-level simulation configuration.
//!
//! Every knob the controller exposes lives here with its stock default:
//! 10 floors, 4 elevators, a 3 s tick, 2 s per-floor travel, 2 s door-open,
//! a 0.4 chance of a synthesized hall call per tick, and 1–3 riders per
//! pickup.

use crate::{Floors, LiftError, LiftResult, SimClock};

/// All tunables for one simulation run.
///
/// Typically built from `SimConfig::default()` with a few fields overridden,
/// then validated by the sim builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of serviced floors (N).  Floors are numbered `1..=N`.
    pub floor_count: u8,

    /// Number of elevator cars in the bank.  Zero is a configuration error.
    pub elevator_count: u32,

    /// Seconds of virtual time one tick represents.
    pub tick_period_secs: u32,

    /// Simulated seconds an elevator spends moving one floor.
    pub travel_secs_per_floor: u32,

    /// Simulated seconds the doors stay open during arrival handling.
    pub door_open_secs: u32,

    /// Probability per tick of synthesizing one random hall call.
    pub hall_call_probability: f64,

    /// Fewest riders admitted at a pickup.
    pub min_riders_per_pickup: u32,

    /// Most riders admitted at a pickup (inclusive).
    pub max_riders_per_pickup: u32,

    /// Total ticks to simulate when running to completion.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floor_count:           10,
            elevator_count:        4,
            tick_period_secs:      3,
            travel_secs_per_floor: 2,
            door_open_secs:        2,
            hall_call_probability: 0.4,
            min_riders_per_pickup: 1,
            max_riders_per_pickup: 3,
            total_ticks:           100,
            seed:                  42,
        }
    }
}

impl SimConfig {
    /// Reject configurations the simulation cannot run with.
    ///
    /// All of these are fatal at startup per the error taxonomy — none is a
    /// runtime condition to retry.
    pub fn validate(&self) -> LiftResult<()> {
        if self.elevator_count == 0 {
            return Err(LiftError::Config("no elevators configured".into()));
        }
        if self.floor_count == 0 {
            return Err(LiftError::Config("no floors configured".into()));
        }
        if !(0.0..=1.0).contains(&self.hall_call_probability) {
            return Err(LiftError::Config(format!(
                "hall_call_probability {} outside [0, 1]",
                self.hall_call_probability
            )));
        }
        if self.min_riders_per_pickup == 0 || self.min_riders_per_pickup > self.max_riders_per_pickup
        {
            return Err(LiftError::Config(format!(
                "rider range {}..={} is empty or zero-based",
                self.min_riders_per_pickup, self.max_riders_per_pickup
            )));
        }
        Ok(())
    }

    /// The serviced floor range.
    #[inline]
    pub fn floors(&self) -> Floors {
        Floors::new(self.floor_count)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_period_secs)
    }
}
