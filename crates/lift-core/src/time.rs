//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! execution of the simulation's periodic update; the wall-clock period it
//! represents (default 3 s) plus any simulated waits accrued inside the tick
//! (door-open and per-floor travel delays) are tracked in `SimClock` as
//! virtual elapsed seconds.
//!
//! Modelling the delays as virtual-time advancement instead of real sleeps
//! keeps every tick deterministic and lets the test suite run thousands of
//! ticks instantly.  A paced runner that wants real-time cadence sleeps
//! between ticks and leaves this clock untouched.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the virtual seconds the simulation has spent.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Base seconds one tick represents, before simulated waits.
    pub tick_period_secs: u32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
    /// Total virtual seconds elapsed: tick periods plus simulated waits.
    pub sim_elapsed_secs: u64,
}

impl SimClock {
    pub fn new(tick_period_secs: u32) -> Self {
        Self {
            tick_period_secs,
            current_tick: Tick::ZERO,
            sim_elapsed_secs: 0,
        }
    }

    /// Advance to the next tick, accruing one tick period of virtual time.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.sim_elapsed_secs += self.tick_period_secs as u64;
    }

    /// Accrue a simulated wait (door open, per-floor travel) within a tick.
    #[inline]
    pub fn wait(&mut self, secs: u32) {
        self.sim_elapsed_secs += secs as u64;
    }

    /// Break elapsed virtual time into (hours, minutes, seconds) for display.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total = self.sim_elapsed_secs;
        (total / 3_600, ((total % 3_600) / 60) as u32, (total % 60) as u32)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{} ({h:02}:{m:02}:{s:02})", self.current_tick)
    }
}
