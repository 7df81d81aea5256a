//! The `TrafficModel` trait — the main extension point for rider behavior.

use lift_core::{Direction, Floor, Floors, SimRng};

/// Pluggable source of hall calls and boarding parties.
///
/// Implementations receive the shared simulation RNG so that the production
/// model stays deterministic under a fixed seed, while test models are free
/// to ignore it entirely and replay scripted sequences.
pub trait TrafficModel {
    /// Called once at the start of every tick.
    ///
    /// Return `Some((floor, direction))` to synthesize one new hall call, or
    /// `None` for a quiet tick.  The direction must never be `Idle`.
    fn hall_call(&self, rng: &mut SimRng, floors: Floors) -> Option<(Floor, Direction)>;

    /// Called when an elevator opens its doors at `floor` with a call
    /// waiting there, travelling `direction`.
    ///
    /// Return the destination floor of each rider who boards.  Every floor
    /// must lie strictly beyond `floor` in `direction` (see
    /// [`Floors::beyond`]); return an empty vec when that range is empty —
    /// a car going up at the top floor admits nobody.
    fn boarding_party(
        &self,
        rng:       &mut SimRng,
        floor:     Floor,
        direction: Direction,
        floors:    Floors,
    ) -> Vec<Floor>;
}
