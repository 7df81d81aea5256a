//! A traffic model for an empty building.

use lift_core::{Direction, Floor, Floors, SimRng};

use crate::TrafficModel;

/// A [`TrafficModel`] that never produces calls or riders.
///
/// Useful in tests that inject their own hall calls through the request
/// store and only want the deterministic mechanics to run.
pub struct NoTraffic;

impl TrafficModel for NoTraffic {
    fn hall_call(&self, _rng: &mut SimRng, _floors: Floors) -> Option<(Floor, Direction)> {
        None
    }

    fn boarding_party(
        &self,
        _rng:       &mut SimRng,
        _floor:     Floor,
        _direction: Direction,
        _floors:    Floors,
    ) -> Vec<Floor> {
        vec![]
    }
}
