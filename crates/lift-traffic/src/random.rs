//! The production traffic model: uniform random calls and boardings.

use lift_core::{Direction, Floor, Floors, SimConfig, SimRng};

use crate::TrafficModel;

/// Uniform random traffic.
///
/// - Each tick, with probability `call_probability`, one hall call appears
///   on a uniformly random floor with a uniformly random direction.
/// - At a pickup, `min_riders..=max_riders` riders board, each bound for a
///   floor drawn uniformly from the valid range in the car's direction.
#[derive(Clone, Debug)]
pub struct RandomTraffic {
    pub call_probability: f64,
    pub min_riders: u32,
    pub max_riders: u32,
}

impl RandomTraffic {
    /// The model configured by `SimConfig`'s knobs.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            call_probability: config.hall_call_probability,
            min_riders:       config.min_riders_per_pickup,
            max_riders:       config.max_riders_per_pickup,
        }
    }
}

impl TrafficModel for RandomTraffic {
    fn hall_call(&self, rng: &mut SimRng, floors: Floors) -> Option<(Floor, Direction)> {
        if !rng.gen_bool(self.call_probability) {
            return None;
        }
        let floor = Floor(rng.gen_range(1..=floors.count));
        let direction = if rng.gen_bool(0.5) { Direction::Up } else { Direction::Down };
        Some((floor, direction))
    }

    fn boarding_party(
        &self,
        rng:       &mut SimRng,
        floor:     Floor,
        direction: Direction,
        floors:    Floors,
    ) -> Vec<Floor> {
        let Some((lo, hi)) = floors.beyond(floor, direction) else {
            return vec![];
        };
        let entering = rng.gen_range(self.min_riders..=self.max_riders);
        (0..entering).map(|_| Floor(rng.gen_range(lo.0..=hi.0))).collect()
    }
}
