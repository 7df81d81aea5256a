//! A replayable traffic model for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use lift_core::{Direction, Floor, Floors, SimRng};

use crate::TrafficModel;

/// A [`TrafficModel`] that replays pre-recorded sequences.
///
/// Each `hall_call` pops the next scripted entry (`None` once exhausted —
/// quiet ticks forever after); each `boarding_party` pops the next scripted
/// party (empty once exhausted).  Scripted parties are still clipped to the
/// valid destination range, so a script cannot violate the engine's
/// boarding contract by accident.
#[derive(Default)]
pub struct ScriptedTraffic {
    calls:     Mutex<VecDeque<Option<(Floor, Direction)>>>,
    boardings: Mutex<VecDeque<Vec<Floor>>>,
}

impl ScriptedTraffic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a hall call for the next unscripted tick.
    pub fn push_call(self, floor: Floor, direction: Direction) -> Self {
        self.calls.lock().unwrap().push_back(Some((floor, direction)));
        self
    }

    /// Queue a quiet tick.
    pub fn push_quiet(self) -> Self {
        self.calls.lock().unwrap().push_back(None);
        self
    }

    /// Queue the destinations of the next boarding party.
    pub fn push_boarding(self, destinations: Vec<Floor>) -> Self {
        self.boardings.lock().unwrap().push_back(destinations);
        self
    }
}

impl TrafficModel for ScriptedTraffic {
    fn hall_call(&self, _rng: &mut SimRng, _floors: Floors) -> Option<(Floor, Direction)> {
        self.calls.lock().unwrap().pop_front().flatten()
    }

    fn boarding_party(
        &self,
        _rng:      &mut SimRng,
        floor:     Floor,
        direction: Direction,
        floors:    Floors,
    ) -> Vec<Floor> {
        let Some((lo, hi)) = floors.beyond(floor, direction) else {
            return vec![];
        };
        match self.boardings.lock().unwrap().pop_front() {
            Some(party) => party.into_iter().filter(|f| (lo..=hi).contains(f)).collect(),
            None        => vec![],
        }
    }
}
