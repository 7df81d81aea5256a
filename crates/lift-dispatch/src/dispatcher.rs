//! The assignment selection rule.

use lift_core::{Direction, ElevatorId, Floor};
use lift_store::Elevator;

use crate::{DispatchError, DispatchResult};

/// Picks the elevator a new hall call should be assigned to.
///
/// Stateless; a unit struct so the call surface reads like the rest of the
/// framework's pluggable components.
pub struct Dispatcher;

impl Dispatcher {
    /// Choose an elevator for a call at `floor` heading `direction`.
    ///
    /// Among elevators already travelling the call's direction or idle, the
    /// nearest by `|current_floor - floor|` wins; ties go to the lowest id.
    /// If no elevator passes the filter, the first car in id order is
    /// returned as an absolute fallback — a deliberately crude corner case
    /// (every car is busy heading the wrong way; someone still has to take
    /// the call eventually), not an optimal choice.
    ///
    /// `elevators` must be in ascending id order, as `ElevatorStore::list`
    /// yields it.
    pub fn assign(
        &self,
        floor:     Floor,
        direction: Direction,
        elevators: &[Elevator],
    ) -> DispatchResult<ElevatorId> {
        if elevators.is_empty() {
            return Err(DispatchError::NoElevatorsAvailable);
        }

        let suitable = elevators
            .iter()
            .filter(|e| e.direction == direction || e.is_idle())
            .min_by_key(|e| (e.current_floor.distance_to(floor), e.id));

        Ok(match suitable {
            Some(e) => e.id,
            None    => elevators[0].id,
        })
    }
}
