//! Read-side status query and its DTO.

use lift_core::{Direction, ElevatorId, Floor};
use lift_store::{Elevator, ElevatorStore};

use crate::ApiResult;

/// One car's externally visible state.
///
/// Serde is always on here — this is the wire shape a transport layer
/// serializes, not an internal record.
#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub struct ElevatorStatus {
    pub id:            ElevatorId,
    pub current_floor: Floor,
    pub direction:     Direction,
    /// Remaining stops, ascending.
    pub destinations:  Vec<Floor>,
    /// Destination floor of each rider on board.
    pub passengers:    Vec<Floor>,
}

impl From<&Elevator> for ElevatorStatus {
    fn from(car: &Elevator) -> Self {
        Self {
            id:            car.id,
            current_floor: car.current_floor,
            direction:     car.direction,
            destinations:  car.destinations.iter().copied().collect(),
            passengers:    car.passengers.clone(),
        }
    }
}

/// Snapshot of the whole bank, ascending id order.
///
/// Called between ticks, this observes only fully-committed state — the tick
/// loop never leaves a car half-updated across a store call.
pub fn elevator_status<E: ElevatorStore>(elevators: &E) -> ApiResult<Vec<ElevatorStatus>> {
    let cars = elevators.list()?;
    Ok(cars.iter().map(ElevatorStatus::from).collect())
}
