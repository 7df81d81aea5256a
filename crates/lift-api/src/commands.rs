//! Write-side commands: hall buttons and cabin buttons.

use lift_core::{Direction, ElevatorId, Floor, Floors, RequestId};
use lift_dispatch::Dispatcher;
use lift_store::{ElevatorStore, NewRequest, RequestStore};

use crate::{ApiError, ApiResult};

/// Receipt for a hall-call request: the queued call and the dispatcher's
/// advisory pick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CallTicket {
    pub request:  RequestId,
    pub assigned: ElevatorId,
}

/// Press a hall button: dispatch an advisory elevator and enqueue the call.
///
/// The returned ticket records which car the dispatcher nominated, but the
/// engine's floor-match logic decides which car actually stops — the
/// assignment is observability metadata, nothing more.
pub fn request_elevator<E, R>(
    elevators: &E,
    requests:  &mut R,
    floors:    Floors,
    floor:     Floor,
    direction: Direction,
) -> ApiResult<CallTicket>
where
    E: ElevatorStore,
    R: RequestStore,
{
    if !floors.contains(floor) {
        return Err(ApiError::FloorOutOfRange { floor, count: floors.count });
    }
    if direction.is_idle() {
        return Err(ApiError::InvalidDirection(direction));
    }

    let cars = elevators.list()?;
    let assigned = Dispatcher.assign(floor, direction, &cars)?;
    let request = requests.add(NewRequest {
        floor,
        direction,
        assigned_elevator: Some(assigned),
    })?;

    Ok(CallTicket { request, assigned })
}

/// Press a cabin button: add `floor` to one car's destinations directly,
/// bypassing the hall-call flow.
///
/// An unknown elevator id is a benign no-op.  So is selecting the floor an
/// idle car is already parked on — the rider is there.  Selecting any other
/// floor on an idle car also points the car's direction at it, keeping the
/// idle ⇔ no-destinations invariant intact.
pub fn select_destination<E: ElevatorStore>(
    elevators: &mut E,
    id:        ElevatorId,
    floors:    Floors,
    floor:     Floor,
) -> ApiResult<()> {
    if !floors.contains(floor) {
        return Err(ApiError::FloorOutOfRange { floor, count: floors.count });
    }

    let Some(mut car) = elevators.get(id)? else {
        return Ok(());
    };
    if car.is_idle() {
        if car.current_floor == floor {
            return Ok(());
        }
        car.direction = Direction::toward(car.current_floor, floor);
    }
    car.destinations.insert(floor);
    elevators.upsert(car)?;
    Ok(())
}
