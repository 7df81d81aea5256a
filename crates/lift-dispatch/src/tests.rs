//! Unit tests for lift-dispatch.

use lift_core::{Direction, ElevatorId, Floor};
use lift_store::Elevator;

use crate::{DispatchError, Dispatcher};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn car(id: u32, floor: u8, direction: Direction) -> Elevator {
    let mut e = Elevator::new(ElevatorId(id));
    e.current_floor = Floor(floor);
    e.direction = direction;
    // Keep the idle⇔empty invariant plausible for moving cars.
    match direction {
        Direction::Up   => { e.destinations.insert(Floor(floor + 1)); }
        Direction::Down => { e.destinations.insert(Floor(floor - 1)); }
        Direction::Idle => {}
    }
    e
}

#[test]
fn nearest_qualifying_elevator_wins() {
    // Car 1: floor 2, idle (distance 1).  Car 2: floor 5, up (distance 2).
    let elevators = vec![car(1, 2, Direction::Idle), car(2, 5, Direction::Up)];
    let id = Dispatcher.assign(Floor(3), Direction::Up, &elevators).unwrap();
    assert_eq!(id, ElevatorId(1));
}

#[test]
fn idle_qualifies_for_either_direction() {
    let elevators = vec![car(1, 9, Direction::Idle)];
    assert_eq!(Dispatcher.assign(Floor(2), Direction::Up, &elevators).unwrap(), ElevatorId(1));
    assert_eq!(Dispatcher.assign(Floor(2), Direction::Down, &elevators).unwrap(), ElevatorId(1));
}

#[test]
fn wrong_direction_filtered_out() {
    // Car 1 is nearest but heading down; car 2 matches the call direction.
    let elevators = vec![car(1, 3, Direction::Down), car(2, 8, Direction::Up)];
    let id = Dispatcher.assign(Floor(4), Direction::Up, &elevators).unwrap();
    assert_eq!(id, ElevatorId(2));
}

#[test]
fn distance_tie_broken_by_lowest_id() {
    // Both idle, both distance 2 from floor 5.
    let elevators = vec![car(1, 3, Direction::Idle), car(2, 7, Direction::Idle)];
    let id = Dispatcher.assign(Floor(5), Direction::Up, &elevators).unwrap();
    assert_eq!(id, ElevatorId(1));

    // Same tie with ids swapped still picks the lower id.
    let elevators = vec![car(2, 3, Direction::Idle), car(3, 7, Direction::Idle)];
    let id = Dispatcher.assign(Floor(5), Direction::Up, &elevators).unwrap();
    assert_eq!(id, ElevatorId(2));
}

#[test]
fn crude_fallback_when_nothing_qualifies() {
    // Every car is busy heading the wrong way; first in id order takes it.
    let elevators = vec![car(1, 3, Direction::Down), car(2, 8, Direction::Down)];
    let id = Dispatcher.assign(Floor(4), Direction::Up, &elevators).unwrap();
    assert_eq!(id, ElevatorId(1));
}

#[test]
fn empty_bank_is_a_configuration_error() {
    let err = Dispatcher.assign(Floor(3), Direction::Up, &[]).unwrap_err();
    assert!(matches!(err, DispatchError::NoElevatorsAvailable));
}

#[test]
fn assignment_has_no_side_effects() {
    let elevators = vec![car(1, 2, Direction::Idle)];
    let before = elevators.clone();
    Dispatcher.assign(Floor(9), Direction::Down, &elevators).unwrap();
    assert_eq!(elevators, before);
}
