use std::collections::BTreeSet;

use lift_core::{Direction, ElevatorId, Floor, Floors};
use lift_store::{ElevatorStore, MemoryElevatorStore, MemoryRequestStore, RequestStore};

use crate::{ApiError, ElevatorStatus, elevator_status, request_elevator, select_destination};

fn floors() -> Floors {
    Floors::new(10)
}

mod request_tests {
    use super::*;

    #[test]
    fn call_is_queued_with_the_advisory_pick() {
        let elevators = MemoryElevatorStore::bank(2);
        let mut requests = MemoryRequestStore::new();

        let ticket =
            request_elevator(&elevators, &mut requests, floors(), Floor(6), Direction::Up)
                .unwrap();

        assert_eq!(ticket.assigned, ElevatorId(1));
        let pending = requests.pending().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, ticket.request);
        assert_eq!(pending[0].assigned_elevator, Some(ElevatorId(1)));
    }

    #[test]
    fn assignment_never_touches_the_car() {
        let elevators = MemoryElevatorStore::bank(1);
        let mut requests = MemoryRequestStore::new();
        request_elevator(&elevators, &mut requests, floors(), Floor(9), Direction::Down)
            .unwrap();

        // The nominated car is untouched; pickup is the engine's call.
        let car = elevators.get(ElevatorId(1)).unwrap().unwrap();
        assert!(car.is_idle());
        assert!(car.destinations.is_empty());
    }

    #[test]
    fn out_of_range_floor_is_rejected() {
        let elevators = MemoryElevatorStore::bank(1);
        let mut requests = MemoryRequestStore::new();
        let result =
            request_elevator(&elevators, &mut requests, floors(), Floor(11), Direction::Up);
        assert!(matches!(result, Err(ApiError::FloorOutOfRange { .. })));
        assert!(requests.is_empty());
    }

    #[test]
    fn idle_direction_is_rejected() {
        let elevators = MemoryElevatorStore::bank(1);
        let mut requests = MemoryRequestStore::new();
        let result =
            request_elevator(&elevators, &mut requests, floors(), Floor(4), Direction::Idle);
        assert!(matches!(result, Err(ApiError::InvalidDirection(_))));
    }

    #[test]
    fn empty_bank_surfaces_the_dispatch_error() {
        let elevators = MemoryElevatorStore::new();
        let mut requests = MemoryRequestStore::new();
        let result =
            request_elevator(&elevators, &mut requests, floors(), Floor(4), Direction::Up);
        assert!(matches!(result, Err(ApiError::Dispatch(_))));
    }
}

mod destination_tests {
    use super::*;

    #[test]
    fn moving_car_gains_a_stop() {
        let mut elevators = MemoryElevatorStore::bank(1);
        let mut car = elevators.get(ElevatorId(1)).unwrap().unwrap();
        car.direction = Direction::Up;
        car.destinations.insert(Floor(5));
        elevators.upsert(car).unwrap();

        select_destination(&mut elevators, ElevatorId(1), floors(), Floor(8)).unwrap();

        let car = elevators.get(ElevatorId(1)).unwrap().unwrap();
        assert_eq!(car.destinations, BTreeSet::from([Floor(5), Floor(8)]));
        assert_eq!(car.direction, Direction::Up);
    }

    #[test]
    fn idle_car_heads_for_the_selected_floor() {
        let mut elevators = MemoryElevatorStore::bank(1);
        select_destination(&mut elevators, ElevatorId(1), floors(), Floor(7)).unwrap();

        let car = elevators.get(ElevatorId(1)).unwrap().unwrap();
        assert_eq!(car.direction, Direction::Up);
        assert_eq!(car.destinations, BTreeSet::from([Floor(7)]));
        assert!(car.invariant_holds());
    }

    #[test]
    fn selecting_the_parked_floor_is_a_no_op() {
        let mut elevators = MemoryElevatorStore::bank(1);
        select_destination(&mut elevators, ElevatorId(1), floors(), Floor(1)).unwrap();

        let car = elevators.get(ElevatorId(1)).unwrap().unwrap();
        assert!(car.is_idle());
        assert!(car.destinations.is_empty());
    }

    #[test]
    fn unknown_elevator_is_a_benign_no_op() {
        let mut elevators = MemoryElevatorStore::bank(1);
        select_destination(&mut elevators, ElevatorId(99), floors(), Floor(3)).unwrap();
    }

    #[test]
    fn out_of_range_floor_is_rejected() {
        let mut elevators = MemoryElevatorStore::bank(1);
        let result = select_destination(&mut elevators, ElevatorId(1), floors(), Floor(0));
        assert!(matches!(result, Err(ApiError::FloorOutOfRange { .. })));
    }
}

mod status_tests {
    use super::*;

    #[test]
    fn snapshot_covers_the_bank_in_id_order() {
        let mut elevators = MemoryElevatorStore::bank(3);
        let mut car = elevators.get(ElevatorId(2)).unwrap().unwrap();
        car.current_floor = Floor(4);
        car.direction = Direction::Down;
        car.destinations = BTreeSet::from([Floor(2), Floor(3)]);
        car.passengers = vec![Floor(2), Floor(2)];
        elevators.upsert(car).unwrap();

        let statuses = elevator_status(&elevators).unwrap();
        assert_eq!(statuses.len(), 3);
        assert_eq!(statuses[1].id, ElevatorId(2));
        assert_eq!(statuses[1].destinations, vec![Floor(2), Floor(3)]);
        assert_eq!(statuses[1].passengers, vec![Floor(2), Floor(2)]);
        assert!(statuses[0].destinations.is_empty());
    }

    #[test]
    fn status_serializes_for_the_wire() {
        let elevators = MemoryElevatorStore::bank(1);
        let statuses = elevator_status(&elevators).unwrap();
        let json = serde_json::to_string(&statuses).unwrap();
        let back: Vec<ElevatorStatus> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, statuses);
    }
}
