//! The `Elevator` entity.

use std::collections::BTreeSet;

use lift_core::{Direction, ElevatorId, Floor};

/// One elevator car.
///
/// `destinations` is a set — the floors the car must still visit, whether as
/// drop-offs or accepted pickups.  Storage is unordered in meaning; the
/// ordered `BTreeSet` representation is what makes the engine's
/// direction-ordered scan (min-above / max-below) cheap.  `passengers` is a
/// multiset of destination floors, one entry per rider on board.
///
/// # Invariants (checked by the engine, not the type)
///
/// - `direction == Idle` if and only if `destinations` is empty.
/// - Every floor in `passengers` also appears in `destinations` until the car
///   arrives there and the rider disembarks.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    /// Stable identity, assigned at creation, immutable.
    pub id: ElevatorId,

    /// Where the car is right now.  Updated only by the engine, one floor per
    /// movement step.
    pub current_floor: Floor,

    /// Travel direction; `Idle` exactly when there is nothing left to visit.
    pub direction: Direction,

    /// Floors the car must still stop at.
    pub destinations: BTreeSet<Floor>,

    /// Destination floor of each rider currently on board.
    pub passengers: Vec<Floor>,
}

impl Elevator {
    /// A new car parked idle at the ground floor.
    pub fn new(id: ElevatorId) -> Self {
        Self {
            id,
            current_floor: Floor(1),
            direction:     Direction::Idle,
            destinations:  BTreeSet::new(),
            passengers:    Vec::new(),
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.direction.is_idle()
    }

    /// Riders currently on board.
    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    /// `true` when the idle⇔empty-destinations invariant holds.
    pub fn invariant_holds(&self) -> bool {
        self.direction.is_idle() == self.destinations.is_empty()
            && self.passengers.iter().all(|p| self.destinations.contains(p))
    }
}
