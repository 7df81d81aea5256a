//! The stepping rules.
//!
//! Direction policy is a classic elevator scan: while travelling, a car only
//! stops at destinations on its current side of the shaft (the least
//! destination at-or-above it going up, the greatest at-or-below it going
//! down), and reverses only once nothing remains ahead.

use lift_core::{Direction, Floor, Floors, SimConfig, SimRng};
use lift_store::{Elevator, FloorRequest};
use lift_traffic::TrafficModel;

use crate::error::{EngineError, EngineResult};
use crate::outcome::{StepEvent, StepOutcome};

/// The per-elevator state machine.
///
/// Holds only run-wide constants; all mutable state flows through
/// [`step`](Self::step) as arguments and return values.
#[derive(Clone, Debug)]
pub struct ElevatorEngine {
    floors:                Floors,
    travel_secs_per_floor: u32,
    door_open_secs:        u32,
}

impl ElevatorEngine {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            floors:                config.floors(),
            travel_secs_per_floor: config.travel_secs_per_floor,
            door_open_secs:        config.door_open_secs,
        }
    }

    /// Perform exactly one action for one car.
    ///
    /// - Idle with a call pending: commit to the nearest call (no movement
    ///   this step).
    /// - Moving with a stop elsewhere ahead: travel one floor.
    /// - Moving with the next stop here (or nothing ahead): open the doors
    ///   and handle the arrival — drop off, board, re-evaluate direction.
    ///
    /// `pending` is the current hall-call queue, freshly read so this car
    /// sees calls its siblings consumed earlier in the same tick as gone.
    pub fn step<T: TrafficModel>(
        &self,
        elevator: Elevator,
        pending:  &[FloorRequest],
        traffic:  &T,
        rng:      &mut SimRng,
    ) -> EngineResult<StepOutcome> {
        if elevator.is_idle() {
            if !elevator.destinations.is_empty() {
                return Err(EngineError::InvariantViolation {
                    id:     elevator.id,
                    detail: "idle with a non-empty destination set",
                });
            }
            return Ok(self.step_idle(elevator, pending));
        }

        if elevator.destinations.is_empty() {
            return Err(EngineError::InvariantViolation {
                id:     elevator.id,
                detail: "moving with an empty destination set",
            });
        }

        match self.next_stop(&elevator) {
            Some(stop) if stop != elevator.current_floor => Ok(self.step_travel(elevator)),
            // No destination on this side, or the next stop is right here:
            // both are arrivals.  The former happens when a pickup committed
            // the car toward a call it has since reached from the far side.
            _ => Ok(self.step_arrival(elevator, pending, traffic, rng)),
        }
    }

    // ── Idle: commit to the nearest call ──────────────────────────────────────

    fn step_idle(&self, mut elevator: Elevator, pending: &[FloorRequest]) -> StepOutcome {
        let nearest = pending
            .iter()
            .enumerate()
            .min_by_key(|(index, call)| {
                let detour = if call.direction == elevator.direction { 0 } else { 1 };
                (call.floor.distance_to(elevator.current_floor), detour, *index)
            })
            .map(|(_, call)| call.clone());

        let mut events = Vec::new();
        let mut consumed_call = None;

        if let Some(call) = nearest {
            elevator.direction = Direction::toward(elevator.current_floor, call.floor);
            elevator.destinations.insert(call.floor);
            consumed_call = Some(call.id);
            events.push(StepEvent::CallAccepted {
                request:   call.id,
                floor:     call.floor,
                direction: call.direction,
            });
        }

        StepOutcome { elevator, consumed_call, events, wait_secs: 0 }
    }

    // ── Travel: one floor toward the next stop ────────────────────────────────

    fn step_travel(&self, mut elevator: Elevator) -> StepOutcome {
        elevator.current_floor = elevator.current_floor.step(elevator.direction);
        let to = elevator.current_floor;
        StepOutcome {
            elevator,
            consumed_call: None,
            events:        vec![StepEvent::Moved { to }],
            wait_secs:     self.travel_secs_per_floor,
        }
    }

    // ── Arrival: doors open, riders move, direction re-evaluated ──────────────

    fn step_arrival<T: TrafficModel>(
        &self,
        mut elevator: Elevator,
        pending:      &[FloorRequest],
        traffic:      &T,
        rng:          &mut SimRng,
    ) -> StepOutcome {
        let here = elevator.current_floor;
        let mut events = vec![StepEvent::Arrived { floor: here }];
        let mut consumed_call = None;

        // Drop off every rider bound for this floor.
        let before = elevator.passengers.len();
        elevator.passengers.retain(|&destination| destination != here);
        let dropped = before - elevator.passengers.len();
        if dropped > 0 {
            events.push(StepEvent::DroppedOff { riders: dropped });
        }

        // Board only if a call is actually waiting here.  The call is
        // consumed even when the boarding party is empty (a car going up at
        // the top floor admits nobody): the button press has been answered
        // by a physically present car either way.
        if let Some(call) = pending.iter().find(|call| call.floor == here) {
            let party = traffic.boarding_party(rng, here, elevator.direction, self.floors);
            if !party.is_empty() {
                elevator.passengers.extend(party.iter().copied());
                elevator.destinations.extend(party.iter().copied());
                events.push(StepEvent::PickedUp { destinations: party });
            }
            consumed_call = Some(call.id);
        } else {
            events.push(StepEvent::NobodyWaiting);
        }

        // This stop is served; newly boarded riders may have re-added it, so
        // remove after boarding.
        elevator.destinations.remove(&here);

        if elevator.destinations.is_empty() {
            elevator.direction = Direction::Idle;
            events.push(StepEvent::Idled);
        } else {
            let ahead = match elevator.direction {
                Direction::Up => elevator.destinations.iter().any(|&d| d > here),
                Direction::Down => elevator.destinations.iter().any(|&d| d < here),
                Direction::Idle => false,
            };
            if !ahead {
                elevator.direction = elevator.direction.reversed();
                events.push(StepEvent::Reversed { to: elevator.direction });
            }
        }

        StepOutcome { elevator, consumed_call, events, wait_secs: self.door_open_secs }
    }

    /// The next floor this car will stop at, scanning in its direction:
    /// least destination at-or-above going up, greatest at-or-below going
    /// down.  `None` when nothing lies on that side.
    fn next_stop(&self, elevator: &Elevator) -> Option<Floor> {
        match elevator.direction {
            Direction::Up => elevator
                .destinations
                .range(elevator.current_floor..)
                .next()
                .copied(),
            Direction::Down => elevator
                .destinations
                .range(..=elevator.current_floor)
                .next_back()
                .copied(),
            Direction::Idle => None,
        }
    }
}
