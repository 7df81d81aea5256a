//! The result of stepping one car, plus the event trace describing it.

use lift_core::{Direction, Floor, RequestId};
use lift_store::Elevator;

/// Everything that happened during one [`step`](crate::ElevatorEngine::step).
///
/// The caller persists `elevator`, removes `consumed_call` from the pending
/// queue (if set), and credits `wait_secs` of simulated time to the clock.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// The car after the step.
    pub elevator:      Elevator,
    /// Hall call consumed by this step, if any. A call is consumed both when
    /// riders board and when nobody in the party can travel the car's way;
    /// either way the button press has been answered.
    pub consumed_call: Option<RequestId>,
    /// What happened, in order.
    pub events:        Vec<StepEvent>,
    /// Simulated seconds spent on travel or open doors during this step.
    pub wait_secs:     u32,
}

/// One observable thing a car did during a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// An idle car committed to a hall call.
    CallAccepted {
        request:   RequestId,
        floor:     Floor,
        direction: Direction,
    },
    /// The car travelled one floor.
    Moved { to: Floor },
    /// The car reached a stop and opened its doors.
    Arrived { floor: Floor },
    /// Riders whose destination is this floor left the car.
    DroppedOff { riders: usize },
    /// Waiting riders boarded, bound for these floors.
    PickedUp { destinations: Vec<Floor> },
    /// The doors opened at a floor with no waiting hall call.
    NobodyWaiting,
    /// No destination remained ahead, so the car turned around.
    Reversed { to: Direction },
    /// The destination set drained and the car parked.
    Idled,
}
