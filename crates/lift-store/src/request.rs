//! The `FloorRequest` (hall call) entity.

use lift_core::{Direction, ElevatorId, Floor, RequestId};

/// A pending hall call: somebody on `floor` wants to travel `direction`.
///
/// Lives from creation until an elevator is physically present at `floor`
/// and services it, at which point the sim loop removes it.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRequest {
    /// Stable identity, assigned by the store on insert.
    pub id: RequestId,

    /// Where the rider is waiting.
    pub floor: Floor,

    /// Desired travel direction — never `Idle` (validated at creation).
    pub direction: Direction,

    /// The dispatcher's advisory pick, recorded for observability.
    ///
    /// The elevator that actually performs the pickup is decided
    /// independently by the engine's floor-match logic; nothing binds it to
    /// this field.  Synthesized calls carry `None`.
    pub assigned_elevator: Option<ElevatorId>,
}

/// A hall call about to be inserted — everything but the store-assigned id.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NewRequest {
    pub floor: Floor,
    pub direction: Direction,
    pub assigned_elevator: Option<ElevatorId>,
}

impl NewRequest {
    /// An unassigned call, as the tick loop synthesizes them.
    pub fn unassigned(floor: Floor, direction: Direction) -> Self {
        Self { floor, direction, assigned_elevator: None }
    }
}
