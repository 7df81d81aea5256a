//! Travel direction shared by elevators and hall calls.
//!
//! A single enum serves both roles: an elevator's direction may be `Idle`,
//! a hall call's never is (validated at the point a call is created, not by
//! the type).  One shared type keeps the dispatcher's
//! `direction == call.direction || direction == Idle` filter direct.

/// Which way an elevator is travelling, or which way a waiting rider wants to go.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Stationary with no destinations (elevators only — never valid on a call).
    #[default]
    Idle,
    Up,
    Down,
}

impl Direction {
    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, Direction::Idle)
    }

    /// `true` for `Up` and `Down`.
    #[inline]
    pub fn is_moving(self) -> bool {
        !self.is_idle()
    }

    /// The opposite travel direction.  `Idle` reverses to itself.
    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }

    /// The direction an elevator at `from` must head to reach `to`.
    ///
    /// Equal floors resolve to `Down` (`to > from` decides, nothing else);
    /// arrival handling on the very next step makes the choice harmless.
    #[inline]
    pub fn toward(from: crate::Floor, to: crate::Floor) -> Direction {
        if to > from { Direction::Up } else { Direction::Down }
    }

    /// Machine-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Idle => "idle",
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }

    /// One-character arrow for the console status table.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up   => "↑",
            Direction::Down => "↓",
            Direction::Idle => "–",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
