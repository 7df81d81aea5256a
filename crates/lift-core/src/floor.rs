//! Floor values and the serviced floor range.
//!
//! Floors are 1-based (`Floor(1)` is the ground floor), matching every
//! status display a building occupant would read.  `u8` comfortably covers
//! any real building.

use crate::Direction;

// ── Floor ─────────────────────────────────────────────────────────────────────

/// One floor of the building, 1-based.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u8);

impl Floor {
    /// Absolute distance to `other`, in floors.
    #[inline]
    pub fn distance_to(self, other: Floor) -> u8 {
        self.0.abs_diff(other.0)
    }

    /// The adjacent floor one step in `direction`.
    ///
    /// Callers guarantee the step stays inside the serviced range; the engine
    /// only ever steps toward an in-range destination.  `Idle` is a no-op.
    #[inline]
    pub fn step(self, direction: Direction) -> Floor {
        match direction {
            Direction::Up   => Floor(self.0 + 1),
            Direction::Down => Floor(self.0 - 1),
            Direction::Idle => self,
        }
    }
}

impl std::fmt::Display for Floor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Floors ────────────────────────────────────────────────────────────────────

/// The contiguous range of floors a bank serves: `1..=count`.
///
/// Cheap to copy; passed by value everywhere a floor must be validated or a
/// boarding destination sampled.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floors {
    /// Number of serviced floors (N).  The range is `1..=N`.
    pub count: u8,
}

impl Floors {
    pub fn new(count: u8) -> Self {
        Self { count }
    }

    #[inline]
    pub fn bottom(self) -> Floor {
        Floor(1)
    }

    #[inline]
    pub fn top(self) -> Floor {
        Floor(self.count)
    }

    #[inline]
    pub fn contains(self, floor: Floor) -> bool {
        (1..=self.count).contains(&floor.0)
    }

    /// Iterator over every serviced floor, bottom to top.
    pub fn iter(self) -> impl Iterator<Item = Floor> {
        (1..=self.count).map(Floor)
    }

    /// Inclusive bounds of the floors strictly beyond `floor` in `direction`.
    ///
    /// This is the valid destination range for riders boarding at `floor`:
    /// `(floor, top]` going up, `[bottom, floor)` going down.  Returns `None`
    /// when the range is empty (top floor going up, bottom floor going down,
    /// or `Idle`) — the caller must then skip boarding entirely.
    pub fn beyond(self, floor: Floor, direction: Direction) -> Option<(Floor, Floor)> {
        match direction {
            Direction::Up if floor < self.top() => Some((Floor(floor.0 + 1), self.top())),
            Direction::Down if floor > self.bottom() => Some((self.bottom(), Floor(floor.0 - 1))),
            _ => None,
        }
    }
}
