//! Plain data row types written by output backends.

/// One car's state at the end of a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshotRow {
    pub tick:        u64,
    pub elevator_id: u32,
    pub floor:       u8,
    /// `"up"`, `"down"`, or `"idle"`.
    pub direction:   &'static str,
    /// Riders currently on board.
    pub passengers:  usize,
    /// Remaining stops, ascending, `;`-joined (empty string when none).
    pub destinations: String,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    /// Virtual seconds elapsed, tick periods plus simulated waits.
    pub sim_elapsed_secs: u64,
    pub pending_calls:    usize,
    /// Cars with a non-idle direction.
    pub active_elevators: usize,
}
