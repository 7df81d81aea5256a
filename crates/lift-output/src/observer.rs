//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::{SimClock, Tick};
use lift_sim::SimObserver;
use lift_store::Elevator;

use crate::OutputError;
use crate::row::{ElevatorSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// A [`SimObserver`] that writes elevator snapshots and tick summaries to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

/// One snapshot row per car, in the order the sim reported them.
fn snapshot_rows(tick: Tick, elevators: &[Elevator]) -> Vec<ElevatorSnapshotRow> {
    elevators
        .iter()
        .map(|car| ElevatorSnapshotRow {
            tick:        tick.0,
            elevator_id: car.id.0,
            floor:       car.current_floor.0,
            direction:   car.direction.as_str(),
            passengers:  car.passenger_count(),
            destinations: car
                .destinations
                .iter()
                .map(|f| f.0.to_string())
                .collect::<Vec<_>>()
                .join(";"),
        })
        .collect()
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, elevators: &[Elevator], pending: usize, clock: &SimClock) {
        let rows = snapshot_rows(tick, elevators);
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        let summary = TickSummaryRow {
            tick:             tick.0,
            sim_elapsed_secs: clock.sim_elapsed_secs,
            pending_calls:    pending,
            active_elevators: elevators.iter().filter(|c| !c.is_idle()).count(),
        };
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _clock: &SimClock) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
