//! `lift-output` — simulation output for the rust_lift controller.
//!
//! Two observers are provided:
//!
//! | Observer             | Destination                                          |
//! |----------------------|------------------------------------------------------|
//! | [`ConsoleObserver`]  | per-event log lines + a per-tick status table        |
//! | [`SimOutputObserver`]| any [`OutputWriter`] backend (CSV out of the box)    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer  = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use console::ConsoleObserver;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ElevatorSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
