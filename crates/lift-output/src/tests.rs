use std::fs;

use lift_core::{Direction, Floor, SimConfig};
use lift_sim::SimBuilder;
use lift_traffic::ScriptedTraffic;

use crate::writer::OutputWriter;
use crate::{CsvWriter, ElevatorSnapshotRow, SimOutputObserver, TickSummaryRow};

mod csv_writer {
    use super::*;

    #[test]
    fn creates_both_files_with_headers() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();

        let snapshots = fs::read_to_string(dir.path().join("elevator_snapshots.csv")).unwrap();
        assert!(snapshots.starts_with("tick,elevator_id,floor,direction,passengers,destinations"));

        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert!(summaries.starts_with("tick,sim_elapsed_secs,pending_calls,active_elevators"));
    }

    #[test]
    fn rows_reach_the_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();

        writer
            .write_snapshots(&[ElevatorSnapshotRow {
                tick:         3,
                elevator_id:  1,
                floor:        5,
                direction:    "up",
                passengers:   2,
                destinations: "7;9".into(),
            }])
            .unwrap();
        writer
            .write_tick_summary(&TickSummaryRow {
                tick:             3,
                sim_elapsed_secs: 17,
                pending_calls:    1,
                active_elevators: 1,
            })
            .unwrap();
        writer.finish().unwrap();

        let snapshots = fs::read_to_string(dir.path().join("elevator_snapshots.csv")).unwrap();
        assert!(snapshots.contains("3,1,5,up,2,7;9"));

        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert!(summaries.contains("3,17,1,1"));
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

mod sim_output {
    use super::*;

    #[test]
    fn a_run_produces_one_snapshot_per_car_per_tick() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimConfig {
            elevator_count: 2,
            total_ticks:    5,
            ..SimConfig::default()
        };
        let traffic = ScriptedTraffic::new().push_call(Floor(4), Direction::Up);
        let mut sim = SimBuilder::in_memory(config, traffic).build().unwrap();

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut observer = SimOutputObserver::new(writer);
        sim.run(&mut observer).unwrap();
        assert!(observer.take_error().is_none());

        let snapshots = fs::read_to_string(dir.path().join("elevator_snapshots.csv")).unwrap();
        // Header plus 2 cars × 5 ticks.
        assert_eq!(snapshots.lines().count(), 1 + 2 * 5);

        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(summaries.lines().count(), 1 + 5);
        // Tick 0: the call was accepted, so exactly one car is active.
        assert!(summaries.lines().nth(1).unwrap().ends_with(",1"));
    }
}
