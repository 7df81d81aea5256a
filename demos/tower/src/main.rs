//! tower — end-to-end demo of the rust_lift controller.
//!
//! Runs a 10-floor, 4-car bank under random traffic with a real-time pace,
//! narrating every tick on the console and recording CSV snapshots under
//! `output/tower/`.  Midway through, a manual hall call is injected through
//! the command API to exercise the dispatcher's advisory path.

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use lift_api::{elevator_status, request_elevator};
use lift_core::{Direction, Floor, SimClock, SimConfig, Tick};
use lift_engine::{EngineError, StepOutcome};
use lift_output::writer::OutputWriter;
use lift_output::{ConsoleObserver, CsvWriter, SimOutputObserver};
use lift_sim::{SimBuilder, SimObserver};
use lift_store::{Elevator, FloorRequest};
use lift_traffic::RandomTraffic;

// ── Constants ─────────────────────────────────────────────────────────────────

const TOTAL_TICKS:      u64 = 40;
const SEED:             u64 = 42;
const MANUAL_CALL_TICK: u64 = 10;
/// Real milliseconds per tick.  The simulated tick period stays 3 s of
/// virtual time regardless.
const PACE_MS:          u64 = 250;

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards every callback to the console narrator and the CSV recorder.
struct Tee {
    console: ConsoleObserver,
    csv:     SimOutputObserver<CsvWriter>,
}

impl SimObserver for Tee {
    fn on_tick_start(&mut self, tick: Tick) {
        self.console.on_tick_start(tick);
        self.csv.on_tick_start(tick);
    }
    fn on_hall_call(&mut self, tick: Tick, call: &FloorRequest) {
        self.console.on_hall_call(tick, call);
        self.csv.on_hall_call(tick, call);
    }
    fn on_elevator_step(&mut self, tick: Tick, outcome: &StepOutcome) {
        self.console.on_elevator_step(tick, outcome);
        self.csv.on_elevator_step(tick, outcome);
    }
    fn on_invariant_violation(&mut self, tick: Tick, error: &EngineError) {
        self.console.on_invariant_violation(tick, error);
        self.csv.on_invariant_violation(tick, error);
    }
    fn on_tick_end(&mut self, tick: Tick, elevators: &[Elevator], pending: usize, clock: &SimClock) {
        self.console.on_tick_end(tick, elevators, pending, clock);
        self.csv.on_tick_end(tick, elevators, pending, clock);
    }
    fn on_sim_end(&mut self, clock: &SimClock) {
        self.console.on_sim_end(clock);
        self.csv.on_sim_end(clock);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== tower — rust_lift elevator controller ===");
    println!("Floors: 10  |  Cars: 4  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    let config = SimConfig {
        total_ticks: TOTAL_TICKS,
        seed:        SEED,
        ..SimConfig::default()
    };
    let traffic = RandomTraffic::from_config(&config);
    let mut sim = SimBuilder::in_memory(config, traffic).build()?;

    std::fs::create_dir_all("output/tower")?;
    let writer = CsvWriter::new(Path::new("output/tower"))?;
    let mut observer = Tee {
        console: ConsoleObserver::new(),
        csv:     SimOutputObserver::new(writer),
    };

    // Tick-at-a-time so a manual call can be injected between ticks, with a
    // real-time pace between them.
    for tick in 0..TOTAL_TICKS {
        if tick == MANUAL_CALL_TICK {
            let floors = sim.config.floors();
            let ticket = request_elevator(
                &sim.elevators,
                &mut sim.requests,
                floors,
                Floor(9),
                Direction::Down,
            )?;
            println!(
                ">>> manual down call at floor 9 → dispatcher nominated car {} (advisory)",
                ticket.assigned
            );
        }
        sim.run_ticks(1, &mut observer)?;
        thread::sleep(Duration::from_millis(PACE_MS));
    }

    if let Some(e) = observer.csv.take_error() {
        eprintln!("output error: {e}");
    }
    let mut writer = observer.csv.into_writer();
    writer.finish()?;

    println!("Final status:");
    let statuses = elevator_status(&sim.elevators)?;
    println!("{}", serde_json::to_string_pretty(&statuses)?);
    println!();
    println!("Done — {} of simulated time. CSVs under output/tower/.", sim.clock);

    Ok(())
}
