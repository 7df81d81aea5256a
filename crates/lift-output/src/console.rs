//! Console reporting — per-event log lines plus a per-tick status table.

use lift_core::{SimClock, Tick};
use lift_engine::{StepEvent, StepOutcome};
use lift_sim::SimObserver;
use lift_store::{Elevator, FloorRequest};

/// A [`SimObserver`] that narrates the run on stdout.
///
/// Event lines mirror the control room's log: accepted calls, movements,
/// door openings, boardings.  At the end of each tick a consolidated status
/// table shows every car.
pub struct ConsoleObserver {
    /// When `false`, only the status table is printed.
    pub verbose: bool,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self { verbose: true }
    }

    /// Status table only, no per-event lines.
    pub fn quiet() -> Self {
        Self { verbose: false }
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimObserver for ConsoleObserver {
    fn on_hall_call(&mut self, tick: Tick, call: &FloorRequest) {
        if self.verbose {
            println!("[{tick}] new hall call: {} at floor {}", call.direction, call.floor);
        }
    }

    fn on_elevator_step(&mut self, tick: Tick, outcome: &StepOutcome) {
        if !self.verbose {
            return;
        }
        let car = &outcome.elevator;
        for event in &outcome.events {
            match event {
                StepEvent::CallAccepted { floor, direction, .. } => println!(
                    "[{tick}] elevator {} accepted {direction} call at floor {floor} → heading {}",
                    car.id, car.direction
                ),
                StepEvent::Moved { to } => {
                    let note = if car.passengers.is_empty() {
                        " (empty, heading to pick up waiting passengers)"
                    } else {
                        ""
                    };
                    println!("[{tick}] elevator {} moving {} → now at floor {to}{note}", car.id, car.direction);
                }
                StepEvent::Arrived { floor } => {
                    println!("[{tick}] elevator {} arrived at floor {floor} → doors open", car.id);
                }
                StepEvent::DroppedOff { riders } => {
                    println!("   → {riders} passenger(s) disembarked");
                }
                StepEvent::PickedUp { destinations } => {
                    let floors = destinations
                        .iter()
                        .map(|f| f.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("   → {} passenger(s) entered → going to {floors}", destinations.len());
                }
                StepEvent::NobodyWaiting => {
                    println!("   → no waiting passengers at this floor");
                }
                StepEvent::Reversed { to } => {
                    println!("[{tick}] elevator {} changed direction to {to} (no more stops ahead)", car.id);
                }
                StepEvent::Idled => {
                    println!("[{tick}] elevator {} now idle at floor {}", car.id, car.current_floor);
                }
            }
        }
    }

    fn on_tick_end(&mut self, _tick: Tick, elevators: &[Elevator], pending: usize, clock: &SimClock) {
        println!("\n{clock} — elevator status ({pending} call(s) pending) ─────────────────");
        for car in elevators {
            let destinations = car
                .destinations
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join(",");
            let status = if car.is_idle() { "Idle" } else { "Active" };
            println!(
                "  car {:<2}  floor {:<2}  dir {}  passengers {:<2}  destinations: {:<15}  {status}",
                car.id.0, car.current_floor.0, car.direction.arrow(), car.passenger_count(), destinations
            );
        }
        println!("──────────────────────────────────────────────────────────────\n");
    }
}
