//! depot — reference scenario for the rust_ev charging framework.
//!
//! Eight cars compete for three chargers on 5-minute ticks.  Progress is
//! printed to the console and the full event stream is written to
//! `output/events.csv` + `output/tick_summaries.csv`.

use std::fs;
use std::path::Path;

use anyhow::Result;

use ev_core::{SimConfig, SimEvent, Tick};
use ev_fleet::{FleetBuilder, FleetStore};
use ev_output::{CsvWriter, SimOutputObserver};
use ev_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const CHARGER_COUNT: usize = 3;
const TICK_MINUTES:  u32   = 5;
const SEED:          u64   = 42;
const OUTPUT_DIR:    &str  = "output";

// ── Console reporter ──────────────────────────────────────────────────────────

/// Prints one line per event, resolving car IDs to owner names.
struct ConsoleReporter {
    owners: Vec<String>,
}

impl ConsoleReporter {
    fn new(fleet: &FleetStore) -> Self {
        Self {
            owners: fleet.owners.clone(),
        }
    }

    fn owner(&self, car: ev_core::CarId) -> &str {
        &self.owners[car.index()]
    }
}

impl SimObserver for ConsoleReporter {
    fn on_event(&mut self, event: &SimEvent) {
        match *event {
            SimEvent::ReservationsPlanned { car, count } => {
                println!("📞 making {count} reservations for {}", self.owner(car));
            }
            SimEvent::ReservationMade { car, charger } => {
                println!("👉 reserved charger {} for {}", charger.0, self.owner(car));
            }
            SimEvent::ReservationCanceled { car, charger } => {
                println!("❌ canceled reservation for {} on {}", self.owner(car), charger.0);
            }
            SimEvent::ChargingStarted { car, charger, .. } => {
                println!("⚡️ {}'s car is now charging on {}", self.owner(car), charger.0);
            }
            SimEvent::CarCharged { car, .. } => {
                println!("🔋 {}'s car is charged", self.owner(car));
            }
            SimEvent::AllCharged { .. } => {
                println!("🏆 All cars charged!");
            }
        }
    }
}

// ── Combined observer ─────────────────────────────────────────────────────────

/// Forwards every hook to both the console reporter and the CSV output.
struct Reporters {
    console: ConsoleReporter,
    output:  SimOutputObserver<CsvWriter>,
}

impl SimObserver for Reporters {
    fn on_tick_start(&mut self, tick: Tick) {
        self.console.on_tick_start(tick);
        self.output.on_tick_start(tick);
    }

    fn on_event(&mut self, event: &SimEvent) {
        self.console.on_event(event);
        self.output.on_event(event);
    }

    fn on_tick_end(&mut self, tick: Tick, charging: usize) {
        self.console.on_tick_end(tick, charging);
        self.output.on_tick_end(tick, charging);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.console.on_sim_end(final_tick);
        self.output.on_sim_end(final_tick);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = SimConfig {
        tick_minutes: TICK_MINUTES,
        seed:         SEED,
    };

    let (fleet, rngs) = FleetBuilder::new(config.seed)
        .car("Alice", 30)
        .car("Bob", 45)
        .car("Charlie", 20)
        .car("Delroy", 60)
        .car("Egon", 30)
        .car("Fairuza", 60)
        .car("Galadriel", 120)
        .car("Horace", 120)
        .build(&config)?;

    fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;

    let console = ConsoleReporter::new(&fleet);
    let mut reporters = Reporters {
        console,
        output: SimOutputObserver::new(writer, &config),
    };

    let mut sim = SimBuilder::new(config, fleet, rngs, CHARGER_COUNT).build()?;
    let summary = sim.run(&mut reporters)?;

    if let Some(err) = reporters.output.take_error() {
        return Err(err.into());
    }

    println!(
        "{} cars charged in {} ticks ({} simulated minutes); event log in {OUTPUT_DIR}/",
        summary.cars_charged,
        summary.ticks,
        sim.clock.elapsed_minutes(),
    );

    Ok(())
}
