//! Simulation observer trait for progress reporting and data collection.

use ev_core::{SimEvent, Tick};
use ev_fleet::FleetStore;
use ev_reserve::ChargerStore;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Events arrive strictly in emission order;
/// they are informational and never affect the engine's control flow.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, charging: usize) {
///         println!("tick {tick}: {charging} cars charging");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any charger is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every [`SimEvent`], in order: planning events first (before
    /// the first tick), then promotion/cancellation/completion events as the
    /// passes produce them, and finally `AllCharged`.
    fn on_event(&mut self, _event: &SimEvent) {}

    /// Called at the end of each tick.
    ///
    /// `charging` is the number of chargers occupied once the pass finished.
    fn on_tick_end(&mut self, _tick: Tick, _charging: usize) {}

    /// Called after each tick with read-only access to the full charger and
    /// fleet state, so callers can record or assert on a consistent snapshot
    /// without the sim needing to know about any specific consumer.
    fn on_snapshot(&mut self, _tick: Tick, _chargers: &ChargerStore, _fleet: &FleetStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that collects every event into a `Vec`.
///
/// The cheapest way to get the full ordered event log of a run:
///
/// ```rust,ignore
/// let mut log = EventLog::new();
/// sim.run(&mut log)?;
/// for event in &log.events { ... }
/// ```
#[derive(Default)]
pub struct EventLog {
    pub events: Vec<SimEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SimObserver for EventLog {
    fn on_event(&mut self, event: &SimEvent) {
        self.events.push(event.clone());
    }
}
