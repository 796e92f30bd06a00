//! `ev-sim` — tick loop orchestrator for the rust_ev framework.
//!
//! # The tick loop
//!
//! ```text
//! plan once  — every car reserves 2..=M chargers (ev-reserve planner)
//! until all cars charged:
//!   for each charger in ascending ChargerId order:
//!     idle + pending   → promote the earliest reservation to occupancy,
//!                        then immediately retract that car's entries on
//!                        every other charger (a charger processed later in
//!                        this same pass must not promote the same car)
//!     occupied         → add one tick of charge; when elapsed equals the
//!                        required duration exactly, mark the car charged
//!                        and free the charger
//!     idle + no queue  → nothing
//! ```
//!
//! A charger promoted this tick does not also accumulate charge this tick;
//! each charger is visited exactly once per pass.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ev_core::SimConfig;
//! use ev_fleet::FleetBuilder;
//! use ev_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig { tick_minutes: 5, seed: 42 };
//! let (fleet, rngs) = FleetBuilder::new(config.seed)
//!     .car("Alice", 30)
//!     .car("Bob", 45)
//!     .car("Charlie", 20)
//!     .build(&config)?;
//! let mut sim = SimBuilder::new(config, fleet, rngs, 2).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{EventLog, NoopObserver, SimObserver};
pub use sim::{RunSummary, Sim};
