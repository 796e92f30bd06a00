//! Fluent builder for constructing a [`Sim`].

use ev_core::SimConfig;
use ev_fleet::{CarRngs, FleetStore};
use ev_reserve::ChargerStore;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick length and seed
/// - [`FleetStore`] + [`CarRngs`] — from [`ev_fleet::FleetBuilder`] or
///   [`ev_fleet::load_fleet_csv`]
/// - `charger_count` — how many chargers to simulate
///
/// # Validation
///
/// `build` rejects, before any planning or ticking:
///
/// | Condition                        | Error                                |
/// |----------------------------------|--------------------------------------|
/// | `tick_minutes == 0`              | `SimError::Config`                   |
/// | `rngs.len() != fleet.count`      | `SimError::CountMismatch`            |
/// | `charger_count < 2`              | `SimError::TooFewChargers`           |
/// | `charger_count >= fleet.count`   | `SimError::ChargersNotFewerThanCars` |
///
/// The last two are the planner's preconditions: every car reserves at least
/// 2 distinct chargers, and the simulation is only meaningful when cars
/// outnumber chargers.
pub struct SimBuilder {
    config:        SimConfig,
    fleet:         FleetStore,
    rngs:          CarRngs,
    charger_count: usize,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(
        config:        SimConfig,
        fleet:         FleetStore,
        rngs:          CarRngs,
        charger_count: usize,
    ) -> Self {
        Self {
            config,
            fleet,
            rngs,
            charger_count,
        }
    }

    /// Validate inputs, build the charger store, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.config.tick_minutes == 0 {
            return Err(SimError::Config("tick length must be positive".into()));
        }

        if self.rngs.len() != self.fleet.count {
            return Err(SimError::CountMismatch {
                expected: self.fleet.count,
                got:      self.rngs.len(),
                what:     "car RNGs",
            });
        }

        if self.charger_count < 2 {
            return Err(SimError::TooFewChargers {
                got: self.charger_count,
            });
        }

        if self.charger_count >= self.fleet.count {
            return Err(SimError::ChargersNotFewerThanCars {
                chargers: self.charger_count,
                cars:     self.fleet.count,
            });
        }

        Ok(Sim {
            clock:    self.config.make_clock(),
            config:   self.config,
            fleet:    self.fleet,
            rngs:     self.rngs,
            chargers: ChargerStore::new(self.charger_count),
            planned:  false,
        })
    }
}
