//! Fluent builder for constructing `FleetStore` + `CarRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use ev_core::SimConfig;
//! use ev_fleet::FleetBuilder;
//!
//! let config = SimConfig { tick_minutes: 5, seed: 42 };
//! let (fleet, rngs) = FleetBuilder::new(config.seed)
//!     .car("Alice", 30)
//!     .car("Bob", 45)
//!     .build(&config)
//!     .unwrap();
//!
//! assert_eq!(fleet.count, 2);
//! assert_eq!(rngs.len(),  2);
//! ```

use std::collections::HashSet;

use ev_core::SimConfig;

use crate::{CarRngs, FleetError, FleetResult, FleetStore};

/// Fluent builder for [`FleetStore`] + [`CarRngs`].
///
/// `build` runs every fleet-level configuration check: owner names must be
/// non-empty and unique, and each charge duration must be a positive exact
/// multiple of the tick length.  A fleet that builds successfully can never
/// trip the engine's equality-release invariant.
pub struct FleetBuilder {
    seed: u64,
    owners: Vec<String>,
    charge_minutes: Vec<u32>,
}

impl FleetBuilder {
    /// Create an empty builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            owners: Vec::new(),
            charge_minutes: Vec::new(),
        }
    }

    /// Add one car: `owner`'s car needs `charge_minutes` minutes of charge.
    ///
    /// Cars are assigned ascending `CarId`s in insertion order.
    pub fn car(mut self, owner: impl Into<String>, charge_minutes: u32) -> Self {
        self.owners.push(owner.into());
        self.charge_minutes.push(charge_minutes);
        self
    }

    /// Validate every car against `config` and construct the store pair.
    pub fn build(self, config: &SimConfig) -> FleetResult<(FleetStore, CarRngs)> {
        if config.tick_minutes == 0 {
            return Err(FleetError::ZeroTickLength);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(self.owners.len());
        for (i, owner) in self.owners.iter().enumerate() {
            if owner.is_empty() {
                return Err(FleetError::EmptyOwner { index: i });
            }
            if !seen.insert(owner.as_str()) {
                return Err(FleetError::DuplicateOwner(owner.clone()));
            }

            let minutes = self.charge_minutes[i];
            if minutes == 0 {
                return Err(FleetError::ZeroDuration {
                    owner: owner.clone(),
                });
            }
            if minutes % config.tick_minutes != 0 {
                return Err(FleetError::DurationNotTickMultiple {
                    owner:        owner.clone(),
                    minutes,
                    tick_minutes: config.tick_minutes,
                });
            }
        }

        let count = self.owners.len();
        let store = FleetStore::new(self.owners, self.charge_minutes);
        let rngs = CarRngs::new(count, self.seed);

        Ok((store, rngs))
    }
}
