//! CSV fleet loader.
//!
//! # CSV format
//!
//! One row per car:
//!
//! ```csv
//! owner,charge_minutes
//! Alice,30
//! Bob,45
//! Charlie,20
//! ```
//!
//! Rows are fed to [`FleetBuilder`] in file order, so `CarId`s follow row
//! order.  All builder validations (unique owners, tick-multiple durations)
//! apply to loaded fleets exactly as to hand-built ones.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ev_core::SimConfig;

use crate::{CarRngs, FleetBuilder, FleetError, FleetResult, FleetStore};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FleetRecord {
    owner:          String,
    charge_minutes: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a fleet from a CSV file.
pub fn load_fleet_csv(
    path:   &Path,
    seed:   u64,
    config: &SimConfig,
) -> FleetResult<(FleetStore, CarRngs)> {
    let file = std::fs::File::open(path).map_err(FleetError::Io)?;
    load_fleet_reader(file, seed, config)
}

/// Like [`load_fleet_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_fleet_reader<R: Read>(
    reader: R,
    seed:   u64,
    config: &SimConfig,
) -> FleetResult<(FleetStore, CarRngs)> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = FleetBuilder::new(seed);

    for result in csv_reader.deserialize::<FleetRecord>() {
        let row = result.map_err(|e| FleetError::Parse(e.to_string()))?;
        builder = builder.car(row.owner, row.charge_minutes);
    }

    builder.build(config)
}
