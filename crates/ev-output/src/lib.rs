//! `ev-output` — persists the simulation's event stream.
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`row`]      | `EventRow`, `TickSummaryRow` — plain data rows       |
//! | [`writer`]   | The `OutputWriter` trait                             |
//! | [`csv`]      | `CsvWriter` — two-file CSV backend                   |
//! | [`observer`] | `SimOutputObserver<W>` — observer-to-writer bridge   |
//! | [`error`]    | `OutputError`, `OutputResult`                        |
//!
//! The engine itself never formats or persists anything; wire a
//! `SimOutputObserver` into `Sim::run` to capture a run on disk.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventRow, TickSummaryRow};
pub use writer::OutputWriter;
