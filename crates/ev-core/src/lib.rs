//! `ev-core` — foundational types for the `rust_ev` charging framework.
//!
//! This crate is a dependency of every other `ev-*` crate.  It intentionally
//! has no `ev-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`ids`]   | `CarId`, `ChargerId`                          |
//! | [`time`]  | `Tick`, `SimClock`, `SimConfig`               |
//! | [`rng`]   | `CarRng` (per-car deterministic RNG)          |
//! | [`event`] | `SimEvent` — the typed notification stream    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod event;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use event::SimEvent;
pub use ids::{CarId, ChargerId};
pub use rng::CarRng;
pub use time::{SimClock, SimConfig, Tick};
