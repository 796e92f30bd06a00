//! Core fleet storage: `FleetStore` (SoA data) and `CarRngs` (per-car RNG).
//!
//! # Why two structs?
//!
//! The reservation planner needs `&mut CarRngs` (mutable access to each car's
//! RNG) and `&FleetStore` (shared read access to car data) simultaneously.
//! Rust's borrow checker forbids this if both live inside a single struct.
//! Keeping RNGs in a separate `CarRngs` struct resolves the conflict cleanly.

use ev_core::{CarId, CarRng};

// ── CarRngs ───────────────────────────────────────────────────────────────────

/// Per-car deterministic RNG state, separated from [`FleetStore`] to enable
/// simultaneous `&mut CarRngs` + `&FleetStore` borrows in the planner.
#[derive(Debug)]
pub struct CarRngs {
    pub inner: Vec<CarRng>,
}

impl CarRngs {
    /// Allocate and seed `count` per-car RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| CarRng::new(global_seed, CarId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one car's RNG.
    #[inline]
    pub fn get_mut(&mut self, car: CarId) -> &mut CarRng {
        &mut self.inner[car.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── FleetStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all car state.
///
/// Every `Vec` field has exactly `count` elements; the `CarId` value is the
/// index into all of them:
///
/// ```ignore
/// let minutes = fleet.charge_minutes[car.index()];  // O(1), cache-friendly
/// ```
///
/// Owner names and charge durations are immutable after construction; only
/// the `charged` flags change, and only the allocation engine changes them.
#[derive(Debug)]
pub struct FleetStore {
    /// Number of cars.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Owner name per car.  Unique and non-empty (validated at build time).
    pub owners: Vec<String>,

    /// Required charge duration per car, in simulated minutes.  Positive and
    /// an exact multiple of the configured tick length (validated at build
    /// time — the engine's equality-release comparison depends on it).
    pub charge_minutes: Vec<u32>,

    /// Completion flag per car.  Set exactly once, by the allocation engine,
    /// in the tick where elapsed charging time reaches `charge_minutes`.
    pub charged: Vec<bool>,
}

impl FleetStore {
    /// `true` if there are no cars.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `CarId`s in ascending index order.
    pub fn car_ids(&self) -> impl Iterator<Item = CarId> + '_ {
        (0..self.count as u32).map(CarId)
    }

    /// Owner name for `car`.
    #[inline]
    pub fn owner(&self, car: CarId) -> &str {
        &self.owners[car.index()]
    }

    /// Required charge duration for `car`, in minutes.
    #[inline]
    pub fn charge_minutes(&self, car: CarId) -> u32 {
        self.charge_minutes[car.index()]
    }

    /// `true` if `car` has completed its charge.
    #[inline]
    pub fn is_charged(&self, car: CarId) -> bool {
        self.charged[car.index()]
    }

    /// Mark `car` as fully charged.  Called only by the allocation engine.
    #[inline]
    pub fn set_charged(&mut self, car: CarId) {
        self.charged[car.index()] = true;
    }

    /// `true` once every car in the fleet has charged.
    pub fn all_charged(&self) -> bool {
        self.charged.iter().all(|&c| c)
    }

    /// Number of cars still waiting for or receiving charge.
    pub fn uncharged_count(&self) -> usize {
        self.charged.iter().filter(|&&c| !c).count()
    }

    // ── Package-private constructor used by FleetBuilder ──────────────────

    pub(crate) fn new(owners: Vec<String>, charge_minutes: Vec<u32>) -> Self {
        let count = owners.len();
        Self {
            count,
            owners,
            charge_minutes,
            charged: vec![false; count],
        }
    }
}
