//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to simulated minutes is held in `SimClock`:
//!
//!   sim_minutes = tick * tick_minutes
//!
//! Using an integer tick as the canonical time unit means all charge-duration
//! arithmetic is exact (no floating-point drift) and comparisons are O(1).
//! There is no calendar: the simulation has no notion of wall-clock time,
//! only minutes elapsed on the charging clock.
//!
//! The default tick length is 5 minutes.  Applications that need finer
//! resolution set `tick_minutes` to a smaller value; the rest of the
//! framework is agnostic, as long as charge durations stay exact multiples
//! of the tick length.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at one tick per simulated minute a u64
/// lasts ~35 billion millennia, far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated minutes.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated minutes one tick represents.  Default: 5.
    pub tick_minutes: u32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given resolution.
    pub fn new(tick_minutes: u32) -> Self {
        Self {
            tick_minutes,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated minutes since tick 0.
    #[inline]
    pub fn elapsed_minutes(&self) -> u64 {
        self.current_tick.0 * self.tick_minutes as u64
    }

    /// Break elapsed time into (hour, minute) components from sim start.
    /// Useful for human-readable logging without a datetime library.
    pub fn elapsed_hm(&self) -> (u64, u32) {
        let total = self.elapsed_minutes();
        (total / 60, (total % 60) as u32)
    }

    /// How many ticks span `minutes`? (rounds up — a car is never released early)
    #[inline]
    pub fn ticks_for_minutes(&self, minutes: u64) -> u64 {
        minutes.div_ceil(self.tick_minutes as u64)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = self.elapsed_hm();
        write!(f, "{} ({}h {:02}m)", self.current_tick, h, m)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Constructed by the application crate and passed to `FleetBuilder::build`
/// (which validates charge durations against `tick_minutes`) and then to
/// `SimBuilder`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated minutes per tick.  Every car's charge duration must be a
    /// positive multiple of this.  Default: 5.
    pub tick_minutes: u32,

    /// Master RNG seed.  The same seed always produces identical reservation
    /// plans and therefore identical runs.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_minutes: 5,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_minutes)
    }
}
