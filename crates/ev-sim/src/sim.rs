//! The `Sim` struct and its tick loop.

use ev_core::{ChargerId, SimClock, SimConfig, SimEvent, Tick};
use ev_fleet::{CarRngs, FleetStore};
use ev_reserve::{ChargerStore, plan_reservations};

use crate::{SimError, SimObserver, SimResult};

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Returned by [`Sim::run`] when every car has charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Total ticks executed.
    pub ticks: u64,
    /// Number of cars serviced — always the full fleet on success.
    pub cars_charged: usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` holds all simulation state and drives the per-tick pass:
///
/// 1. **Plan** (first call only): the ev-reserve planner fills every queue.
/// 2. **Pass**: each charger, in ascending `ChargerId` order, takes exactly
///    one transition — promote, accumulate/release, or nothing (see the
///    crate docs for the full state machine).
/// 3. **Report**: observer hooks fire at tick boundaries and per event.
///
/// The loop terminates when every car's `charged` flag is set.  Termination
/// is guaranteed for any fleet the planner touched: occupied chargers
/// strictly advance elapsed time, and an idle charger with a non-empty queue
/// promotes within one tick.  The defensive stall check converts the one
/// impossible remainder (an uncharged car with no reservation anywhere) into
/// [`SimError::Stalled`] instead of looping forever.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    /// Global configuration (tick length, seed).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to sim minutes.
    pub clock: SimClock,

    /// Car state (SoA arrays).  `charged` flags mutate as the run progresses.
    pub fleet: FleetStore,

    /// Per-car deterministic RNGs, consumed by the one-shot planner.
    pub rngs: CarRngs,

    /// All chargers: queue + occupant + elapsed minutes each.
    pub chargers: ChargerStore,

    /// Whether the reservation planner has run.  Planning happens on the
    /// first `run`/`run_ticks` call and never again.
    pub(crate) planned: bool,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation until every car has charged.
    ///
    /// Calls observer hooks at every tick boundary and for every event.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        self.plan(observer);

        let mut last_tick = Tick::ZERO;
        while !self.fleet.all_charged() {
            let now = self.clock.current_tick;

            // Liveness guard: with no occupant and no pending reservation
            // anywhere, no future tick can make progress.
            if self.chargers.occupied_count() == 0 && self.chargers.total_pending() == 0 {
                return Err(SimError::Stalled {
                    tick:      now,
                    uncharged: self.fleet.uncharged_count(),
                });
            }

            observer.on_tick_start(now);
            let charging = self.process_tick(now, observer)?;
            observer.on_tick_end(now, charging);
            observer.on_snapshot(now, &self.chargers, &self.fleet);

            last_tick = now;
            self.clock.advance();
        }

        observer.on_event(&SimEvent::AllCharged { tick: last_tick });
        observer.on_sim_end(last_tick);

        Ok(RunSummary {
            ticks:        self.clock.current_tick.0,
            cars_charged: self.fleet.count,
        })
    }

    /// Run exactly `n` ticks from the current position, whether or not the
    /// fleet finishes.
    ///
    /// Plans first if this is the first call.  Useful for tests and
    /// incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.plan(observer);
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let charging = self.process_tick(now, observer)?;
            observer.on_tick_end(now, charging);
            observer.on_snapshot(now, &self.chargers, &self.fleet);
            self.clock.advance();
        }
        Ok(())
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Run the reservation planner once, forwarding its events.
    fn plan<O: SimObserver>(&mut self, observer: &mut O) {
        if self.planned {
            return;
        }
        let events = plan_reservations(&self.fleet, &mut self.rngs, &mut self.chargers);
        for event in &events {
            observer.on_event(event);
        }
        self.planned = true;
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// One pass over all chargers.  Returns the occupied count after the pass.
    fn process_tick<O: SimObserver>(
        &mut self,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<usize> {
        let tick_minutes = self.config.tick_minutes;

        for id in 0..self.chargers.len() as u32 {
            let id = ChargerId(id);

            // ── Idle → Occupied ───────────────────────────────────────────
            if self.chargers.charger(id).is_idle() {
                if !self.chargers.charger(id).has_pending() {
                    continue;
                }

                // Defensive: the car about to be promoted must be neither
                // charged already nor charging on another charger.  Either
                // means a retraction was missed in an earlier pass step.
                if let Some(front) = self.chargers.charger(id).queue.front() {
                    if self.fleet.is_charged(front) {
                        return Err(SimError::AlreadyCharged {
                            car:     front,
                            charger: id,
                        });
                    }
                    if let Some(occupied) = self.chargers.occupant_of(front) {
                        return Err(SimError::DoubleOccupancy {
                            car: front,
                            charger: id,
                            occupied,
                        });
                    }
                }

                let car = self.chargers.charger_mut(id).promote_next()?;
                observer.on_event(&SimEvent::ChargingStarted {
                    car,
                    charger: id,
                    tick: now,
                });

                // Retract the new occupant's other pending entries NOW, so a
                // charger later in this same pass sees the cleaned queues.
                for other in self.chargers.retract_for(car, id) {
                    observer.on_event(&SimEvent::ReservationCanceled {
                        car,
                        charger: other,
                    });
                }

                // A newly promoted charger does not also accumulate charge
                // this tick.
                continue;
            }

            // ── Occupied: accumulate, release on exact completion ─────────
            if let Some(car) = self.chargers.charger(id).occupant {
                let required = self.fleet.charge_minutes(car);
                let charger = self.chargers.charger_mut(id);
                charger.elapsed_minutes += tick_minutes;
                let elapsed = charger.elapsed_minutes;

                if elapsed == required {
                    charger.release();
                    self.fleet.set_charged(car);
                    observer.on_event(&SimEvent::CarCharged {
                        car,
                        charger: id,
                        tick: now,
                    });
                } else if elapsed > required {
                    // Unreachable when durations are tick multiples — the
                    // fleet builder guarantees that, so this is a bug signal.
                    return Err(SimError::OverCharge {
                        car,
                        charger: id,
                        elapsed,
                        required,
                    });
                }
            }
        }

        Ok(self.chargers.occupied_count())
    }
}
