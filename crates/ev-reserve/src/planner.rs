//! The reservation planner — runs exactly once, before any tick.
//!
//! For each car the planner draws a reservation count
//! `k = max(2, uniform(0..=charger_count))` from that car's own RNG, then
//! picks `k` *distinct* chargers by uniform sampling without replacement and
//! appends the car to each of their queues.  Sampling (rather than always
//! taking the first `k` chargers by index) keeps the load spread across the
//! whole bank instead of piling every car onto the low-numbered chargers.
//!
//! Planning has no error path.  The preconditions that make it meaningful —
//! at least 2 chargers so `k` is satisfiable, and strictly fewer chargers
//! than cars — are enforced by `SimBuilder` before the planner ever runs.

use ev_core::{CarId, SimEvent};
use ev_fleet::{CarRngs, FleetStore};

use crate::ChargerStore;

/// Populate every charger's queue with the fleet's reservations.
///
/// Cars plan in ascending `CarId` order, so queue order across cars follows
/// car order; each car draws only from its own RNG, so one car's plan never
/// shifts another's.  Returns the ordered event stream of the planning phase
/// (`ReservationsPlanned` per car, then one `ReservationMade` per queue
/// touched, in ascending charger order).
pub fn plan_reservations(
    fleet:    &FleetStore,
    rngs:     &mut CarRngs,
    chargers: &mut ChargerStore,
) -> Vec<SimEvent> {
    let charger_count = chargers.len();
    debug_assert!(charger_count >= 2, "SimBuilder enforces at least 2 chargers");

    let mut events = Vec::with_capacity(fleet.count * 3);

    for car in fleet.car_ids() {
        let (count, picks) = draw_plan(car, rngs, charger_count);

        events.push(SimEvent::ReservationsPlanned { car, count });
        for idx in picks {
            let charger = &mut chargers.chargers[idx];
            charger.queue.append(car);
            events.push(SimEvent::ReservationMade {
                car,
                charger: charger.id,
            });
        }
    }

    events
}

/// Draw one car's reservation count and charger picks (ascending order).
fn draw_plan(car: CarId, rngs: &mut CarRngs, charger_count: usize) -> (usize, Vec<usize>) {
    let rng = rngs.get_mut(car);

    // Reserve a random number of chargers, or 2, whichever is greater.
    let count = rng.gen_range(0..=charger_count).max(2);

    let mut picks = rng.sample_indices(charger_count, count);
    picks.sort_unstable();
    (count, picks)
}
