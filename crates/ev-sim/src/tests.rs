//! Integration tests for ev-sim.

use std::collections::HashMap;

use ev_core::{CarId, SimConfig, SimEvent, Tick};
use ev_fleet::{CarRngs, FleetBuilder, FleetStore};
use ev_reserve::ChargerStore;

use crate::{EventLog, NoopObserver, Sim, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(seed: u64) -> SimConfig {
    SimConfig {
        tick_minutes: 5,
        seed,
    }
}

fn fleet_of(cars: &[(&str, u32)], seed: u64) -> (FleetStore, CarRngs) {
    let mut builder = FleetBuilder::new(seed);
    for &(owner, minutes) in cars {
        builder = builder.car(owner, minutes);
    }
    builder.build(&test_config(seed)).unwrap()
}

fn small_sim(cars: &[(&str, u32)], charger_count: usize, seed: u64) -> Sim {
    let (fleet, rngs) = fleet_of(cars, seed);
    SimBuilder::new(test_config(seed), fleet, rngs, charger_count)
        .build()
        .unwrap()
}

/// The 4-car / 2-charger scenario.  With only 2 chargers, every car's
/// reservation count is forced to 2, so both queues hold all four cars in
/// insertion order and the whole run is deterministic regardless of seed.
fn four_car_sim(seed: u64) -> Sim {
    small_sim(
        &[("A", 10), ("B", 15), ("C", 5), ("D", 20)],
        2,
        seed,
    )
}

/// The reference sample: 8 cars on 3 chargers, 5-minute ticks.
fn reference_sim(seed: u64) -> Sim {
    small_sim(
        &[
            ("Alice", 30),
            ("Bob", 45),
            ("Charlie", 20),
            ("Delroy", 60),
            ("Egon", 30),
            ("Fairuza", 60),
            ("Galadriel", 120),
            ("Horace", 120),
        ],
        3,
        seed,
    )
}

/// Observer that checks the core invariants on every post-tick snapshot and
/// records promotion/completion ticks per car.
#[derive(Default)]
struct InvariantChecker {
    started:      HashMap<CarId, Tick>,
    charged:      HashMap<CarId, Tick>,
    max_occupied: usize,
}

impl SimObserver for InvariantChecker {
    fn on_event(&mut self, event: &SimEvent) {
        match *event {
            SimEvent::ChargingStarted { car, tick, .. } => {
                let prev = self.started.insert(car, tick);
                assert!(prev.is_none(), "{car} promoted twice");
            }
            SimEvent::CarCharged { car, tick, .. } => {
                let prev = self.charged.insert(car, tick);
                assert!(prev.is_none(), "{car} completed twice");
            }
            _ => {}
        }
    }

    fn on_snapshot(
        &mut self,
        tick:     Tick,
        chargers: &ChargerStore,
        fleet:    &FleetStore,
    ) {
        self.max_occupied = self.max_occupied.max(chargers.occupied_count());

        for charger in &chargers.chargers {
            // No duplicate entries within one queue.
            for car in fleet.car_ids() {
                let entries = charger.queue.iter().filter(|&c| c == car).count();
                assert!(entries <= 1, "{tick}: {car} queued twice on {}", charger.id);
            }

            let Some(car) = charger.occupant else { continue };

            // Elapsed time stays strictly below the requirement while occupied.
            assert!(
                charger.elapsed_minutes < fleet.charge_minutes(car),
                "{tick}: {car} overstayed on {}",
                charger.id
            );

            // Single occupancy: no other charger holds the same car.
            let occupancies = chargers
                .chargers
                .iter()
                .filter(|c| c.occupant == Some(car))
                .count();
            assert_eq!(occupancies, 1, "{tick}: {car} occupies {occupancies} chargers");

            // An active occupant holds no pending reservation anywhere.
            for other in &chargers.chargers {
                assert!(
                    !other.queue.contains(car),
                    "{tick}: occupant {car} still pending on {}",
                    other.id
                );
            }
        }
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully() {
        let sim = small_sim(&[("A", 10), ("B", 15), ("C", 5)], 2, 42);
        assert_eq!(sim.fleet.count, 3);
        assert_eq!(sim.chargers.len(), 2);
        assert!(!sim.planned);
        assert_eq!(sim.chargers.total_pending(), 0, "planning is deferred to run");
    }

    #[test]
    fn rejects_fewer_than_two_chargers() {
        let (fleet, rngs) = fleet_of(&[("A", 10), ("B", 15)], 0);
        let err = SimBuilder::new(test_config(0), fleet, rngs, 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::TooFewChargers { got: 1 }));
    }

    #[test]
    fn rejects_chargers_not_fewer_than_cars() {
        let (fleet, rngs) = fleet_of(&[("A", 10), ("B", 15), ("C", 5)], 0);
        let err = SimBuilder::new(test_config(0), fleet, rngs, 3)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SimError::ChargersNotFewerThanCars {
                chargers: 3,
                cars:     3,
            }
        ));
    }

    #[test]
    fn rejects_rng_count_mismatch() {
        let (fleet, _) = fleet_of(&[("A", 10), ("B", 15), ("C", 5)], 0);
        let (_, rngs) = fleet_of(&[("X", 10), ("Y", 15)], 0);
        let err = SimBuilder::new(test_config(0), fleet, rngs, 2)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SimError::CountMismatch {
                expected: 3,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_tick_length() {
        let (fleet, rngs) = fleet_of(&[("A", 10), ("B", 15), ("C", 5)], 0);
        let bad = SimConfig {
            tick_minutes: 0,
            seed: 0,
        };
        let err = SimBuilder::new(bad, fleet, rngs, 2).build().unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }
}

// ── Full runs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn four_car_scenario_runs_to_completion() {
        let mut sim = four_car_sim(42);
        let mut checker = InvariantChecker::default();

        let summary = sim.run(&mut checker).unwrap();

        assert_eq!(summary.cars_charged, 4);
        assert!(sim.fleet.all_charged());
        // Two chargers → never more than two cars charging at once.
        assert!(checker.max_occupied <= 2);
        // All reservations consumed or retracted by the end.
        assert_eq!(sim.chargers.total_pending(), 0);
    }

    #[test]
    fn four_car_scenario_exact_schedule() {
        // Both queues start [A, B, C, D].  Walking the pass order by hand:
        // tick 0 promotes A and B; A (10 min) completes at tick 2, B (15) at
        // tick 3; C is promoted at tick 3 and completes at tick 4; D is
        // promoted at tick 4 and completes at tick 8.  Nine ticks in total.
        let mut sim = four_car_sim(7);
        let mut checker = InvariantChecker::default();

        let summary = sim.run(&mut checker).unwrap();

        assert_eq!(summary.ticks, 9);
        assert_eq!(checker.started[&CarId(0)], Tick(0));
        assert_eq!(checker.started[&CarId(1)], Tick(0));
        assert_eq!(checker.charged[&CarId(0)], Tick(2));
        assert_eq!(checker.charged[&CarId(1)], Tick(3));
        assert_eq!(checker.started[&CarId(2)], Tick(3));
        assert_eq!(checker.charged[&CarId(2)], Tick(4));
        assert_eq!(checker.started[&CarId(3)], Tick(4));
        assert_eq!(checker.charged[&CarId(3)], Tick(8));
    }

    #[test]
    fn reference_sample_terminates_within_bound() {
        let mut sim = reference_sim(42);
        let mut checker = InvariantChecker::default();

        let summary = sim.run(&mut checker).unwrap();

        assert_eq!(summary.cars_charged, 8);
        assert!(sim.fleet.all_charged());
        assert!(checker.max_occupied <= 3);

        // Worst case is fully sequential service on one charger: one
        // promotion tick plus duration/tick ticks per car.
        let duration_ticks: u64 = sim
            .fleet
            .charge_minutes
            .iter()
            .map(|&m| (m / 5) as u64)
            .sum();
        assert!(
            summary.ticks <= duration_ticks + sim.fleet.count as u64,
            "took {} ticks, bound {}",
            summary.ticks,
            duration_ticks + 8
        );
        // Lower bound: the longest single charge plus its promotion tick.
        assert!(summary.ticks >= 120 / 5 + 1);
    }

    #[test]
    fn completion_is_exact() {
        // Every car completes precisely duration/tick ticks after promotion —
        // never early, never late.
        let mut sim = reference_sim(1);
        let mut checker = InvariantChecker::default();
        sim.run(&mut checker).unwrap();

        for car in sim.fleet.car_ids() {
            let started = checker.started[&car];
            let charged = checker.charged[&car];
            let expected = (sim.fleet.charge_minutes(car) / 5) as u64;
            assert_eq!(
                charged.since(started),
                expected,
                "{car} ({}) off schedule",
                sim.fleet.owner(car)
            );
        }
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let run = |seed| {
            let mut sim = reference_sim(seed);
            let mut log = EventLog::new();
            let summary = sim.run(&mut log).unwrap();
            (summary, log.events)
        };

        let (s1, e1) = run(1234);
        let (s2, e2) = run(1234);
        assert_eq!(s1, s2);
        assert_eq!(e1, e2);
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = reference_sim(42);
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(3));
        sim.run_ticks(2, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(5));
    }

    #[test]
    fn run_ticks_zero_plans_but_does_not_promote() {
        let mut sim = reference_sim(42);
        sim.run_ticks(0, &mut NoopObserver).unwrap();

        assert!(sim.planned);
        assert!(sim.chargers.total_pending() > 0, "planner must have run");
        assert_eq!(sim.chargers.occupied_count(), 0);
        assert_eq!(sim.clock.current_tick, Tick::ZERO);
    }

    #[test]
    fn stalls_when_no_car_holds_a_reservation() {
        let mut sim = four_car_sim(0);
        sim.run_ticks(0, &mut NoopObserver).unwrap();

        // Sabotage the plan: drain every queue before the first tick.
        for charger in &mut sim.chargers.chargers {
            while charger.queue.pop_front().is_some() {}
        }

        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Stalled { uncharged: 4, .. }));
    }
}

// ── Event stream ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_tests {
    use super::*;

    #[test]
    fn planning_events_precede_all_tick_events() {
        let mut sim = reference_sim(42);
        let mut log = EventLog::new();
        sim.run(&mut log).unwrap();

        let first_tick_event = log
            .events
            .iter()
            .position(|e| {
                matches!(
                    e,
                    SimEvent::ChargingStarted { .. }
                        | SimEvent::ReservationCanceled { .. }
                        | SimEvent::CarCharged { .. }
                )
            })
            .unwrap();
        let last_planning_event = log
            .events
            .iter()
            .rposition(|e| {
                matches!(
                    e,
                    SimEvent::ReservationsPlanned { .. } | SimEvent::ReservationMade { .. }
                )
            })
            .unwrap();
        assert!(last_planning_event < first_tick_event);
    }

    #[test]
    fn each_car_starts_and_completes_exactly_once() {
        let mut sim = reference_sim(9);
        let mut log = EventLog::new();
        sim.run(&mut log).unwrap();

        for car in sim.fleet.car_ids() {
            let starts = log
                .events
                .iter()
                .filter(|e| matches!(**e, SimEvent::ChargingStarted { car: c, .. } if c == car))
                .count();
            let completions = log
                .events
                .iter()
                .filter(|e| matches!(**e, SimEvent::CarCharged { car: c, .. } if c == car))
                .count();
            assert_eq!(starts, 1, "{car} started {starts} times");
            assert_eq!(completions, 1, "{car} completed {completions} times");
        }
    }

    #[test]
    fn cancellations_follow_their_cars_promotion() {
        let mut sim = reference_sim(5);
        let mut log = EventLog::new();
        sim.run(&mut log).unwrap();

        for (i, event) in log.events.iter().enumerate() {
            if let SimEvent::ReservationCanceled { car, .. } = *event {
                let promoted_before = log.events[..i].iter().any(
                    |e| matches!(*e, SimEvent::ChargingStarted { car: c, .. } if c == car),
                );
                assert!(promoted_before, "cancellation for {car} before its promotion");
            }
        }
    }

    #[test]
    fn promotion_retracts_everywhere_else() {
        let mut sim = four_car_sim(3);
        sim.run_ticks(1, &mut NoopObserver).unwrap();

        // Tick 0 promoted A on charger 0 and B on charger 1.
        let occupants: Vec<CarId> = sim
            .chargers
            .chargers
            .iter()
            .filter_map(|c| c.occupant)
            .collect();
        assert_eq!(occupants, vec![CarId(0), CarId(1)]);

        // Immediately after promotion no other charger holds an entry for
        // either occupant: retract is a no-op returning false.
        for car in occupants {
            for id in sim.chargers.charger_ids().collect::<Vec<_>>() {
                if sim.chargers.charger(id).occupant == Some(car) {
                    continue;
                }
                assert!(!sim.chargers.charger(id).queue.contains(car));
                assert!(!sim.chargers.charger_mut(id).queue.retract(car));
            }
        }
    }

    #[test]
    fn all_charged_is_final_and_dated_to_last_completion() {
        let mut sim = reference_sim(8);
        let mut log = EventLog::new();
        sim.run(&mut log).unwrap();

        let last = log.events.last().unwrap();
        let SimEvent::AllCharged { tick } = *last else {
            panic!("expected AllCharged last, got {last:?}");
        };

        let last_completion = log
            .events
            .iter()
            .filter_map(|e| match *e {
                SimEvent::CarCharged { tick, .. } => Some(tick),
                _ => None,
            })
            .max()
            .unwrap();
        assert_eq!(tick, last_completion);
    }
}
