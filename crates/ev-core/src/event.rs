//! The typed notification stream emitted by the simulation.
//!
//! Every state change a caller might want to report — a reservation placed,
//! canceled, promoted to charging, a car finishing — is emitted as a
//! `SimEvent` record through the observer.  Events are informational only:
//! nothing in the engine reads them back, so a presentation layer may render,
//! persist, or drop them without affecting the run.

use crate::{CarId, ChargerId, Tick};

/// One notification record in the ordered event stream.
///
/// Planning-phase events (`ReservationsPlanned`, `ReservationMade`) carry no
/// tick because planning happens once, before the clock starts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimEvent {
    /// The planner drew a reservation count for `car`.
    ReservationsPlanned { car: CarId, count: usize },

    /// `car` was appended to `charger`'s waiting queue.
    ReservationMade { car: CarId, charger: ChargerId },

    /// `car`'s pending entry on `charger` was retracted because the car
    /// started charging elsewhere.
    ReservationCanceled { car: CarId, charger: ChargerId },

    /// `car` was promoted from `charger`'s queue to active occupancy.
    ChargingStarted {
        car:     CarId,
        charger: ChargerId,
        tick:    Tick,
    },

    /// `car` reached its required charge duration and released `charger`.
    CarCharged {
        car:     CarId,
        charger: ChargerId,
        tick:    Tick,
    },

    /// Every car in the fleet has charged; the simulation is over.
    AllCharged { tick: Tick },
}

impl SimEvent {
    /// Stable snake_case name for this event variant.
    ///
    /// Used as the `event` column by output writers.
    pub fn kind(&self) -> &'static str {
        match self {
            SimEvent::ReservationsPlanned { .. } => "reservations_planned",
            SimEvent::ReservationMade { .. }     => "reservation_made",
            SimEvent::ReservationCanceled { .. } => "reservation_canceled",
            SimEvent::ChargingStarted { .. }     => "charging_started",
            SimEvent::CarCharged { .. }          => "car_charged",
            SimEvent::AllCharged { .. }          => "all_charged",
        }
    }

    /// The car this event concerns, if any.
    pub fn car(&self) -> Option<CarId> {
        match *self {
            SimEvent::ReservationsPlanned { car, .. }
            | SimEvent::ReservationMade { car, .. }
            | SimEvent::ReservationCanceled { car, .. }
            | SimEvent::ChargingStarted { car, .. }
            | SimEvent::CarCharged { car, .. } => Some(car),
            SimEvent::AllCharged { .. } => None,
        }
    }

    /// The charger this event concerns, if any.
    pub fn charger(&self) -> Option<ChargerId> {
        match *self {
            SimEvent::ReservationMade { charger, .. }
            | SimEvent::ReservationCanceled { charger, .. }
            | SimEvent::ChargingStarted { charger, .. }
            | SimEvent::CarCharged { charger, .. } => Some(charger),
            SimEvent::ReservationsPlanned { .. } | SimEvent::AllCharged { .. } => None,
        }
    }
}
