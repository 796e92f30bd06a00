//! Plain data row types written by output backends.

use ev_core::{SimEvent, Tick};

/// One event record flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub tick: u64,
    /// Stable snake_case event name (see `SimEvent::kind`).
    pub event: &'static str,
    /// `u32::MAX` when the event has no car (e.g. `all_charged`).
    pub car_id: u32,
    /// `u32::MAX` when the event has no charger.
    pub charger_id: u32,
    /// Reservation count for `reservations_planned`; 0 for everything else.
    pub count: u32,
}

impl EventRow {
    /// Flatten `event` into a row.
    ///
    /// Events that carry their own tick (promotion, completion, all-charged)
    /// use it; the rest are dated to `fallback` — the tick the observer was
    /// in when the event arrived, or tick 0 for planning events.
    pub fn from_event(event: &SimEvent, fallback: Tick) -> Self {
        let tick = match *event {
            SimEvent::ChargingStarted { tick, .. }
            | SimEvent::CarCharged { tick, .. }
            | SimEvent::AllCharged { tick } => tick,
            _ => fallback,
        };

        let count = match *event {
            SimEvent::ReservationsPlanned { count, .. } => count as u32,
            _ => 0,
        };

        Self {
            tick:       tick.0,
            event:      event.kind(),
            car_id:     event.car().map_or(u32::MAX, |c| c.0),
            charger_id: event.charger().map_or(u32::MAX, |c| c.0),
            count,
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    /// Simulated minutes elapsed at the end of this tick.
    pub sim_minutes:   u64,
    /// Chargers occupied once the tick's pass finished.
    pub charging_cars: u64,
}
