use ev_core::{CarId, ChargerId, Tick};
use ev_reserve::ReserveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match car count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("need at least 2 chargers (every car reserves at least 2), got {got}")]
    TooFewChargers { got: usize },

    #[error("charger count {chargers} must be strictly less than car count {cars}")]
    ChargersNotFewerThanCars { chargers: usize, cars: usize },

    // ── Invariant violations: engine bugs, never recoverable ──────────────
    #[error("car {car} promoted on {charger} while already charging on {occupied}")]
    DoubleOccupancy {
        car:      CarId,
        charger:  ChargerId,
        occupied: ChargerId,
    },

    #[error("car {car} promoted on {charger} after it already finished charging")]
    AlreadyCharged { car: CarId, charger: ChargerId },

    #[error(
        "car {car} on {charger}: elapsed {elapsed} min passed the required {required} min without release"
    )]
    OverCharge {
        car:      CarId,
        charger:  ChargerId,
        elapsed:  u32,
        required: u32,
    },

    #[error(
        "stalled at {tick}: every charger idle, every queue empty, {uncharged} cars still uncharged"
    )]
    Stalled { tick: Tick, uncharged: usize },

    #[error("reservation invariant violated: {0}")]
    Reserve(#[from] ReserveError),
}

pub type SimResult<T> = Result<T, SimError>;
