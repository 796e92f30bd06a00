use ev_core::{CarId, ChargerId};
use thiserror::Error;

/// Invariant violations in queue and charger state.
///
/// These signal engine bugs, not recoverable runtime conditions — callers
/// halt the simulation for diagnosis rather than retrying.
#[derive(Debug, Error)]
pub enum ReserveError {
    #[error("charger {0} has an empty queue but a pop was demanded")]
    EmptyQueue(ChargerId),

    #[error("charger {charger} is still occupied by car {occupant}")]
    AlreadyOccupied {
        charger:  ChargerId,
        occupant: CarId,
    },
}

pub type ReserveResult<T> = Result<T, ReserveError>;
