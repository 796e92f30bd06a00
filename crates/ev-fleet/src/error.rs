use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("tick length must be positive")]
    ZeroTickLength,

    #[error("car at index {index} has an empty owner name")]
    EmptyOwner { index: usize },

    #[error("duplicate owner name {0:?}")]
    DuplicateOwner(String),

    #[error("{owner}'s car has a zero charge duration")]
    ZeroDuration { owner: String },

    #[error(
        "{owner}'s charge duration ({minutes} min) is not a multiple of the tick length ({tick_minutes} min)"
    )]
    DurationNotTickMultiple {
        owner:        String,
        minutes:      u32,
        tick_minutes: u32,
    },

    #[error("fleet parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;
