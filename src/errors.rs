use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("curve must contain at least one sample")]
    EmptyCurve,

    #[error("curve times must be finite, got {0}")]
    NonFiniteTime(f64),

    #[error("curve times must be strictly increasing, {next} s follows {prev} s")]
    NonIncreasingTimes { prev: f64, next: f64 },

    #[error("curve times must not be negative, first sample is at {0} s")]
    NegativeTime(f64),

    #[error("thrust curve needs at least two samples to span a burn, got {0}")]
    TooFewThrustSamples(usize),

    #[error("thrust must not be negative, got {thrust} N at {time} s")]
    NegativeThrust { time: f64, thrust: f64 },

    #[error("thrust curve has zero total impulse, cannot apportion fuel burn")]
    ZeroTotalImpulse,

    #[error("fuel mass curve must start at ignition, first sample is at {0} s")]
    FuelCurveMissingIgnition(f64),

    #[error("fuel mass curve must not increase, {next} kg follows {prev} kg")]
    IncreasingFuelMass { prev: f64, next: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositiveField { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    NegativeField { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max} degrees, got {value}")]
    AngleOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("airbrakes need at least one flap")]
    NoFlaps,
}
