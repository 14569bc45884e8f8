use crate::datamodel::{MeasurementType, VitalsDateTime};
use thiserror::Error;

/// Errors returned by the sampler when its input contract is violated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// A measurement was taken before the start of sampling
    #[error(
        "{measurement_type} measurement at {time} precedes the start of sampling at {origin}"
    )]
    PrecedingTime {
        origin: VitalsDateTime,
        time: VitalsDateTime,
        measurement_type: MeasurementType,
    },

    /// The interval width is shorter than one second
    #[error("Invalid sampling interval: {0} (must be at least one second)")]
    InvalidInterval(hifitime::Duration),
}
