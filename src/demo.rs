//! Built-in example data set, used when no input file is given.

use crate::datamodel::{Measurement, MeasurementError, MeasurementType, VitalsDateTime};
use hifitime::Unit;

pub fn example_origin() -> VitalsDateTime {
    VitalsDateTime::from_gregorian_utc_hms(2023, 2, 21, 15, 0, 0)
}

/// (minutes, seconds, value, type) offsets from the origin
const EXAMPLE_READINGS: &[(i64, i64, f64, MeasurementType)] = &[
    (0, 0, 35.79, MeasurementType::Temperature),
    (1, 1, 35.01, MeasurementType::Temperature),
    (2, 2, 35.50, MeasurementType::Temperature),
    (3, 3, 35.85, MeasurementType::Temperature),
    (4, 4, 35.82, MeasurementType::Temperature),
    (6, 5, 36.10, MeasurementType::Temperature),
    (11, 6, 36.24, MeasurementType::Temperature),
    (0, 0, 72.0, MeasurementType::HeartRate),
    (9, 59, 80.0, MeasurementType::HeartRate),
    (10, 0, 81.0, MeasurementType::HeartRate),
    (10, 1, 78.0, MeasurementType::HeartRate),
    (3, 34, 98.0, MeasurementType::SpO2),
    (7, 1, 96.0, MeasurementType::SpO2),
    (7, 40, 97.0, MeasurementType::SpO2),
    (67, 12, 95.0, MeasurementType::SpO2),
];

/// Builds the example readings relative to `origin`.
pub fn example_measurements(origin: VitalsDateTime) -> Result<Vec<Measurement>, MeasurementError> {
    EXAMPLE_READINGS
        .iter()
        .map(|&(minutes, seconds, value, measurement_type)| {
            let time = origin + minutes * Unit::Minute + seconds * Unit::Second;
            Measurement::new(time, value, measurement_type)
        })
        .collect()
}
