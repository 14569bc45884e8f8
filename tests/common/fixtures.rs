use hifitime::Unit;
/// Test data fixtures for consistent testing
use vitals_sampler::datamodel::{Measurement, MeasurementType, VitalsDateTime};

/// Start of sampling used across the integration tests
pub fn origin() -> VitalsDateTime {
    VitalsDateTime::from_gregorian_utc_hms(2023, 2, 21, 15, 0, 0)
}

pub fn after(minutes: i64, seconds: i64) -> VitalsDateTime {
    origin() + minutes * Unit::Minute + seconds * Unit::Second
}

/// Create a measurement at an offset from [`origin`]
pub fn measurement_at(
    minutes: i64,
    seconds: i64,
    value: f64,
    measurement_type: MeasurementType,
) -> Measurement {
    Measurement::new(after(minutes, seconds), value, measurement_type)
        .expect("fixture values are in range")
}

/// A plausible value for each measurement type
pub fn typical_value(measurement_type: MeasurementType) -> f64 {
    match measurement_type {
        MeasurementType::Temperature => 36.6,
        MeasurementType::HeartRate => 72.0,
        MeasurementType::SpO2 => 97.0,
    }
}

/// Sample CSV data with the three measurement types
pub fn vitals_csv() -> &'static str {
    r#"datetime,type,value,unit
2023-02-21T15:00:00Z,temperature,36.5,°C
2023-02-21T15:04:04Z,temperature,36.8,°C
2023-02-21T15:06:05Z,temperature,37.0,°C
2023-02-21T15:00:00Z,heartrate,70,bpm
2023-02-21T15:10:00Z,heartrate,90,bpm
2023-02-21T15:03:00Z,spo2,98,%"#
}
