use super::{MeasurementType, VitalsDateTime};
use std::fmt;
use thiserror::Error;

/// Errors raised when a reading is outside the plausible range of its type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    #[error("{measurement_type} value {value} is below the minimum of {min}")]
    BelowRange {
        measurement_type: MeasurementType,
        value: f64,
        min: f64,
    },

    #[error("{measurement_type} value {value} is above the maximum of {max}")]
    AboveRange {
        measurement_type: MeasurementType,
        value: f64,
        max: f64,
    },

    #[error("{measurement_type} value is not a number")]
    NotANumber { measurement_type: MeasurementType },
}

/// A single validated physiological reading.
///
/// Fields are only reachable through getters, so a `Measurement` that exists
/// always holds a value inside the range of its type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    time: VitalsDateTime,
    value: f64,
    measurement_type: MeasurementType,
}

impl Measurement {
    pub fn new(
        time: VitalsDateTime,
        value: f64,
        measurement_type: MeasurementType,
    ) -> Result<Self, MeasurementError> {
        if value.is_nan() {
            return Err(MeasurementError::NotANumber { measurement_type });
        }

        let (min, max) = measurement_type.valid_range();
        if value < min {
            return Err(MeasurementError::BelowRange {
                measurement_type,
                value,
                min,
            });
        }
        if value > max {
            return Err(MeasurementError::AboveRange {
                measurement_type,
                value,
                max,
            });
        }

        Ok(Self {
            time,
            value,
            measurement_type,
        })
    }

    pub fn time(&self) -> VitalsDateTime {
        self.time
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn measurement_type(&self) -> MeasurementType {
        self.measurement_type
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ time: {}, type: {}, value: {} {} }}",
            self.time,
            self.measurement_type,
            self.value,
            self.measurement_type.unit()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> VitalsDateTime {
        VitalsDateTime::from_gregorian_utc_hms(2023, 2, 21, 15, 0, 0)
    }

    #[test]
    fn test_valid_measurement() {
        let m = Measurement::new(now(), 36.6, MeasurementType::Temperature).unwrap();
        assert_eq!(m.time(), now());
        assert_eq!(m.value(), 36.6);
        assert_eq!(m.measurement_type(), MeasurementType::Temperature);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        for measurement_type in MeasurementType::ALL {
            let (min, max) = measurement_type.valid_range();
            assert!(Measurement::new(now(), min, measurement_type).is_ok());
            assert!(Measurement::new(now(), max, measurement_type).is_ok());
        }
    }

    #[test]
    fn test_just_outside_boundaries_fail() {
        for measurement_type in MeasurementType::ALL {
            let (min, max) = measurement_type.valid_range();

            assert_eq!(
                Measurement::new(now(), min - 0.01, measurement_type),
                Err(MeasurementError::BelowRange {
                    measurement_type,
                    value: min - 0.01,
                    min,
                })
            );
            assert_eq!(
                Measurement::new(now(), max + 0.01, measurement_type),
                Err(MeasurementError::AboveRange {
                    measurement_type,
                    value: max + 0.01,
                    max,
                })
            );
        }
    }

    #[test]
    fn test_nan_is_rejected() {
        assert_eq!(
            Measurement::new(now(), f64::NAN, MeasurementType::SpO2),
            Err(MeasurementError::NotANumber {
                measurement_type: MeasurementType::SpO2
            })
        );
    }

    #[test]
    fn test_infinity_is_out_of_range() {
        assert!(matches!(
            Measurement::new(now(), f64::INFINITY, MeasurementType::HeartRate),
            Err(MeasurementError::AboveRange { .. })
        ));
        assert!(matches!(
            Measurement::new(now(), f64::NEG_INFINITY, MeasurementType::HeartRate),
            Err(MeasurementError::BelowRange { .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_bound() {
        let err = Measurement::new(now(), 29.9, MeasurementType::Temperature).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Temperature value 29.9 is below the minimum of 30"
        );

        let err = Measurement::new(now(), 251.0, MeasurementType::HeartRate).unwrap_err();
        assert_eq!(
            err.to_string(),
            "HeartRate value 251 is above the maximum of 250"
        );
    }

    #[test]
    fn test_display() {
        let m = Measurement::new(now(), 98.0, MeasurementType::SpO2).unwrap();
        let display = format!("{}", m);
        assert!(display.contains("SpO2"));
        assert!(display.contains("98 %"));
    }
}
