use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MeasurementType {
    Temperature,
    HeartRate,
    SpO2,
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MeasurementType::Temperature => "Temperature",
            MeasurementType::HeartRate => "HeartRate",
            MeasurementType::SpO2 => "SpO2",
        };
        write!(f, "{}", s)
    }
}

impl MeasurementType {
    pub const ALL: [MeasurementType; 3] = [
        MeasurementType::Temperature,
        MeasurementType::HeartRate,
        MeasurementType::SpO2,
    ];

    /// Inclusive range of physiologically plausible values, as `(min, max)`.
    pub fn valid_range(&self) -> (f64, f64) {
        match self {
            MeasurementType::Temperature => (30.0, 45.0),
            MeasurementType::HeartRate => (0.0, 250.0),
            MeasurementType::SpO2 => (0.0, 100.0),
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MeasurementType::Temperature => "°C",
            MeasurementType::HeartRate => "bpm",
            MeasurementType::SpO2 => "%",
        }
    }
}

impl FromStr for MeasurementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "temperature" | "temp" => Ok(MeasurementType::Temperature),
            "heartrate" | "heart_rate" | "hr" => Ok(MeasurementType::HeartRate),
            "spo2" => Ok(MeasurementType::SpO2),
            _ => Err(format!("Unknown measurement type: {}", s)),
        }
    }
}
