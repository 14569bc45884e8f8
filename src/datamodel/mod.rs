pub mod measurement;
pub mod measurement_type;
pub mod sampled_result;
pub mod vitals_datetime;

pub use measurement::{Measurement, MeasurementError};
pub use measurement_type::MeasurementType;
pub use sampled_result::SampledResult;
pub use vitals_datetime::VitalsDateTime;
