use crate::datamodel::{Measurement, SampledResult, VitalsDateTime};
use tracing::debug;

pub mod error;
pub mod interval_reducer;
pub mod partitioner;

pub use error::SamplingError;
pub use interval_reducer::{IntervalWidth, interval_index, interval_window, reduce_to_intervals};
pub use partitioner::partition_by_type;

/// Samples measurements into 5 minute intervals starting at `origin`.
///
/// See [`sample_with_interval`].
pub fn sample(
    origin: VitalsDateTime,
    measurements: &[Measurement],
) -> Result<SampledResult, SamplingError> {
    sample_with_interval(origin, measurements, IntervalWidth::default())
}

/// Reduces every measurement type to the latest reading of each interval.
///
/// Intervals are `[origin + k * width, origin + (k + 1) * width)`, except that a
/// reading exactly on a boundary closes the earlier interval. The result only
/// holds the types present in `measurements`, each one ordered by time.
///
/// Fails without a partial result if any measurement precedes `origin`.
pub fn sample_with_interval(
    origin: VitalsDateTime,
    measurements: &[Measurement],
    width: IntervalWidth,
) -> Result<SampledResult, SamplingError> {
    if let Some(preceding) = measurements.iter().find(|m| m.time() < origin) {
        return Err(SamplingError::PrecedingTime {
            origin,
            time: preceding.time(),
            measurement_type: preceding.measurement_type(),
        });
    }

    let mut result = SampledResult::new();
    if measurements.is_empty() {
        return Ok(result);
    }

    for (measurement_type, bucket) in partition_by_type(measurements) {
        let reduced = reduce_to_intervals(origin, &bucket, width);
        debug!(
            "Sampled {} {} measurements into {} intervals",
            bucket.len(),
            measurement_type,
            reduced.len()
        );
        result.insert(measurement_type, reduced);
    }

    Ok(result)
}
