use crate::datamodel::{Measurement, MeasurementType};
use std::collections::BTreeMap;

/// Groups measurements by type.
///
/// Each bucket keeps the relative order of the input. No validation is done here.
pub fn partition_by_type(
    measurements: &[Measurement],
) -> BTreeMap<MeasurementType, Vec<Measurement>> {
    let mut buckets: BTreeMap<MeasurementType, Vec<Measurement>> = BTreeMap::new();
    for measurement in measurements {
        buckets
            .entry(measurement.measurement_type())
            .or_default()
            .push(*measurement);
    }
    buckets
}
