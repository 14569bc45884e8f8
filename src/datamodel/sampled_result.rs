use super::{Measurement, MeasurementType};
use std::collections::BTreeMap;

/// Representative measurements per type, one per populated interval,
/// in ascending time order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledResult {
    samples: BTreeMap<MeasurementType, Vec<Measurement>>,
}

impl SampledResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, measurement_type: MeasurementType, samples: Vec<Measurement>) {
        self.samples.insert(measurement_type, samples);
    }

    pub fn get(&self, measurement_type: MeasurementType) -> Option<&[Measurement]> {
        self.samples.get(&measurement_type).map(Vec::as_slice)
    }

    pub fn types(&self) -> impl Iterator<Item = MeasurementType> + '_ {
        self.samples.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeasurementType, &[Measurement])> {
        self.samples
            .iter()
            .map(|(measurement_type, samples)| (*measurement_type, samples.as_slice()))
    }

    /// Number of measurement types present.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn total_samples(&self) -> usize {
        self.samples.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> BTreeMap<MeasurementType, Vec<Measurement>> {
        self.samples
    }
}
