use super::SamplingError;
use crate::datamodel::{Measurement, VitalsDateTime};
use hifitime::{Duration, Unit};
use std::collections::{BTreeMap, btree_map::Entry};

const NANOSECONDS_PER_SECOND: i128 = 1_000_000_000;
const DEFAULT_INTERVAL_MINUTES: u32 = 5;

/// Width of a sampling interval, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalWidth {
    seconds: i64,
}

impl IntervalWidth {
    pub fn from_minutes(minutes: u32) -> Result<Self, SamplingError> {
        if minutes == 0 {
            return Err(SamplingError::InvalidInterval(Duration::ZERO));
        }
        Ok(Self {
            seconds: i64::from(minutes) * 60,
        })
    }

    /// Sub-second parts of the duration are truncated.
    pub fn from_duration(duration: Duration) -> Result<Self, SamplingError> {
        let seconds = duration.total_nanoseconds() / NANOSECONDS_PER_SECOND;
        if seconds < 1 || seconds > i64::MAX as i128 {
            return Err(SamplingError::InvalidInterval(duration));
        }
        Ok(Self {
            seconds: seconds as i64,
        })
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn as_duration(&self) -> Duration {
        self.seconds * Unit::Second
    }
}

impl Default for IntervalWidth {
    fn default() -> Self {
        Self {
            seconds: i64::from(DEFAULT_INTERVAL_MINUTES) * 60,
        }
    }
}

fn whole_seconds(duration: Duration) -> i128 {
    duration.total_nanoseconds().div_euclid(NANOSECONDS_PER_SECOND)
}

/// Zero-based index of the interval `time` belongs to.
///
/// The index is computed from the total elapsed whole seconds since `origin`.
/// A time that sits exactly on a non-zero interval boundary belongs to the
/// interval that ends there, not to the one that starts there.
pub fn interval_index(origin: VitalsDateTime, time: VitalsDateTime, width: IntervalWidth) -> u64 {
    let elapsed = whole_seconds(time - origin).max(0);
    let width = i128::from(width.seconds);

    let index = elapsed / width;
    let on_boundary = elapsed > 0 && elapsed % width == 0;
    if on_boundary {
        (index - 1) as u64
    } else {
        index as u64
    }
}

/// Start and end of interval `index`, as `[start, end)`.
pub fn interval_window(
    origin: VitalsDateTime,
    index: u64,
    width: IntervalWidth,
) -> (VitalsDateTime, VitalsDateTime) {
    let start = origin + (index as i64 * width.seconds) * Unit::Second;
    (start, start + width.as_duration())
}

/// Keeps the latest measurement of every interval, ordered by interval index.
///
/// All measurements must share one type and none may precede `origin`.
/// On an exact time tie inside an interval the first measurement seen is kept.
pub fn reduce_to_intervals(
    origin: VitalsDateTime,
    measurements: &[Measurement],
    width: IntervalWidth,
) -> Vec<Measurement> {
    let mut latest: BTreeMap<u64, Measurement> = BTreeMap::new();

    for measurement in measurements {
        let index = interval_index(origin, measurement.time(), width);
        match latest.entry(index) {
            Entry::Vacant(entry) => {
                entry.insert(*measurement);
            }
            Entry::Occupied(mut entry) => {
                if measurement.time() > entry.get().time() {
                    entry.insert(*measurement);
                }
            }
        }
    }

    latest.into_values().collect()
}
