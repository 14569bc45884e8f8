use crate::datamodel::SampledResult;
use crate::datamodel::VitalsDateTime;
use crate::datamodel::vitals_datetime::format_datetime;
use crate::sampling::{IntervalWidth, interval_index};
use anyhow::Result;
use std::fmt::Write;

/// Converter for SampledResult to a human readable listing
pub struct TextConverter;

impl TextConverter {
    /// Listing for a result with no measurement types
    pub fn empty() -> String {
        String::from("No measurements\n")
    }

    pub fn to_text(
        result: &SampledResult,
        origin: VitalsDateTime,
        width: IntervalWidth,
    ) -> Result<String> {
        if result.is_empty() {
            return Ok(Self::empty());
        }

        let mut output = String::new();
        for (measurement_type, samples) in result.iter() {
            writeln!(
                output,
                "{} ({} intervals)",
                measurement_type,
                samples.len()
            )?;
            for sample in samples {
                writeln!(
                    output,
                    "  #{:<4} {}  {} {}",
                    interval_index(origin, sample.time(), width),
                    format_datetime(&sample.time()),
                    sample.value(),
                    measurement_type.unit()
                )?;
            }
        }

        Ok(output)
    }
}
