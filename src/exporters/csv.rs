use crate::datamodel::SampledResult;
use crate::datamodel::vitals_datetime::format_datetime;
use anyhow::Result;

/// Converter for SampledResult to CSV format
pub struct CsvConverter;

impl CsvConverter {
    /// Convert SampledResult to CSV format, one row per representative measurement
    pub fn to_csv(result: &SampledResult) -> Result<String> {
        let mut csv_output = String::from("timestamp,type,value,unit\n");

        for (measurement_type, samples) in result.iter() {
            for sample in samples {
                csv_output.push_str(&format!(
                    "{},{},{},{}\n",
                    format_datetime(&sample.time()),
                    measurement_type,
                    sample.value(),
                    measurement_type.unit()
                ));
            }
        }

        Ok(csv_output)
    }
}
