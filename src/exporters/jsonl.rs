use crate::datamodel::SampledResult;
use crate::datamodel::vitals_datetime::format_datetime;
use anyhow::Result;
use serde_json::json;

/// Converter for SampledResult to JSON Lines format
pub struct JsonlConverter;

impl JsonlConverter {
    /// Convert SampledResult to JSON Lines format (one JSON object per line)
    pub fn to_jsonl(result: &SampledResult) -> Result<String> {
        let mut jsonl_output = String::new();

        for (measurement_type, samples) in result.iter() {
            for sample in samples {
                let line = json!({
                    "timestamp": format_datetime(&sample.time()),
                    "type": measurement_type,
                    "value": sample.value(),
                    "unit": measurement_type.unit(),
                });
                jsonl_output.push_str(&line.to_string());
                jsonl_output.push('\n');
            }
        }

        Ok(jsonl_output)
    }
}
