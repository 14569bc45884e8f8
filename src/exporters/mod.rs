use crate::datamodel::{SampledResult, VitalsDateTime};
use crate::sampling::IntervalWidth;
use anyhow::Result;
use std::str::FromStr;

pub mod csv;
pub mod jsonl;
pub mod text;

pub use csv::CsvConverter;
pub use jsonl::JsonlConverter;
pub use text::TextConverter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,  // Human readable, one section per measurement type
    Csv,   // Comma-separated values
    Jsonl, // JSON Lines (one JSON object per line)
}

impl OutputFormat {
    /// Parse format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => Some(OutputFormat::Text),
            "csv" => Some(OutputFormat::Csv),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }

    pub fn render(
        &self,
        result: &SampledResult,
        origin: VitalsDateTime,
        width: IntervalWidth,
    ) -> Result<String> {
        match self {
            OutputFormat::Text => TextConverter::to_text(result, origin, width),
            OutputFormat::Csv => CsvConverter::to_csv(result),
            OutputFormat::Jsonl => JsonlConverter::to_jsonl(result),
        }
    }

    /// Output for a run that had nothing to sample, where no origin exists
    pub fn render_empty(&self) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(TextConverter::empty()),
            OutputFormat::Csv => CsvConverter::to_csv(&SampledResult::new()),
            OutputFormat::Jsonl => JsonlConverter::to_jsonl(&SampledResult::new()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim()).ok_or_else(|| {
            format!(
                "Unsupported output format: {}. Expected one of: text, csv, jsonl",
                s
            )
        })
    }
}
