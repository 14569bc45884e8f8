use crate::datamodel::{Measurement, MeasurementType, vitals_datetime::parse_datetime};
use anyhow::{Context, Result, anyhow};
use csv_async::{AsyncReader, StringRecord};
use futures::{StreamExt, io};
use std::path::Path;
use tokio_util::compat::TokioAsyncReadCompatExt;
use tracing::debug;

/// Positions of the required columns in the CSV header
struct ColumnIndexes {
    datetime: usize,
    measurement_type: usize,
    value: usize,
}

impl ColumnIndexes {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(name))
        };

        match (position("datetime"), position("type"), position("value")) {
            (Some(datetime), Some(measurement_type), Some(value)) => Ok(Self {
                datetime,
                measurement_type,
                value,
            }),
            _ => Err(anyhow!(
                "CSV columns don't match expected format.\n\
                Expected columns: datetime,type,value[,unit]\n\
                Received columns: {}",
                headers.iter().collect::<Vec<_>>().join(", ")
            )),
        }
    }
}

fn parse_row(record: &StringRecord, columns: &ColumnIndexes) -> Result<Measurement> {
    let field = |index: usize, name: &str| {
        record
            .get(index)
            .ok_or_else(|| anyhow!("Missing {} field", name))
    };

    let time = parse_datetime(field(columns.datetime, "datetime")?)?;
    let measurement_type = field(columns.measurement_type, "type")?
        .parse::<MeasurementType>()
        .map_err(|e| anyhow!(e))?;
    let raw_value = field(columns.value, "value")?.trim();
    let value = raw_value
        .parse::<f64>()
        .map_err(|e| anyhow!("Invalid value '{}': {}", raw_value, e))?;

    Ok(Measurement::new(time, value, measurement_type)?)
}

/// Reads validated measurements from a CSV stream with a
/// `datetime,type,value` header.
///
/// The import stops at the first invalid row.
pub async fn parse_measurements_csv<R: io::AsyncRead + Unpin + Send>(
    mut csv_reader: AsyncReader<R>,
) -> Result<Vec<Measurement>> {
    let headers = csv_reader.headers().await?.clone();
    let columns = ColumnIndexes::from_headers(&headers)?;

    let mut measurements = Vec::new();
    let mut records = csv_reader.records();
    let mut row_number = 0usize;

    while let Some(record) = records.next().await {
        row_number += 1;
        let record = record.with_context(|| format!("Failed to read CSV row {}", row_number))?;
        let measurement = parse_row(&record, &columns)
            .with_context(|| format!("Invalid measurement on CSV row {}", row_number))?;
        measurements.push(measurement);
    }

    debug!("Imported {} measurements from CSV", measurements.len());
    Ok(measurements)
}

pub async fn read_measurements_file(path: &Path) -> Result<Vec<Measurement>> {
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let csv_reader = csv_async::AsyncReaderBuilder::new()
        .has_headers(true)
        .create_reader(file.compat());

    parse_measurements_csv(csv_reader)
        .await
        .with_context(|| format!("Failed to import measurements from {}", path.display()))
}
