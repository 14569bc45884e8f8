use anyhow::{Result, anyhow};

pub type VitalsDateTime = hifitime::Epoch;

/// Parse ISO8601/RFC3339 datetime string to VitalsDateTime using hifitime
///
/// Supports formats like:
/// - 2023-02-21T15:00:00Z
/// - 2023-02-21T15:00:00.123Z
/// - 2023-02-21T16:00:00+01:00
/// - 2023-02-21 (date only, treated as midnight UTC)
pub fn parse_datetime(datetime_str: &str) -> Result<VitalsDateTime> {
    VitalsDateTime::from_gregorian_str(datetime_str.trim())
        .map_err(|e| anyhow!("Invalid datetime format '{}': {}", datetime_str, e))
}

/// Helper function to format datetime to RFC3339/ISO 8601
pub fn format_datetime(datetime: &VitalsDateTime) -> String {
    datetime.to_rfc3339()
}
