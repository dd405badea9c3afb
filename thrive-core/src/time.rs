//! Time helpers: trend bucket keys and ISO-8601 boundary parsing.

use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Granularity for time-bucketed series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrendPeriod {
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    Monthly,
}

/// Bucket key for a date at the given granularity: `YYYY-MM-DD`
/// daily, `YYYY-Www` (ISO week, zero-padded) weekly, `YYYY-MM`
/// monthly. Keys compare lexicographically in chronological order.
pub fn bucket_key(date: NaiveDate, period: TrendPeriod) -> String {
    match period {
        TrendPeriod::Daily => date.format("%Y-%m-%d").to_string(),
        TrendPeriod::Weekly => {
            let week = date.iso_week();
            format!("{}-W{:02}", week.year(), week.week())
        }
        TrendPeriod::Monthly => date.format("%Y-%m").to_string(),
    }
}

/// Parse a date like "2024-03-05", tolerating a trailing time part.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let day = s.split('T').next().unwrap_or(s);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid date '{s}': {e}"))
}

/// Parse an RFC3339 timestamp, returning UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| anyhow::anyhow!("invalid timestamp '{s}': {e}"))
}
