use chrono::{DateTime, NaiveDateTime, Utc};

use crate::api::{Error, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Whole days elapsed since `timestamp`, e.g. `2021-11-06T12:24:34Z`.
/// Timestamps in the future yield `0`.
pub fn days_since(timestamp: &str) -> Result<u64> {
    days_between(timestamp, Utc::now())
}

pub fn days_between(timestamp: &str, now: DateTime<Utc>) -> Result<u64> {
    let then = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map_err(|err| Error::Format(format!("{:?}: {}", timestamp, err)))?;
    let elapsed = now.naive_utc() - then;
    Ok(elapsed.num_days().max(0) as u64)
}
