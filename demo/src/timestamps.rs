use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;

/// Random second within 2018 (UTC), as a Unix timestamp.
pub fn random_2018_timestamp<R: Rng>(rng: &mut R) -> Result<i64> {
    let min = Utc
        .with_ymd_and_hms(2018, 1, 1, 0, 0, 0)
        .single()
        .context("start of 2018")?
        .timestamp();
    let max = Utc
        .with_ymd_and_hms(2018, 12, 31, 23, 59, 0)
        .single()
        .context("end of 2018")?
        .timestamp();
    Ok(rng.random_range(min..max))
}

/// Leaf encoding of a timestamp: 8 bytes, little-endian.
pub fn to_leaf(timestamp: i64) -> Vec<u8> {
    (timestamp as u64).to_le_bytes().to_vec()
}

pub fn display(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|date| date.to_string())
        .unwrap_or_else(|| format!("<invalid timestamp {}>", timestamp))
}
