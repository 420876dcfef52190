use std::{collections::HashSet, hash::Hash, time::Duration};

use chrono::{NaiveDate, NaiveDateTime};
use tokio_util::sync::CancellationToken;

use crate::{
    error::{ExtractError, Res},
    region::Region,
};

/// Sleeps for `duration` unless `cancel` fires first.
pub async fn pause(duration: Duration, cancel: &CancellationToken) -> Res<()> {
    tokio::select! {
        _ = cancel.cancelled() => Err(ExtractError::Cancelled),
        _ = tokio::time::sleep(duration) => Ok(()),
    }
}

/// Drops repeated items, keeping the first occurrence and the input order.
pub fn unique_in_order<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// The 24 hourly snapshot timestamps of `date`.
pub fn hourly_timestamps(date: NaiveDate) -> Vec<String> {
    (0..24)
        .map(|hour| format!("{}T{:02}:00:00", date.format("%Y-%m-%d"), hour))
        .collect()
}

pub fn parse_date(date: &str) -> Res<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| ExtractError::InvalidDate(date.to_string()))
}

/// `clap` value parser for region arguments.
pub fn parse_region(region: &str) -> Result<Region, String> {
    region.parse::<Region>().map_err(|e| e.to_string())
}

/// `clap` value parser for date arguments.
pub fn parse_date_arg(date: &str) -> Result<NaiveDate, String> {
    parse_date(date).map_err(|e| e.to_string())
}

/// Parses a featured timestamp, `None` when it does not match
/// `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_featured(timestamp: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Parses an album release date of day, month or year precision. Coarser
/// precisions resolve to the first day of the period.
pub fn parse_release_date(release_date: &str) -> Option<NaiveDate> {
    let release_date = release_date.trim();
    match release_date.len() {
        4 => NaiveDate::parse_from_str(&format!("{release_date}-01-01"), "%Y-%m-%d").ok(),
        7 => NaiveDate::parse_from_str(&format!("{release_date}-01"), "%Y-%m-%d").ok(),
        _ => NaiveDate::parse_from_str(release_date, "%Y-%m-%d").ok(),
    }
}

/// Milliseconds to whole seconds, truncating.
pub fn duration_seconds(duration_ms: u64) -> i32 {
    i32::try_from(duration_ms / 1000).unwrap_or(i32::MAX)
}

/// Narrows a provider count to the int32 output column, saturating.
pub fn saturating_i32(value: u64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
