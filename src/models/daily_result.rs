use crate::models::raw;
use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// The pair of number sequences published for a calendar day.
/// This is the normalized form; the stored row keeps whatever raw shape
/// the rounds were written in (see [`ResultRow`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyResult {
    pub date: NaiveDate, // ⇔ results.date (TEXT "YYYY-MM-DD", UNIQUE)
    pub first_round: Vec<i64>,
    pub second_round: Vec<i64>,
}

/// A raw row as stored: rounds are opaque text in one of the historical
/// shapes and must go through the normalizer before display.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub id: i64,
    pub date: NaiveDate,
    pub first_round_raw: Option<String>, // ⇔ results.first_round (TEXT)
    pub second_round_raw: Option<String>, // ⇔ results.second_round (TEXT)
    pub created_at: String,              // ⇔ results.created_at (TEXT, ISO8601)
}

impl ResultRow {
    /// Normalize both rounds, keeping only valid integers.
    /// Invalid tokens from legacy rows are filtered on the display path.
    pub fn normalized(&self) -> DailyResult {
        DailyResult {
            date: self.date,
            first_round: raw::valid_numbers(&raw::normalize(self.first_round_raw.as_deref())),
            second_round: raw::valid_numbers(&raw::normalize(self.second_round_raw.as_deref())),
        }
    }
}

impl DailyResult {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Current write shape for a round: JSON array text.
    pub fn round_to_raw(numbers: &[i64]) -> String {
        serde_json::to_string(numbers).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Epoch milliseconds of local midnight for the given day.
/// Used as the range-query representation of a calendar date.
pub fn local_midnight_ms(date: NaiveDate) -> i64 {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap();
    match Local.from_local_datetime(&midnight) {
        chrono::LocalResult::Single(dt) => dt.timestamp_millis(),
        // DST gap or fold: earliest() always exists for midnight on real zones
        _ => Local
            .from_local_datetime(&midnight)
            .earliest()
            .map(|dt| dt.timestamp_millis())
            .unwrap_or_default(),
    }
}

/// Half-open range [start-of-day, start-of-next-day) in epoch millis.
pub fn day_range_ms(date: NaiveDate) -> (i64, i64) {
    let start = local_midnight_ms(date);
    let end = local_midnight_ms(date.succ_opt().unwrap_or(date));
    (start, end)
}
