//! Pure freshness policy for cached entries. No side effects; the store
//! never expires anything on its own.

use crate::cache::store::CacheEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Usable,
    Stale,
}

/// Decide whether a cached entry may still be served.
/// An absent entry is always stale.
pub fn state(entry: Option<&CacheEntry>, now_ms: i64, window_ms: i64) -> Freshness {
    match entry {
        Some(e) if now_ms - e.written_at_ms < window_ms => Freshness::Usable,
        _ => Freshness::Stale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::daily_result::DailyResult;
    use chrono::NaiveDate;

    const WINDOW_15_MIN: i64 = 15 * 60 * 1000;

    fn entry_at(t: i64) -> CacheEntry {
        CacheEntry {
            payload: DailyResult {
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                first_round: vec![23],
                second_round: vec![45],
            },
            written_at_ms: t,
        }
    }

    #[test]
    fn usable_within_window() {
        let e = entry_at(1_000_000);
        let now = 1_000_000 + 14 * 60 * 1000;
        assert_eq!(state(Some(&e), now, WINDOW_15_MIN), Freshness::Usable);
    }

    #[test]
    fn stale_past_window() {
        let e = entry_at(1_000_000);
        let now = 1_000_000 + 16 * 60 * 1000;
        assert_eq!(state(Some(&e), now, WINDOW_15_MIN), Freshness::Stale);
    }

    #[test]
    fn stale_exactly_at_window() {
        let e = entry_at(0);
        assert_eq!(state(Some(&e), WINDOW_15_MIN, WINDOW_15_MIN), Freshness::Stale);
    }

    #[test]
    fn absent_entry_is_always_stale() {
        assert_eq!(state(None, 0, WINDOW_15_MIN), Freshness::Stale);
        assert_eq!(state(None, i64::MAX, WINDOW_15_MIN), Freshness::Stale);
    }
}
