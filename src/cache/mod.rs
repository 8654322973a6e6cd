//! Local result cache: a disposable, reconstructible projection of the
//! result store. The store itself is always authoritative; any conflict
//! is resolved by a fresh read.

pub mod freshness;
pub mod store;

use chrono::NaiveDate;

pub use freshness::{Freshness, state};
pub use store::{CacheEntry, CacheStore};

/// The one cache key scheme used by every reader and writer:
/// `{namespace}:{ISO-date}`.
pub fn cache_key(namespace: &str, date: NaiveDate) -> String {
    format!("{}:{}", namespace, date.format("%Y-%m-%d"))
}
