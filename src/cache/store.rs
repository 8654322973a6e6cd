//! File-backed key/value cache for daily results.
//!
//! One JSON object per cache file, key → entry. Corrupt files or entries
//! are treated as absent, never as errors: the cache has no authority and
//! can always be rebuilt from the store. Last writer wins; the CLI is the
//! only writer so no locking is needed.

use crate::models::daily_result::DailyResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub payload: DailyResult,
    pub written_at_ms: i64,
}

pub struct CacheStore {
    path: PathBuf,
    entries: BTreeMap<String, CacheEntry>,
}

impl CacheStore {
    /// Open the cache file, treating a missing or unreadable file as empty.
    pub fn open(path: &str) -> Self {
        let path = PathBuf::from(path);
        let entries = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => BTreeMap::new(),
        };
        Self { path, entries }
    }

    pub fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Overwrite unconditionally and persist.
    pub fn set(&mut self, key: &str, entry: CacheEntry) {
        self.entries.insert(key.to_string(), entry);
        self.persist();
    }

    /// Drop one key (used when the backing record is deleted).
    pub fn invalidate(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.persist();
        }
    }

    /// Best-effort write-back. A failed write only costs a future refetch,
    /// so it is not propagated.
    fn persist(&self) {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(&self.entries) {
            let _ = fs::write(&self.path, json);
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
