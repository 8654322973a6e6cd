use chrono::NaiveDate;
use serde::Serialize;

/// Operator-curated guess numbers for a day, distinct from the official
/// daily result. Keyed by date with get/set-by-key semantics.
#[derive(Debug, Clone, Serialize)]
pub struct CommonNumbers {
    pub date: NaiveDate,    // ⇔ common_numbers.date (TEXT, PK)
    pub row1: Vec<i64>,     // ⇔ common_numbers.row1 (TEXT, JSON array)
    pub row2: Vec<i64>,     // ⇔ common_numbers.row2 (TEXT, JSON array)
    pub created_at: String, // ⇔ common_numbers.created_at (TEXT, ISO8601)
    pub updated_at: String, // ⇔ common_numbers.updated_at (TEXT, ISO8601)
}

impl CommonNumbers {
    pub fn new(date: NaiveDate, row1: Vec<i64>, row2: Vec<i64>) -> Self {
        let now = chrono::Local::now().to_rfc3339();
        Self {
            date,
            row1,
            row2,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
