//! Bulk upload of daily results.
//!
//! Input is newline-separated `date,first,second`. Every line gets an
//! explicit outcome instead of a silent skip, so partial failures are
//! visible to the operator line by line.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::upsert_result;
use crate::errors::AppResult;
use crate::models::daily_result::DailyResult;
use crate::utils::date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Persisted (insert or overwrite of the day's row).
    Upserted { date: String },
    /// Fewer than three comma-separated fields.
    SkippedFields,
    /// First field did not parse as YYYY-MM-DD.
    SkippedDate { raw: String },
    /// A round value was not numeric.
    SkippedNumber { raw: String },
    /// The store rejected the write.
    Failed { message: String },
    /// Blank line, not counted in the summary.
    Blank,
}

#[derive(Debug, Default)]
pub struct BulkReport {
    /// (1-based line number, outcome) for every non-blank line.
    pub lines: Vec<(usize, LineOutcome)>,
}

impl BulkReport {
    pub fn upserted(&self) -> usize {
        self.lines
            .iter()
            .filter(|(_, o)| matches!(o, LineOutcome::Upserted { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.lines.len() - self.upserted() - self.failed()
    }

    pub fn failed(&self) -> usize {
        self.lines
            .iter()
            .filter(|(_, o)| matches!(o, LineOutcome::Failed { .. }))
            .count()
    }
}

/// Classify a single line without touching the store.
pub fn parse_line(line: &str) -> Result<DailyResult, LineOutcome> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(LineOutcome::Blank);
    }

    let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(LineOutcome::SkippedFields);
    }

    let d = match date::parse_date(fields[0]) {
        Some(d) => d,
        None => {
            return Err(LineOutcome::SkippedDate {
                raw: fields[0].to_string(),
            });
        }
    };

    // One number per round in the bulk format.
    let mut rounds = Vec::with_capacity(2);
    for fld in &fields[1..3] {
        match fld.parse::<i64>() {
            Ok(n) => rounds.push(n),
            Err(_) => {
                return Err(LineOutcome::SkippedNumber {
                    raw: fld.to_string(),
                });
            }
        }
    }

    Ok(DailyResult {
        date: d,
        first_round: vec![rounds[0]],
        second_round: vec![rounds[1]],
    })
}

pub struct BulkLogic;

impl BulkLogic {
    /// Upsert every parseable line independently. No transaction spans
    /// the batch: a bad line never rolls back its neighbours.
    pub fn apply(pool: &mut DbPool, input: &str) -> AppResult<BulkReport> {
        let mut report = BulkReport::default();

        for (idx, line) in input.lines().enumerate() {
            let lineno = idx + 1;

            let outcome = match parse_line(line) {
                Err(LineOutcome::Blank) => continue,
                Err(skip) => skip,
                Ok(result) => match upsert_result(&pool.conn, &result) {
                    Ok(_) => LineOutcome::Upserted {
                        date: result.date_str(),
                    },
                    Err(e) => LineOutcome::Failed {
                        message: e.to_string(),
                    },
                },
            };

            report.lines.push((lineno, outcome));
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "bulk",
            "",
            &format!(
                "Bulk upload: {} upserted, {} skipped, {} failed",
                report.upserted(),
                report.skipped(),
                report.failed()
            ),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(report)
    }
}
