use serde::Serialize;

/// Flattened daily result as written to export files.
/// Rounds are comma-joined so the CSV stays one row per day.
#[derive(Debug, Serialize)]
pub struct ResultExport {
    pub date: String,
    pub first_round: String,
    pub second_round: String,
    pub created_at: String,
}
