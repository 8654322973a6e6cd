use crate::export::model::ResultExport;
use std::path::Path;

/// Write the results as CSV.
pub fn export_csv(results: &[ResultExport], path: &Path) -> std::io::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["date", "first_round", "second_round", "created_at"])?;

    for r in results {
        wtr.write_record([
            r.date.as_str(),
            r.first_round.as_str(),
            r.second_round.as_str(),
            r.created_at.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the results as pretty-printed JSON.
pub fn export_json(results: &[ResultExport], path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(results)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    std::fs::write(path, json)
}
