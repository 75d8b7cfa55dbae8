use crate::csv::CsvRow;
use crate::model::ElectionLevel;

pub const PAST_RESULTS_LIMIT: usize = 8;
pub const CANDIDATES_LIMIT: usize = 12;

fn year_of(row: &CsvRow) -> f64 {
    row.get("year")
        .and_then(|y| y.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Rows for one region at one election level, newest year first, at most `limit`.
pub fn rows_for_region(
    rows: &[CsvRow],
    level: ElectionLevel,
    region_id: &str,
    limit: usize,
) -> Vec<CsvRow> {
    let mut out: Vec<CsvRow> = rows
        .iter()
        .filter(|r| {
            r.get("level")
                .is_some_and(|l| l.to_lowercase() == level.as_str())
                && r.get("region_id").is_some_and(|id| id == region_id)
        })
        .cloned()
        .collect();
    out.sort_by(|a, b| year_of(b).total_cmp(&year_of(a)));
    out.truncate(limit);
    out
}
