//! CSV export of computed lineups for spreadsheet-side review.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::lineup::optimize::LineupResult;

#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    Flush(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "failed to write lineup csv: {err}"),
            Self::Flush(err) => write!(f, "failed to flush lineup csv: {err}"),
        }
    }
}

#[derive(Debug, Serialize)]
struct LineupRow<'a> {
    date: &'a str,
    team: &'a str,
    player_id: &'a str,
    player: &'a str,
    full_pos: &'a str,
    best_pos: &'a str,
    missed_start: bool,
    bad_start: bool,
}

/// One exported row per player: the group key plus the per-player outcome.
pub fn write_lineups_csv(
    path: &Path,
    rows: &[(String, String, LineupResult)],
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path).map_err(ExportError::Csv)?;
    for (date, team, result) in rows {
        writer
            .serialize(LineupRow {
                date,
                team,
                player_id: &result.player_id,
                player: &result.player_name,
                full_pos: &result.full_pos,
                best_pos: &result.best_pos,
                missed_start: result.missed_start,
                bad_start: result.bad_start,
            })
            .map_err(ExportError::Csv)?;
    }
    writer.flush().map_err(ExportError::Flush)
}
