//! Persistence interface for season sheets, plus the JSON-file store used
//! by the CLI. The interface mirrors the backing spreadsheet: scoped
//! season reads and batched column writes keyed by stable row ids.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::record::{DailyRecord, LineupUpdate};

#[derive(Debug)]
pub enum StoreError {
    Read(std::io::Error),
    Parse(serde_json::Error),
    Write(std::io::Error),
    /// Two rows share a row id: the write target cannot be trusted. This
    /// is the one error class that aborts a whole batch run.
    DuplicateRowId(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read season sheet: {err}"),
            Self::Parse(err) => write!(f, "failed to parse season sheet: {err}"),
            Self::Write(err) => write!(f, "failed to persist season sheet: {err}"),
            Self::DuplicateRowId(id) => write!(f, "duplicate row id '{id}' in season sheet"),
        }
    }
}

/// Season persistence as the optimizer sees it. Implementations must
/// reject duplicate row ids rather than guessing which row a write meant.
pub trait LineupStore {
    fn load_season(&self, season: &str) -> Result<Vec<DailyRecord>, StoreError>;
    /// Apply output-column updates by row id. Returns rows updated.
    fn write_lineups(&mut self, season: &str, updates: &[LineupUpdate]) -> Result<usize, StoreError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct SeasonSheet {
    records: Vec<DailyRecord>,
}

/// One JSON file per season under a data directory, `<dir>/<season>.json`,
/// shaped `{"records": [...]}`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> JsonFileStore {
        JsonFileStore { dir: dir.as_ref().to_path_buf() }
    }

    pub fn season_path(&self, season: &str) -> PathBuf {
        self.dir.join(format!("{season}.json"))
    }

    fn load_sheet(&self, season: &str) -> Result<SeasonSheet, StoreError> {
        let raw = fs::read_to_string(self.season_path(season)).map_err(StoreError::Read)?;
        let sheet: SeasonSheet = serde_json::from_str(&raw).map_err(StoreError::Parse)?;
        check_row_ids(&sheet.records)?;
        Ok(sheet)
    }
}

fn check_row_ids(records: &[DailyRecord]) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.row_id.as_str()) {
            return Err(StoreError::DuplicateRowId(record.row_id.clone()));
        }
    }
    Ok(())
}

impl LineupStore for JsonFileStore {
    fn load_season(&self, season: &str) -> Result<Vec<DailyRecord>, StoreError> {
        Ok(self.load_sheet(season)?.records)
    }

    fn write_lineups(&mut self, season: &str, updates: &[LineupUpdate]) -> Result<usize, StoreError> {
        let mut sheet = self.load_sheet(season)?;
        let mut updated = 0;
        for update in updates {
            if let Some(record) =
                sheet.records.iter_mut().find(|record| record.row_id == update.row_id)
            {
                record.full_pos = Some(update.full_pos.clone());
                record.best_pos = Some(update.best_pos.clone());
                record.missed_start = Some(update.missed_start);
                record.bad_start = Some(update.bad_start);
                record.added = update.added;
                updated += 1;
            }
        }
        let raw = serde_json::to_string_pretty(&sheet).map_err(StoreError::Parse)?;
        fs::write(self.season_path(season), raw).map_err(StoreError::Write)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_row_ids_are_rejected() {
        let records = vec![
            DailyRecord::new("a", "TOR", "2026-01-05"),
            DailyRecord::new("a", "TOR", "2026-01-06"),
        ];
        let result = check_row_ids(&records);
        assert!(matches!(result, Err(StoreError::DuplicateRowId(id)) if id == "a"));
    }

    #[test]
    fn distinct_row_ids_pass() {
        let records = vec![
            DailyRecord::new("a", "TOR", "2026-01-05"),
            DailyRecord::new("b", "TOR", "2026-01-05"),
        ];
        assert!(check_row_ids(&records).is_ok());
    }
}
