//! Import a season spreadsheet export (.xlsx) into the JSON sheet format
//! the store reads. Rows missing an identity column are counted and
//! skipped, never silently dropped.

use std::fmt;
use std::fs;
use std::path::Path;

use calamine::Reader;
use serde::Serialize;

use crate::data::record::DailyRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub source_path: String,
    pub output_path: String,
    pub sheet: String,
    pub total_rows: usize,
    pub imported_rows: usize,
    pub skipped_rows: usize,
}

#[derive(Debug)]
pub enum ImportError {
    Open(calamine::Error),
    NoSheet,
    MissingColumn(&'static str),
    Write(std::io::Error),
    Encode(serde_json::Error),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(err) => write!(f, "failed to open spreadsheet: {err}"),
            Self::NoSheet => write!(f, "spreadsheet has no sheets"),
            Self::MissingColumn(name) => write!(f, "spreadsheet is missing a '{name}' column"),
            Self::Write(err) => write!(f, "failed to write records file: {err}"),
            Self::Encode(err) => write!(f, "failed to encode records file: {err}"),
        }
    }
}

fn cell_str(data: &calamine::Data) -> String {
    match data {
        calamine::Data::Empty => String::new(),
        calamine::Data::String(s) => s.trim().to_string(),
        calamine::Data::Float(f) => format!("{f}"),
        calamine::Data::Int(i) => format!("{i}"),
        calamine::Data::Bool(b) => format!("{b}"),
        other => format!("{other:?}"),
    }
}

fn cell_f64(data: &calamine::Data) -> f64 {
    match data {
        calamine::Data::Float(f) => *f,
        calamine::Data::Int(i) => *i as f64,
        calamine::Data::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn cell_u32(data: &calamine::Data) -> u32 {
    cell_f64(data).max(0.0) as u32
}

struct Columns {
    row_id: Option<usize>,
    player_id: usize,
    player_name: Option<usize>,
    team: usize,
    date: usize,
    positions: Option<usize>,
    group: Option<usize>,
    slot: Option<usize>,
    gp: Option<usize>,
    gs: Option<usize>,
    rating: Option<usize>,
}

fn find(header: &[String], names: &[&str]) -> Option<usize> {
    header.iter().position(|cell| names.iter().any(|name| cell.eq_ignore_ascii_case(name)))
}

fn map_columns(header: &[String]) -> Result<Columns, ImportError> {
    Ok(Columns {
        row_id: find(header, &["row id", "row_id", "id"]),
        player_id: find(header, &["player id", "player_id"])
            .ok_or(ImportError::MissingColumn("player id"))?,
        player_name: find(header, &["player", "player name", "name"]),
        team: find(header, &["team", "team id", "team_id"])
            .ok_or(ImportError::MissingColumn("team"))?,
        date: find(header, &["date", "day"]).ok_or(ImportError::MissingColumn("date"))?,
        positions: find(header, &["pos", "positions", "position"]),
        group: find(header, &["group", "pos group"]),
        slot: find(header, &["slot", "daily slot", "lineup slot"]),
        gp: find(header, &["gp", "games played"]),
        gs: find(header, &["gs", "games started"]),
        rating: find(header, &["rating", "rtg"]),
    })
}

/// Read the first sheet of the export at `source`, convert each row into a
/// [DailyRecord], and write the JSON sheet to `output`.
pub fn import_spreadsheet(source: &Path, output: &Path) -> Result<ImportReport, ImportError> {
    let mut workbook = calamine::open_workbook_auto(source).map_err(ImportError::Open)?;
    let sheet_name = workbook.sheet_names().first().cloned().ok_or(ImportError::NoSheet)?;
    let range = workbook.worksheet_range(&sheet_name).map_err(ImportError::Open)?;

    let mut rows = range.rows();
    let header: Vec<String> =
        rows.next().map(|row| row.iter().map(cell_str).collect()).unwrap_or_default();
    let columns = map_columns(&header)?;

    let mut records = Vec::new();
    let mut total_rows = 0;
    let mut skipped_rows = 0;
    for row in rows {
        total_rows += 1;
        let cell = |index: Option<usize>| index.and_then(|i| row.get(i));
        let player_id = row.get(columns.player_id).map(cell_str).unwrap_or_default();
        let team = row.get(columns.team).map(cell_str).unwrap_or_default();
        let date = row.get(columns.date).map(cell_str).unwrap_or_default();
        if player_id.is_empty() || team.is_empty() || date.is_empty() {
            skipped_rows += 1;
            continue;
        }

        let row_id = cell(columns.row_id)
            .map(cell_str)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("{player_id}:{team}:{date}"));
        let mut record = DailyRecord::new(&player_id, &team, &date);
        record.row_id = row_id;
        record.player_name = cell(columns.player_name).map(cell_str).unwrap_or_default();
        record.positions = cell(columns.positions).map(cell_str).unwrap_or_default();
        record.group = cell(columns.group).map(cell_str).filter(|g| !g.is_empty());
        record.daily_slot = cell(columns.slot).map(cell_str).filter(|s| !s.is_empty());
        record.games_played = cell(columns.gp).map(cell_u32).unwrap_or(0);
        record.games_started = cell(columns.gs).map(cell_u32).unwrap_or(0);
        record.rating = cell(columns.rating).map(cell_f64).unwrap_or(0.0);
        records.push(record);
    }

    let imported_rows = records.len();
    let sheet = serde_json::json!({ "records": records });
    let raw = serde_json::to_string_pretty(&sheet).map_err(ImportError::Encode)?;
    fs::write(output, raw).map_err(ImportError::Write)?;

    Ok(ImportReport {
        source_path: source.display().to_string(),
        output_path: output.display().to_string(),
        sheet: sheet_name,
        total_rows,
        imported_rows,
        skipped_rows,
    })
}
