//! Season-sheet validation: structural problems that would abort a batch
//! run surface as errors, degradations the optimizer absorbs (unparseable
//! positions, missing dates) surface as warnings.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::batch::grouping::normalize_date;
use crate::data::record::DailyRecord;
use crate::lineup::candidate::parse_positions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

/// Validate records already in memory.
pub fn validate_records(records: &[DailyRecord]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen_rows = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        let context = if record.row_id.is_empty() {
            format!("record #{index}")
        } else {
            format!("row '{}'", record.row_id)
        };

        if record.row_id.is_empty() {
            report.push(ValidationSeverity::Error, &context, "empty row id");
        } else if !seen_rows.insert(record.row_id.clone()) {
            report.push(ValidationSeverity::Error, &context, "duplicate row id");
        }
        if record.player_id.is_empty() {
            report.push(ValidationSeverity::Error, &context, "empty player id");
        }
        if record.team_id.is_empty() {
            report.push(ValidationSeverity::Warning, &context, "missing team: record will be skipped");
        }
        if normalize_date(&record.date).is_none() {
            report.push(ValidationSeverity::Warning, &context, "unparseable date: record will be skipped");
        }
        if parse_positions(&record.positions).is_empty() {
            report.push(
                ValidationSeverity::Warning,
                &context,
                "no recognizable positions: player is bench-only",
            );
        }
        if record.rating.is_nan() {
            report.push(ValidationSeverity::Error, &context, "rating is NaN");
        }
        if record.games_started > record.games_played {
            report.push(ValidationSeverity::Info, &context, "started without a games-played mark");
        }
    }

    report
}

#[derive(Debug)]
pub enum ValidateFileError {
    Read(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ValidateFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read records file: {err}"),
            Self::Parse(err) => write!(f, "failed to parse records file: {err}"),
        }
    }
}

/// Validate a records file in either accepted shape: a bare array of
/// records or a `{"records": [...]}` sheet.
pub fn validate_record_file(path: &Path) -> Result<ValidationReport, ValidateFileError> {
    let records = load_records_file(path)?;
    Ok(validate_records(&records))
}

/// Shared loader for CLI commands operating on a records file.
pub fn load_records_file(path: &Path) -> Result<Vec<DailyRecord>, ValidateFileError> {
    let raw = fs::read_to_string(path).map_err(ValidateFileError::Read)?;
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum RecordsFile {
        Sheet { records: Vec<DailyRecord> },
        Bare(Vec<DailyRecord>),
    }
    let parsed: RecordsFile = serde_json::from_str(&raw).map_err(ValidateFileError::Parse)?;
    Ok(match parsed {
        RecordsFile::Sheet { records } => records,
        RecordsFile::Bare(records) => records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_records_produce_no_errors() {
        let mut record = DailyRecord::new("p1", "TOR", "2026-01-05");
        record.positions = "C,LW".to_string();
        record.games_played = 1;
        let report = validate_records(&[record]);
        assert!(!report.has_errors());
    }

    #[test]
    fn duplicate_row_ids_and_nan_ratings_are_errors() {
        let mut a = DailyRecord::new("p1", "TOR", "2026-01-05");
        a.positions = "C".to_string();
        let mut b = a.clone();
        b.rating = f64::NAN;
        let report = validate_records(&[a, b]);
        assert!(report.has_errors());
        let messages: Vec<&str> =
            report.diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert!(messages.contains(&"duplicate row id"));
        assert!(messages.contains(&"rating is NaN"));
    }

    #[test]
    fn unparseable_positions_are_a_warning_not_an_error() {
        let mut record = DailyRecord::new("p1", "TOR", "2026-01-05");
        record.positions = "???".to_string();
        let report = validate_records(&[record]);
        assert!(!report.has_errors());
        assert!(report
            .diagnostics
            .iter()
            .any(|d| d.severity == ValidationSeverity::Warning));
    }
}
