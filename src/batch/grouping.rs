//! Group a season's records into independent (date, team) roster-days.
//! Records missing either key are counted as skipped, never silently
//! dropped.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::data::record::DailyRecord;

/// Accepted date formats, tried in order: ISO, US with 4- then 2-digit
/// years, as seen across sheet exports.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub date: NaiveDate,
    pub team: String,
}

impl GroupKey {
    pub fn label(&self) -> String {
        format!("{}/{}", self.date, self.team)
    }
}

/// One roster-day: indices into the source record slice.
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub key: GroupKey,
    pub record_indices: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Grouping {
    /// Groups in (date, team) order for deterministic batch output.
    pub groups: Vec<DayGroup>,
    pub skipped: usize,
}

pub fn group_by_day(records: &[DailyRecord]) -> Grouping {
    let mut by_key: BTreeMap<GroupKey, Vec<usize>> = BTreeMap::new();
    let mut skipped = 0;

    for (index, record) in records.iter().enumerate() {
        let team = record.team_id.trim();
        let (Some(date), false) = (normalize_date(&record.date), team.is_empty()) else {
            skipped += 1;
            continue;
        };
        by_key
            .entry(GroupKey { date, team: team.to_string() })
            .or_default()
            .push(index);
    }

    Grouping {
        groups: by_key
            .into_iter()
            .map(|(key, record_indices)| DayGroup { key, record_indices })
            .collect(),
        skipped,
    }
}
