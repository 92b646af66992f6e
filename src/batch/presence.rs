//! Season-wide presence tracking for the day-over-day "added" marker.
//!
//! The set is built from every record in the season, not just the window
//! being reprocessed, so the previous-day lookback stays correct when a
//! partial date range is rerun.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::batch::grouping::normalize_date;
use crate::data::record::DailyRecord;

#[derive(Debug, Clone, Default)]
pub struct PresenceSet {
    entries: HashSet<(String, String, NaiveDate)>,
}

impl PresenceSet {
    /// Index every record carrying a parseable (player, team, date) triple.
    pub fn build(records: &[DailyRecord]) -> PresenceSet {
        let mut entries = HashSet::new();
        for record in records {
            let team = record.team_id.trim();
            if record.player_id.is_empty() || team.is_empty() {
                continue;
            }
            if let Some(date) = normalize_date(&record.date) {
                entries.insert((record.player_id.clone(), team.to_string(), date));
            }
        }
        PresenceSet { entries }
    }

    pub fn contains(&self, player_id: &str, team_id: &str, date: NaiveDate) -> bool {
        self.entries
            .contains(&(player_id.to_string(), team_id.to_string(), date))
    }

    /// `Some(true)` when the player was not on this team the day before;
    /// left unset when they were, or when the preceding date cannot be
    /// determined.
    pub fn added_flag(&self, player_id: &str, team_id: &str, date: NaiveDate) -> Option<bool> {
        let previous = date.pred_opt()?;
        if self.contains(player_id, team_id, previous) {
            None
        } else {
            Some(true)
        }
    }
}
