//! Season batch runner: load, group, solve every roster-day, then write
//! results back in chunks. All optimization happens before the first
//! write so CPU-bound work is never serialized behind store I/O.

use std::fmt;

use chrono::Datelike;
use rayon::prelude::*;
use serde::Serialize;

use crate::batch::grouping::{group_by_day, DayGroup};
use crate::batch::presence::PresenceSet;
use crate::data::record::{DailyRecord, LineupUpdate};
use crate::data::store::{LineupStore, StoreError};
use crate::lineup::candidate::Candidate;
use crate::lineup::optimize::optimize_lineups_with_budget;
use crate::lineup::solver::SearchBudget;
use crate::parallel::batch::batch_ranges;
use crate::parallel::pool::WorkerPool;

/// Rows per chunked store write.
const WRITE_CHUNK_ROWS: usize = 250;

#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Restrict processing to these ISO week numbers of the group date.
    pub weeks: Option<Vec<u32>>,
    /// Compute everything, write nothing.
    pub dry_run: bool,
    pub budget: SearchBudget,
    pub workers: WorkerPool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub season: String,
    pub groups: usize,
    pub updated_rows: usize,
    /// Records excluded from grouping for want of a date or team.
    pub skipped_rows: usize,
    /// Roster-days whose exhaustive phase hit the search budget and fell
    /// back to the heuristic assignment.
    pub heuristic_groups: Vec<String>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub enum BatchError {
    Store(StoreError),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(err) => write!(f, "batch aborted: {err}"),
        }
    }
}

impl From<StoreError> for BatchError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Solve one roster-day and attach the presence-derived added marker.
/// Returns the row updates plus whether the solve was heuristic-only.
pub fn process_group(
    records: &[DailyRecord],
    group: &DayGroup,
    presence: &PresenceSet,
    budget: &SearchBudget,
) -> (Vec<LineupUpdate>, bool) {
    let candidates: Vec<Candidate> = group
        .record_indices
        .iter()
        .map(|&index| Candidate::from_record(&records[index]))
        .collect();
    let outcome = optimize_lineups_with_budget(&candidates, budget);

    let updates = group
        .record_indices
        .iter()
        .zip(outcome.results.into_iter())
        .map(|(&index, result)| {
            let record = &records[index];
            LineupUpdate {
                row_id: record.row_id.clone(),
                full_pos: result.full_pos,
                best_pos: result.best_pos,
                missed_start: result.missed_start,
                bad_start: result.bad_start,
                added: presence.added_flag(&record.player_id, &group.key.team, group.key.date),
            }
        })
        .collect();

    (updates, outcome.heuristic_only)
}

/// Run a whole season through the optimizer. Groups are independent and
/// solved in parallel; the presence set is built once from all records
/// before any week filter is applied.
pub fn run_season_batch(
    store: &mut dyn LineupStore,
    season: &str,
    options: &BatchOptions,
) -> Result<BatchSummary, BatchError> {
    let records = store.load_season(season)?;
    let presence = PresenceSet::build(&records);
    let grouping = group_by_day(&records);

    let groups: Vec<&DayGroup> = grouping
        .groups
        .iter()
        .filter(|group| match &options.weeks {
            Some(weeks) => weeks.contains(&group.key.date.iso_week().week()),
            None => true,
        })
        .collect();

    let solved: Vec<(String, Vec<LineupUpdate>, bool)> = options.workers.install(|| {
        groups
            .par_iter()
            .map(|&group| {
                let (updates, heuristic) =
                    process_group(&records, group, &presence, &options.budget);
                (group.key.label(), updates, heuristic)
            })
            .collect()
    });

    let mut updates = Vec::new();
    let mut heuristic_groups = Vec::new();
    for (label, group_updates, heuristic) in solved {
        updates.extend(group_updates);
        if heuristic {
            heuristic_groups.push(label);
        }
    }

    let mut updated_rows = 0;
    if !options.dry_run {
        let chunks = updates.len().div_ceil(WRITE_CHUNK_ROWS);
        for (start, end) in batch_ranges(updates.len(), chunks) {
            updated_rows += store.write_lineups(season, &updates[start..end])?;
        }
    }

    Ok(BatchSummary {
        season: season.to_string(),
        groups: groups.len(),
        updated_rows,
        skipped_rows: grouping.skipped,
        heuristic_groups,
        dry_run: options.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::grouping::group_by_day;

    fn record(player: &str, date: &str, positions: &str, rating: f64, slot: &str) -> DailyRecord {
        let mut record = DailyRecord::new(player, "TOR", date);
        record.row_id = format!("{player}:{date}");
        record.positions = positions.to_string();
        record.rating = rating;
        record.daily_slot = Some(slot.to_string());
        record.games_played = 1;
        record
    }

    #[test]
    fn process_group_emits_one_update_per_record() {
        let records = vec![
            record("a", "2026-01-05", "C", 5.0, "C"),
            record("b", "2026-01-05", "LW", 3.0, "LW"),
        ];
        let grouping = group_by_day(&records);
        let presence = PresenceSet::build(&records);

        let (updates, heuristic) = process_group(
            &records,
            &grouping.groups[0],
            &presence,
            &SearchBudget::default(),
        );
        assert!(!heuristic);
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].row_id, "a:2026-01-05");
        assert_eq!(updates[0].full_pos, "C1");
        assert_eq!(updates[0].added, Some(true));
    }
}
