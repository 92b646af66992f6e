//! Persisted row model: one player-team-day record as stored in the
//! season sheet, including the optimizer's output columns.

use serde::{Deserialize, Serialize};

use crate::lineup::candidate::PositionGroup;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Stable row identifier used for column writes; never row position.
    pub row_id: String,
    pub player_id: String,
    #[serde(default)]
    pub player_name: String,
    pub team_id: String,
    /// Calendar date as stored; normalized at grouping time.
    pub date: String,
    /// Comma-separated natural positions, e.g. "C,LW".
    #[serde(default)]
    pub positions: String,
    /// Position group label from the source: forward / defense / goalie.
    #[serde(default)]
    pub group: Option<String>,
    /// Slot shown in the source daily lineup (bench and IR included).
    #[serde(default)]
    pub daily_slot: Option<String>,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub games_started: u32,
    #[serde(default)]
    pub rating: f64,

    // Output columns, written back by the batch runner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_pos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_pos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_start: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bad_start: Option<bool>,
    /// Marker column: `Some(true)` when the player was added to the team
    /// since the previous day, blank otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<bool>,
}

impl DailyRecord {
    /// Minimal record with the identity fields set; everything else takes
    /// its stored default. Row id mirrors the player id, which is enough
    /// anywhere a single day is optimized without a backing sheet.
    pub fn new(player_id: &str, team_id: &str, date: &str) -> DailyRecord {
        DailyRecord {
            row_id: player_id.to_string(),
            player_id: player_id.to_string(),
            player_name: String::new(),
            team_id: team_id.to_string(),
            date: date.to_string(),
            positions: String::new(),
            group: None,
            daily_slot: None,
            games_played: 0,
            games_started: 0,
            rating: 0.0,
            full_pos: None,
            best_pos: None,
            missed_start: None,
            bad_start: None,
            added: None,
        }
    }

    pub fn parsed_group(&self) -> Option<PositionGroup> {
        match self.group.as_deref().map(str::trim) {
            Some(label) if label.eq_ignore_ascii_case("forward") || label.eq_ignore_ascii_case("f") => {
                Some(PositionGroup::Forward)
            }
            Some(label) if label.eq_ignore_ascii_case("defense") || label.eq_ignore_ascii_case("d") => {
                Some(PositionGroup::Defense)
            }
            Some(label) if label.eq_ignore_ascii_case("goalie") || label.eq_ignore_ascii_case("g") => {
                Some(PositionGroup::Goalie)
            }
            _ => None,
        }
    }
}

/// Column-range update for one row: only the output columns, keyed by the
/// stable row id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupUpdate {
    pub row_id: String,
    pub full_pos: String,
    pub best_pos: String,
    pub missed_start: bool,
    pub bad_start: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<bool>,
}
