//! Per-day candidate model: parsed positions, participation flags, and the
//! composite priority score used by the assigners.

use std::cmp::Ordering;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::data::record::DailyRecord;

/// Natural playing positions as they appear in the source position column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "LW")]
    LeftWing,
    #[serde(rename = "C")]
    Center,
    #[serde(rename = "RW")]
    RightWing,
    #[serde(rename = "D")]
    Defense,
    #[serde(rename = "G")]
    Goalie,
}

/// Coarse position group. Goalies are never interchangeable with skaters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionGroup {
    Forward,
    Defense,
    Goalie,
}

/// Parse one position token. Unknown tokens are dropped rather than failing
/// the candidate; an all-unknown list just benches the player.
pub fn parse_position(raw: &str) -> Option<Position> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "LW" => Some(Position::LeftWing),
        "C" => Some(Position::Center),
        "RW" => Some(Position::RightWing),
        "D" => Some(Position::Defense),
        "G" => Some(Position::Goalie),
        _ => None,
    }
}

/// Parse a comma-separated position field ("C,LW") into the distinct
/// positions it names, in field order.
pub fn parse_positions(raw: &str) -> Vec<Position> {
    let mut positions = Vec::new();
    for token in raw.split(',') {
        if let Some(position) = parse_position(token) {
            if !positions.contains(&position) {
                positions.push(position);
            }
        }
    }
    positions
}

/// Composite assignment priority compared lexicographically: participation
/// tier first, raw rating second. Summed componentwise across an
/// assignment, so a higher tier sum beats any rating sum. That is the
/// invariant that keeps bench players from displacing anyone who actually
/// took an active slot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Score {
    pub tiers: u32,
    pub rating: f64,
}

impl Score {
    pub const ZERO: Score = Score { tiers: 0, rating: 0.0 };

    pub fn single(tier: u8, rating: f64) -> Score {
        Score { tiers: u32::from(tier), rating }
    }

    pub fn cmp(&self, other: &Score) -> Ordering {
        self.tiers
            .cmp(&other.tiers)
            .then_with(|| self.rating.total_cmp(&other.rating))
    }

    /// Strict lexicographic improvement. Exact ties are not improvements,
    /// which is what keeps the solver's first-seen-wins tie policy.
    pub fn exceeds(&self, other: &Score) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Equal tier sums and ratings within `epsilon`. Used to prove the
    /// greedy result optimal against the theoretical ceiling.
    pub fn approx_eq(&self, other: &Score, epsilon: f64) -> bool {
        self.tiers == other.tiers && (self.rating - other.rating).abs() <= epsilon
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, other: Score) -> Score {
        Score {
            tiers: self.tiers + other.tiers,
            rating: self.rating + other.rating,
        }
    }
}

/// A player considered for assignment on one day. Constructed fresh per
/// (team, date) group and immutable during a solve.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub positions: Vec<Position>,
    pub group: Option<PositionGroup>,
    pub rating: f64,
    /// Recorded any statistic that day (GP indicator).
    pub played: bool,
    /// Recorded a start that day (GS indicator).
    pub started: bool,
    /// Held a non-bench, non-IR slot in the team's actual daily lineup.
    pub active: bool,
    pub injured_reserve: bool,
    pub injured_reserve_plus: bool,
}

/// Daily-slot labels that do not count as active lineup spots.
fn is_active_slot(slot: &str) -> bool {
    let slot = slot.trim();
    if slot.is_empty() {
        return false;
    }
    let upper = slot.to_ascii_uppercase();
    upper != "BENCH" && upper != "BN" && !upper.starts_with("IR")
}

impl Candidate {
    pub fn from_record(record: &DailyRecord) -> Candidate {
        let daily_slot = record.daily_slot.as_deref().unwrap_or("");
        let upper_slot = daily_slot.trim().to_ascii_uppercase();
        Candidate {
            id: record.player_id.clone(),
            name: record.player_name.clone(),
            positions: parse_positions(&record.positions),
            group: record.parsed_group(),
            rating: record.rating,
            played: record.games_played > 0,
            started: record.games_started > 0,
            active: is_active_slot(daily_slot),
            injured_reserve: upper_slot == "IR",
            injured_reserve_plus: upper_slot == "IR+",
        }
    }

    /// Full-lineup protection tier: 3 for a bench start (a start recorded
    /// while shown bench/IR, the data-reconciliation case with the highest
    /// protection), 2 for played-and-active, 1 for played only. Only
    /// meaningful for candidates with `played == true`; the best view uses
    /// tier 0 for everyone.
    pub fn tier(&self) -> u8 {
        if self.started && !self.active {
            3
        } else if self.played && self.active {
            2
        } else {
            1
        }
    }
}
