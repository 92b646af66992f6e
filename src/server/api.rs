//! JSON payload builders behind the HTTP routes.

use serde::Deserialize;

use crate::data::record::DailyRecord;
use crate::lineup::candidate::Candidate;
use crate::lineup::optimize::optimize_lineups;
use crate::lineup::slots::roster_slots;

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "linesman",
    }))
}

/// The fixed slot table, so sheet-side tooling can render the roster shape
/// without hardcoding it.
pub fn slots_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(roster_slots())
}

#[derive(Debug)]
pub enum OptimizeError {
    Parse(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OptimizeRequest {
    players: Vec<PlayerPayload>,
}

/// One candidate as posted by a caller: the optimizer entry-point fields,
/// nothing persistence-related required.
#[derive(Debug, Deserialize)]
struct PlayerPayload {
    player_id: String,
    #[serde(default)]
    player_name: String,
    #[serde(default)]
    positions: String,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    daily_slot: Option<String>,
    #[serde(default)]
    games_played: u32,
    #[serde(default)]
    games_started: u32,
    #[serde(default)]
    rating: f64,
}

impl PlayerPayload {
    fn into_candidate(self) -> Candidate {
        let mut record = DailyRecord::new(&self.player_id, "", "");
        record.player_name = self.player_name;
        record.positions = self.positions;
        record.group = self.group;
        record.daily_slot = self.daily_slot;
        record.games_played = self.games_played;
        record.games_started = self.games_started;
        record.rating = self.rating;
        Candidate::from_record(&record)
    }
}

/// POST /api/optimize: one roster-day of players in, both lineup views and
/// the diagnostic flags out.
pub fn optimize_payload(body: &str) -> Result<String, OptimizeError> {
    let request: OptimizeRequest = serde_json::from_str(body).map_err(OptimizeError::Parse)?;
    if request.players.is_empty() {
        return Err(OptimizeError::Validation("players list is empty".to_string()));
    }
    for player in &request.players {
        if player.player_id.trim().is_empty() {
            return Err(OptimizeError::Validation("player_id must not be empty".to_string()));
        }
    }

    let candidates: Vec<Candidate> =
        request.players.into_iter().map(PlayerPayload::into_candidate).collect();
    let outcome = optimize_lineups(&candidates);
    serde_json::to_string_pretty(&outcome).map_err(OptimizeError::Parse)
}
