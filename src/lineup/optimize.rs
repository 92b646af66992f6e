//! Dual-view orchestrator: builds the constrained (full) and unconstrained
//! (best) candidate pools from one roster-day, proves or searches each to
//! optimality, and merges the two assignments into per-player results.

use std::collections::HashMap;

use serde::Serialize;

use crate::lineup::assign::{audit_assignment, Assignment, AssignmentError, PoolEntry};
use crate::lineup::bound::theoretical_max;
use crate::lineup::candidate::{Candidate, Score};
use crate::lineup::flags::{bad_start, missed_start};
use crate::lineup::greedy::greedy_assign;
use crate::lineup::slots::{roster_slots, slots_by_scarcity, Slot, BENCH};
use crate::lineup::solver::{branch_and_bound, SearchBudget, MAX_POOL};

/// Greedy totals within this much of the theoretical ceiling are accepted
/// as optimal without running the exhaustive solver.
pub const OPTIMALITY_EPSILON: f64 = 0.01;

/// Per-player outcome across both views. Slot labels default to the bench
/// sentinel when the view left the player unassigned.
#[derive(Debug, Clone, Serialize)]
pub struct LineupResult {
    pub player_id: String,
    pub player_name: String,
    pub full_pos: String,
    pub best_pos: String,
    pub missed_start: bool,
    pub bad_start: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptimizeOutcome {
    pub results: Vec<LineupResult>,
    pub full_total: Score,
    pub best_total: Score,
    /// True when either view hit the search budget and fell back to the
    /// best heuristic assignment found.
    pub heuristic_only: bool,
}

/// One view's pool: scored entries plus the index of the source candidate
/// each entry was built from.
struct ViewPool<'a> {
    entries: Vec<PoolEntry<'a>>,
    source: Vec<usize>,
}

impl ViewPool<'_> {
    fn slot_for_candidate(&self, assignment: &Assignment, candidate_index: usize) -> &'static str {
        self.source
            .iter()
            .position(|&src| src == candidate_index)
            .and_then(|pool_index| assignment.slot_for(pool_index))
            .unwrap_or(BENCH)
    }
}

/// Constrained pool: players with a game that day only, prioritized by
/// participation tier before raw rating. Tier dominance means no bench
/// player can ever displace someone who held an active slot.
fn full_pool(candidates: &[Candidate]) -> ViewPool<'_> {
    let mut indexed: Vec<(usize, PoolEntry<'_>)> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| candidate.played)
        .map(|(index, candidate)| {
            (index, PoolEntry { candidate, score: Score::single(candidate.tier(), candidate.rating) })
        })
        .collect();
    indexed.sort_by(|a, b| b.1.score.cmp(&a.1.score));
    indexed.truncate(MAX_POOL);
    ViewPool {
        source: indexed.iter().map(|(index, _)| *index).collect(),
        entries: indexed.into_iter().map(|(_, entry)| entry).collect(),
    }
}

/// Unconstrained pool: everyone, raw ratings, players who actually played
/// ahead of those who did not. The ordering only decides exact-tie breaks.
fn best_pool(candidates: &[Candidate]) -> ViewPool<'_> {
    let mut indexed: Vec<(usize, PoolEntry<'_>)> = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            (index, PoolEntry { candidate, score: Score::single(0, candidate.rating) })
        })
        .collect();
    indexed.sort_by(|a, b| {
        b.1.candidate
            .played
            .cmp(&a.1.candidate.played)
            .then_with(|| b.1.score.cmp(&a.1.score))
    });
    indexed.truncate(MAX_POOL);
    ViewPool {
        source: indexed.iter().map(|(index, _)| *index).collect(),
        entries: indexed.into_iter().map(|(_, entry)| entry).collect(),
    }
}

/// Greedy, then the provable-optimality check, then branch-and-bound only
/// when the check fails. Returns the assignment and whether the search
/// budget cut it short.
fn solve_view(
    pool: &[PoolEntry<'_>],
    slots: &[&'static Slot],
    budget: &SearchBudget,
) -> (Assignment, bool) {
    let greedy = greedy_assign(pool, slots);
    let ceiling = theoretical_max(pool, slots.len());
    if !ceiling.exceeds(&greedy.total) || greedy.total.approx_eq(&ceiling, OPTIMALITY_EPSILON) {
        return (greedy, false);
    }
    let outcome = branch_and_bound(pool, slots, greedy, budget);
    (outcome.assignment, outcome.budget_exhausted)
}

/// Dual-view entry point with the default search budget.
pub fn optimize_lineups(candidates: &[Candidate]) -> OptimizeOutcome {
    optimize_lineups_with_budget(candidates, &SearchBudget::default())
}

pub fn optimize_lineups_with_budget(
    candidates: &[Candidate],
    budget: &SearchBudget,
) -> OptimizeOutcome {
    let slots = slots_by_scarcity(roster_slots());

    let full = full_pool(candidates);
    let best = best_pool(candidates);
    let (full_assignment, full_cut) = solve_view(&full.entries, &slots, budget);
    let (best_assignment, best_cut) = solve_view(&best.entries, &slots, budget);

    let results = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            let full_pos = full.slot_for_candidate(&full_assignment, index);
            let best_pos = best.slot_for_candidate(&best_assignment, index);
            LineupResult {
                player_id: candidate.id.clone(),
                player_name: candidate.name.clone(),
                full_pos: full_pos.to_string(),
                best_pos: best_pos.to_string(),
                missed_start: missed_start(candidate, full_pos),
                bad_start: bad_start(candidate, best_pos),
            }
        })
        .collect();

    OptimizeOutcome {
        results,
        full_total: full_assignment.total,
        best_total: best_assignment.total,
        heuristic_only: full_cut || best_cut,
    }
}

/// Single-view entry point: raw ratings, no tiering, candidates competing
/// in caller order. Unless `skip_validation` is set, the produced
/// assignment is audited against the lineup invariants before being
/// returned; a violation comes back as an error, never as an unsound map.
pub fn assign_lineup(
    candidates: &[Candidate],
    skip_validation: bool,
) -> Result<HashMap<String, &'static str>, AssignmentError> {
    let slots = slots_by_scarcity(roster_slots());
    let pool: Vec<PoolEntry<'_>> = candidates
        .iter()
        .take(MAX_POOL)
        .map(|candidate| PoolEntry { candidate, score: Score::single(0, candidate.rating) })
        .collect();

    let (assignment, _) = solve_view(&pool, &slots, &SearchBudget::default());
    if !skip_validation {
        audit_assignment(&assignment, &pool, roster_slots())?;
    }
    Ok(assignment.by_candidate_id(&pool))
}
