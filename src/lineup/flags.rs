//! Roster-management diagnostics derived from the two lineup views.

use crate::lineup::candidate::Candidate;
use crate::lineup::slots::BENCH;

/// A bench contribution that should have been a start: the player played
/// without a recorded start, yet the constrained lineup found an active
/// slot for them.
pub fn missed_start(candidate: &Candidate, full_pos: &str) -> bool {
    candidate.played && !candidate.started && full_pos != BENCH
}

/// A start that a purely rating-optimal lineup would not have made: the
/// player recorded a start but the unconstrained view benches them.
pub fn bad_start(candidate: &Candidate, best_pos: &str) -> bool {
    candidate.started && best_pos == BENCH
}
