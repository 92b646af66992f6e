//! Assignment result type shared by the greedy pass and the exhaustive
//! solver, plus the invariant audit exposed through the public entry point.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::lineup::candidate::{Candidate, Score};
use crate::lineup::slots::{slot_accepts, Slot};

/// A pool entry: one candidate plus the priority score it competes with in
/// the current view. The score differs between views (tiered vs. raw), the
/// candidate does not.
#[derive(Debug, Clone, Copy)]
pub struct PoolEntry<'a> {
    pub candidate: &'a Candidate,
    pub score: Score,
}

/// A completed (possibly partial) assignment: slot label to pool index,
/// with the summed score. Slots without an eligible candidate are absent.
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    pub pairs: Vec<(&'static str, usize)>,
    pub total: Score,
}

impl Assignment {
    /// Slot label assigned to the pool entry at `pool_index`, if any.
    pub fn slot_for(&self, pool_index: usize) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(_, index)| *index == pool_index)
            .map(|(label, _)| *label)
    }

    /// Candidate-id to slot-label map for external callers.
    pub fn by_candidate_id(&self, pool: &[PoolEntry<'_>]) -> HashMap<String, &'static str> {
        self.pairs
            .iter()
            .map(|(label, index)| (pool[*index].candidate.id.clone(), *label))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    /// One candidate holds two slots in the same view.
    CandidateReused(String),
    /// One slot label filled twice.
    SlotReused(String),
    /// A filled pair fails the eligibility resolver.
    Ineligible { candidate: String, slot: String },
}

impl fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CandidateReused(id) => write!(f, "candidate '{id}' assigned to two slots"),
            Self::SlotReused(label) => write!(f, "slot '{label}' filled twice"),
            Self::Ineligible { candidate, slot } => {
                write!(f, "candidate '{candidate}' is not eligible for slot '{slot}'")
            }
        }
    }
}

/// Audit an assignment against the lineup invariants: no candidate twice,
/// no slot twice, every filled pair eligibility-sound.
pub fn audit_assignment(
    assignment: &Assignment,
    pool: &[PoolEntry<'_>],
    slots: &'static [Slot],
) -> Result<(), AssignmentError> {
    let mut used_candidates = HashSet::new();
    let mut used_slots = HashSet::new();
    for (label, index) in &assignment.pairs {
        let candidate = pool[*index].candidate;
        if !used_candidates.insert(*index) {
            return Err(AssignmentError::CandidateReused(candidate.id.clone()));
        }
        if !used_slots.insert(*label) {
            return Err(AssignmentError::SlotReused((*label).to_string()));
        }
        let slot = slots
            .iter()
            .find(|slot| slot.label == *label)
            .ok_or_else(|| AssignmentError::SlotReused((*label).to_string()))?;
        if !slot_accepts(slot, &candidate.positions) {
            return Err(AssignmentError::Ineligible {
                candidate: candidate.id.clone(),
                slot: (*label).to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup::candidate::Candidate;
    use crate::lineup::slots::ROSTER_SLOTS;

    fn skater(id: &str, positions: &str, rating: f64) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: id.to_string(),
            positions: crate::lineup::candidate::parse_positions(positions),
            group: None,
            rating,
            played: true,
            started: false,
            active: true,
            injured_reserve: false,
            injured_reserve_plus: false,
        }
    }

    #[test]
    fn audit_accepts_a_sound_assignment() {
        let candidates = [skater("a", "LW", 5.0), skater("b", "C", 4.0)];
        let pool: Vec<PoolEntry<'_>> = candidates
            .iter()
            .map(|candidate| PoolEntry { candidate, score: Score::single(0, candidate.rating) })
            .collect();
        let assignment = Assignment {
            pairs: vec![("LW1", 0), ("C1", 1)],
            total: Score::single(0, 9.0),
        };
        assert!(audit_assignment(&assignment, &pool, ROSTER_SLOTS).is_ok());
    }

    #[test]
    fn audit_rejects_double_use_and_ineligibility() {
        let candidates = [skater("a", "LW", 5.0)];
        let pool: Vec<PoolEntry<'_>> = candidates
            .iter()
            .map(|candidate| PoolEntry { candidate, score: Score::single(0, candidate.rating) })
            .collect();

        let reused = Assignment { pairs: vec![("LW1", 0), ("LW2", 0)], ..Assignment::default() };
        assert_eq!(
            audit_assignment(&reused, &pool, ROSTER_SLOTS),
            Err(AssignmentError::CandidateReused("a".to_string()))
        );

        let ineligible = Assignment { pairs: vec![("G", 0)], ..Assignment::default() };
        assert_eq!(
            audit_assignment(&ineligible, &pool, ROSTER_SLOTS),
            Err(AssignmentError::Ineligible { candidate: "a".to_string(), slot: "G".to_string() })
        );
    }
}
