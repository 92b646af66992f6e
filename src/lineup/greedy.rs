//! Single-pass greedy assigner. Fast, deterministic, and not guaranteed
//! optimal: an early pick at a scarce slot can block a better global
//! arrangement, which is exactly the case the exhaustive solver exists for.

use crate::lineup::assign::{Assignment, PoolEntry};
use crate::lineup::slots::{slot_accepts, Slot};

/// Fill `slots` (already ordered scarcest-first) from `pool`. Per slot,
/// the eligible unused entry with the highest score wins; exact score ties
/// go to the earlier pool position. Slots with no eligible unused entry
/// are left unfilled.
pub fn greedy_assign(pool: &[PoolEntry<'_>], slots: &[&'static Slot]) -> Assignment {
    let mut used = vec![false; pool.len()];
    let mut assignment = Assignment::default();

    for slot in slots {
        let mut best: Option<usize> = None;
        for (index, entry) in pool.iter().enumerate() {
            if used[index] || !slot_accepts(slot, &entry.candidate.positions) {
                continue;
            }
            match best {
                Some(current) if !entry.score.exceeds(&pool[current].score) => {}
                _ => best = Some(index),
            }
        }
        if let Some(index) = best {
            used[index] = true;
            assignment.total = assignment.total + pool[index].score;
            assignment.pairs.push((slot.label, index));
        }
    }

    assignment
}
