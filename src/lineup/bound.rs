//! Upper-bound estimation for the optimality check and for search pruning.
//!
//! Both bounds ignore eligibility entirely: they sum the k highest scores
//! available, which can only over-estimate what k real slots can take.
//! Entries that do not beat the empty-slot score are excluded: a slot the
//! search cannot fill contributes nothing, so counting a negative score
//! against the ceiling would make the bound inadmissible.

use crate::lineup::assign::PoolEntry;
use crate::lineup::candidate::Score;

/// Theoretical ceiling for a whole solve: the `slot_count` highest scores
/// in the pool, ignoring eligibility. When the greedy total matches this
/// within epsilon, greedy is provably optimal and the solver is skipped.
pub fn theoretical_max(pool: &[PoolEntry<'_>], slot_count: usize) -> Score {
    let mut scores: Vec<Score> = pool.iter().map(|entry| entry.score).collect();
    scores.sort_by(|a, b| b.cmp(a));
    scores
        .into_iter()
        .take(slot_count)
        .filter(|score| score.exceeds(&Score::ZERO))
        .fold(Score::ZERO, |acc, score| acc + score)
}

/// Pool indices ordered by descending score. Computed once per solve so
/// the in-search bound is a single filtered walk.
pub fn descending_order(pool: &[PoolEntry<'_>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.sort_by(|a, b| pool[*b].score.cmp(&pool[*a].score));
    order
}

/// Admissible bound on what `remaining_slots` unfilled slots can still
/// contribute: the highest unused scores in `order`, at most
/// `remaining_slots` of them, skipping entries marked in the `used`
/// bitmask and anything not beating the empty-slot score.
pub fn remaining_bound(
    pool: &[PoolEntry<'_>],
    order: &[usize],
    used: u64,
    remaining_slots: usize,
) -> Score {
    let mut bound = Score::ZERO;
    let mut taken = 0;
    for &index in order {
        if taken == remaining_slots {
            break;
        }
        if used & (1 << index) != 0 {
            continue;
        }
        let score = pool[index].score;
        if !score.exceeds(&Score::ZERO) {
            // Descending order: nothing further can contribute either.
            break;
        }
        bound = bound + score;
        taken += 1;
    }
    bound
}
