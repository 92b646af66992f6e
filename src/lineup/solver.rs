//! Branch-and-bound exhaustive solver, invoked only when the greedy result
//! cannot be proven optimal against the theoretical ceiling.
//!
//! Search state is explicit and copy-cheap: the slot cursor, a `u64`
//! bitmask of used pool indices, and the accumulated score. The incumbent
//! is seeded with the greedy assignment, so pruning starts tight and the
//! budget-exhausted fallback can never return less than greedy.

use crate::lineup::assign::{Assignment, PoolEntry};
use crate::lineup::bound::{descending_order, remaining_bound};
use crate::lineup::candidate::Score;
use crate::lineup::slots::{slot_accepts, Slot};

/// Pool entries beyond this count cannot be tracked in the used bitmask;
/// callers bench the lowest-priority extras before the search. Rosters in
/// practice are 12–20 players against 11 slots.
pub const MAX_POOL: usize = 64;

/// Node ceiling per solve. Exceeding it aborts the exhaustive phase for
/// the group and keeps the best assignment found so far.
#[derive(Debug, Clone, Copy)]
pub struct SearchBudget {
    pub max_nodes: u64,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self { max_nodes: 2_000_000 }
    }
}

#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub assignment: Assignment,
    pub nodes: u64,
    pub budget_exhausted: bool,
}

struct Search<'a, 'p> {
    pool: &'a [PoolEntry<'p>],
    slots: &'a [&'static Slot],
    order: Vec<usize>,
    current: Vec<(&'static str, usize)>,
    best: Assignment,
    nodes: u64,
    max_nodes: u64,
    exhausted: bool,
}

/// Run the exhaustive search over `slots` (ordered scarcest-first) seeded
/// with the greedy incumbent. Panics in debug builds if the pool exceeds
/// [MAX_POOL]; callers are expected to cap pools first.
pub fn branch_and_bound(
    pool: &[PoolEntry<'_>],
    slots: &[&'static Slot],
    incumbent: Assignment,
    budget: &SearchBudget,
) -> SolveOutcome {
    debug_assert!(pool.len() <= MAX_POOL, "pool must be capped before the search");

    let mut search = Search {
        pool,
        slots,
        order: descending_order(pool),
        current: Vec::with_capacity(slots.len()),
        best: incumbent,
        nodes: 0,
        max_nodes: budget.max_nodes,
        exhausted: false,
    };
    search.descend(0, 0, Score::ZERO);

    SolveOutcome {
        assignment: search.best,
        nodes: search.nodes,
        budget_exhausted: search.exhausted,
    }
}

impl Search<'_, '_> {
    fn descend(&mut self, slot_index: usize, used: u64, partial: Score) {
        if slot_index == self.slots.len() {
            // First-seen wins on exact ties: strict improvement only.
            if partial.exceeds(&self.best.total) {
                self.best = Assignment { pairs: self.current.clone(), total: partial };
            }
            return;
        }

        let slot = self.slots[slot_index];
        let remaining_after = self.slots.len() - slot_index - 1;
        let mut any_eligible = false;

        for index in 0..self.pool.len() {
            let bit = 1u64 << index;
            if used & bit != 0 || !slot_accepts(slot, &self.pool[index].candidate.positions) {
                continue;
            }
            any_eligible = true;

            self.nodes += 1;
            if self.nodes > self.max_nodes {
                self.exhausted = true;
                return;
            }

            let tentative = partial + self.pool[index].score;
            let ceiling =
                tentative + remaining_bound(self.pool, &self.order, used | bit, remaining_after);
            if !ceiling.exceeds(&self.best.total) {
                continue;
            }

            self.current.push((slot.label, index));
            self.descend(slot_index + 1, used | bit, tentative);
            self.current.pop();
            if self.exhausted {
                return;
            }
        }

        // No eligible unused candidate: advance with the slot left empty
        // instead of failing the whole search.
        if !any_eligible {
            self.descend(slot_index + 1, used, partial);
        }
    }
}
