pub mod assign;
pub mod bound;
pub mod candidate;
pub mod flags;
pub mod greedy;
pub mod optimize;
pub mod slots;
pub mod solver;

pub use assign::{audit_assignment, Assignment, AssignmentError, PoolEntry};
pub use bound::{remaining_bound, theoretical_max};
pub use candidate::{parse_position, parse_positions, Candidate, Position, PositionGroup, Score};
pub use flags::{bad_start, missed_start};
pub use greedy::greedy_assign;
pub use optimize::{
    assign_lineup, optimize_lineups, optimize_lineups_with_budget, LineupResult, OptimizeOutcome,
    OPTIMALITY_EPSILON,
};
pub use slots::{roster_slots, slot_accepts, slots_by_scarcity, Slot, SlotKind, BENCH, ROSTER_SLOTS};
pub use solver::{branch_and_bound, SearchBudget, SolveOutcome, MAX_POOL};
