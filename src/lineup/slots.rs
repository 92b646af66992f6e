//! Fixed roster-slot configuration and the slot eligibility predicate.
//! Changing the roster shape (e.g. a second utility slot) is an edit to
//! `ROSTER_SLOTS`, not a code change anywhere else.

use serde::Serialize;

use crate::lineup::candidate::Position;

/// Sentinel slot label for a player left out of a lineup view.
pub const BENCH: &str = "Bench";

/// How a slot admits candidates. `Fixed` and `Goalie` slots match on the
/// eligible-position list; `Utility` additionally refuses goalies no matter
/// what else their position list carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Fixed,
    Utility,
    Goalie,
}

/// One roster slot: a stable label plus the ordered natural positions it accepts.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Slot {
    pub label: &'static str,
    pub kind: SlotKind,
    pub eligible: &'static [Position],
}

const SKATER_POSITIONS: &[Position] = &[
    Position::LeftWing,
    Position::Center,
    Position::RightWing,
    Position::Defense,
];

/// The canonical 11-slot daily roster: 2 LW, 2 C, 2 RW, 3 D, 1 UTIL, 1 G.
pub const ROSTER_SLOTS: &[Slot] = &[
    Slot { label: "LW1", kind: SlotKind::Fixed, eligible: &[Position::LeftWing] },
    Slot { label: "LW2", kind: SlotKind::Fixed, eligible: &[Position::LeftWing] },
    Slot { label: "C1", kind: SlotKind::Fixed, eligible: &[Position::Center] },
    Slot { label: "C2", kind: SlotKind::Fixed, eligible: &[Position::Center] },
    Slot { label: "RW1", kind: SlotKind::Fixed, eligible: &[Position::RightWing] },
    Slot { label: "RW2", kind: SlotKind::Fixed, eligible: &[Position::RightWing] },
    Slot { label: "D1", kind: SlotKind::Fixed, eligible: &[Position::Defense] },
    Slot { label: "D2", kind: SlotKind::Fixed, eligible: &[Position::Defense] },
    Slot { label: "D3", kind: SlotKind::Fixed, eligible: &[Position::Defense] },
    Slot { label: "UTIL", kind: SlotKind::Utility, eligible: SKATER_POSITIONS },
    Slot { label: "G", kind: SlotKind::Goalie, eligible: &[Position::Goalie] },
];

/// The fixed, externally visible slot table.
pub fn roster_slots() -> &'static [Slot] {
    ROSTER_SLOTS
}

/// Can a candidate holding `positions` fill `slot`? A candidate with an
/// empty position list is ineligible for every slot and falls back to bench.
pub fn slot_accepts(slot: &Slot, positions: &[Position]) -> bool {
    if positions.is_empty() {
        return false;
    }
    match slot.kind {
        SlotKind::Goalie => positions.contains(&Position::Goalie),
        SlotKind::Utility => {
            !positions.contains(&Position::Goalie)
                && positions.iter().any(|pos| *pos != Position::Goalie)
        }
        SlotKind::Fixed => positions.iter().any(|pos| slot.eligible.contains(pos)),
    }
}

/// Slots ordered scarcest-constraints-first: ascending by eligible-list
/// size, table order preserved among equals. Both the greedy pass and the
/// exhaustive solver fill slots in this order.
pub fn slots_by_scarcity(slots: &'static [Slot]) -> Vec<&'static Slot> {
    let mut ordered: Vec<&'static Slot> = slots.iter().collect();
    ordered.sort_by_key(|slot| slot.eligible.len());
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup::candidate::parse_positions;

    #[test]
    fn goalie_slot_only_accepts_goalies() {
        let goalie = ROSTER_SLOTS.iter().find(|s| s.kind == SlotKind::Goalie).unwrap();
        assert!(slot_accepts(goalie, &parse_positions("G")));
        assert!(!slot_accepts(goalie, &parse_positions("C,LW")));
        assert!(!slot_accepts(goalie, &parse_positions("D")));
    }

    #[test]
    fn utility_slot_refuses_goalies_and_accepts_skaters() {
        let util = ROSTER_SLOTS.iter().find(|s| s.kind == SlotKind::Utility).unwrap();
        assert!(slot_accepts(util, &parse_positions("LW")));
        assert!(slot_accepts(util, &parse_positions("D")));
        assert!(!slot_accepts(util, &parse_positions("G")));
    }

    #[test]
    fn empty_position_list_is_ineligible_everywhere() {
        for slot in ROSTER_SLOTS {
            assert!(!slot_accepts(slot, &[]), "{} accepted an empty list", slot.label);
        }
    }

    #[test]
    fn multi_position_candidate_matches_either_wing() {
        let lw1 = &ROSTER_SLOTS[0];
        let rw1 = &ROSTER_SLOTS[4];
        let positions = parse_positions("LW,RW");
        assert!(slot_accepts(lw1, &positions));
        assert!(slot_accepts(rw1, &positions));
    }

    #[test]
    fn scarcity_order_puts_single_position_slots_before_utility() {
        let ordered = slots_by_scarcity(ROSTER_SLOTS);
        assert_eq!(ordered.len(), 11);
        // All single-position slots (including G) precede UTIL.
        let util_rank = ordered.iter().position(|s| s.label == "UTIL").unwrap();
        assert_eq!(util_rank, 10);
        // Table order preserved among equally scarce slots.
        assert_eq!(ordered[0].label, "LW1");
        assert_eq!(ordered[1].label, "LW2");
    }
}
