//! Property tests for the rotation policy (pure domain, no store).
//!
//! Contract:
//! - For a fixed slot, rounds 0..N-1 visit every seat exactly once
//! - Round 0 always belongs to the seeding seat
//! - A seat never owes a mid-rotation step of its own chain

use proptest::prelude::*;

use crate::domain::rotation::{kind_for_round, responsible_player, StepKind};

proptest! {
    /// Property: per-slot rotation is a permutation of all seats.
    #[test]
    fn prop_rotation_is_a_permutation(
        player_count in 2u8..=32u8,
        slot_offset in 0u8..32u8,
    ) {
        let slot = slot_offset % player_count;
        let mut seen = vec![false; player_count as usize];
        for round_no in 0..player_count {
            let seat = responsible_player(slot, round_no, player_count);
            prop_assert!(seat < player_count, "seat {seat} out of range");
            prop_assert!(!seen[seat as usize],
                "seat {seat} assigned twice for slot {slot}");
            seen[seat as usize] = true;
        }
        prop_assert!(seen.iter().all(|&s| s), "some seat never assigned");
    }

    /// Property: round 0 belongs to the seeding seat.
    #[test]
    fn prop_seed_round_is_owned_by_slot(
        player_count in 2u8..=32u8,
        slot_offset in 0u8..32u8,
    ) {
        let slot = slot_offset % player_count;
        prop_assert_eq!(responsible_player(slot, 0, player_count), slot);
    }

    /// Property: a seat never works its own chain during rounds 1..N-1.
    #[test]
    fn prop_seat_never_owns_own_chain_mid_rotation(
        player_count in 2u8..=32u8,
        slot_offset in 0u8..32u8,
    ) {
        let slot = slot_offset % player_count;
        for round_no in 1..player_count {
            prop_assert_ne!(
                responsible_player(slot, round_no, player_count), slot,
                "slot {} assigned to its own seed at round {}", slot, round_no);
        }
    }

    /// Property: kinds strictly alternate, starting from the word seed.
    #[test]
    fn prop_kinds_alternate(round_no in 0u8..=254u8) {
        let here = kind_for_round(round_no);
        let next = kind_for_round(round_no + 1);
        prop_assert_ne!(here, next);
        if round_no % 2 == 0 {
            prop_assert_eq!(here, StepKind::Word);
        } else {
            prop_assert_eq!(here, StepKind::Drawing);
        }
    }
}
