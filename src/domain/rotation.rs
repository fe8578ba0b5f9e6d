use serde::{Deserialize, Serialize};

/// Seat index, 0-based and dense within a game.
pub type Seat = u8;
/// Round number within a chain. The seed is round 0; relay steps are 1..N-1.
pub type Round = u8;

/// Kind of content a step carries. The seed is always a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Word,
    Drawing,
}

/// Rotation and alternation math for the relay.
///
/// These helpers live in `domain` so services, routes, and views share a
/// single source of truth for "whose turn is it on this chain". They are
/// total functions; callers bounds-check slot and round.
///
/// Seat responsible for round `round_no` of the chain seeded at `slot`.
///
/// For a fixed slot the sequence over rounds 0..N-1 visits every seat
/// exactly once, starting with the seeding seat at round 0. Because
/// `(slot + round) % N == slot` only when the round is a multiple of N,
/// no seat ever works its own chain mid-rotation.
#[inline]
pub fn responsible_player(slot: Seat, round_no: Round, player_count: u8) -> Seat {
    debug_assert!(player_count > 0, "player_count must be positive");
    ((slot as u16 + round_no as u16) % player_count as u16) as Seat
}

/// Alternation rule: even rounds are words, odd rounds are drawings.
///
/// Round 0 (the seed) is a word, round 1 draws it, round 2 describes the
/// drawing, and so on.
#[inline]
pub fn kind_for_round(round_no: Round) -> StepKind {
    if round_no % 2 == 0 {
        StepKind::Word
    } else {
        StepKind::Drawing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_round_belongs_to_seeding_seat() {
        for n in 2u8..=8 {
            for slot in 0..n {
                assert_eq!(responsible_player(slot, 0, n), slot);
            }
        }
    }

    #[test]
    fn rotation_wraps_around() {
        assert_eq!(responsible_player(2, 1, 3), 0);
        assert_eq!(responsible_player(2, 2, 3), 1);
        assert_eq!(responsible_player(0, 3, 3), 0);
    }

    #[test]
    fn kinds_alternate_from_word() {
        assert_eq!(kind_for_round(0), StepKind::Word);
        assert_eq!(kind_for_round(1), StepKind::Drawing);
        assert_eq!(kind_for_round(2), StepKind::Word);
        assert_eq!(kind_for_round(3), StepKind::Drawing);
    }
}
