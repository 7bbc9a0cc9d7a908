//! Kill resolution.
//!
//! Placing a card on an edge grid slot fires the two cards in its row or
//! column at the royal on the far side (see [`GridPosition::attacks`]).
//! A royal dies when the payload sum reaches its health and the payload
//! satisfies the royal's rank condition:
//!
//! - Jack: any two cards.
//! - Queen: both cards the Queen's color.
//! - King: both cards the King's suit.
//!
//! Health is the royal's value plus its armor's value.

use tracing::info;

use crate::board::{CardsInPlay, GridPosition};
use crate::core::card::{Card, CardValue};

/// Royal value plus armor value.
#[must_use]
pub fn royal_health(royal: &Card, armor: Option<&Card>) -> u8 {
    royal.numeric() + armor.map_or(0, Card::numeric)
}

/// Whether `payload` kills `royal` protected by `armor`.
///
/// Sentinels and non-royal cards in the royal slot are never killed.
#[must_use]
pub fn can_kill_royal(royal: &Card, armor: Option<&Card>, payload: [&Card; 2]) -> bool {
    let [first, second] = payload;
    let sum = u16::from(first.numeric()) + u16::from(second.numeric());
    if sum < u16::from(royal_health(royal, armor)) {
        return false;
    }

    match royal.value {
        CardValue::Jack => true,
        CardValue::Queen => first.color == royal.color && second.color == royal.color,
        CardValue::King => first.suit == royal.suit && second.suit == royal.suit,
        _ => false,
    }
}

/// Resolve every attack fired by a card landing on `position`.
///
/// Returns the updated board; `board` itself is not touched. Attacks whose
/// royal is dead or missing, or whose payload has an empty slot, are
/// skipped. A killed royal becomes DEAD, and so does its armor if any.
#[must_use]
pub fn kill_royals_from_position(position: GridPosition, board: &CardsInPlay) -> CardsInPlay {
    let mut next = board.clone();

    for attack in position.attacks() {
        let Some(royal) = board.living_royal(attack.royal) else {
            continue;
        };
        let (Some(first), Some(second)) =
            (board.top(attack.payload[0]), board.top(attack.payload[1]))
        else {
            continue;
        };
        let armor = board.armor_for(attack.royal);

        if can_kill_royal(royal, armor, [first, second]) {
            info!(
                royal = %royal,
                slot = %attack.royal,
                from = %position,
                armored = armor.is_some(),
                "royal killed"
            );
            next.set_single(attack.royal, Card::dead());
            if armor.is_some() {
                next.set_single(attack.royal.armor(), Card::dead());
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ArmorPosition, RoyalPosition};
    use crate::core::card::Suit;

    fn n(value: u8, suit: Suit) -> Card {
        Card::numbered(value, suit)
    }

    #[test]
    fn test_jack_needs_only_the_sum() {
        let jack = Card::new(CardValue::Jack, Suit::Clubs);
        assert!(can_kill_royal(&jack, None, [&n(6, Suit::Hearts), &n(5, Suit::Spades)]));
        assert!(!can_kill_royal(&jack, None, [&n(6, Suit::Hearts), &n(4, Suit::Spades)]));
    }

    #[test]
    fn test_queen_needs_her_color() {
        let queen = Card::new(CardValue::Queen, Suit::Hearts);
        assert!(can_kill_royal(&queen, None, [&n(7, Suit::Diamonds), &n(5, Suit::Hearts)]));
        assert!(!can_kill_royal(&queen, None, [&n(7, Suit::Spades), &n(5, Suit::Hearts)]));
        // Matching each other is not enough.
        assert!(!can_kill_royal(&queen, None, [&n(7, Suit::Spades), &n(6, Suit::Clubs)]));
    }

    #[test]
    fn test_king_needs_his_suit_through_armor() {
        let king = Card::new(CardValue::King, Suit::Spades);
        let armor = n(3, Suit::Hearts);
        assert_eq!(royal_health(&king, Some(&armor)), 16);
        assert!(can_kill_royal(&king, Some(&armor), [&n(9, Suit::Spades), &n(7, Suit::Spades)]));
        assert!(!can_kill_royal(&king, Some(&armor), [&n(9, Suit::Spades), &n(7, Suit::Hearts)]));
        assert!(!can_kill_royal(&king, Some(&armor), [&n(9, Suit::Spades), &n(6, Suit::Spades)]));
    }

    #[test]
    fn test_aces_and_jokers_add_nothing() {
        let jack = Card::new(CardValue::Jack, Suit::Clubs);
        let ace = Card::new(CardValue::Ace, Suit::Clubs);
        assert!(!can_kill_royal(&jack, None, [&ace, &n(10, Suit::Clubs)]));
        assert!(!can_kill_royal(&Card::dead(), None, [&n(10, Suit::Clubs), &n(10, Suit::Clubs)]));
    }

    #[test]
    fn test_kill_marks_royal_and_armor_dead() {
        let mut board = CardsInPlay::empty();
        board.set_single(RoyalPosition::RightUpper, Card::new(CardValue::Jack, Suit::Diamonds));
        board.set_single(ArmorPosition::RightUpper, n(2, Suit::Clubs));
        board.set_single(GridPosition::UpperMiddle, n(6, Suit::Hearts));
        board.set_single(GridPosition::UpperRight, n(7, Suit::Spades));
        board.set_single(GridPosition::UpperLeft, n(4, Suit::Clubs));

        let after = kill_royals_from_position(GridPosition::UpperLeft, &board);

        assert!(after.top(RoyalPosition::RightUpper).is_some_and(Card::is_dead));
        assert!(after.top(ArmorPosition::RightUpper).is_some_and(Card::is_dead));
        // Input untouched.
        assert!(board.living_royal(RoyalPosition::RightUpper).is_some());
    }

    #[test]
    fn test_unarmored_kill_leaves_armor_slot_empty() {
        let mut board = CardsInPlay::empty();
        board.set_single(RoyalPosition::BottomMiddle, Card::new(CardValue::Jack, Suit::Spades));
        board.set_single(GridPosition::MiddleMiddle, n(5, Suit::Hearts));
        board.set_single(GridPosition::BottomMiddle, n(6, Suit::Hearts));

        let after = kill_royals_from_position(GridPosition::UpperMiddle, &board);

        assert!(after.top(RoyalPosition::BottomMiddle).is_some_and(Card::is_dead));
        assert!(after.stack(ArmorPosition::BottomMiddle).is_empty());
    }

    #[test]
    fn test_empty_payload_slot_skips_attack() {
        let mut board = CardsInPlay::empty();
        board.set_single(RoyalPosition::BottomMiddle, Card::new(CardValue::Jack, Suit::Spades));
        board.set_single(GridPosition::BottomMiddle, n(10, Suit::Hearts));

        let after = kill_royals_from_position(GridPosition::UpperMiddle, &board);
        assert_eq!(after, board);
    }

    #[test]
    fn test_corner_fires_both_ways() {
        let mut board = CardsInPlay::empty();
        board.set_single(RoyalPosition::LeftUpper, Card::new(CardValue::Jack, Suit::Spades));
        board.set_single(RoyalPosition::BottomRight, Card::new(CardValue::Jack, Suit::Hearts));
        for grid in [
            GridPosition::UpperMiddle,
            GridPosition::UpperLeft,
            GridPosition::MiddleRight,
            GridPosition::BottomRight,
        ] {
            board.set_single(grid, n(6, Suit::Clubs));
        }

        let after = kill_royals_from_position(GridPosition::UpperRight, &board);
        assert!(after.top(RoyalPosition::LeftUpper).is_some_and(Card::is_dead));
        assert!(after.top(RoyalPosition::BottomRight).is_some_and(Card::is_dead));
    }

    #[test]
    fn test_centre_never_fires() {
        let mut board = CardsInPlay::empty();
        for grid in GridPosition::ALL {
            board.set_single(grid, n(10, Suit::Spades));
        }
        for royal in RoyalPosition::ALL {
            board.set_single(royal, Card::new(CardValue::Jack, Suit::Spades));
        }
        assert_eq!(kill_royals_from_position(GridPosition::MiddleMiddle, &board), board);
    }
}
