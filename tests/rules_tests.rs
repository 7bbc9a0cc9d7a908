//! Rule scenarios: kills, placement priority, win and loss.

use kill_the_royals::board::BoardPosition;
use kill_the_royals::rules::{
    can_kill_royal, can_place_numbered_card, check_game_lost, check_game_won,
    get_armor_placement_position, get_royal_placement_position, kill_royals_from_position,
};
use kill_the_royals::{
    AcePosition, ArmorPosition, Card, CardStack, CardValue, CardsInPlay, Deck, GridPosition,
    RoyalPosition, Suit,
};

fn n(value: u8, suit: Suit) -> Card {
    Card::numbered(value, suit)
}

fn royal(value: CardValue, suit: Suit) -> Card {
    Card::new(value, suit)
}

/// Board with `target` at the bottom-middle royal slot and a payload in
/// the middle column, fired from upper middle.
fn column_shot(target: Card, armor: Option<Card>, payload: [Card; 2]) -> CardsInPlay {
    let mut board = CardsInPlay::empty();
    board.set_single(RoyalPosition::BottomMiddle, target);
    if let Some(armor) = armor {
        board.set_single(ArmorPosition::BottomMiddle, armor);
    }
    board.set_single(GridPosition::MiddleMiddle, payload[0]);
    board.set_single(GridPosition::BottomMiddle, payload[1]);
    board.set_single(GridPosition::UpperMiddle, n(2, Suit::Clubs));
    board
}

fn killed(board: &CardsInPlay) -> bool {
    kill_royals_from_position(GridPosition::UpperMiddle, board)
        .top(RoyalPosition::BottomMiddle)
        .is_some_and(Card::is_dead)
}

// =============================================================================
// Kill Resolution
// =============================================================================

#[test]
fn test_jack_killed_by_sum_alone() {
    let jack = royal(CardValue::Jack, Suit::Diamonds);
    assert!(killed(&column_shot(jack, None, [n(6, Suit::Spades), n(5, Suit::Hearts)])));
    assert!(!killed(&column_shot(jack, None, [n(6, Suit::Spades), n(4, Suit::Hearts)])));
}

#[test]
fn test_queen_needs_matching_color() {
    let queen = royal(CardValue::Queen, Suit::Hearts);
    assert!(killed(&column_shot(queen, None, [n(7, Suit::Diamonds), n(5, Suit::Hearts)])));
    assert!(!killed(&column_shot(queen, None, [n(7, Suit::Spades), n(5, Suit::Hearts)])));
}

#[test]
fn test_king_needs_matching_suit_and_beats_armor() {
    let king = royal(CardValue::King, Suit::Spades);
    let armor = Some(n(3, Suit::Diamonds));

    let board = column_shot(king, armor, [n(9, Suit::Spades), n(7, Suit::Spades)]);
    let after = kill_royals_from_position(GridPosition::UpperMiddle, &board);
    assert!(after.top(RoyalPosition::BottomMiddle).is_some_and(Card::is_dead));
    assert!(after.top(ArmorPosition::BottomMiddle).is_some_and(Card::is_dead));

    assert!(!killed(&column_shot(king, armor, [n(9, Suit::Spades), n(7, Suit::Hearts)])));
}

#[test]
fn test_dead_royal_stays_dead() {
    let board = column_shot(Card::dead(), None, [n(10, Suit::Spades), n(10, Suit::Spades)]);
    let after = kill_royals_from_position(GridPosition::UpperMiddle, &board);
    assert_eq!(after, board);
}

#[test]
fn test_can_kill_royal_direct() {
    let king = royal(CardValue::King, Suit::Hearts);
    assert!(can_kill_royal(&king, None, [&n(10, Suit::Hearts), &n(3, Suit::Hearts)]));
    assert!(!can_kill_royal(&king, None, [&n(10, Suit::Hearts), &n(3, Suit::Diamonds)]));
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_numbered_stacking() {
    let empty = CardStack::new();
    let mut seven = CardStack::new();
    seven.push_front(n(7, Suit::Clubs));

    assert!(can_place_numbered_card(&n(2, Suit::Hearts), &empty));
    assert!(can_place_numbered_card(&n(7, Suit::Hearts), &seven));
    assert!(can_place_numbered_card(&n(10, Suit::Hearts), &seven));
    assert!(!can_place_numbered_card(&n(6, Suit::Hearts), &seven));
}

#[test]
fn test_armor_prefers_suit_then_ties() {
    let mut board = CardsInPlay::empty();
    board.set_single(RoyalPosition::LeftUpper, royal(CardValue::Jack, Suit::Clubs));
    board.set_single(RoyalPosition::RightBottom, royal(CardValue::Jack, Suit::Hearts));

    assert_eq!(
        get_armor_placement_position(&n(5, Suit::Hearts), &board).as_slice(),
        &[ArmorPosition::RightBottom]
    );

    let mut neutral = CardsInPlay::empty();
    neutral.set_single(RoyalPosition::LeftUpper, royal(CardValue::Jack, Suit::Clubs));
    neutral.set_single(RoyalPosition::RightBottom, royal(CardValue::Jack, Suit::Spades));
    assert_eq!(
        get_armor_placement_position(&n(5, Suit::Hearts), &neutral).as_slice(),
        &[ArmorPosition::LeftUpper, ArmorPosition::RightBottom]
    );
}

#[test]
fn test_royal_goes_next_to_best_match() {
    let mut board = CardsInPlay::empty();
    for slot in RoyalPosition::ALL {
        board.set_single(slot, Card::dead());
    }
    for slot in [RoyalPosition::UpperRight, RoyalPosition::BottomLeft] {
        board.set_stack(BoardPosition::Royal(slot), CardStack::new());
    }
    board.set_single(GridPosition::UpperRight, n(10, Suit::Spades));
    board.set_single(GridPosition::BottomLeft, n(4, Suit::Diamonds));

    // Diamond suit match outranks a higher off-color card.
    assert_eq!(
        get_royal_placement_position(&royal(CardValue::King, Suit::Diamonds), &board).as_slice(),
        &[RoyalPosition::BottomLeft]
    );
    // Neither matches a club's suit; spades match its color.
    assert_eq!(
        get_royal_placement_position(&royal(CardValue::King, Suit::Clubs), &board).as_slice(),
        &[RoyalPosition::UpperRight]
    );
}

// =============================================================================
// Win / Loss
// =============================================================================

#[test]
fn test_won_only_with_every_royal_dead() {
    let mut board = CardsInPlay::empty();
    for slot in RoyalPosition::ALL {
        board.set_single(slot, Card::dead());
    }
    assert!(check_game_won(&board));

    board.set_single(RoyalPosition::BottomRight, royal(CardValue::Queen, Suit::Clubs));
    assert!(!check_game_won(&board));

    board.set_stack(RoyalPosition::BottomRight, CardStack::new());
    assert!(!check_game_won(&board));
}

#[test]
fn test_empty_deck_lost_without_ace() {
    let mut board = CardsInPlay::empty();
    board.set_single(GridPosition::MiddleMiddle, n(4, Suit::Clubs));
    assert!(check_game_lost(&Deck::new(), &board, false));

    board.set_single(AcePosition::Ace3, Card::new(CardValue::Ace, Suit::Diamonds));
    assert!(!check_game_lost(&Deck::new(), &board, false));
}
