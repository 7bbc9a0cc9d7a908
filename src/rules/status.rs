//! Win, loss and score.

use crate::board::{CardsInPlay, RoyalPosition};
use crate::core::card::Card;
use crate::core::deck::Deck;

use super::placement::{can_place_card_on_grid, get_armor_placement_position};

/// Royal slots holding a royal that is not DEAD.
#[must_use]
pub fn count_living_royals(board: &CardsInPlay) -> usize {
    RoyalPosition::ALL
        .into_iter()
        .filter(|&slot| board.living_royal(slot).is_some())
        .count()
}

/// All twelve royal slots hold a DEAD sentinel. A slot that never received
/// a royal blocks the win.
#[must_use]
pub fn check_game_won(board: &CardsInPlay) -> bool {
    RoyalPosition::ALL
        .into_iter()
        .all(|slot| board.top(slot).is_some_and(Card::is_dead))
}

#[must_use]
pub fn has_unused_ace(board: &CardsInPlay) -> bool {
    board.unused_aces().next().is_some()
}

#[must_use]
pub fn has_unused_joker(board: &CardsInPlay) -> bool {
    board.unused_jokers().next().is_some()
}

/// Whether the game is stuck.
///
/// With cards left, only a numbered top card can be stuck: it fits nowhere
/// on the grid, cannot become armor, and there is no joker or ace left to
/// make room. With the deck empty, the game is over unless an ace can pull
/// a stack back into the deck.
///
/// `can_place_top_card_on_grid` is the cached grid check for the current
/// top card.
#[must_use]
pub fn check_game_lost(deck: &Deck, board: &CardsInPlay, can_place_top_card_on_grid: bool) -> bool {
    if check_game_won(board) {
        return false;
    }

    let Some(top) = deck.front() else {
        return !has_unused_ace(board);
    };

    if !top.is_numbered() {
        return false;
    }

    !can_place_top_card_on_grid
        && get_armor_placement_position(top, board).is_empty()
        && !has_unused_joker(board)
        && !has_unused_ace(board)
}

/// Like [`check_game_lost`], computing the grid check itself.
#[must_use]
pub fn is_stuck(deck: &Deck, board: &CardsInPlay) -> bool {
    let fits = deck
        .front()
        .is_some_and(|top| can_place_card_on_grid(top, board));
    check_game_lost(deck, board, fits)
}

/// Unused aces plus unused jokers. Only meaningful once the game is won.
#[must_use]
pub fn score(board: &CardsInPlay) -> u32 {
    let unused = board.unused_aces().count() + board.unused_jokers().count();
    u32::try_from(unused).unwrap_or(u32::MAX)
}
