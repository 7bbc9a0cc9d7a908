//! The opening deal.

use super::cards_in_play::CardsInPlay;
use super::position::{AcePosition, BoardPosition, GridPosition, JokerPosition};
use crate::core::card::Card;
use crate::core::deck::Deck;

/// Result of [`setup_first_nine_cards`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupDeal {
    /// Board with the grid seeded, specials slotted and royals staged.
    pub cards_in_play: CardsInPlay,
    /// What is left to draw.
    pub remaining_deck: Deck,
    /// Royals set aside, in the order found.
    pub royals_found: Vec<Card>,
    /// Aces found, in the order found.
    pub aces_found: Vec<Card>,
    /// Jokers found, in the order found.
    pub jokers_found: Vec<Card>,
}

/// Deal the opening grid.
///
/// Numbered cards fill the grid left-to-right, top-to-bottom. Royals go to
/// the staging stack, Aces and Jokers to their slots in the order found.
/// If no royal has turned up once the grid is full, keep drawing until one
/// does; numbered cards drawn meanwhile go back under the deck in the
/// order they were drawn.
#[must_use]
pub fn setup_first_nine_cards(deck: &Deck) -> SetupDeal {
    let mut deck = deck.clone();
    let mut board = CardsInPlay::empty();
    let mut royals_found = Vec::new();
    let mut aces_found = Vec::new();
    let mut jokers_found = Vec::new();
    let mut grid = GridPosition::ALL.into_iter();
    let mut next_grid = grid.next();
    let mut cycled = Vec::new();

    while next_grid.is_some() || royals_found.is_empty() {
        let Some(card) = deck.pop_front() else {
            break;
        };

        if card.is_joker() {
            jokers_found.push(card);
        } else if card.is_ace() {
            aces_found.push(card);
        } else if card.is_royal() {
            royals_found.push(card);
        } else if let Some(position) = next_grid {
            board.set_single(position, card);
            next_grid = grid.next();
        } else {
            cycled.push(card);
        }
    }

    deck.extend(cycled);

    for (slot, card) in JokerPosition::ALL.into_iter().zip(&jokers_found) {
        board.set_single(slot, *card);
    }
    for (slot, card) in AcePosition::ALL.into_iter().zip(&aces_found) {
        board.set_single(slot, *card);
    }
    board.set_stack(
        BoardPosition::RoyalsToBePlaced,
        royals_found.iter().copied().collect(),
    );

    SetupDeal {
        cards_in_play: board,
        remaining_deck: deck,
        royals_found,
        aces_found,
        jokers_found,
    }
}
