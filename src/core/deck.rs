//! Deck construction and shuffling.
//!
//! The deck is an `im::Vector<Card>` with index 0 as the next card to draw.
//! Cards are consumed from the front and returned to the back.

use im::Vector;

use super::card::{Card, CardColor, CardValue, Suit};
use super::rng::GameRng;

/// Draw pile. Index 0 is the active card.
pub type Deck = Vector<Card>;

/// Number of cards in a full deck (52 + 2 Jokers).
pub const DECK_SIZE: usize = 54;

/// Build the unshuffled 54-card deck.
///
/// Suit-major (spades, hearts, diamonds, clubs), rank-minor (A, 2..10, J, Q, K),
/// then a red Joker and a black Joker.
#[must_use]
pub fn create_deck() -> Deck {
    let mut deck: Deck = Suit::PLAYING
        .iter()
        .flat_map(|&suit| CardValue::RANKS.iter().map(move |&value| Card::new(value, suit)))
        .collect();

    deck.push_back(Card::joker(CardColor::Red));
    deck.push_back(Card::joker(CardColor::Black));
    deck
}

/// Fisher-Yates shuffle into a new deck. The input is left untouched.
#[must_use]
pub fn shuffle_deck(deck: &Deck, rng: &mut GameRng) -> Deck {
    let mut cards: Vec<Card> = deck.iter().copied().collect();

    for i in (1..cards.len()).rev() {
        let j = rng.pick(i + 1);
        cards.swap(i, j);
    }

    cards.into_iter().collect()
}

/// `shuffle_deck(create_deck())`.
#[must_use]
pub fn create_shuffled_deck(rng: &mut GameRng) -> Deck {
    shuffle_deck(&create_deck(), rng)
}

/// Move cards from the front to the back until a royal is on top.
///
/// Returns the deck unchanged if it holds no royal at all.
#[must_use]
pub fn cycle_deck_for_royal(deck: &Deck) -> Deck {
    match deck.iter().position(Card::is_royal) {
        None | Some(0) => deck.clone(),
        Some(index) => {
            let (cycled, mut rest) = deck.clone().split_at(index);
            rest.append(cycled);
            rest
        }
    }
}
