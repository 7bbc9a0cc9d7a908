//! Core types: cards, the deck, RNG, configuration, errors and actions.
//!
//! Nothing in here knows about the board layout or the rules.

pub mod card;
pub mod deck;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;

pub use card::{is_empty_card, is_royal_dead, Card, CardColor, CardValue, Suit, CARD_BACK, JOKER_GLYPH};
pub use deck::{create_deck, create_shuffled_deck, cycle_deck_for_royal, shuffle_deck, Deck, DECK_SIZE};
pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use action::{Action, ActionRecord};
