//! Board model: slot positions, the geometry tables, stacks and the
//! opening deal.

pub mod position;
pub mod cards_in_play;
pub mod setup;

pub use position::{
    AcePosition, ArmorPosition, Attack, BoardPosition, GridPosition, JokerPosition, RoyalPosition,
    BOARD_SLOTS,
};
pub use cards_in_play::{CardStack, CardsInPlay};
pub use setup::{setup_first_nine_cards, SetupDeal};
