//! Game rules as pure functions over the board.
//!
//! Nothing here owns state. Each function reads a `CardsInPlay` (and the
//! deck where needed) and either answers a question or returns a new board:
//! - Placement: where numbered cards, royals and armor may go
//! - Attack: which royals a placement kills
//! - Status: win, loss and score
//!
//! The game layer calls into these after every accepted action.

pub mod placement;
pub mod attack;
pub mod status;

pub use placement::{
    can_place_card_on_grid, can_place_numbered_card, get_armor_placement_position,
    get_royal_placement_position, valid_grid_positions, ArmorChoices, GridChoices, RoyalChoices,
    MAX_ARMORED_HEALTH,
};
pub use attack::{can_kill_royal, kill_royals_from_position, royal_health};
pub use status::{
    check_game_lost, check_game_won, count_living_royals, has_unused_ace, has_unused_joker,
    is_stuck, score,
};
