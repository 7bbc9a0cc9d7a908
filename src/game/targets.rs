//! Legal targets for the card that has to be dealt with next.
//!
//! Recomputed after every accepted action. Hosts use this to know which
//! slots should accept a click; the game layer uses it to enumerate legal
//! actions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::state::GameStatus;
use crate::board::{AcePosition, CardsInPlay, GridPosition, JokerPosition};
use crate::core::deck::Deck;
use crate::rules::{
    get_armor_placement_position, get_royal_placement_position, valid_grid_positions,
    ArmorChoices, GridChoices, RoyalChoices,
};

/// Slots that currently accept the pending card, by family.
///
/// At most one family is populated during play. In setup, staged royals
/// and replaceable grid cards may both be listed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalTargets {
    /// Candidate slots for the pending royal (staged first, else deck top).
    pub royal: RoyalChoices,
    /// Armor slots for a numbered top card that fits nowhere on the grid.
    pub armor: ArmorChoices,
    /// Grid stacks for the numbered top card, or replaceable cards in setup.
    pub grid: GridChoices,
    /// Empty joker slots for a drawn Joker.
    pub joker: SmallVec<[JokerPosition; 2]>,
    /// Empty ace slots for a drawn Ace.
    pub ace: SmallVec<[AcePosition; 4]>,
    /// The numbered top card fits on at least one grid stack.
    pub can_place_top_card_on_grid: bool,
}

impl LegalTargets {
    /// Nothing accepts a card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.royal.is_empty()
            && self.armor.is_empty()
            && self.grid.is_empty()
            && self.joker.is_empty()
            && self.ace.is_empty()
    }

    /// Compute targets for a position.
    #[must_use]
    pub fn compute(
        deck: &Deck,
        board: &CardsInPlay,
        status: GameStatus,
        replace_mode: bool,
    ) -> Self {
        let mut targets = Self::default();

        if let Some(royal) = board.royals_to_be_placed().front() {
            if !status.is_terminal() {
                targets.royal = get_royal_placement_position(royal, board);
            }
        }

        match status {
            GameStatus::Won | GameStatus::Lost => targets,
            GameStatus::Setup => {
                if replace_mode {
                    targets.grid = GridPosition::ALL
                        .into_iter()
                        .filter(|&p| board.top(p).is_some())
                        .collect();
                }
                targets
            }
            GameStatus::Playing => {
                if !board.royals_to_be_placed().is_empty() {
                    return targets;
                }
                let Some(top) = deck.front() else {
                    return targets;
                };

                if top.is_royal() {
                    targets.royal = get_royal_placement_position(top, board);
                } else if top.is_joker() {
                    targets.joker = board.empty_joker_slots().collect();
                } else if top.is_ace() {
                    targets.ace = board.empty_ace_slots().collect();
                } else if top.is_numbered() {
                    targets.grid = valid_grid_positions(top, board);
                    targets.can_place_top_card_on_grid = !targets.grid.is_empty();
                    if targets.grid.is_empty() {
                        targets.armor = get_armor_placement_position(top, board);
                    }
                }
                targets
            }
        }
    }
}
