//! Pending multi-step interactions.
//!
//! Spending an ace takes two inputs (arm, then pick a stack) and moving a
//! card with a joker takes three (arm, pick a source, pick a target). The
//! in-between states are explicit variants, so "source chosen but no joker
//! armed" cannot be represented.

use serde::{Deserialize, Serialize};

use crate::board::{AcePosition, GridPosition, JokerPosition};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interaction {
    #[default]
    Idle,
    /// An ace is armed; the next grid pick sends that stack to the deck.
    AceArmed(AcePosition),
    /// A joker is armed; the next grid pick chooses the card to move.
    JokerArmed(JokerPosition),
    /// Joker armed and source chosen; the next grid pick is the target.
    JokerSourceChosen {
        joker: JokerPosition,
        source: GridPosition,
    },
}

impl Interaction {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// The armed ace, if any.
    #[must_use]
    pub fn armed_ace(&self) -> Option<AcePosition> {
        match self {
            Interaction::AceArmed(ace) => Some(*ace),
            _ => None,
        }
    }

    /// The armed joker, whether or not a source has been chosen.
    #[must_use]
    pub fn armed_joker(&self) -> Option<JokerPosition> {
        match self {
            Interaction::JokerArmed(joker) | Interaction::JokerSourceChosen { joker, .. } => {
                Some(*joker)
            }
            _ => None,
        }
    }

    /// The chosen joker source, if any.
    #[must_use]
    pub fn joker_source(&self) -> Option<GridPosition> {
        match self {
            Interaction::JokerSourceChosen { source, .. } => Some(*source),
            _ => None,
        }
    }
}
