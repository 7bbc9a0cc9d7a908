//! Player actions.
//!
//! Every move a host can make is an `Action`. Positions are typed, so an
//! action can never name a slot from the wrong family. The game layer
//! applies actions with `GameState::apply` and enumerates the accepted ones
//! with `GameState::legal_actions`.
//!
//! Some moves take two or three steps (arm a joker, choose its source,
//! choose its target). Each step is its own action.

use serde::{Deserialize, Serialize};

use crate::board::{AcePosition, ArmorPosition, GridPosition, JokerPosition, RoyalPosition};

/// A single player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Leave setup. With `replace`, swap the grid card at `position` for the
    /// next numbered card in the deck first.
    CompleteSetup {
        replace: bool,
        position: Option<GridPosition>,
    },
    /// Expose the grid cards that may be replaced before play starts.
    EnableReplaceMode,
    /// Put the numbered top card on a grid stack.
    PlaceNumberedCard(GridPosition),
    /// Place the pending royal when it has only one possible slot.
    PlaceRoyalCard,
    /// Place the pending royal on a chosen slot.
    SelectRoyalPosition(RoyalPosition),
    /// Turn the top card into armor when it has only one possible slot.
    PlaceArmorCard,
    /// Turn the top card into armor on a chosen slot.
    SelectArmorPosition(ArmorPosition),
    /// Move a drawn Joker into an empty joker slot.
    SelectJokerPosition(JokerPosition),
    /// Move a drawn Ace into an empty ace slot.
    SelectAcePosition(AcePosition),
    /// Arm (or disarm) an ace.
    ActivateAce(AcePosition),
    /// Spend the armed ace on a grid stack.
    UseAce(GridPosition),
    /// Arm (or disarm) a joker.
    ActivateJoker(JokerPosition),
    /// Choose (or deselect) the stack the armed joker moves from.
    SelectJokerSource(GridPosition),
    /// Move the chosen card and spend the joker.
    UseJoker(GridPosition),
    /// Roll back to the previous snapshot.
    Undo,
}

impl Action {
    /// Plain setup completion, no replacement.
    pub const START: Action = Action::CompleteSetup {
        replace: false,
        position: None,
    };

    /// Setup completion replacing the card at `position`.
    #[must_use]
    pub const fn replace_at(position: GridPosition) -> Self {
        Action::CompleteSetup {
            replace: true,
            position: Some(position),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::CompleteSetup { .. } => "complete_setup",
            Action::EnableReplaceMode => "enable_replace_mode",
            Action::PlaceNumberedCard(_) => "place_numbered_card",
            Action::PlaceRoyalCard => "place_royal_card",
            Action::SelectRoyalPosition(_) => "select_royal_position",
            Action::PlaceArmorCard => "place_armor_card",
            Action::SelectArmorPosition(_) => "select_armor_position",
            Action::SelectJokerPosition(_) => "select_joker_position",
            Action::SelectAcePosition(_) => "select_ace_position",
            Action::ActivateAce(_) => "activate_ace",
            Action::UseAce(_) => "use_ace",
            Action::ActivateJoker(_) => "activate_joker",
            Action::SelectJokerSource(_) => "select_joker_source",
            Action::UseJoker(_) => "use_joker",
            Action::Undo => "undo",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::CompleteSetup {
                replace: true,
                position: Some(p),
            } => write!(f, "{}({p})", self.name()),
            Action::PlaceNumberedCard(p)
            | Action::UseAce(p)
            | Action::SelectJokerSource(p)
            | Action::UseJoker(p) => write!(f, "{}({p})", self.name()),
            Action::SelectRoyalPosition(p) => write!(f, "{}({p})", self.name()),
            Action::SelectArmorPosition(p) => write!(f, "{}({p})", self.name()),
            Action::SelectJokerPosition(p) | Action::ActivateJoker(p) => {
                write!(f, "{}({p})", self.name())
            }
            Action::SelectAcePosition(p) | Action::ActivateAce(p) => {
                write!(f, "{}({p})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// An accepted action with its position in the game.
///
/// Used for:
/// - Replaying a game from its seed
/// - Debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Number of actions accepted before this one.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(action: Action, sequence: u32) -> Self {
        Self { action, sequence }
    }
}
