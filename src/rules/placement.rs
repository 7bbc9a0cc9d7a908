//! Placement rules: numbered cards on the grid, royal slot priority and
//! armor eligibility.

use smallvec::SmallVec;

use crate::board::{ArmorPosition, CardStack, CardsInPlay, GridPosition, RoyalPosition};
use crate::core::card::Card;

/// Candidate royal slots, tied for best.
pub type RoyalChoices = SmallVec<[RoyalPosition; 12]>;

/// Candidate armor slots, tied for best.
pub type ArmorChoices = SmallVec<[ArmorPosition; 12]>;

/// Grid slots a card may be placed on.
pub type GridChoices = SmallVec<[GridPosition; 9]>;

/// Royal value + armor value may not exceed this.
pub const MAX_ARMORED_HEALTH: u8 = 20;

/// A card may go on an empty stack, or on a top card of equal or lower value.
#[must_use]
pub fn can_place_numbered_card(card: &Card, target: &CardStack) -> bool {
    target
        .front()
        .map_or(true, |top| card.numeric() >= top.numeric())
}

/// Grid slots that accept `card`. Empty unless the card is numbered.
#[must_use]
pub fn valid_grid_positions(card: &Card, board: &CardsInPlay) -> GridChoices {
    if !card.is_numbered() {
        return GridChoices::new();
    }
    GridPosition::ALL
        .into_iter()
        .filter(|&p| can_place_numbered_card(card, board.stack(p)))
        .collect()
}

/// `card` is 2..=10 and at least one grid stack accepts it.
#[must_use]
pub fn can_place_card_on_grid(card: &Card, board: &CardsInPlay) -> bool {
    card.is_numbered()
        && GridPosition::ALL
            .into_iter()
            .any(|p| can_place_numbered_card(card, board.stack(p)))
}

/// How well the card inside an empty royal slot matches the royal.
/// Higher is better; compared as a tuple.
fn royal_slot_score(royal: &Card, slot: RoyalPosition, board: &CardsInPlay) -> (u8, i16) {
    match board.top(slot.adjacent_grid()) {
        None => (0, -1),
        Some(neighbour) => {
            let priority = if neighbour.suit == royal.suit {
                3
            } else if neighbour.color == royal.color {
                2
            } else {
                1
            };
            (priority, i16::from(neighbour.numeric()))
        }
    }
}

/// Where a royal must be placed.
///
/// Among empty royal slots, prefer the one next to the highest grid card of
/// the royal's suit, then of its color, then of any kind. Every slot tied
/// for best is returned so the player can choose. A lone empty slot is
/// returned without scoring. No empty slot returns nothing.
#[must_use]
pub fn get_royal_placement_position(royal: &Card, board: &CardsInPlay) -> RoyalChoices {
    let empty: RoyalChoices = board.empty_royal_slots().collect();
    if empty.len() <= 1 {
        return empty;
    }

    let scored: SmallVec<[(RoyalPosition, (u8, i16)); 12]> = empty
        .iter()
        .map(|&slot| (slot, royal_slot_score(royal, slot, board)))
        .collect();

    let Some(best) = scored.iter().map(|(_, score)| *score).max() else {
        return RoyalChoices::new();
    };

    scored
        .into_iter()
        .filter(|(_, score)| *score == best)
        .map(|(slot, _)| slot)
        .collect()
}

/// `royal` would lose the armor to another living, unarmored royal: one of
/// lower value, or one of equal value that matches the armor's suit (or
/// color) where `royal` does not.
fn outranked_for_armor(
    slot: RoyalPosition,
    royal: &Card,
    armor_card: &Card,
    board: &CardsInPlay,
) -> bool {
    RoyalPosition::ALL
        .into_iter()
        .filter(|&other| other != slot)
        .filter(|&other| board.armor_for(other).is_none())
        .filter_map(|other| board.living_royal(other))
        .any(|other| {
            if other.numeric() != royal.numeric() {
                return other.numeric() < royal.numeric();
            }
            (other.suit == armor_card.suit && royal.suit != armor_card.suit)
                || (other.color == armor_card.color && royal.color != armor_card.color)
        })
}

/// Where a numbered card that cannot go on the grid becomes armor.
///
/// Candidates are living royals with an empty armor slot whose health would
/// stay at or below [`MAX_ARMORED_HEALTH`]. Armor goes to the lowest royal
/// first; among equal royals, a suit match wins over a color match. If the
/// remaining royals are indistinguishable, all of them are returned for the
/// player to choose. An empty result means the card cannot be armor.
#[must_use]
pub fn get_armor_placement_position(armor_card: &Card, board: &CardsInPlay) -> ArmorChoices {
    let eligible: SmallVec<[(RoyalPosition, Card); 12]> = RoyalPosition::ALL
        .into_iter()
        .filter(|&slot| board.armor_slot_empty(slot.armor()))
        .filter_map(|slot| board.living_royal(slot).map(|royal| (slot, *royal)))
        .filter(|(_, royal)| royal.numeric() + armor_card.numeric() <= MAX_ARMORED_HEALTH)
        .filter(|(slot, royal)| !outranked_for_armor(*slot, royal, armor_card, board))
        .collect();

    if eligible.len() <= 1 {
        return eligible.iter().map(|(slot, _)| slot.armor()).collect();
    }

    if let Some((slot, _)) = eligible.iter().find(|(_, royal)| royal.suit == armor_card.suit) {
        return smallvec::smallvec![slot.armor()];
    }
    if let Some((slot, _)) = eligible.iter().find(|(_, royal)| royal.color == armor_card.color) {
        return smallvec::smallvec![slot.armor()];
    }

    eligible.iter().map(|(slot, _)| slot.armor()).collect()
}
