//! The board: one card stack per slot.
//!
//! Stacks are `im::Vector<Card>` with index 0 as the top card. The board
//! itself is an `im::Vector` of stacks indexed by [`BoardPosition::index`],
//! so cloning a board for an undo snapshot is O(1) and an update only
//! copies the path to the changed stack.
//!
//! An empty stack means "no card dealt here". That is distinct from a
//! DEAD or USED sentinel, which occupies the slot.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::position::{
    AcePosition, ArmorPosition, BoardPosition, GridPosition, JokerPosition, RoyalPosition,
    BOARD_SLOTS,
};
use crate::core::card::Card;
use crate::core::error::{EngineError, EngineResult};

/// Ordered cards in one slot. Index 0 is the top.
pub type CardStack = Vector<Card>;

/// All stacks on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardsInPlay {
    stacks: Vector<CardStack>,
}

impl Default for CardsInPlay {
    fn default() -> Self {
        Self::empty()
    }
}

impl CardsInPlay {
    /// Every slot empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            stacks: std::iter::repeat(CardStack::new()).take(BOARD_SLOTS).collect(),
        }
    }

    /// Check the slot count. Boards built in this crate always pass;
    /// this guards boards decoded from outside.
    pub fn validate(&self) -> EngineResult<()> {
        if self.stacks.len() == BOARD_SLOTS {
            Ok(())
        } else {
            Err(EngineError::CorruptBoard {
                expected: BOARD_SLOTS,
                found: self.stacks.len(),
            })
        }
    }

    // === Access ===

    /// The stack in a slot.
    #[must_use]
    pub fn stack(&self, position: impl Into<BoardPosition>) -> &CardStack {
        let position = position.into();
        self.stacks
            .get(position.index())
            .unwrap_or_else(|| panic!("board has no stack for {position}"))
    }

    /// Top card of a slot, `None` if empty.
    #[must_use]
    pub fn top(&self, position: impl Into<BoardPosition>) -> Option<&Card> {
        self.stack(position).front()
    }

    /// Staged royals, first in line at index 0.
    #[must_use]
    pub fn royals_to_be_placed(&self) -> &CardStack {
        self.stack(BoardPosition::RoyalsToBePlaced)
    }

    /// Iterate all stacks with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (BoardPosition, &CardStack)> {
        BoardPosition::all().zip(self.stacks.iter())
    }

    /// Number of cards on the board, sentinels included.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stacks.iter().map(Vector::len).sum()
    }

    // === Updates ===
    //
    // Updates take `&mut self`; callers that need the old board keep a
    // clone, which shares structure with the updated one.

    /// Replace the whole stack of a slot.
    pub fn set_stack(&mut self, position: impl Into<BoardPosition>, stack: CardStack) {
        let position = position.into();
        assert!(
            position.index() < self.stacks.len(),
            "board has no stack for {position}"
        );
        self.stacks.set(position.index(), stack);
    }

    /// Replace a slot's contents with a single card.
    pub fn set_single(&mut self, position: impl Into<BoardPosition>, card: Card) {
        self.set_stack(position, Vector::unit(card));
    }

    /// Put a card on top of a stack.
    pub fn push_top(&mut self, position: impl Into<BoardPosition>, card: Card) {
        let position = position.into();
        let mut stack = self.stack(position).clone();
        stack.push_front(card);
        self.set_stack(position, stack);
    }

    /// Remove and return the top card of a stack.
    pub fn pop_top(&mut self, position: impl Into<BoardPosition>) -> Option<Card> {
        let position = position.into();
        let mut stack = self.stack(position).clone();
        let card = stack.pop_front()?;
        self.set_stack(position, stack);
        Some(card)
    }

    /// Empty a slot, returning what it held.
    pub fn take_stack(&mut self, position: impl Into<BoardPosition>) -> CardStack {
        let position = position.into();
        let stack = self.stack(position).clone();
        self.set_stack(position, CardStack::new());
        stack
    }

    // === Family queries ===

    /// Royal card in a slot if it is alive (present and not DEAD).
    #[must_use]
    pub fn living_royal(&self, position: RoyalPosition) -> Option<&Card> {
        self.top(position).filter(|card| !card.is_dead())
    }

    /// Armor card behind a royal, if any and not DEAD.
    #[must_use]
    pub fn armor_for(&self, royal: RoyalPosition) -> Option<&Card> {
        self.top(royal.armor()).filter(|card| !card.is_dead())
    }

    /// Royal slots that have never received a card.
    pub fn empty_royal_slots(&self) -> impl Iterator<Item = RoyalPosition> + '_ {
        RoyalPosition::ALL
            .into_iter()
            .filter(|&p| self.stack(p).is_empty())
    }

    /// Empty grid slots.
    pub fn empty_grid_slots(&self) -> impl Iterator<Item = GridPosition> + '_ {
        GridPosition::ALL
            .into_iter()
            .filter(|&p| self.stack(p).is_empty())
    }

    /// Empty joker slots.
    pub fn empty_joker_slots(&self) -> impl Iterator<Item = JokerPosition> + '_ {
        JokerPosition::ALL
            .into_iter()
            .filter(|&p| self.stack(p).is_empty())
    }

    /// Empty ace slots.
    pub fn empty_ace_slots(&self) -> impl Iterator<Item = AcePosition> + '_ {
        AcePosition::ALL
            .into_iter()
            .filter(|&p| self.stack(p).is_empty())
    }

    /// Ace slots holding an ace that has not been spent.
    pub fn unused_aces(&self) -> impl Iterator<Item = AcePosition> + '_ {
        AcePosition::ALL
            .into_iter()
            .filter(|&p| self.top(p).is_some_and(|c| !c.is_used()))
    }

    /// Joker slots holding a joker that has not been spent.
    pub fn unused_jokers(&self) -> impl Iterator<Item = JokerPosition> + '_ {
        JokerPosition::ALL
            .into_iter()
            .filter(|&p| self.top(p).is_some_and(|c| !c.is_used()))
    }

    /// Armor slot is free to receive a card.
    #[must_use]
    pub fn armor_slot_empty(&self, armor: ArmorPosition) -> bool {
        self.stack(armor).is_empty()
    }
}
