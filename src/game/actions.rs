//! Action handling.
//!
//! Every action goes through [`GameState::apply`]:
//! 1. Terminal states reject everything but undo.
//! 2. The action's own checks run against the current state. Any failed
//!    check rejects the action and the input state comes back unchanged.
//! 3. On success the new state is finalized (deck cycling, legal targets,
//!    status), the action is logged, and the old state becomes an undo
//!    snapshot if the deck, board or status changed.
//!
//! The named methods (`place_numbered_card`, `use_joker`, ...) are thin
//! wrappers over `apply`.

use tracing::{debug, info};

use super::interaction::Interaction;
use super::state::{GameState, GameStatus};
use crate::board::{
    AcePosition, ArmorPosition, BoardPosition, GridPosition, JokerPosition, RoyalPosition,
};
use crate::core::action::{Action, ActionRecord};
use crate::core::card::Card;
use crate::rules::{
    can_place_card_on_grid, can_place_numbered_card, get_armor_placement_position,
    get_royal_placement_position, kill_royals_from_position,
};

/// Where the royal waiting to be placed comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoyalSource {
    Staging,
    Deck,
}

impl GameState {
    /// Apply an action. Illegal actions return an identical state.
    #[must_use]
    pub fn apply(&self, action: &Action) -> Self {
        if *action == Action::Undo {
            return self.undo();
        }

        match self.step(action) {
            Some(next) => {
                debug!(
                    action = %action,
                    status = %next.status,
                    deck = next.deck.len(),
                    "action accepted"
                );
                next
            }
            None => {
                debug!(action = %action, status = %self.status, "action rejected");
                self.clone()
            }
        }
    }

    fn step(&self, action: &Action) -> Option<Self> {
        if self.status.is_terminal() {
            return None;
        }

        let next = match *action {
            Action::CompleteSetup { replace, position } => {
                self.try_complete_setup(replace, position)?
            }
            Action::EnableReplaceMode => self.try_enable_replace_mode()?,
            Action::PlaceNumberedCard(grid) => self.try_place_numbered_card(grid)?,
            Action::PlaceRoyalCard => self.try_place_royal_card()?,
            Action::SelectRoyalPosition(royal) => self.try_select_royal_position(royal)?,
            Action::PlaceArmorCard => self.try_place_armor_card()?,
            Action::SelectArmorPosition(armor) => self.try_select_armor_position(armor)?,
            Action::SelectJokerPosition(joker) => self.try_select_joker_position(joker)?,
            Action::SelectAcePosition(ace) => self.try_select_ace_position(ace)?,
            Action::ActivateAce(ace) => self.try_activate_ace(ace)?,
            Action::UseAce(grid) => self.try_use_ace(grid)?,
            Action::ActivateJoker(joker) => self.try_activate_joker(joker)?,
            Action::SelectJokerSource(grid) => self.try_select_joker_source(grid)?,
            Action::UseJoker(grid) => self.try_use_joker(grid)?,
            Action::Undo => return None,
        };

        Some(self.commit(action, next))
    }

    fn commit(&self, action: &Action, mut next: Self) -> Self {
        next.finalize();

        let changed = next.deck != self.deck
            || next.cards_in_play != self.cards_in_play
            || next.status != self.status;
        if changed {
            next.history.push(self.snapshot());
        }

        let sequence = u32::try_from(self.actions.len()).unwrap_or(u32::MAX);
        next.actions.push_back(ActionRecord::new(*action, sequence));
        next
    }

    // === Named actions ===

    /// Leave setup, optionally replacing one grid card first.
    #[must_use]
    pub fn complete_setup(&self, replace: bool, position: Option<GridPosition>) -> Self {
        self.apply(&Action::CompleteSetup { replace, position })
    }

    #[must_use]
    pub fn enable_replace_mode(&self) -> Self {
        self.apply(&Action::EnableReplaceMode)
    }

    #[must_use]
    pub fn place_numbered_card(&self, position: GridPosition) -> Self {
        self.apply(&Action::PlaceNumberedCard(position))
    }

    #[must_use]
    pub fn place_royal_card(&self) -> Self {
        self.apply(&Action::PlaceRoyalCard)
    }

    #[must_use]
    pub fn select_royal_position(&self, position: RoyalPosition) -> Self {
        self.apply(&Action::SelectRoyalPosition(position))
    }

    #[must_use]
    pub fn place_armor_card(&self) -> Self {
        self.apply(&Action::PlaceArmorCard)
    }

    #[must_use]
    pub fn select_armor_position(&self, position: ArmorPosition) -> Self {
        self.apply(&Action::SelectArmorPosition(position))
    }

    #[must_use]
    pub fn select_joker_position(&self, position: JokerPosition) -> Self {
        self.apply(&Action::SelectJokerPosition(position))
    }

    #[must_use]
    pub fn select_ace_position(&self, position: AcePosition) -> Self {
        self.apply(&Action::SelectAcePosition(position))
    }

    #[must_use]
    pub fn activate_ace(&self, position: AcePosition) -> Self {
        self.apply(&Action::ActivateAce(position))
    }

    #[must_use]
    pub fn use_ace(&self, stack: GridPosition) -> Self {
        self.apply(&Action::UseAce(stack))
    }

    #[must_use]
    pub fn activate_joker(&self, position: JokerPosition) -> Self {
        self.apply(&Action::ActivateJoker(position))
    }

    #[must_use]
    pub fn select_joker_source(&self, position: GridPosition) -> Self {
        self.apply(&Action::SelectJokerSource(position))
    }

    #[must_use]
    pub fn use_joker(&self, target: GridPosition) -> Self {
        self.apply(&Action::UseJoker(target))
    }

    // === Legal actions ===

    /// Every action [`GameState::apply`] would currently accept.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.can_undo() {
            actions.push(Action::Undo);
        }

        let targets = &self.legal_targets;
        match self.status {
            GameStatus::Won | GameStatus::Lost => return actions,
            GameStatus::Setup => {
                actions.push(Action::START);
                if self.setup_replace_mode {
                    actions.extend(targets.grid.iter().map(|&g| Action::replace_at(g)));
                } else {
                    actions.push(Action::EnableReplaceMode);
                }
            }
            GameStatus::Playing => {
                actions.extend(targets.grid.iter().map(|&g| Action::PlaceNumberedCard(g)));
                actions.extend(targets.armor.iter().map(|&a| Action::SelectArmorPosition(a)));
                if targets.armor.len() == 1 {
                    actions.push(Action::PlaceArmorCard);
                }
                actions.extend(targets.joker.iter().map(|&j| Action::SelectJokerPosition(j)));
                actions.extend(targets.ace.iter().map(|&a| Action::SelectAcePosition(a)));

                let board = &self.cards_in_play;
                let occupied_grid = || {
                    GridPosition::ALL
                        .into_iter()
                        .filter(move |&g| board.top(g).is_some())
                };

                actions.extend(board.unused_aces().map(Action::ActivateAce));
                if self.interaction.armed_ace().is_some() {
                    actions.extend(occupied_grid().map(Action::UseAce));
                }

                actions.extend(board.unused_jokers().map(Action::ActivateJoker));
                if self.interaction.armed_joker().is_some() {
                    actions.extend(occupied_grid().map(Action::SelectJokerSource));
                    actions.extend(self.joker_move_targets().into_iter().map(Action::UseJoker));
                }
            }
        }

        actions.extend(targets.royal.iter().map(|&r| Action::SelectRoyalPosition(r)));
        if targets.royal.len() == 1 {
            actions.push(Action::PlaceRoyalCard);
        }
        actions
    }

    // === Setup ===

    fn try_enable_replace_mode(&self) -> Option<Self> {
        if self.status != GameStatus::Setup || self.setup_replace_mode {
            return None;
        }
        let mut next = self.clone();
        next.setup_replace_mode = true;
        Some(next)
    }

    /// Without replacement, start play. With replacement, the chosen grid
    /// card goes under the deck and the next numbered card takes its place;
    /// the bottom card is held aside meanwhile so it stays at the bottom.
    fn try_complete_setup(&self, replace: bool, position: Option<GridPosition>) -> Option<Self> {
        if self.status != GameStatus::Setup {
            return None;
        }

        let mut next = self.clone();
        next.status = GameStatus::Playing;
        next.setup_replace_mode = false;

        let Some(position) = position.filter(|_| replace) else {
            info!(deck = next.deck.len(), "setup complete");
            return Some(next);
        };
        if !self.setup_replace_mode {
            return None;
        }
        let replaced = *self.cards_in_play.top(position)?;

        let set_aside = next.deck.pop_back();
        next.deck.push_back(replaced);
        for _ in 0..next.deck.len() {
            if next.deck.front().is_some_and(Card::is_numbered) {
                break;
            }
            let card = next.deck.pop_front()?;
            next.deck.push_back(card);
        }
        let drawn = next.deck.pop_front()?;
        next.deck.extend(set_aside);
        next.cards_in_play.set_single(position, drawn);

        info!(
            position = %position,
            replaced = %replaced,
            drawn = %drawn,
            "setup complete with replacement"
        );
        Some(next)
    }

    // === Drawn cards ===

    fn top_numbered(&self) -> Option<Card> {
        if self.status != GameStatus::Playing || !self.cards_in_play.royals_to_be_placed().is_empty()
        {
            return None;
        }
        self.deck.front().copied().filter(Card::is_numbered)
    }

    fn try_place_numbered_card(&self, position: GridPosition) -> Option<Self> {
        let card = self.top_numbered()?;
        if !can_place_numbered_card(&card, self.cards_in_play.stack(position)) {
            return None;
        }

        let mut next = self.clone();
        next.deck.pop_front();
        next.cards_in_play.push_top(position, card);
        next.cards_in_play = kill_royals_from_position(position, &next.cards_in_play);
        Some(next)
    }

    /// The royal awaiting placement. Staged royals come first; a royal on
    /// the deck only counts once play has started.
    fn pending_royal(&self) -> Option<(Card, RoyalSource)> {
        if let Some(royal) = self.cards_in_play.royals_to_be_placed().front() {
            return Some((*royal, RoyalSource::Staging));
        }
        if self.status != GameStatus::Playing {
            return None;
        }
        self.deck
            .front()
            .filter(|card| card.is_royal())
            .map(|card| (*card, RoyalSource::Deck))
    }

    fn place_royal_at(&self, royal: Card, source: RoyalSource, slot: RoyalPosition) -> Self {
        let mut next = self.clone();
        match source {
            RoyalSource::Staging => {
                next.cards_in_play.pop_top(BoardPosition::RoyalsToBePlaced);
            }
            RoyalSource::Deck => {
                next.deck.pop_front();
            }
        }
        next.cards_in_play.set_single(slot, royal);
        debug!(royal = %royal, slot = %slot, "royal placed");
        next
    }

    fn try_place_royal_card(&self) -> Option<Self> {
        let (royal, source) = self.pending_royal()?;
        match get_royal_placement_position(&royal, &self.cards_in_play).as_slice() {
            [slot] => Some(self.place_royal_at(royal, source, *slot)),
            _ => None,
        }
    }

    fn try_select_royal_position(&self, slot: RoyalPosition) -> Option<Self> {
        let (royal, source) = self.pending_royal()?;
        if !get_royal_placement_position(&royal, &self.cards_in_play).contains(&slot) {
            return None;
        }
        Some(self.place_royal_at(royal, source, slot))
    }

    /// Top card if it must become armor: numbered and fits nowhere on the grid.
    fn pending_armor(&self) -> Option<Card> {
        self.top_numbered()
            .filter(|card| !can_place_card_on_grid(card, &self.cards_in_play))
    }

    fn place_armor_at(&self, card: Card, slot: ArmorPosition) -> Self {
        let mut next = self.clone();
        next.deck.pop_front();
        next.cards_in_play.set_single(slot, card);
        debug!(armor = %card, slot = %slot, "armor placed");
        next
    }

    fn try_place_armor_card(&self) -> Option<Self> {
        let card = self.pending_armor()?;
        match get_armor_placement_position(&card, &self.cards_in_play).as_slice() {
            [slot] => Some(self.place_armor_at(card, *slot)),
            _ => None,
        }
    }

    fn try_select_armor_position(&self, slot: ArmorPosition) -> Option<Self> {
        let card = self.pending_armor()?;
        if !get_armor_placement_position(&card, &self.cards_in_play).contains(&slot) {
            return None;
        }
        Some(self.place_armor_at(card, slot))
    }

    /// Move the top card into an empty special slot if `is_kind` accepts it.
    fn place_special(&self, slot: BoardPosition, is_kind: fn(&Card) -> bool) -> Option<Self> {
        if self.status != GameStatus::Playing
            || !self.cards_in_play.royals_to_be_placed().is_empty()
            || !self.cards_in_play.stack(slot).is_empty()
        {
            return None;
        }
        let card = self.deck.front().copied().filter(is_kind)?;

        let mut next = self.clone();
        next.deck.pop_front();
        next.cards_in_play.set_single(slot, card);
        Some(next)
    }

    fn try_select_joker_position(&self, slot: JokerPosition) -> Option<Self> {
        self.place_special(slot.into(), Card::is_joker)
    }

    fn try_select_ace_position(&self, slot: AcePosition) -> Option<Self> {
        self.place_special(slot.into(), Card::is_ace)
    }

    // === Aces ===

    fn try_activate_ace(&self, ace: AcePosition) -> Option<Self> {
        if self.status != GameStatus::Playing
            || !self.cards_in_play.top(ace).is_some_and(Card::is_ace)
        {
            return None;
        }

        let mut next = self.clone();
        next.interaction = if self.interaction.armed_ace() == Some(ace) {
            Interaction::Idle
        } else {
            Interaction::AceArmed(ace)
        };
        Some(next)
    }

    /// Send a whole grid stack, top card first, to the bottom of the deck.
    fn try_use_ace(&self, stack: GridPosition) -> Option<Self> {
        let ace = self.interaction.armed_ace()?;
        if self.cards_in_play.stack(stack).is_empty() {
            return None;
        }

        let mut next = self.clone();
        let cards = next.cards_in_play.take_stack(stack);
        debug!(ace = %ace, stack = %stack, cards = cards.len(), "ace used");
        next.deck.append(cards);
        next.cards_in_play.set_single(ace, Card::used());
        next.interaction = Interaction::Idle;
        Some(next)
    }

    // === Jokers ===

    fn try_activate_joker(&self, joker: JokerPosition) -> Option<Self> {
        if self.status != GameStatus::Playing
            || !self.cards_in_play.top(joker).is_some_and(Card::is_joker)
        {
            return None;
        }

        let mut next = self.clone();
        next.interaction = if self.interaction.armed_joker() == Some(joker) {
            Interaction::Idle
        } else {
            Interaction::JokerArmed(joker)
        };
        Some(next)
    }

    fn try_select_joker_source(&self, source: GridPosition) -> Option<Self> {
        let joker = self.interaction.armed_joker()?;

        let mut next = self.clone();
        if self.interaction.joker_source() == Some(source) {
            next.interaction = Interaction::JokerArmed(joker);
        } else {
            self.cards_in_play.top(source)?;
            next.interaction = Interaction::JokerSourceChosen { joker, source };
        }
        Some(next)
    }

    fn try_use_joker(&self, target: GridPosition) -> Option<Self> {
        let Interaction::JokerSourceChosen { joker, source } = self.interaction else {
            return None;
        };
        if target == source {
            return None;
        }
        let card = *self.cards_in_play.top(source)?;
        if !can_place_numbered_card(&card, self.cards_in_play.stack(target)) {
            return None;
        }

        let mut next = self.clone();
        next.cards_in_play.pop_top(source);
        next.cards_in_play.push_top(target, card);
        next.cards_in_play.set_single(joker, Card::used());
        next.cards_in_play = kill_royals_from_position(target, &next.cards_in_play);
        next.interaction = Interaction::Idle;
        debug!(joker = %joker, card = %card, from = %source, to = %target, "joker used");
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CardsInPlay;
    use crate::core::card::{CardColor, CardValue, Suit};
    use crate::core::config::EngineConfig;
    use crate::core::deck::Deck;

    fn config() -> EngineConfig {
        EngineConfig::default().with_seed(42)
    }

    fn deck_of(cards: &[Card]) -> Deck {
        cards.iter().copied().collect()
    }

    /// A playing position with a living royal far from the action so no
    /// deck cycling kicks in.
    fn playing(deck: &[Card], build: impl FnOnce(&mut CardsInPlay)) -> GameState {
        let mut board = CardsInPlay::empty();
        board.set_single(RoyalPosition::UpperMiddle, Card::new(CardValue::King, Suit::Clubs));
        build(&mut board);
        GameState::from_parts(deck_of(deck), board, GameStatus::Playing, &config())
    }

    #[test]
    fn test_place_numbered_card_and_undo() {
        let state = playing(
            &[Card::numbered(5, Suit::Hearts), Card::numbered(2, Suit::Hearts)],
            |_| {},
        );

        let next = state.place_numbered_card(GridPosition::MiddleMiddle);
        assert_eq!(next.cards_in_play().top(GridPosition::MiddleMiddle), Some(&Card::numbered(5, Suit::Hearts)));
        assert_eq!(next.deck().len(), 1);
        assert!(next.can_undo());
        assert_eq!(next.action_log().len(), 1);

        assert_eq!(next.undo(), state);
    }

    #[test]
    fn test_illegal_placement_is_noop() {
        let state = playing(&[Card::numbered(3, Suit::Hearts)], |board| {
            board.set_single(GridPosition::UpperLeft, Card::numbered(4, Suit::Spades));
        });
        assert_eq!(state.place_numbered_card(GridPosition::UpperLeft), state);
        assert_eq!(state.use_ace(GridPosition::UpperLeft), state);
        assert_eq!(state.select_royal_position(RoyalPosition::LeftUpper), state);
    }

    #[test]
    fn test_ace_toggle_is_not_recorded() {
        let state = playing(&[Card::numbered(3, Suit::Hearts)], |board| {
            board.set_single(AcePosition::Ace1, Card::new(CardValue::Ace, Suit::Clubs));
        });

        let armed = state.activate_ace(AcePosition::Ace1);
        assert_eq!(armed.interaction(), Interaction::AceArmed(AcePosition::Ace1));
        assert!(!armed.can_undo());

        let disarmed = armed.activate_ace(AcePosition::Ace1);
        assert!(disarmed.interaction().is_idle());
    }

    #[test]
    fn test_use_ace_sends_stack_to_deck_bottom() {
        let state = playing(&[Card::numbered(3, Suit::Hearts)], |board| {
            board.set_single(AcePosition::Ace2, Card::new(CardValue::Ace, Suit::Clubs));
            board.push_top(GridPosition::BottomLeft, Card::numbered(4, Suit::Spades));
            board.push_top(GridPosition::BottomLeft, Card::numbered(9, Suit::Spades));
        });

        let next = state
            .activate_ace(AcePosition::Ace2)
            .use_ace(GridPosition::BottomLeft);

        assert!(next.cards_in_play().stack(GridPosition::BottomLeft).is_empty());
        assert!(next.cards_in_play().top(AcePosition::Ace2).is_some_and(Card::is_used));
        assert_eq!(
            next.deck(),
            &deck_of(&[
                Card::numbered(3, Suit::Hearts),
                Card::numbered(9, Suit::Spades),
                Card::numbered(4, Suit::Spades),
            ])
        );
        assert!(next.interaction().is_idle());
        assert_eq!(next.total_cards(), state.total_cards());
    }

    #[test]
    fn test_joker_move_kills_and_spends_joker() {
        // Jack on the right of the top row; upper left fires at it through
        // upper middle and upper right.
        let state = playing(&[Card::numbered(2, Suit::Hearts)], |board| {
            board.set_single(JokerPosition::Joker1, Card::joker(CardColor::Red));
            board.set_single(RoyalPosition::RightUpper, Card::new(CardValue::Jack, Suit::Hearts));
            board.set_single(GridPosition::UpperMiddle, Card::numbered(5, Suit::Clubs));
            board.set_single(GridPosition::UpperRight, Card::numbered(6, Suit::Clubs));
            board.set_single(GridPosition::MiddleMiddle, Card::numbered(7, Suit::Clubs));
        });

        let chosen = state
            .activate_joker(JokerPosition::Joker1)
            .select_joker_source(GridPosition::MiddleMiddle);
        assert_eq!(
            chosen.interaction(),
            Interaction::JokerSourceChosen {
                joker: JokerPosition::Joker1,
                source: GridPosition::MiddleMiddle,
            }
        );
        assert!(chosen.joker_move_targets().contains(&GridPosition::UpperLeft));

        let next = chosen.use_joker(GridPosition::UpperLeft);
        assert_eq!(next.cards_in_play().top(GridPosition::UpperLeft), Some(&Card::numbered(7, Suit::Clubs)));
        assert!(next.cards_in_play().stack(GridPosition::MiddleMiddle).is_empty());
        assert!(next.cards_in_play().top(JokerPosition::Joker1).is_some_and(Card::is_used));
        assert!(next.cards_in_play().top(RoyalPosition::RightUpper).is_some_and(Card::is_dead));
        assert!(next.interaction().is_idle());
    }

    #[test]
    fn test_joker_source_deselect_and_same_target() {
        let state = playing(&[Card::numbered(2, Suit::Hearts)], |board| {
            board.set_single(JokerPosition::Joker2, Card::joker(CardColor::Black));
            board.set_single(GridPosition::MiddleMiddle, Card::numbered(7, Suit::Clubs));
        });

        let chosen = state
            .activate_joker(JokerPosition::Joker2)
            .select_joker_source(GridPosition::MiddleMiddle);
        assert_eq!(chosen.use_joker(GridPosition::MiddleMiddle), chosen);

        let deselected = chosen.select_joker_source(GridPosition::MiddleMiddle);
        assert_eq!(deselected.interaction(), Interaction::JokerArmed(JokerPosition::Joker2));

        // Empty stacks cannot be a source.
        assert_eq!(deselected.select_joker_source(GridPosition::UpperLeft), deselected);
    }

    #[test]
    fn test_armor_only_when_grid_is_blocked() {
        let state = playing(&[Card::numbered(4, Suit::Clubs)], |board| {
            for grid in GridPosition::ALL {
                board.set_single(grid, Card::numbered(9, Suit::Hearts));
            }
        });
        let next = state.place_armor_card();
        assert_eq!(next.cards_in_play().top(ArmorPosition::UpperMiddle), Some(&Card::numbered(4, Suit::Clubs)));
        assert!(next.deck().is_empty());

        let open = playing(&[Card::numbered(4, Suit::Clubs)], |_| {});
        assert_eq!(open.place_armor_card(), open);
    }

    #[test]
    fn test_drawn_specials_go_to_empty_slots() {
        let state = playing(
            &[Card::joker(CardColor::Red), Card::new(CardValue::Ace, Suit::Hearts)],
            |board| {
                board.set_single(JokerPosition::Joker1, Card::used());
            },
        );

        assert_eq!(state.select_joker_position(JokerPosition::Joker1), state);
        assert_eq!(state.select_ace_position(AcePosition::Ace1), state);

        let next = state.select_joker_position(JokerPosition::Joker2);
        assert!(next.cards_in_play().top(JokerPosition::Joker2).is_some_and(Card::is_joker));

        let next = next.select_ace_position(AcePosition::Ace3);
        assert!(next.cards_in_play().top(AcePosition::Ace3).is_some_and(Card::is_ace));
        assert!(next.deck().is_empty());
    }

    #[test]
    fn test_deck_royal_is_placed_when_unique() {
        let state = playing(&[Card::new(CardValue::Queen, Suit::Spades)], |board| {
            for royal in RoyalPosition::ALL {
                if royal != RoyalPosition::LeftMiddle && royal != RoyalPosition::UpperMiddle {
                    board.set_single(royal, Card::dead());
                }
            }
        });

        let next = state.place_royal_card();
        assert_eq!(
            next.cards_in_play().top(RoyalPosition::LeftMiddle),
            Some(&Card::new(CardValue::Queen, Suit::Spades))
        );
        assert!(next.deck().is_empty());
    }

    #[test]
    fn test_terminal_state_rejects_actions() {
        let lost = GameState::from_parts(
            Deck::new(),
            CardsInPlay::empty(),
            GameStatus::Playing,
            &config(),
        );
        assert_eq!(lost.status(), GameStatus::Lost);
        assert!(lost.legal_actions().is_empty());
        assert_eq!(lost.complete_setup(false, None), lost);
    }

    #[test]
    fn test_legal_actions_are_accepted() {
        let mut state = GameState::new(&config());
        for _ in 0..40 {
            let actions = state.legal_actions();
            let Some(action) = actions.iter().find(|a| **a != Action::Undo) else {
                break;
            };
            let next = state.apply(action);
            assert_ne!(next, state, "{action} was listed but rejected");
            state = next;
        }
    }
}
