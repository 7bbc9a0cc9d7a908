//! Game state.
//!
//! ## GameState
//!
//! Everything needed to continue a game:
//! - Deck and board
//! - Pending interaction (armed ace or joker)
//! - Setup flags and status
//! - Derived legal targets
//! - RNG position, undo history and the log of accepted actions
//!
//! Every action takes `&self` and returns a new `GameState`. All containers
//! are `im` persistent structures, so the returned state shares whatever
//! the action did not touch and cloning is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::history::History;
use super::interaction::Interaction;
use super::targets::LegalTargets;
use crate::board::{setup_first_nine_cards, CardsInPlay, GridPosition, SetupDeal};
use crate::core::action::{Action, ActionRecord};
use crate::core::card::Card;
use crate::core::config::EngineConfig;
use crate::core::deck::{create_shuffled_deck, cycle_deck_for_royal, Deck};
use crate::core::error::EngineResult;
use crate::core::rng::{GameRng, GameRngState};
use crate::rules::{
    can_place_numbered_card, check_game_lost, check_game_won, count_living_royals,
};

/// Where the game is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    /// Grid dealt; the player may replace one card before starting.
    Setup,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or lost.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GameStatus::Setup => "setup",
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        })
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Cards ===
    pub(super) deck: Deck,
    pub(super) cards_in_play: CardsInPlay,

    // === Player input ===
    pub(super) interaction: Interaction,
    pub(super) setup_replace_mode: bool,

    // === Derived ===
    pub(super) legal_targets: LegalTargets,
    pub(super) status: GameStatus,

    // === Bookkeeping ===
    pub(super) rng: GameRngState,
    pub(super) history: History,
    pub(super) actions: Vector<ActionRecord>,
}

impl GameState {
    /// Shuffle and deal a new game.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::deal(&mut rng, config.history_capacity)
    }

    /// Start from an arbitrary deck and board, e.g. a position restored by a
    /// host or built for a puzzle.
    ///
    /// Deck cycling, legal targets and the status check run as they do after
    /// an action, so a `Playing` position with nothing left to do comes back
    /// `Lost`.
    #[must_use]
    pub fn from_parts(
        deck: Deck,
        cards_in_play: CardsInPlay,
        status: GameStatus,
        config: &EngineConfig,
    ) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut state = Self {
            deck,
            cards_in_play,
            interaction: Interaction::Idle,
            setup_replace_mode: false,
            legal_targets: LegalTargets::default(),
            status,
            rng: rng.snapshot(),
            history: History::with_capacity(config.history_capacity),
            actions: Vector::new(),
        };
        state.finalize();
        state
    }

    fn deal(rng: &mut GameRng, history_capacity: usize) -> Self {
        let deck = create_shuffled_deck(rng);
        let SetupDeal {
            cards_in_play,
            remaining_deck,
            royals_found,
            ..
        } = setup_first_nine_cards(&deck);

        let mut state = Self {
            deck: remaining_deck,
            cards_in_play,
            interaction: Interaction::Idle,
            setup_replace_mode: false,
            legal_targets: LegalTargets::default(),
            status: GameStatus::Setup,
            rng: rng.snapshot(),
            history: History::with_capacity(history_capacity),
            actions: Vector::new(),
        };
        state.refresh_targets();

        info!(
            seed = rng.seed(),
            deck = state.deck.len(),
            royals = royals_found.len(),
            "new game dealt"
        );
        state
    }

    /// A fresh deal from the next shuffle in this game's random stream.
    /// Keeps the undo capacity and clears the history.
    #[must_use]
    pub fn restart(&self) -> Self {
        let mut rng = GameRng::resume(&self.rng);
        info!(previous_status = %self.status, "restart");
        Self::deal(&mut rng, self.history.capacity())
    }

    /// Replay a game from its config: deal, then apply `actions` in order.
    ///
    /// Reproduces any game created by [`GameState::new`] with a fixed seed
    /// from its [`GameState::action_log`].
    #[must_use]
    pub fn replay<'a>(config: &EngineConfig, actions: impl IntoIterator<Item = &'a Action>) -> Self {
        actions
            .into_iter()
            .fold(Self::new(config), |state, action| state.apply(action))
    }

    // === Accessors ===

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The card that has to be dealt with next.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.deck.front()
    }

    #[must_use]
    pub fn cards_in_play(&self) -> &CardsInPlay {
        &self.cards_in_play
    }

    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_setup_phase(&self) -> bool {
        self.status == GameStatus::Setup
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn setup_replace_mode(&self) -> bool {
        self.setup_replace_mode
    }

    #[must_use]
    pub fn legal_targets(&self) -> &LegalTargets {
        &self.legal_targets
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Undo is possible.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Accepted actions since the deal, in order. Undo rolls this back too.
    #[must_use]
    pub fn action_log(&self) -> &Vector<ActionRecord> {
        &self.actions
    }

    /// RNG position, for restoring the random stream elsewhere.
    #[must_use]
    pub fn rng_state(&self) -> &GameRngState {
        &self.rng
    }

    #[must_use]
    pub fn living_royals(&self) -> usize {
        count_living_royals(&self.cards_in_play)
    }

    /// Unused aces plus unused jokers once the game is won.
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        (self.status == GameStatus::Won).then(|| crate::rules::score(&self.cards_in_play))
    }

    /// Cards in the deck and on the board, sentinels included.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.cards_in_play.card_count()
    }

    /// Where the chosen joker source card may go.
    #[must_use]
    pub fn joker_move_targets(&self) -> Vec<GridPosition> {
        let Some(source) = self.interaction.joker_source() else {
            return Vec::new();
        };
        let Some(card) = self.cards_in_play.top(source) else {
            return Vec::new();
        };
        GridPosition::ALL
            .into_iter()
            .filter(|&target| target != source)
            .filter(|&target| can_place_numbered_card(card, self.cards_in_play.stack(target)))
            .collect()
    }

    // === Undo ===

    /// Restore the most recent snapshot. No-op when the history is empty.
    #[must_use]
    pub fn undo(&self) -> Self {
        let mut history = self.history.clone();
        let Some(mut previous) = history.pop() else {
            debug!("nothing to undo");
            return self.clone();
        };
        previous.history = history;
        debug!(
            remaining = previous.history.len(),
            status = %previous.status,
            "undo"
        );
        previous
    }

    /// This state as an undo snapshot.
    pub(super) fn snapshot(&self) -> Self {
        let mut snapshot = self.clone();
        snapshot.history = History::with_capacity(self.history.capacity());
        snapshot
    }

    // === Derived state ===

    /// Bring a royal to the top if none is in play, recompute targets and
    /// settle the status. Runs after every accepted action.
    pub(super) fn finalize(&mut self) {
        if self.status == GameStatus::Playing
            && self.cards_in_play.royals_to_be_placed().is_empty()
            && count_living_royals(&self.cards_in_play) == 0
            && !self.deck.is_empty()
        {
            let cycled = cycle_deck_for_royal(&self.deck);
            if cycled != self.deck {
                debug!(top = ?cycled.front(), "deck cycled to next royal");
                self.deck = cycled;
            }
        }

        self.refresh_targets();

        if self.status == GameStatus::Playing {
            if check_game_won(&self.cards_in_play) {
                self.status = GameStatus::Won;
                info!(score = crate::rules::score(&self.cards_in_play), "game won");
            } else if self.cards_in_play.royals_to_be_placed().is_empty()
                && check_game_lost(
                    &self.deck,
                    &self.cards_in_play,
                    self.legal_targets.can_place_top_card_on_grid,
                )
            {
                self.status = GameStatus::Lost;
                info!(deck = self.deck.len(), top = ?self.deck.front(), "game lost");
            }
        }

        if self.status.is_terminal() {
            self.interaction = Interaction::Idle;
            self.refresh_targets();
        }
    }

    fn refresh_targets(&mut self) {
        self.legal_targets = LegalTargets::compute(
            &self.deck,
            &self.cards_in_play,
            self.status,
            self.setup_replace_mode,
        );
    }

    // === Checkpoints ===

    /// Encode this game, history included.
    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a game written by [`GameState::to_bytes`], checking the board
    /// of the state and of every snapshot.
    pub fn from_bytes(bytes: &[u8]) -> EngineResult<Self> {
        let state: GameState = bincode::deserialize(bytes)?;
        state.cards_in_play.validate()?;
        for snapshot in state.history.iter() {
            snapshot.cards_in_play.validate()?;
        }
        Ok(state)
    }
}
