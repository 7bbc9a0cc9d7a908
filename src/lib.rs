//! # kill-the-royals
//!
//! Rule engine for "Kill the Royals", a single-player solitaire played
//! on a 3×3 grid of numbered stacks surrounded by twelve royal slots.
//!
//! ## Design Principles
//!
//! 1. **Pure Actions**: Every action takes the current `GameState` and
//!    returns a new one. Illegal actions return the input unchanged; they
//!    are never errors.
//!
//! 2. **Typed Positions**: Each slot family is its own enum. The attack
//!    table, royal/armor pairing and adjacency table are exhaustive
//!    matches, so a missing entry does not compile.
//!
//! 3. **Deterministic**: A seeded `GameRng` drives every shuffle. The
//!    same seed and the same actions always produce the same game.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Deck, stacks, board and undo history
//!   are `im` structures, so snapshots are O(1) and an action only copies
//!   what it touches.
//!
//! - **Derived State**: After each accepted action the engine cycles the
//!   deck for a royal if none is in play, recomputes the legal targets for
//!   the next card and settles win/loss.
//!
//! ## Modules
//!
//! - `core`: Cards, deck, RNG, configuration, errors, actions
//! - `board`: Slot positions, geometry tables, the board and the opening deal
//! - `rules`: Placement, kill resolution, win/loss and score
//! - `game`: `GameState`, the action surface and undo
//! - `scores`: High score records for hosts to persist
//!
//! ## Example
//!
//! ```
//! use kill_the_royals::{EngineConfig, GameState, GameStatus};
//!
//! let game = GameState::new(&EngineConfig::default().with_seed(7));
//! assert_eq!(game.status(), GameStatus::Setup);
//!
//! let game = game.complete_setup(false, None);
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert_eq!(game.total_cards(), 54);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod scores;

// Re-export commonly used types
pub use crate::core::{
    Card, CardColor, CardValue, Suit,
    Deck, DECK_SIZE,
    GameRng, GameRngState,
    EngineConfig,
    EngineError, EngineResult,
    Action, ActionRecord,
};

pub use crate::board::{
    AcePosition, ArmorPosition, BoardPosition, GridPosition, JokerPosition, RoyalPosition,
    CardStack, CardsInPlay, BOARD_SLOTS,
};

pub use crate::game::{GameState, GameStatus, History, Interaction, LegalTargets};

pub use crate::scores::{HighScoreEntry, ScoreBook};
