//! The game: state, actions, undo and derived targets.
//!
//! `GameState` is the only stateful type in the crate. Hosts hold one,
//! call an action on it and replace it with the result.

pub mod interaction;
pub mod targets;
pub mod history;
pub mod state;
pub mod actions;

pub use interaction::Interaction;
pub use targets::LegalTargets;
pub use history::History;
pub use state::{GameState, GameStatus};
