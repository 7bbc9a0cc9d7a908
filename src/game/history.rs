//! Bounded undo history.
//!
//! Snapshots are whole `GameState`s stored with an empty history of their
//! own. Since every container in a state is an `im` structure, a snapshot
//! costs O(1) and shares nearly everything with its neighbours.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Undo stack with oldest-first eviction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vector<GameState>,
    capacity: usize,
}

impl History {
    /// Empty history keeping at most `capacity` snapshots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: Vector::new(),
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Record a snapshot, evicting the oldest beyond capacity.
    pub fn push(&mut self, snapshot: GameState) {
        if self.capacity == 0 {
            return;
        }
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<GameState> {
        self.snapshots.pop_back()
    }

    /// Snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GameState> {
        self.snapshots.iter()
    }
}
