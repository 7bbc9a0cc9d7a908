//! High score records.
//!
//! The engine only produces a score; storing it is the host's job. This
//! module gives hosts the record format they persist under
//! [`STORAGE_KEY`], with the loading rules (legacy format, sorting,
//! trimming) in one place.

pub mod book;

pub use book::{format_score_date, HighScoreEntry, ScoreBook, SCORE_BOOK_VERSION, STORAGE_KEY};
