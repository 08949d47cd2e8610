//! High-score persistence seam.
//!
//! The core never touches durable storage directly; hosts implement
//! [`ScoreStorage`] (browser `localStorage`, an in-memory fake, ...) and the
//! compare-and-write policy lives here so every host agrees on it.

use std::cell::RefCell;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

/// Trait for abstracting the durable high-score store.
/// Platform-specific implementations should provide this.
pub trait ScoreStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the stored best-ever score, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn load_high_score(&self) -> Result<Option<u32>, Self::Error>;

    /// Persist a new best-ever score.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be written.
    fn save_high_score(&self, score: u32) -> Result<(), Self::Error>;
}

/// Outcome of the end-of-session compare-and-write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreUpdate {
    /// Value stored before this session, if any.
    pub previous: Option<u32>,
    /// Best score on record after the update.
    pub best: u32,
    /// Whether this session's score was written as a new record.
    pub is_new_record: bool,
}

/// Compare a finished session's score against the stored best and write it
/// back only when strictly greater. A missing stored value counts as zero,
/// so a first session scoring zero sets no record.
///
/// # Errors
///
/// Propagates storage read/write failures; callers decide whether those are
/// fatal (the web layer logs and plays on).
pub fn record_high_score<S: ScoreStorage>(
    store: &S,
    score: u32,
) -> Result<HighScoreUpdate, S::Error> {
    let previous = store.load_high_score()?;
    let baseline = previous.unwrap_or(0);
    let is_new_record = score > baseline;
    if is_new_record {
        store.save_high_score(score)?;
    }
    Ok(HighScoreUpdate {
        previous,
        best: if is_new_record { score } else { baseline },
        is_new_record,
    })
}

/// In-memory store (useful for tests and headless runs)
#[derive(Debug, Default)]
pub struct MemoryScores {
    best: RefCell<Option<u32>>,
}

impl MemoryScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing best score.
    #[must_use]
    pub fn with_best(best: u32) -> Self {
        Self {
            best: RefCell::new(Some(best)),
        }
    }
}

impl ScoreStorage for MemoryScores {
    type Error = Infallible;

    fn load_high_score(&self) -> Result<Option<u32>, Self::Error> {
        Ok(*self.best.borrow())
    }

    fn save_high_score(&self, score: u32) -> Result<(), Self::Error> {
        *self.best.borrow_mut() = Some(score);
        Ok(())
    }
}
