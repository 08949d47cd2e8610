//! `localStorage`-backed high-score store.

use potters_game::ScoreStorage;

use crate::dom;

/// Namespaced key for the single persisted value.
const HIGH_SCORE_KEY: &str = "potters.highscore.v1";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("failed to read '{key}'")]
    Read { key: &'static str },
    #[error("failed to write '{key}'")]
    Write { key: &'static str },
}

/// High-score store over the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalScores;

impl LocalScores {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ScoreStorage for LocalScores {
    type Error = StorageError;

    fn load_high_score(&self) -> Result<Option<u32>, Self::Error> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        let value = storage
            .get_item(HIGH_SCORE_KEY)
            .map_err(|_| StorageError::Read {
                key: HIGH_SCORE_KEY,
            })?;
        // Unparseable leftovers are treated as absent rather than fatal.
        Ok(value.and_then(|text| text.parse().ok()))
    }

    fn save_high_score(&self, score: u32) -> Result<(), Self::Error> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(HIGH_SCORE_KEY, &score.to_string())
            .map_err(|_| StorageError::Write {
                key: HIGH_SCORE_KEY,
            })
    }
}
