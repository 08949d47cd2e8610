//! Question bank model and startup validation.

use serde::{Deserialize, Serialize};

use crate::constants::CHOICES_PER_QUESTION;

/// A single authored question, before any per-session shuffling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTemplate {
    pub text: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
    #[serde(default)]
    pub explanation: String,
}

/// Container for the fixed, ordered question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuestionBank {
    pub questions: Vec<QuestionTemplate>,
}

/// Validation failures for a malformed bank. These are construction-time
/// precondition violations, not runtime errors: a session must never be
/// started from a bank that fails [`QuestionBank::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,
    #[error("question {index} has {found} choices, expected {CHOICES_PER_QUESTION}")]
    ChoiceCount { index: usize, found: usize },
    #[error("question {index} marks correct choice {correct_index}, outside 0..{choices}")]
    CorrectIndexOutOfRange {
        index: usize,
        correct_index: usize,
        choices: usize,
    },
}

impl QuestionBank {
    /// Create an empty bank (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            questions: Vec::new(),
        }
    }

    /// Load a bank from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid question data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build a bank from pre-parsed questions
    #[must_use]
    pub fn from_questions(questions: Vec<QuestionTemplate>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Check the bank against the authoring invariants: at least one
    /// question, exactly four choices each, and an in-range answer key.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in bank order.
    pub fn validate(&self) -> Result<(), BankError> {
        if self.questions.is_empty() {
            return Err(BankError::Empty);
        }
        for (index, question) in self.questions.iter().enumerate() {
            if question.choices.len() != CHOICES_PER_QUESTION {
                return Err(BankError::ChoiceCount {
                    index,
                    found: question.choices.len(),
                });
            }
            if question.correct_index >= question.choices.len() {
                return Err(BankError::CorrectIndexOutOfRange {
                    index,
                    correct_index: question.correct_index,
                    choices: question.choices.len(),
                });
            }
        }
        Ok(())
    }
}
