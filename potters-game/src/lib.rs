//! Potters Quiz engine
//!
//! Platform-agnostic core logic for the Potters Quiz, a multiple-choice
//! trivia game about Stoke City's history. This crate provides the question
//! bank model, the per-session fair shuffle, the session state machine, and
//! the high-score persistence seam without UI or platform-specific
//! dependencies.

pub mod bank;
pub mod constants;
pub mod render;
pub mod score;
pub mod session;
pub mod shuffle;

// Re-export commonly used types
pub use bank::{BankError, QuestionBank, QuestionTemplate};
pub use constants::{CHOICES_PER_QUESTION, COUNTDOWN_SECS};
pub use render::{
    ChoiceMark, ChoiceView, FeedbackView, QuestionView, SummaryView, high_score_line,
    progress_line, score_line, timer_line,
};
pub use score::{HighScoreUpdate, MemoryScores, ScoreStorage, record_high_score};
pub use session::{Feedback, QuizConfig, QuizPhase, QuizSession};
pub use shuffle::{SessionChoice, SessionQuestion, fisher_yates, prepare_questions};
