//! The quiz session state machine.
//!
//! One [`QuizSession`] covers a single playthrough: every question in the
//! bank exactly once, `Intro -> AwaitingSelection -> AnswerRevealed` looping
//! until the last reveal advances to `Finished`. All mutation goes through
//! the transition methods; illegal or stale events are silent no-ops so a
//! late click, repeated submit, or leftover timer tick can never corrupt a
//! session.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::constants::COUNTDOWN_SECS;
use crate::shuffle::{SessionQuestion, prepare_questions};

/// Lifecycle phase of a playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    #[default]
    Intro,
    AwaitingSelection,
    AnswerRevealed,
    Finished,
}

/// Player-facing configuration captured at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuizConfig {
    #[serde(default)]
    pub timer_enabled: bool,
}

/// Reveal payload produced by [`QuizSession::submit`] or
/// [`QuizSession::timeout`], consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Correct {
        explanation: String,
    },
    Incorrect {
        correct_text: String,
        explanation: String,
    },
    /// Countdown expired with no selection made.
    TimeExpired,
}

impl Feedback {
    /// Player-facing feedback line.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Correct { explanation } => {
                format!("Correct! {explanation}").trim_end().to_string()
            }
            Self::Incorrect {
                correct_text,
                explanation,
            } => format!("Incorrect. Correct answer: \"{correct_text}\". {explanation}")
                .trim_end()
                .to_string(),
            Self::TimeExpired => "Time's up!".to_string(),
        }
    }

    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

/// Mutable state for one playthrough. Owned exclusively by the host driving
/// the transitions; there is no ambient state anywhere else in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    questions: Vec<SessionQuestion>,
    current_index: usize,
    score: u32,
    selected_choice: Option<usize>,
    phase: QuizPhase,
    /// Remaining whole seconds on the armed countdown; `None` means
    /// disarmed. At most one countdown is armed at any time, and every
    /// transition out of `AwaitingSelection` disarms it before returning.
    countdown: Option<u32>,
    feedback: Option<Feedback>,
    config: QuizConfig,
    seed: u64,
}

impl QuizSession {
    /// Start a fresh session: deal the bank through the randomizer with an
    /// RNG seeded from `seed`, zero the tallies, and arm the countdown when
    /// configured. The bank is expected to pass
    /// [`QuestionBank::validate`](crate::bank::QuestionBank::validate); a
    /// session dealt from an empty bank begins already `Finished`.
    #[must_use]
    pub fn start(bank: &QuestionBank, config: QuizConfig, seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let questions = prepare_questions(bank, &mut rng);
        let phase = if questions.is_empty() {
            QuizPhase::Finished
        } else {
            QuizPhase::AwaitingSelection
        };
        let countdown = (phase == QuizPhase::AwaitingSelection && config.timer_enabled)
            .then_some(COUNTDOWN_SECS);
        Self {
            questions,
            current_index: 0,
            score: 0,
            selected_choice: None,
            phase,
            countdown,
            feedback: None,
            config,
            seed,
        }
    }

    /// Abandon this session and start over with the same bank and config.
    #[must_use]
    pub fn restart(&self, bank: &QuestionBank, seed: u64) -> Self {
        Self::start(bank, self.config, seed)
    }

    /// Record a selection. Only valid while awaiting one; an out-of-range
    /// index is ignored. The countdown keeps running.
    pub fn select(&mut self, choice: usize) {
        if self.phase != QuizPhase::AwaitingSelection {
            return;
        }
        if self
            .current_question()
            .is_some_and(|question| choice < question.choice_count())
        {
            self.selected_choice = Some(choice);
        }
    }

    /// Resolve the current selection: score it, disarm the countdown, and
    /// reveal the answer. A no-op without a selection or once revealed.
    pub fn submit(&mut self) {
        if self.phase != QuizPhase::AwaitingSelection || self.selected_choice.is_none() {
            return;
        }
        self.countdown = None;
        self.resolve_submission();
    }

    /// Countdown expiry. With a selection pending this behaves exactly as
    /// [`submit`](Self::submit); without one the question resolves as
    /// unanswered-incorrect and the correct choice is still revealed.
    pub fn timeout(&mut self) {
        if self.phase != QuizPhase::AwaitingSelection {
            return;
        }
        self.countdown = None;
        if self.selected_choice.is_some() {
            self.resolve_submission();
        } else {
            self.feedback = Some(Feedback::TimeExpired);
            self.phase = QuizPhase::AnswerRevealed;
        }
    }

    /// One countdown second elapsed. Ignored unless a countdown is armed,
    /// so a stale tick from a superseded question can never alter state.
    /// Reaching zero fires [`timeout`](Self::timeout) exactly once.
    pub fn tick(&mut self) {
        if self.phase != QuizPhase::AwaitingSelection {
            return;
        }
        let Some(remaining) = self.countdown else {
            return;
        };
        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            self.timeout();
        } else {
            self.countdown = Some(remaining);
        }
    }

    /// Leave the reveal: move to the next question (fresh selection, fresh
    /// countdown) or, from the last question, finish the session.
    pub fn advance(&mut self) {
        if self.phase != QuizPhase::AnswerRevealed {
            return;
        }
        if self.current_index + 1 >= self.questions.len() {
            self.countdown = None;
            self.phase = QuizPhase::Finished;
            return;
        }
        self.current_index += 1;
        self.selected_choice = None;
        self.feedback = None;
        self.countdown = self.config.timer_enabled.then_some(COUNTDOWN_SECS);
        self.phase = QuizPhase::AwaitingSelection;
    }

    fn resolve_submission(&mut self) {
        let Some(chosen) = self.selected_choice else {
            return;
        };
        let Some(question) = self.questions.get(self.current_index) else {
            return;
        };
        let feedback = if question.is_correct(chosen) {
            self.score += 1;
            Feedback::Correct {
                explanation: question.explanation.clone(),
            }
        } else {
            Feedback::Incorrect {
                correct_text: question.correct_text().to_string(),
                explanation: question.explanation.clone(),
            }
        };
        self.feedback = Some(feedback);
        self.phase = QuizPhase::AnswerRevealed;
    }

    #[must_use]
    pub const fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&SessionQuestion> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn selected_choice(&self) -> Option<usize> {
        self.selected_choice
    }

    /// Remaining countdown seconds, `None` when disarmed.
    #[must_use]
    pub const fn countdown(&self) -> Option<u32> {
        self.countdown
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> QuizConfig {
        self.config
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{QuestionBank, QuestionTemplate};

    fn bank(len: usize) -> QuestionBank {
        let questions = (0..len)
            .map(|n| QuestionTemplate {
                text: format!("Question {n}"),
                choices: vec![
                    format!("q{n} right"),
                    format!("q{n} wrong a"),
                    format!("q{n} wrong b"),
                    format!("q{n} wrong c"),
                ],
                correct_index: 0,
                explanation: format!("Because {n}."),
            })
            .collect();
        QuestionBank::from_questions(questions)
    }

    fn timed() -> QuizConfig {
        QuizConfig {
            timer_enabled: true,
        }
    }

    #[test]
    fn start_enters_awaiting_selection_with_clean_tallies() {
        let session = QuizSession::start(&bank(3), QuizConfig::default(), 1);
        assert_eq!(session.phase(), QuizPhase::AwaitingSelection);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected_choice(), None);
        assert_eq!(session.countdown(), None);
    }

    #[test]
    fn start_with_timer_arms_the_countdown() {
        let session = QuizSession::start(&bank(3), timed(), 1);
        assert_eq!(session.countdown(), Some(COUNTDOWN_SECS));
    }

    #[test]
    fn select_ignores_out_of_range_indices() {
        let mut session = QuizSession::start(&bank(2), QuizConfig::default(), 5);
        session.select(4);
        assert_eq!(session.selected_choice(), None);
        session.select(2);
        assert_eq!(session.selected_choice(), Some(2));
    }

    #[test]
    fn submit_without_selection_is_a_no_op() {
        let mut session = QuizSession::start(&bank(2), QuizConfig::default(), 5);
        session.submit();
        assert_eq!(session.phase(), QuizPhase::AwaitingSelection);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn correct_submit_scores_once_and_reveals() {
        let mut session = QuizSession::start(&bank(1), QuizConfig::default(), 5);
        let correct = session.current_question().unwrap().correct_index;
        session.select(correct);
        session.submit();
        assert_eq!(session.phase(), QuizPhase::AnswerRevealed);
        assert_eq!(session.score(), 1);
        assert!(session.feedback().unwrap().is_correct());

        // Repeated submit after the reveal must not double-score.
        session.submit();
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn wrong_submit_reveals_the_correct_text() {
        let mut session = QuizSession::start(&bank(1), QuizConfig::default(), 5);
        let question = session.current_question().unwrap();
        let wrong = (question.correct_index + 1) % question.choice_count();
        let expected = question.correct_text().to_string();
        session.select(wrong);
        session.submit();
        assert_eq!(session.score(), 0);
        match session.feedback().unwrap() {
            Feedback::Incorrect { correct_text, .. } => assert_eq!(correct_text, &expected),
            other => panic!("expected incorrect feedback, got {other:?}"),
        }
    }

    #[test]
    fn submit_disarms_the_countdown() {
        let mut session = QuizSession::start(&bank(2), timed(), 5);
        session.select(0);
        session.submit();
        assert_eq!(session.countdown(), None);
    }

    #[test]
    fn timeout_without_selection_reveals_unscored() {
        let mut session = QuizSession::start(&bank(2), timed(), 5);
        session.timeout();
        assert_eq!(session.phase(), QuizPhase::AnswerRevealed);
        assert_eq!(session.score(), 0);
        assert_eq!(session.feedback(), Some(&Feedback::TimeExpired));
    }

    #[test]
    fn timeout_with_selection_behaves_as_submit() {
        let mut session = QuizSession::start(&bank(2), timed(), 5);
        let correct = session.current_question().unwrap().correct_index;
        session.select(correct);
        session.timeout();
        assert_eq!(session.phase(), QuizPhase::AnswerRevealed);
        assert_eq!(session.score(), 1);
        assert!(session.feedback().unwrap().is_correct());
    }

    #[test]
    fn countdown_ticks_down_and_fires_timeout_at_zero() {
        let mut session = QuizSession::start(&bank(2), timed(), 5);
        for expected in (1..COUNTDOWN_SECS).rev() {
            session.tick();
            assert_eq!(session.countdown(), Some(expected));
        }
        session.tick();
        assert_eq!(session.phase(), QuizPhase::AnswerRevealed);
        assert_eq!(session.countdown(), None);
    }

    #[test]
    fn stale_ticks_after_reveal_change_nothing() {
        let mut session = QuizSession::start(&bank(2), timed(), 5);
        session.select(0);
        session.submit();
        let snapshot = session.clone();
        session.tick();
        session.timeout();
        assert_eq!(session, snapshot);
    }

    #[test]
    fn stale_timeout_cannot_hit_a_later_question() {
        let mut session = QuizSession::start(&bank(2), timed(), 5);
        session.select(0);
        session.submit();
        session.advance();
        // Simulate the superseded question's timer firing late: the new
        // question's countdown is freshly armed, so one tick only decrements.
        assert_eq!(session.countdown(), Some(COUNTDOWN_SECS));
        session.tick();
        assert_eq!(session.phase(), QuizPhase::AwaitingSelection);
        assert_eq!(session.countdown(), Some(COUNTDOWN_SECS - 1));
    }

    #[test]
    fn advance_moves_to_next_question_with_fresh_state() {
        let mut session = QuizSession::start(&bank(3), timed(), 5);
        session.select(1);
        session.submit();
        session.advance();
        assert_eq!(session.phase(), QuizPhase::AwaitingSelection);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.selected_choice(), None);
        assert_eq!(session.feedback(), None);
        assert_eq!(session.countdown(), Some(COUNTDOWN_SECS));
    }

    #[test]
    fn advance_before_reveal_is_a_no_op() {
        let mut session = QuizSession::start(&bank(3), QuizConfig::default(), 5);
        session.advance();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.phase(), QuizPhase::AwaitingSelection);
    }

    #[test]
    fn advancing_past_the_last_question_finishes() {
        let mut session = QuizSession::start(&bank(1), QuizConfig::default(), 5);
        session.select(0);
        session.submit();
        session.advance();
        assert_eq!(session.phase(), QuizPhase::Finished);
        // Terminal until restarted.
        session.advance();
        session.submit();
        assert_eq!(session.phase(), QuizPhase::Finished);
    }

    #[test]
    fn full_session_score_counts_correct_answers_only() {
        let source = bank(4);
        let mut session = QuizSession::start(&source, QuizConfig::default(), 11);
        let mut expected = 0;
        for step in 0..4 {
            let question = session.current_question().unwrap();
            let choice = if step % 2 == 0 {
                expected += 1;
                question.correct_index
            } else {
                (question.correct_index + 1) % question.choice_count()
            };
            session.select(choice);
            session.submit();
            session.advance();
        }
        assert_eq!(session.phase(), QuizPhase::Finished);
        assert_eq!(session.score(), expected);
    }

    #[test]
    fn restart_deals_a_fresh_session_with_same_config() {
        let source = bank(3);
        let mut session = QuizSession::start(&source, timed(), 5);
        session.select(0);
        session.submit();
        let fresh = session.restart(&source, 6);
        assert_eq!(fresh.phase(), QuizPhase::AwaitingSelection);
        assert_eq!(fresh.score(), 0);
        assert_eq!(fresh.current_index(), 0);
        assert!(fresh.config().timer_enabled);
        assert_eq!(fresh.countdown(), Some(COUNTDOWN_SECS));
    }

    #[test]
    fn empty_bank_starts_finished() {
        let session = QuizSession::start(&QuestionBank::empty(), QuizConfig::default(), 5);
        assert_eq!(session.phase(), QuizPhase::Finished);
        assert_eq!(session.total_questions(), 0);
    }

    #[test]
    fn feedback_messages_use_the_reveal_copy() {
        let correct = Feedback::Correct {
            explanation: "Founded 1863.".to_string(),
        };
        assert_eq!(correct.message(), "Correct! Founded 1863.");
        let incorrect = Feedback::Incorrect {
            correct_text: "1863".to_string(),
            explanation: String::new(),
        };
        assert_eq!(incorrect.message(), "Incorrect. Correct answer: \"1863\".");
        assert_eq!(Feedback::TimeExpired.message(), "Time's up!");
    }
}
