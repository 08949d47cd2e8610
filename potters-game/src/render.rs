//! View-models handed to the presentation layer after each transition.
//!
//! The session exposes raw state; these builders flatten it into exactly
//! what a renderer needs, including the player-facing copy, so every host
//! (web page, headless tester) shows the same thing.

use serde::{Deserialize, Serialize};

use crate::session::{QuizPhase, QuizSession};

/// How a choice should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceMark {
    #[default]
    Plain,
    Selected,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceView {
    pub text: String,
    pub mark: ChoiceMark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackView {
    pub message: String,
    /// Drives the correct/incorrect styling of the feedback line.
    pub correct: bool,
}

/// Everything needed to draw the active question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub progress: String,
    pub text: String,
    pub choices: Vec<ChoiceView>,
    /// Choices stop accepting input once the answer is revealed.
    pub locked: bool,
    pub feedback: Option<FeedbackView>,
    pub timer_remaining: Option<u32>,
    pub score_line: String,
    pub advance_enabled: bool,
    pub advance_label: String,
}

impl QuestionView {
    /// Build the question view, or `None` when no question is active.
    #[must_use]
    pub fn for_session(session: &QuizSession) -> Option<Self> {
        if !matches!(
            session.phase(),
            QuizPhase::AwaitingSelection | QuizPhase::AnswerRevealed
        ) {
            return None;
        }
        let question = session.current_question()?;
        let revealed = session.phase() == QuizPhase::AnswerRevealed;
        let chosen = session.selected_choice();

        let choices = question
            .choices
            .iter()
            .enumerate()
            .map(|(index, choice)| {
                let mark = if revealed {
                    if index == question.correct_index {
                        ChoiceMark::Correct
                    } else if chosen == Some(index) {
                        ChoiceMark::Incorrect
                    } else {
                        ChoiceMark::Plain
                    }
                } else if chosen == Some(index) {
                    ChoiceMark::Selected
                } else {
                    ChoiceMark::Plain
                };
                ChoiceView {
                    text: choice.text.clone(),
                    mark,
                }
            })
            .collect();

        let advance_label = if session.is_last_question() {
            "Finish".to_string()
        } else {
            "Next (N)".to_string()
        };

        Some(Self {
            progress: progress_line(session.current_index(), session.total_questions()),
            text: question.text.clone(),
            choices,
            locked: revealed,
            feedback: session.feedback().map(|feedback| FeedbackView {
                message: feedback.message(),
                correct: feedback.is_correct(),
            }),
            timer_remaining: session.countdown(),
            score_line: score_line(session.score()),
            advance_enabled: revealed,
            advance_label,
        })
    }
}

/// Everything needed to draw the end-of-session summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    pub score: u32,
    pub total: usize,
    pub text: String,
    pub final_score_line: String,
    pub new_high_score: bool,
}

impl SummaryView {
    /// Build the summary view, or `None` while the session is still running.
    #[must_use]
    pub fn for_session(session: &QuizSession, new_high_score: bool) -> Option<Self> {
        if session.phase() != QuizPhase::Finished {
            return None;
        }
        let score = session.score();
        let total = session.total_questions();
        let mut text = format!("You answered {score} out of {total} correctly.");
        if new_high_score {
            text.push_str(" New high score — well done!");
        }
        Some(Self {
            score,
            total,
            text,
            final_score_line: format!("Final score: {score}"),
            new_high_score,
        })
    }
}

#[must_use]
pub fn progress_line(current_index: usize, total: usize) -> String {
    format!("Question {} / {total}", current_index + 1)
}

#[must_use]
pub fn score_line(score: u32) -> String {
    format!("Score: {score}")
}

#[must_use]
pub fn timer_line(remaining: u32) -> String {
    format!("Time: {remaining}s")
}

#[must_use]
pub fn high_score_line(best: Option<u32>) -> String {
    best.map_or_else(
        || "No high score yet — be the first!".to_string(),
        |score| format!("High score: {score}"),
    )
}
