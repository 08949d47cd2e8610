//! Session shuffling: question order, choice order, and answer-key relocation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bank::{QuestionBank, QuestionTemplate};

/// One answer choice tagged with its pre-shuffle position, so the answer key
/// can be relocated after the choices are reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionChoice {
    pub text: String,
    pub original_index: usize,
}

/// A question as dealt into one session: reordered choices, recomputed key.
/// Created once at session start and immutable for the session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionQuestion {
    pub text: String,
    pub explanation: String,
    pub choices: Vec<SessionChoice>,
    pub correct_index: usize,
}

impl SessionQuestion {
    fn from_template(template: &QuestionTemplate) -> Self {
        Self {
            text: template.text.clone(),
            explanation: template.explanation.clone(),
            choices: template
                .choices
                .iter()
                .enumerate()
                .map(|(original_index, text)| SessionChoice {
                    text: text.clone(),
                    original_index,
                })
                .collect(),
            correct_index: template.correct_index,
        }
    }

    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Whether the given (post-shuffle) choice index is the right answer.
    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }

    /// Text of the correct choice, for the reveal feedback.
    #[must_use]
    pub fn correct_text(&self) -> &str {
        self.choices
            .get(self.correct_index)
            .map_or("", |choice| choice.text.as_str())
    }
}

/// Uniform in-place permutation (Fisher-Yates): for each index i from the
/// last down to 1, swap with a uniformly chosen index in [0, i].
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Deal a session's worth of questions from the bank: shuffle question
/// order, shuffle each question's choices independently, and point
/// `correct_index` back at the originally-correct choice.
///
/// Pure with respect to the bank; deterministic for a deterministic `rng`.
#[must_use]
pub fn prepare_questions<R: Rng + ?Sized>(
    bank: &QuestionBank,
    rng: &mut R,
) -> Vec<SessionQuestion> {
    let mut questions: Vec<SessionQuestion> = bank
        .questions
        .iter()
        .map(SessionQuestion::from_template)
        .collect();
    fisher_yates(&mut questions, rng);
    for question in &mut questions {
        let original_correct = question.correct_index;
        fisher_yates(&mut question.choices, rng);
        question.correct_index = question
            .choices
            .iter()
            .position(|choice| choice.original_index == original_correct)
            .unwrap_or(0);
    }
    questions
}
