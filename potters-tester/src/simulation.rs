//! Headless session playthroughs under an answer policy.

use anyhow::{Context, bail, ensure};
use potters_game::{
    COUNTDOWN_SECS, Feedback, MemoryScores, QuestionBank, QuizConfig, QuizPhase, QuizSession,
    record_high_score,
};
use serde::Serialize;

use crate::policy::AnswerStrategy;

/// Configuration for one simulated playthrough.
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub seed: u64,
    pub strategy: AnswerStrategy,
    pub timer_enabled: bool,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(strategy: AnswerStrategy, seed: u64) -> Self {
        Self {
            seed,
            strategy,
            timer_enabled: strategy.needs_timer(),
        }
    }

    #[must_use]
    pub const fn with_timer(mut self, timer_enabled: bool) -> Self {
        self.timer_enabled = timer_enabled;
        self
    }
}

/// Snapshot of one resolved question.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionRecord {
    pub question: String,
    pub choice: Option<usize>,
    pub was_correct: bool,
    pub timed_out: bool,
}

/// Result of one complete playthrough.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub seed: u64,
    pub strategy: String,
    pub score: u32,
    pub total: usize,
    pub timeouts: usize,
    pub new_record: bool,
    pub decisions: Vec<DecisionRecord>,
}

/// Play one full session, answering every question through the policy and
/// checking the state-machine invariants along the way.
///
/// # Errors
///
/// Returns an error when the session violates an invariant (which is the
/// point of running this harness) or when the strategy cannot resolve a
/// question with the configured timer.
pub fn run_session(
    bank: &QuestionBank,
    config: SimulationConfig,
    store: &MemoryScores,
) -> anyhow::Result<SessionReport> {
    let mut policy = config.strategy.create_policy(config.seed);
    let mut session = QuizSession::start(
        bank,
        QuizConfig {
            timer_enabled: config.timer_enabled,
        },
        config.seed,
    );
    let total = session.total_questions();
    let mut decisions = Vec::with_capacity(total);

    while session.phase() == QuizPhase::AwaitingSelection {
        let question = session
            .current_question()
            .context("awaiting selection with no active question")?;
        let question_text = question.text.clone();
        let correct = question.correct_index;
        let score_before = session.score();

        let choice = policy.pick_choice(question);
        match choice {
            Some(index) => {
                session.select(index);
                session.submit();
            }
            None => {
                ensure!(
                    config.timer_enabled,
                    "strategy '{}' waits for the countdown, which is disabled",
                    policy.name()
                );
                for _ in 0..COUNTDOWN_SECS {
                    session.tick();
                }
            }
        }

        ensure!(
            session.phase() == QuizPhase::AnswerRevealed,
            "question '{question_text}' did not resolve"
        );
        let was_correct = session.score() > score_before;
        if was_correct {
            ensure!(
                choice == Some(correct),
                "score moved on a wrong answer for '{question_text}'"
            );
        }
        let timed_out = matches!(session.feedback(), Some(Feedback::TimeExpired));
        decisions.push(DecisionRecord {
            question: question_text,
            choice,
            was_correct,
            timed_out,
        });
        session.advance();
    }

    if session.phase() != QuizPhase::Finished {
        bail!("session ended in {:?}", session.phase());
    }
    ensure!(
        decisions.len() == total,
        "resolved {} of {total} questions",
        decisions.len()
    );
    let correct_count = decisions.iter().filter(|d| d.was_correct).count();
    ensure!(
        session.score() as usize == correct_count,
        "final score {} disagrees with {correct_count} correct answers",
        session.score()
    );

    let update = record_high_score(store, session.score())
        .context("high score store rejected the update")?;

    Ok(SessionReport {
        seed: config.seed,
        strategy: config.strategy.label().to_string(),
        score: session.score(),
        total,
        timeouts: decisions.iter().filter(|d| d.timed_out).count(),
        new_record: update.is_new_record,
        decisions,
    })
}
