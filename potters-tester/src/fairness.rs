//! Shuffle fairness sweeps.
//!
//! Deals the bank many times with a seeded RNG and measures how far each
//! question's and each choice's final-position frequency drifts from the
//! uniform ideal.

use potters_game::{QuestionBank, prepare_questions};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

/// Maximum tolerated deviation from the uniform frequency per cell.
pub const DEFAULT_TOLERANCE: f64 = 0.02;

#[derive(Debug, Clone, Copy)]
pub struct FairnessConfig {
    pub samples: usize,
    pub seed: u64,
    pub tolerance: f64,
}

impl FairnessConfig {
    #[must_use]
    pub fn new(samples: usize, seed: u64) -> Self {
        Self {
            samples,
            seed,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Worst observed frequency cell in a sweep.
#[derive(Debug, Clone, Serialize)]
pub struct DriftCell {
    pub subject: String,
    pub position: usize,
    pub observed: f64,
    pub expected: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FairnessReport {
    pub samples: usize,
    pub tolerance: f64,
    pub question_drift: f64,
    pub choice_drift: f64,
    pub worst_cell: Option<DriftCell>,
    pub passed: bool,
}

/// Run the sweep. Counts where every question lands in the dealt order and
/// where each question's originally-correct choice lands within it, then
/// reports the worst per-cell drift across both tables.
#[must_use]
pub fn run_fairness(bank: &QuestionBank, config: FairnessConfig) -> FairnessReport {
    let total = bank.len();
    let mut rng = ChaCha20Rng::seed_from_u64(config.seed);

    let mut question_counts = vec![vec![0_usize; total]; total];
    let mut choice_counts = vec![[0_usize; 4]; total];

    for _ in 0..config.samples {
        let dealt = prepare_questions(bank, &mut rng);
        for (position, question) in dealt.iter().enumerate() {
            let source = bank
                .questions
                .iter()
                .position(|template| template.text == question.text)
                .unwrap_or(0);
            question_counts[source][position] += 1;
            let correct = bank.questions[source].correct_index;
            if let Some(choice_position) = question
                .choices
                .iter()
                .position(|choice| choice.original_index == correct)
            {
                choice_counts[source][choice_position] += 1;
            }
        }
    }

    let samples = config.samples.max(1) as f64;
    let question_expected = 1.0 / total.max(1) as f64;
    let choice_expected = 0.25;

    let mut worst_cell: Option<DriftCell> = None;
    let mut question_drift = 0.0_f64;
    for (source, counts) in question_counts.iter().enumerate() {
        for (position, &count) in counts.iter().enumerate() {
            let observed = count as f64 / samples;
            let drift = (observed - question_expected).abs();
            if drift > question_drift {
                question_drift = drift;
                worst_cell = Some(DriftCell {
                    subject: format!("question {source}"),
                    position,
                    observed,
                    expected: question_expected,
                });
            }
        }
    }

    let mut choice_drift = 0.0_f64;
    for (source, counts) in choice_counts.iter().enumerate() {
        for (position, &count) in counts.iter().enumerate() {
            let observed = count as f64 / samples;
            let drift = (observed - choice_expected).abs();
            if drift > choice_drift {
                choice_drift = drift;
                if drift > question_drift {
                    worst_cell = Some(DriftCell {
                        subject: format!("question {source} correct choice"),
                        position,
                        observed,
                        expected: choice_expected,
                    });
                }
            }
        }
    }

    let passed = question_drift <= config.tolerance && choice_drift <= config.tolerance;
    FairnessReport {
        samples: config.samples,
        tolerance: config.tolerance,
        question_drift,
        choice_drift,
        worst_cell,
        passed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use potters_game::QuestionTemplate;

    fn bank() -> QuestionBank {
        let questions = (0..4)
            .map(|n| QuestionTemplate {
                text: format!("Q{n}"),
                choices: vec![
                    format!("q{n}c0"),
                    format!("q{n}c1"),
                    format!("q{n}c2"),
                    format!("q{n}c3"),
                ],
                correct_index: 0,
                explanation: String::new(),
            })
            .collect();
        QuestionBank::from_questions(questions)
    }

    #[test]
    fn seeded_sweep_passes_at_tolerance() {
        let report = run_fairness(&bank(), FairnessConfig::new(20_000, 0xBEEF));
        assert!(
            report.passed,
            "drift {:.4}/{:.4} exceeded {:.4}",
            report.question_drift, report.choice_drift, report.tolerance
        );
    }

    #[test]
    fn tiny_samples_report_heavy_drift() {
        let report = run_fairness(&bank(), FairnessConfig::new(3, 1));
        assert!(report.question_drift > 0.0);
        assert!(report.worst_cell.is_some());
    }
}
