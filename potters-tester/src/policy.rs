use std::fmt;
use std::str::FromStr;

use potters_game::SessionQuestion;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Policy interface for automated answer strategies.
pub trait AnswerPolicy {
    /// Name used for logging/report output.
    fn name(&self) -> &'static str;

    /// Choice for the active question, or `None` to sit on the question
    /// until the countdown expires.
    fn pick_choice(&mut self, question: &SessionQuestion) -> Option<usize>;
}

/// Built-in answer strategies for automated runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerStrategy {
    /// Always answers correctly.
    Oracle,
    /// Always picks the first choice as shown.
    First,
    /// Picks uniformly at random.
    Random,
    /// Never answers; every question times out.
    Hesitant,
}

impl AnswerStrategy {
    pub const ALL: [Self; 4] = [Self::Oracle, Self::First, Self::Random, Self::Hesitant];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Oracle => "oracle",
            Self::First => "first",
            Self::Random => "random",
            Self::Hesitant => "hesitant",
        }
    }

    /// Whether the strategy only makes sense with the countdown armed.
    #[must_use]
    pub const fn needs_timer(self) -> bool {
        matches!(self, Self::Hesitant)
    }

    #[must_use]
    pub fn create_policy(self, seed: u64) -> Box<dyn AnswerPolicy> {
        match self {
            Self::Oracle => Box::new(OraclePolicy),
            Self::First => Box::new(FirstPolicy),
            Self::Random => Box::new(RandomPolicy::new(seed)),
            Self::Hesitant => Box::new(HesitantPolicy),
        }
    }
}

impl fmt::Display for AnswerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnswerStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oracle" => Ok(Self::Oracle),
            "first" => Ok(Self::First),
            "random" => Ok(Self::Random),
            "hesitant" => Ok(Self::Hesitant),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}

struct OraclePolicy;

impl AnswerPolicy for OraclePolicy {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn pick_choice(&mut self, question: &SessionQuestion) -> Option<usize> {
        Some(question.correct_index)
    }
}

struct FirstPolicy;

impl AnswerPolicy for FirstPolicy {
    fn name(&self) -> &'static str {
        "first"
    }

    fn pick_choice(&mut self, _question: &SessionQuestion) -> Option<usize> {
        Some(0)
    }
}

struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl AnswerPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn pick_choice(&mut self, question: &SessionQuestion) -> Option<usize> {
        Some(self.rng.gen_range(0..question.choice_count()))
    }
}

struct HesitantPolicy;

impl AnswerPolicy for HesitantPolicy {
    fn name(&self) -> &'static str {
        "hesitant"
    }

    fn pick_choice(&mut self, _question: &SessionQuestion) -> Option<usize> {
        None
    }
}
