//! Shared gameplay constants.

/// Choices every authored question must present.
pub const CHOICES_PER_QUESTION: usize = 4;

/// Seconds on the per-question countdown when the timer is enabled.
pub const COUNTDOWN_SECS: u32 = 20;
