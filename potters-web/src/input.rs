#![allow(clippy::match_same_arms)]

//! Centralized keyboard mapping for the quiz surface.

/// Action a keystroke maps to. Digits select, Enter confirms (submit or
/// advance depending on reveal state), N advances when permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKey {
    Choice(usize),
    Confirm,
    Advance,
}

// Returns Some(0..=3) if the string is a choice number key; None otherwise
#[must_use]
pub fn choice_key_to_index(key: &str) -> Option<usize> {
    match key {
        "1" => Some(0),
        "2" => Some(1),
        "3" => Some(2),
        "4" => Some(3),
        _ => None,
    }
}

// Parses KeyboardEvent.code such as "Digit3" or "Numpad2"
#[must_use]
pub fn choice_code_to_index(code: &str) -> Option<usize> {
    if let Some(last) = code.chars().last()
        && last.is_ascii_digit()
    {
        return choice_key_to_index(&last.to_string());
    }
    None
}

/// Map a `KeyboardEvent`'s key/code pair onto a quiz action.
#[must_use]
pub fn map_key(key: &str, code: &str) -> Option<QuizKey> {
    if let Some(index) = choice_key_to_index(key).or_else(|| choice_code_to_index(code)) {
        return Some(QuizKey::Choice(index));
    }
    match key {
        "Enter" => Some(QuizKey::Confirm),
        "n" | "N" => Some(QuizKey::Advance),
        _ => None,
    }
}
