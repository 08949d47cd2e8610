//! Embedded question data.
//!
//! The bank ships inside the binary the same way the rest of the static
//! assets do; there is no network fetch between the player and the first
//! question.

use once_cell::sync::Lazy;
use potters_game::QuestionBank;

static BANK: Lazy<QuestionBank> = Lazy::new(|| {
    let bank = QuestionBank::from_json(include_str!("../static/assets/data/questions.json"))
        .expect("embedded question data should parse");
    bank.validate()
        .expect("embedded question data should satisfy the bank invariants");
    bank
});

/// The shipped Stoke City question bank, parsed and validated once.
#[must_use]
pub fn question_bank() -> &'static QuestionBank {
    &BANK
}
