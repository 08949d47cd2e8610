//! Callback builders translating UI events into session transitions.

use potters_game::{HighScoreUpdate, QuizConfig, QuizPhase, QuizSession, record_high_score};
use yew::prelude::*;

use crate::app::state::AppState;
use crate::data;
use crate::storage::LocalScores;

fn entropy_seed() -> u64 {
    js_sys::Date::now().to_bits()
}

/// Run one transition against the current session, then persist the high
/// score if this transition is the one that finished the playthrough.
fn mutate_session(
    session_handle: &UseStateHandle<Option<QuizSession>>,
    high_score: &UseStateHandle<Option<u32>>,
    last_update: &UseStateHandle<Option<HighScoreUpdate>>,
    op: impl FnOnce(&mut QuizSession),
) {
    let Some(mut session) = (**session_handle).clone() else {
        return;
    };
    let was_finished = session.phase() == QuizPhase::Finished;
    op(&mut session);
    if !was_finished && session.phase() == QuizPhase::Finished {
        finalize_session(&session, high_score, last_update);
    }
    session_handle.set(Some(session));
}

fn finalize_session(
    session: &QuizSession,
    high_score: &UseStateHandle<Option<u32>>,
    last_update: &UseStateHandle<Option<HighScoreUpdate>>,
) {
    match record_high_score(&LocalScores::new(), session.score()) {
        Ok(update) => {
            if update.is_new_record {
                log::info!("new high score: {}", update.best);
            }
            let best = (update.is_new_record || update.previous.is_some()).then_some(update.best);
            high_score.set(best);
            last_update.set(Some(update));
        }
        // Storage trouble is not fatal: the summary still shows, only the
        // record is skipped.
        Err(err) => {
            log::warn!("high score not updated: {err}");
            last_update.set(None);
        }
    }
}

/// Start (or abandon-and-restart) a session with the current timer toggle.
pub fn build_start(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let timer_pref = state.timer_pref.clone();
    let last_update = state.last_update.clone();
    Callback::from(move |()| {
        let config = QuizConfig {
            timer_enabled: *timer_pref,
        };
        let session = QuizSession::start(data::question_bank(), config, entropy_seed());
        log::info!(
            "session started: {} questions, timer {}",
            session.total_questions(),
            if config.timer_enabled { "on" } else { "off" }
        );
        last_update.set(None);
        session_handle.set(Some(session));
    })
}

/// Record a selection without submitting (keyboard digit path).
pub fn build_select(state: &AppState) -> Callback<usize> {
    let session_handle = state.session.clone();
    let high_score = state.high_score.clone();
    let last_update = state.last_update.clone();
    Callback::from(move |index: usize| {
        mutate_session(&session_handle, &high_score, &last_update, |session| {
            session.select(index);
        });
    })
}

/// Select and submit in one go (pointer click or Enter on a focused choice).
pub fn build_activate(state: &AppState) -> Callback<usize> {
    let session_handle = state.session.clone();
    let high_score = state.high_score.clone();
    let last_update = state.last_update.clone();
    Callback::from(move |index: usize| {
        mutate_session(&session_handle, &high_score, &last_update, |session| {
            session.select(index);
            session.submit();
        });
    })
}

pub fn build_submit(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let high_score = state.high_score.clone();
    let last_update = state.last_update.clone();
    Callback::from(move |()| {
        mutate_session(&session_handle, &high_score, &last_update, QuizSession::submit);
    })
}

pub fn build_advance(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let high_score = state.high_score.clone();
    let last_update = state.last_update.clone();
    Callback::from(move |()| {
        mutate_session(
            &session_handle,
            &high_score,
            &last_update,
            QuizSession::advance,
        );
    })
}

/// One countdown second elapsed.
pub fn build_tick(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let high_score = state.high_score.clone();
    let last_update = state.last_update.clone();
    Callback::from(move |()| {
        mutate_session(&session_handle, &high_score, &last_update, QuizSession::tick);
    })
}

pub fn build_timer_toggle(state: &AppState) -> Callback<bool> {
    let timer_pref = state.timer_pref.clone();
    Callback::from(move |enabled: bool| {
        timer_pref.set(enabled);
    })
}
