use potters_game::{HighScoreUpdate, QuizSession};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    /// Active playthrough; `None` before the first start.
    pub session: UseStateHandle<Option<QuizSession>>,
    /// Intro-screen timer toggle, captured into the config at start.
    pub timer_pref: UseStateHandle<bool>,
    /// Best score on record, for the intro and summary screens.
    pub high_score: UseStateHandle<Option<u32>>,
    /// Compare-and-write outcome of the most recently finished session.
    pub last_update: UseStateHandle<Option<HighScoreUpdate>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        session: use_state(|| None::<QuizSession>),
        timer_pref: use_state(|| false),
        high_score: use_state(|| None::<u32>),
        last_update: use_state(|| None::<HighScoreUpdate>),
    }
}
