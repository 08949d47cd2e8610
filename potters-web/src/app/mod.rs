pub mod handlers;
pub mod state;

use potters_game::{QuizPhase, ScoreStorage, SummaryView};
use yew::prelude::*;

use crate::pages::{IntroPage, QuizPage, SummaryPage};
use crate::storage::LocalScores;

#[function_component(App)]
pub fn app() -> Html {
    let state = state::use_app_state();

    // Read the stored best once on mount; effects do not run during server
    // rendering, so this never touches storage off-browser.
    {
        let high_score = state.high_score.clone();
        use_effect_with((), move |()| {
            match LocalScores::new().load_high_score() {
                Ok(best) => high_score.set(best),
                Err(err) => log::warn!("stored high score unavailable: {err}"),
            }
        });
    }

    let on_start = handlers::build_start(&state);

    let Some(session) = (*state.session).clone() else {
        return html! {
            <IntroPage
                best={*state.high_score}
                timer_enabled={*state.timer_pref}
                on_toggle_timer={handlers::build_timer_toggle(&state)}
                on_start={on_start}
            />
        };
    };

    match session.phase() {
        QuizPhase::Intro => html! {
            <IntroPage
                best={*state.high_score}
                timer_enabled={*state.timer_pref}
                on_toggle_timer={handlers::build_timer_toggle(&state)}
                on_start={on_start}
            />
        },
        QuizPhase::AwaitingSelection | QuizPhase::AnswerRevealed => html! {
            <QuizPage
                session={session}
                on_select={handlers::build_select(&state)}
                on_activate={handlers::build_activate(&state)}
                on_submit={handlers::build_submit(&state)}
                on_advance={handlers::build_advance(&state)}
                on_tick={handlers::build_tick(&state)}
                on_restart={on_start}
            />
        },
        QuizPhase::Finished => {
            let new_high = (*state.last_update).is_some_and(|update| update.is_new_record);
            SummaryView::for_session(&session, new_high).map_or_else(
                || html! {},
                |view| {
                    html! {
                        <SummaryPage
                            view={view}
                            best={*state.high_score}
                            on_play_again={on_start.clone()}
                        />
                    }
                },
            )
        }
    }
}
