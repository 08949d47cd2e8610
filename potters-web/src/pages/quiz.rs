use potters_game::{QuestionView, QuizPhase, QuizSession};
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::{ChoiceList, FeedbackLine, StatsBar};
use crate::input::{QuizKey, map_key};
use crate::timer::CountdownInterval;

#[derive(Properties, Clone, PartialEq)]
pub struct QuizPageProps {
    pub session: QuizSession,
    pub on_select: Callback<usize>,
    pub on_activate: Callback<usize>,
    pub on_submit: Callback<()>,
    pub on_advance: Callback<()>,
    pub on_tick: Callback<()>,
    pub on_restart: Callback<()>,
}

/// Session event a keystroke resolves to, given the board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    Select(usize),
    Submit,
    Advance,
}

/// Digits select while a question is open; Enter submits the pending
/// selection or, once revealed, moves on; N only moves on.
#[must_use]
pub fn resolve_key(action: QuizKey, revealed: bool, has_selection: bool) -> Option<BoardEvent> {
    match action {
        QuizKey::Choice(index) if !revealed => Some(BoardEvent::Select(index)),
        QuizKey::Confirm if revealed => Some(BoardEvent::Advance),
        QuizKey::Confirm if has_selection => Some(BoardEvent::Submit),
        QuizKey::Advance if revealed => Some(BoardEvent::Advance),
        QuizKey::Choice(_) | QuizKey::Confirm | QuizKey::Advance => None,
    }
}

#[function_component(QuizPage)]
pub fn quiz_page(props: &QuizPageProps) -> Html {
    let section_ref = use_node_ref();
    let question_index = props.session.current_index();
    let timer_armed = props.session.countdown().is_some();

    // One live interval per armed countdown; dropped the moment the
    // countdown disarms or the question changes.
    {
        let on_tick = props.on_tick.clone();
        use_effect_with((timer_armed, question_index), move |(armed, _)| {
            let interval = armed.then(|| CountdownInterval::start(1000, on_tick));
            move || drop(interval)
        });
    }

    // Pull keyboard focus onto the board whenever a new question shows.
    {
        let section_ref = section_ref.clone();
        use_effect_with(question_index, move |_| {
            if let Some(element) = section_ref.cast::<web_sys::HtmlElement>() {
                let _ = element.focus();
            }
        });
    }

    let revealed = props.session.phase() == QuizPhase::AnswerRevealed;
    let has_selection = props.session.selected_choice().is_some();
    let on_keydown = {
        let on_select = props.on_select.clone();
        let on_submit = props.on_submit.clone();
        let on_advance = props.on_advance.clone();
        Callback::from(move |event: KeyboardEvent| {
            let Some(action) = map_key(&event.key(), &event.code()) else {
                return;
            };
            let Some(resolved) = resolve_key(action, revealed, has_selection) else {
                return;
            };
            event.prevent_default();
            match resolved {
                BoardEvent::Select(index) => on_select.emit(index),
                BoardEvent::Submit => on_submit.emit(()),
                BoardEvent::Advance => on_advance.emit(()),
            }
        })
    };

    let Some(view) = QuestionView::for_session(&props.session) else {
        return html! {};
    };

    let on_next = {
        let on_advance = props.on_advance.clone();
        Callback::from(move |_| on_advance.emit(()))
    };
    let on_restart_click = {
        let on_restart = props.on_restart.clone();
        Callback::from(move |_| on_restart.emit(()))
    };

    html! {
        <section id="quiz" ref={section_ref} tabindex="-1" onkeydown={on_keydown}>
            <StatsBar
                progress={AttrValue::from(view.progress.clone())}
                score={AttrValue::from(view.score_line.clone())}
                timer_remaining={view.timer_remaining}
            />
            <h2 id="questionText">{ view.text.clone() }</h2>
            <ChoiceList
                choices={view.choices.clone()}
                locked={view.locked}
                on_activate={props.on_activate.clone()}
            />
            <FeedbackLine feedback={view.feedback.clone()} />
            <div class="quiz-controls">
                <button id="nextBtn"
                        disabled={!view.advance_enabled}
                        onclick={on_next}>
                    { view.advance_label.clone() }
                </button>
                <button id="restartBtn" class="muted" onclick={on_restart_click}>
                    { "Restart" }
                </button>
            </div>
        </section>
    }
}
