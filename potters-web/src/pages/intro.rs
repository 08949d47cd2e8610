use potters_game::high_score_line;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct IntroPageProps {
    pub best: Option<u32>,
    pub timer_enabled: bool,
    pub on_toggle_timer: Callback<bool>,
    pub on_start: Callback<()>,
}

#[function_component(IntroPage)]
pub fn intro_page(props: &IntroPageProps) -> Html {
    let on_change = {
        let on_toggle_timer = props.on_toggle_timer.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_toggle_timer.emit(input.checked());
        })
    };
    let on_click = {
        let on_start = props.on_start.clone();
        Callback::from(move |_| on_start.emit(()))
    };

    html! {
        <section id="intro">
            <h1>{ "Potters Quiz" }</h1>
            <p class="muted">
                { "Ten questions on Stoke City history. Keys 1-4 select a choice, \
                   Enter confirms, N moves on." }
            </p>
            <label class="timer-toggle">
                <input id="timerToggle"
                       type="checkbox"
                       checked={props.timer_enabled}
                       onchange={on_change} />
                { " 20 second timer per question" }
            </label>
            <p id="highscore">{ high_score_line(props.best) }</p>
            <button id="startBtn" onclick={on_click}>{ "Start quiz" }</button>
        </section>
    }
}
