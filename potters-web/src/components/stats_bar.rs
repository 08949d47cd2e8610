use potters_game::timer_line;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct StatsBarProps {
    pub progress: AttrValue,
    pub score: AttrValue,
    pub timer_remaining: Option<u32>,
}

#[function_component(StatsBar)]
pub fn stats_bar(props: &StatsBarProps) -> Html {
    html! {
        <div class="quiz-meta">
            <span id="progress">{ props.progress.clone() }</span>
            <span id="score">{ props.score.clone() }</span>
            <span id="timer">{ props.timer_remaining.map(timer_line).unwrap_or_default() }</span>
        </div>
    }
}
