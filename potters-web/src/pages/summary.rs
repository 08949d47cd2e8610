use potters_game::{SummaryView, high_score_line};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SummaryPageProps {
    pub view: SummaryView,
    pub best: Option<u32>,
    pub on_play_again: Callback<()>,
}

#[function_component(SummaryPage)]
pub fn summary_page(props: &SummaryPageProps) -> Html {
    let on_click = {
        let on_play_again = props.on_play_again.clone();
        Callback::from(move |_| on_play_again.emit(()))
    };

    html! {
        <section id="summary">
            <h2>{ "Full time" }</h2>
            <p id="summaryText">{ props.view.text.clone() }</p>
            <p id="finalScore">{ props.view.final_score_line.clone() }</p>
            <p id="highscore">{ high_score_line(props.best) }</p>
            <button id="playAgainBtn" onclick={on_click}>{ "Play again" }</button>
        </section>
    }
}
