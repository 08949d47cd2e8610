use potters_game::FeedbackView;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FeedbackLineProps {
    pub feedback: Option<FeedbackView>,
}

#[function_component(FeedbackLine)]
pub fn feedback_line(props: &FeedbackLineProps) -> Html {
    let tone = props.feedback.as_ref().map(|feedback| {
        if feedback.correct {
            "correct"
        } else {
            "incorrect"
        }
    });
    let message = props
        .feedback
        .as_ref()
        .map(|feedback| feedback.message.clone())
        .unwrap_or_default();
    html! {
        <p id="feedback"
           class={classes!("feedback", tone)}
           data-revealed={ if props.feedback.is_some() { "true" } else { "false" } }
           aria-live="polite">
            { message }
        </p>
    }
}
