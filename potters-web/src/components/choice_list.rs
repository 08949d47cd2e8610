use potters_game::ChoiceView;
use yew::prelude::*;

use crate::components::ChoiceItem;

#[derive(Properties, Clone, PartialEq)]
pub struct ChoiceListProps {
    pub choices: Vec<ChoiceView>,
    pub locked: bool,
    pub on_activate: Callback<usize>,
}

#[function_component(ChoiceList)]
pub fn choice_list(props: &ChoiceListProps) -> Html {
    let setsize = props.choices.len();
    html! {
        <ul id="choices" role="menu" aria-label="Answer choices">
            { for props.choices.iter().enumerate().map(|(index, choice)| html! {
                <ChoiceItem
                    key={index}
                    index={index}
                    text={AttrValue::from(choice.text.clone())}
                    mark={choice.mark}
                    locked={props.locked}
                    posinset={index + 1}
                    setsize={setsize}
                    on_activate={props.on_activate.clone()}
                />
            }) }
        </ul>
    }
}
