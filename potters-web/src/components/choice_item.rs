use potters_game::ChoiceMark;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ChoiceItemProps {
    pub index: usize,
    pub text: AttrValue,
    pub mark: ChoiceMark,
    /// Revealed questions stop accepting activation.
    pub locked: bool,
    pub posinset: usize,
    pub setsize: usize,
    pub on_activate: Callback<usize>,
}

fn mark_class(mark: ChoiceMark) -> Option<&'static str> {
    match mark {
        ChoiceMark::Plain => None,
        ChoiceMark::Selected => Some("selected"),
        ChoiceMark::Correct => Some("correct"),
        ChoiceMark::Incorrect => Some("incorrect"),
    }
}

fn activate_choice(locked: bool, index: usize, on_activate: &Callback<usize>) {
    if !locked {
        on_activate.emit(index);
    }
}

#[function_component(ChoiceItem)]
pub fn choice_item(props: &ChoiceItemProps) -> Html {
    let index = props.index;

    let on_click = {
        let on_activate = props.on_activate.clone();
        let locked = props.locked;
        Callback::from(move |_| activate_choice(locked, index, &on_activate))
    };

    // Enter/Space on a focused choice activates it directly; the event must
    // not bubble up to the board handler, which treats Enter as
    // submit-or-advance.
    let on_keydown = {
        let on_activate = props.on_activate.clone();
        let locked = props.locked;
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" || event.key() == " " {
                event.prevent_default();
                event.stop_propagation();
                activate_choice(locked, index, &on_activate);
            }
        })
    };

    html! {
        <li role="menuitem"
            tabindex={ if props.locked { "-1" } else { "0" } }
            data-key={(index + 1).to_string()}
            aria-posinset={props.posinset.to_string()}
            aria-setsize={props.setsize.to_string()}
            aria-disabled={ if props.locked { "true" } else { "false" } }
            onclick={on_click}
            onkeydown={on_keydown}
            class={classes!("choice", mark_class(props.mark))}>
            <div class="label">{ index + 1 }</div>
            <div class="text">{ props.text.clone() }</div>
        </li>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn activate_emits_when_unlocked() {
        let called = Rc::new(Cell::new(None::<usize>));
        let called_ref = called.clone();
        let on_activate = Callback::from(move |index| called_ref.set(Some(index)));
        activate_choice(false, 2, &on_activate);
        assert_eq!(called.get(), Some(2));
    }

    #[test]
    fn activate_is_ignored_when_locked() {
        let called = Rc::new(Cell::new(false));
        let called_ref = called.clone();
        let on_activate = Callback::from(move |_| called_ref.set(true));
        activate_choice(true, 0, &on_activate);
        assert!(!called.get());
    }

    #[test]
    fn marks_map_to_the_expected_classes() {
        assert_eq!(mark_class(ChoiceMark::Plain), None);
        assert_eq!(mark_class(ChoiceMark::Selected), Some("selected"));
        assert_eq!(mark_class(ChoiceMark::Correct), Some("correct"));
        assert_eq!(mark_class(ChoiceMark::Incorrect), Some("incorrect"));
    }
}
