use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Builds an `oninput` callback that writes the field value into `state`.
pub fn bind<T, F>(state: &UseStateHandle<T>, apply: F) -> Callback<InputEvent>
where
    T: Clone + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let Some(value) = input_value(&e) else {
            return;
        };
        let mut next = (*state).clone();
        apply(&mut next, value);
        state.set(next);
    })
}

fn input_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| area.value())
}
