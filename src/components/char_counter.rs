//! Character Counter
//!
//! "123 / 500" under a bounded text input, toned by how full it is.

use leptos::prelude::*;

use civic_core::validation::CharCounter;

#[component]
pub fn CharCounterView(#[prop(into)] counter: Signal<CharCounter>) -> impl IntoView {
    view! {
        <span class=move || format!("char-counter {}", counter.get().tone().css_class())>
            {move || counter.get().label()}
        </span>
    }
}
