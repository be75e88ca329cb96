//! Debounced Search Box
//!
//! Typing restarts a quiet period; only the last query of a burst reaches the
//! parent. Enter sends immediately. An outside reset or unmounting drops the
//! pending timer.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use civic_core::timer::Debouncer;

use crate::context::now_ms;

#[component]
pub fn SearchBox(
    /// Query applied by the parent; an outside change supersedes pending input
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] on_search: Callback<String>,
    delay_ms: u64,
    /// Bumped by the parent to discard whatever is pending
    #[prop(optional, into)]
    reset: Option<Signal<u64>>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let (text, set_text) = signal(value.get_untracked());
    let debouncer = StoredValue::new_local(Debouncer::<String>::new(delay_ms));
    let timer = StoredValue::new_local(None::<Timeout>);

    let discard_pending = move || {
        timer.set_value(None);
        debouncer.update_value(|d| d.cancel());
    };

    Effect::new(move |_| {
        let external = value.get();
        if external != text.get_untracked() {
            discard_pending();
            set_text.set(external);
        }
    });

    if let Some(reset) = reset {
        Effect::new(move |previous: Option<u64>| {
            let epoch = reset.get();
            if previous.is_some_and(|p| p != epoch) {
                discard_pending();
                set_text.set(value.get_untracked());
            }
            epoch
        });
    }

    let fire = move || {
        if let Some(query) = debouncer.try_update_value(|d| d.flush()).flatten() {
            on_search.run(query);
        }
    };

    let on_input = move |ev: web_sys::Event| {
        let query = event_target_value(&ev);
        set_text.set(query.clone());
        let now = now_ms();
        let due = debouncer
            .try_update_value(|d| {
                d.push(query, now);
                d.due_at()
            })
            .flatten()
            .unwrap_or(now + delay_ms);
        // Replacing the handle cancels the previous wait
        timer.set_value(Some(Timeout::new(due.saturating_sub(now) as u32, fire)));
    };

    on_cleanup(move || {
        timer.try_update_value(|t| t.take());
        debouncer.try_update_value(|d| d.cancel());
    });

    view! {
        <div class="search-box">
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=on_input
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        timer.set_value(None);
                        fire();
                    }
                }
            />
        </div>
    }
}
