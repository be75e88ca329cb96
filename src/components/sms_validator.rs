//! SMS Code Validator
//!
//! One box per digit with auto-advance, paste fill and backspace stepping,
//! a resend countdown and a status line the parent drives.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use civic_core::widgets::{SmsState, SmsValidator};

use crate::context::{now_ms, use_app_context};

fn digit_id(index: usize) -> String {
    format!("sms-digit-{index}")
}

fn focus_digit(index: usize) {
    let element = document()
        .get_element_by_id(&digit_id(index))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(el) = element {
        let _ = el.focus();
    }
}

#[component]
pub fn SmsValidatorView(
    /// Verification result reported by the parent
    #[prop(into)]
    state: Signal<SmsState>,
) -> impl IntoView {
    let ctx = use_app_context();
    let limits = ctx.limits();
    let validator = RwSignal::new(SmsValidator::new(limits.code_length, limits.resend_timeout_secs, now_ms()));
    let (now, set_now) = signal(now_ms());

    // Once-a-second tick for the countdown label
    let ticker = StoredValue::new_local(Some(Interval::new(1_000, move || set_now.set(now_ms()))));
    on_cleanup(move || {
        ticker.try_update_value(|t| t.take());
    });

    Effect::new(move |_| {
        let reported = state.get();
        validator.update(|v| v.set_state(reported));
    });

    let code_length = limits.code_length;
    let boxes = (0..code_length)
        .map(|index| {
            view! {
                <input
                    id=digit_id(index)
                    class="sms-digit"
                    type="text"
                    inputmode="numeric"
                    maxlength="1"
                    autocomplete="one-time-code"
                    prop:value=move || validator.with(|v| v.entry.digit(index).map(String::from).unwrap_or_default())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        let intent = validator.try_update(|v| v.input(index, &text)).flatten();
                        let landed = validator.with_untracked(|v| v.entry.digit(index).is_some());
                        if landed && index + 1 < code_length {
                            focus_digit(index + 1);
                        }
                        ctx.emit(intent);
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        let empty = validator.with_untracked(|v| v.entry.digit(index).is_none());
                        if ev.key() == "Backspace" && empty {
                            ev.prevent_default();
                            let target = validator.try_update(|v| v.entry.backspace(index)).unwrap_or(index);
                            focus_digit(target);
                        }
                    }
                    on:paste=move |ev: web_sys::ClipboardEvent| {
                        ev.prevent_default();
                        let text = ev
                            .clipboard_data()
                            .and_then(|data| data.get_data("text").ok())
                            .unwrap_or_default();
                        let intent = validator.try_update(|v| v.paste(&text)).flatten();
                        let filled = validator.with_untracked(|v| v.entry.code().len());
                        focus_digit(filled.min(code_length.saturating_sub(1)));
                        ctx.emit(intent);
                    }
                />
            }
        })
        .collect_view();

    view! {
        <div class="sms-validator">
            <p class="sms-help">{move || validator.with(|v| v.help_text())}</p>
            <div class="sms-digits">{boxes}</div>
            <p class=move || format!("sms-status sms-{}", validator.with(|v| v.state().as_class()))>
                {move || validator.with(|v| v.state().message())}
            </p>
            <div class="sms-actions">
                <button
                    class="verify-btn"
                    disabled=move || !validator.with(|v| v.entry.is_complete())
                    on:click=move |_| {
                        ctx.emit(validator.with_untracked(|v| v.verify()));
                    }
                >
                    "Verificar"
                </button>
                <button
                    class="resend-btn"
                    disabled=move || !validator.with(|v| v.can_resend(now.get()))
                    on:click=move |_| {
                        ctx.emit(validator.try_update(|v| v.resend(now_ms())).flatten());
                        set_now.set(now_ms());
                    }
                >
                    {move || match validator.with(|v| v.countdown_label(now.get())) {
                        Some(label) => format!("Reenviar código ({label})"),
                        None => "Reenviar código".to_string(),
                    }}
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |_| {
                        ctx.emit(Some(validator.with_untracked(|v| v.cancel())));
                    }
                >
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
