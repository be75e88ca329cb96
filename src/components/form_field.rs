//! Form Field Inputs
//!
//! Label, input and error message bound to one field of a core form held in
//! an `RwSignal`. Typing updates the value, leaving the input marks it touched.

use leptos::prelude::*;

use civic_core::validation::CharCounter;
use civic_core::{FieldValue, FormState};

use crate::components::CharCounterView;

/// How raw input text becomes a field value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Date,
}

impl InputKind {
    fn parse(&self, raw: &str) -> FieldValue {
        match self {
            InputKind::Text => FieldValue::text(raw),
            InputKind::Number => FieldValue::parse_number(raw),
            InputKind::Date => FieldValue::parse_date(raw),
        }
    }

    fn html_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
            InputKind::Date => "date",
        }
    }
}

/// Reactive handle to one field
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub id: &'static str,
    pub kind: InputKind,
    pub value: Signal<String>,
    pub error: Signal<Option<String>>,
    pub on_input: Callback<String>,
    pub on_blur: Callback<()>,
}

impl FieldBinding {
    /// Bind `id` of the `FormState` reachable through `read`/`write`
    pub fn new<F>(
        form: RwSignal<F>,
        id: &'static str,
        kind: InputKind,
        read: fn(&F) -> &FormState,
        write: fn(&mut F) -> &mut FormState,
    ) -> Self
    where
        F: Send + Sync + 'static,
    {
        Self {
            id,
            kind,
            value: Signal::derive(move || {
                form.with(|f| read(f).value(id).map(FieldValue::display).unwrap_or_default())
            }),
            error: Signal::derive(move || form.with(|f| read(f).error(id).map(str::to_string))),
            on_input: Callback::new(move |raw: String| {
                form.update(|f| {
                    if let Err(e) = write(f).set_value(id, kind.parse(&raw)) {
                        log::warn!("input on {id}: {e}");
                    }
                });
            }),
            on_blur: Callback::new(move |_| {
                form.update(|f| {
                    if let Err(e) = write(f).blur(id) {
                        log::warn!("blur on {id}: {e}");
                    }
                });
            }),
        }
    }
}

/// Error line under an input
#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <p class="field-error">{message}</p> })
}

/// Single-line input for text, numbers or dates
#[component]
pub fn FormInput(
    label: &'static str,
    binding: FieldBinding,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] counter: Option<Signal<CharCounter>>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let error = binding.error;
    view! {
        <div class="form-field" class:has-error=move || error.get().is_some()>
            <label for=binding.id>{label}</label>
            <input
                id=binding.id
                type=binding.kind.html_type()
                placeholder=placeholder
                prop:value=move || binding.value.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| binding.on_input.run(event_target_value(&ev))
                on:blur=move |_| binding.on_blur.run(())
            />
            {counter.map(|counter| view! { <CharCounterView counter=counter /> })}
            <FieldError error=error />
        </div>
    }
}

/// Multi-line text input
#[component]
pub fn FormTextArea(
    label: &'static str,
    binding: FieldBinding,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] counter: Option<Signal<CharCounter>>,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    let error = binding.error;
    view! {
        <div class="form-field" class:has-error=move || error.get().is_some()>
            <label for=binding.id>{label}</label>
            <textarea
                id=binding.id
                rows=rows.to_string()
                placeholder=placeholder
                prop:value=move || binding.value.get()
                on:input=move |ev| binding.on_input.run(event_target_value(&ev))
                on:blur=move |_| binding.on_blur.run(())
            />
            {counter.map(|counter| view! { <CharCounterView counter=counter /> })}
            <FieldError error=error />
        </div>
    }
}

/// Select over fixed (value, label) options
#[component]
pub fn FormSelect(
    label: &'static str,
    binding: FieldBinding,
    options: &'static [(&'static str, &'static str)],
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let error = binding.error;
    view! {
        <div class="form-field" class:has-error=move || error.get().is_some()>
            <label for=binding.id>{label}</label>
            <select
                id=binding.id
                prop:value=move || binding.value.get()
                on:change=move |ev| {
                    binding.on_input.run(event_target_value(&ev));
                    binding.on_blur.run(());
                }
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
            <FieldError error=error />
        </div>
    }
}
