//! Proposal Form
//!
//! Title and description with live counters, a completion summary and
//! writing guidelines. The outcome banner is set once the submit intent
//! has been handed to the parent.

use leptos::prelude::*;

use civic_core::forms::proposal::{Notice, ProposalForm, DESCRIPTION, GUIDELINES, GUIDELINES_TITLE, TITLE};
use civic_core::{FormState, FormValues, Intent};

use crate::components::{FieldBinding, FormActions, FormInput, FormTextArea, InputKind};
use crate::context::use_app_context;

fn state(f: &ProposalForm) -> &FormState {
    f.inner.form()
}

fn state_mut(f: &mut ProposalForm) -> &mut FormState {
    f.inner.form_mut()
}

#[component]
pub fn ProposalFormView(#[prop(optional)] initial: Option<FormValues>) -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(ProposalForm::new(&ctx.limits(), ctx.validation(), initial.as_ref()));
    let bind = move |id: &'static str| FieldBinding::new(form, id, InputKind::Text, state, state_mut);
    // Labels depend only on the mode, which is fixed at construction
    let (title_label, description_label) = form.with_untracked(|f| (f.title_label(), f.description_label()));

    view! {
        <form
            class="entity-form proposal-form"
            novalidate
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                let gate = ctx.gate();
                let intent = form.try_update(|f| f.submit(gate)).flatten();
                let submitted = matches!(intent, Some(Intent::Submit(_)));
                if ctx.emit(intent) && submitted {
                    let message = if form.with_untracked(|f| f.inner.mode().is_edit()) {
                        "Propuesta actualizada exitosamente"
                    } else {
                        "Propuesta creada exitosamente"
                    };
                    form.update(|f| f.notice = Some(Notice::Success(message.to_string())));
                }
            }
        >
            <h2>{move || form.with(|f| f.title())}</h2>
            {move || {
                form.with(|f| f.notice.clone())
                    .map(|notice| view! { <div class=notice.css_class() role="alert">{notice.message().to_string()}</div> })
            }}
            <FormInput
                label=title_label
                binding=bind(TITLE)
                placeholder="Escribe un título claro y conciso"
                counter=Signal::derive(move || form.with(|f| f.title_counter()))
                disabled=Signal::derive(move || form.with(|f| f.inner.loading))
            />
            <FormTextArea
                label=description_label
                binding=bind(DESCRIPTION)
                placeholder="Describe tu propuesta en detalle"
                counter=Signal::derive(move || form.with(|f| f.description_counter()))
                rows=8
            />
            <p class="muted">{move || form.with(|f| f.description_words())}</p>

            <div class="form-stats">
                <h3>"Estado del formulario"</h3>
                <span>{move || form.with(|f| f.progress_label())}</span>
                <span class=move || {
                    if form.with(|f| f.status_label()) == "Listo" { "badge status-ready" } else { "badge status-incomplete" }
                }>
                    {move || form.with(|f| f.status_label())}
                </span>
            </div>

            <aside class="guidelines">
                <h3>{GUIDELINES_TITLE}</h3>
                <ul>{GUIDELINES.iter().map(|g| view! { <li>{*g}</li> }).collect_view()}</ul>
            </aside>

            <FormActions
                submit_label=Signal::derive(move || form.with(|f| f.submit_label()))
                can_submit=Signal::derive(move || !ctx.is_authenticated.get() || form.with(|f| f.inner.can_submit()))
                on_cancel=move |_| {
                    ctx.emit(Some(form.with_untracked(|f| f.cancel())));
                }
                on_reset=move |_| form.update(|f| f.reset_form())
            />
        </form>
    }
}
