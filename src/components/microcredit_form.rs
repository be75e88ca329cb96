//! Microcredit Request Form
//!
//! Create or edit a microcredit request, with a live payment summary once
//! amount, rate and term are valid.

use leptos::prelude::*;

use civic_core::forms::microcredit::{
    MicrocreditForm, AMOUNT, CATEGORY, DESCRIPTION, INTEREST, MINIMUM_INVESTMENT, RISK, TERM, TITLE,
};
use civic_core::{FormState, FormValues};

use crate::components::{FieldBinding, FormActions, FormInput, FormSelect, FormTextArea, InputKind};
use crate::context::use_app_context;

const RISK_OPTIONS: [(&str, &str); 3] = [("low", "Riesgo bajo"), ("medium", "Riesgo medio"), ("high", "Riesgo alto")];

const CATEGORY_OPTIONS: [(&str, &str); 6] = [
    ("Negocio", "Negocio"),
    ("Agricultura", "Agricultura"),
    ("Ecología", "Ecología"),
    ("Educación", "Educación"),
    ("Artesanía", "Artesanía"),
    ("Otro", "Otro"),
];

fn state(f: &MicrocreditForm) -> &FormState {
    f.inner.form()
}

fn state_mut(f: &mut MicrocreditForm) -> &mut FormState {
    f.inner.form_mut()
}

#[component]
pub fn MicrocreditFormView(#[prop(optional)] initial: Option<FormValues>) -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(MicrocreditForm::new(&ctx.limits(), ctx.validation(), initial.as_ref()));
    let bind = move |id: &'static str, kind: InputKind| FieldBinding::new(form, id, kind, state, state_mut);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let gate = ctx.gate();
        ctx.emit(form.try_update(|f| f.submit(gate)).flatten());
    };

    view! {
        <form class="entity-form microcredit-form" on:submit=on_submit novalidate>
            <h2>{move || form.with(|f| f.title())}</h2>
            <FormInput
                label="Título"
                binding=bind(TITLE, InputKind::Text)
                placeholder="Ej: Expansión de mi panadería"
                counter=Signal::derive(move || form.with(|f| f.title_counter()))
            />
            <FormTextArea
                label="Descripción"
                binding=bind(DESCRIPTION, InputKind::Text)
                counter=Signal::derive(move || form.with(|f| f.description_counter()))
                rows=5
            />
            <div class="form-row">
                <FormInput label="Cantidad solicitada (€)" binding=bind(AMOUNT, InputKind::Number) />
                <FormInput label="Tasa de interés (%)" binding=bind(INTEREST, InputKind::Number) />
                <FormInput label="Plazo (meses)" binding=bind(TERM, InputKind::Number) />
            </div>
            <div class="form-row">
                <FormSelect label="Nivel de riesgo" binding=bind(RISK, InputKind::Text) options=&RISK_OPTIONS />
                <FormSelect
                    label="Categoría"
                    binding=bind(CATEGORY, InputKind::Text)
                    options=&CATEGORY_OPTIONS
                    placeholder="Selecciona una categoría"
                />
                <FormInput label="Inversión mínima (€)" binding=bind(MINIMUM_INVESTMENT, InputKind::Number) />
            </div>
            {move || {
                form.with(|f| f.payment_summary())
                    .map(|summary| {
                        view! {
                            <div class="payment-summary">
                                <h4>"Resumen de pagos"</h4>
                                <dl>
                                    {summary
                                        .rows()
                                        .into_iter()
                                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                        .collect_view()}
                                </dl>
                            </div>
                        }
                    })
            }}
            <FormActions
                submit_label=Signal::derive(move || form.with(|f| f.submit_label()))
                can_submit=Signal::derive(move || !ctx.is_authenticated.get() || form.with(|f| f.inner.can_submit()))
                on_cancel=move |_| {
                    ctx.emit(Some(form.with_untracked(|f| f.inner.cancel())));
                }
                on_reset=move |_| form.update(|f| f.inner.reset())
            />
        </form>
    }
}
