//! Identity Verification Steps
//!
//! Personal data, document, address, phone with SMS code, then a review of
//! everything entered before sending.

use leptos::prelude::*;

use civic_core::forms::verification::{
    VerificationForm, CITY, COUNTRY_CODE, DATE_OF_BIRTH, DOCUMENT_NUMBER, DOCUMENT_TYPE, DOCUMENT_TYPES, DOOR,
    EXPIRATION_DATE, FIRST_NAME, FLOOR, LAST_NAME, NATIONALITY, NUMBER, PHONE_NUMBER, POSTAL_CODE, PROVINCE,
    STREET,
};
use civic_core::widgets::SmsState;
use civic_core::{FormState, FormValues, Intent, SteppedForm};

use crate::components::{FieldBinding, FormInput, FormSelect, InputKind, SmsValidatorView, StepIndicator};
use crate::context::use_app_context;

const COUNTRY_CODES: [(&str, &str); 4] = [("+34", "+34 España"), ("+351", "+351 Portugal"), ("+33", "+33 Francia"), ("+52", "+52 México")];

fn state(f: &VerificationForm) -> &FormState {
    f.wizard.form()
}

fn state_mut(f: &mut VerificationForm) -> &mut FormState {
    f.wizard.form_mut()
}

fn wizard(f: &VerificationForm) -> &SteppedForm {
    &f.wizard
}

#[component]
pub fn VerificationSteps(
    #[prop(into)] sms_state: Signal<SmsState>,
    #[prop(optional)] initial: Option<FormValues>,
) -> impl IntoView {
    let ctx = use_app_context();
    let form = match VerificationForm::new(ctx.validation(), initial.as_ref()) {
        Ok(form) => RwSignal::new(form),
        Err(e) => {
            log::error!("verification form unavailable: {e}");
            return view! { <p class="field-error">"No se pudo cargar la verificación"</p> }.into_any();
        }
    };
    let (code_sent, set_code_sent) = signal(false);
    let bind = move |id: &'static str, kind: InputKind| FieldBinding::new(form, id, kind, state, state_mut);
    let step_id = Memo::new(move |_| form.with(|f| f.wizard.current_step().id.clone()));
    let is_last = move || form.with(|f| f.wizard.is_last());

    let send_code = move |_: web_sys::MouseEvent| {
        let intent = form.try_update(|f| f.send_verification_code()).flatten();
        if matches!(intent, Some(Intent::SendVerificationCode { .. })) {
            set_code_sent.set(true);
        }
        ctx.emit(intent);
    };

    let step_fields = move || match step_id.get().as_str() {
        "personal" => view! {
            <div class="form-row">
                <FormInput label="Nombre" binding=bind(FIRST_NAME, InputKind::Text) />
                <FormInput label="Apellidos" binding=bind(LAST_NAME, InputKind::Text) />
            </div>
            <div class="form-row">
                <FormInput label="Fecha de nacimiento" binding=bind(DATE_OF_BIRTH, InputKind::Date) />
                <FormInput label="Nacionalidad" binding=bind(NATIONALITY, InputKind::Text) />
            </div>
        }
        .into_any(),
        "document" => view! {
            <FormSelect
                label="Tipo de documento"
                binding=bind(DOCUMENT_TYPE, InputKind::Text)
                options=&DOCUMENT_TYPES
                placeholder="Selecciona un documento"
            />
            <div class="form-row">
                <FormInput label="Número de documento" binding=bind(DOCUMENT_NUMBER, InputKind::Text) />
                <FormInput label="Fecha de caducidad" binding=bind(EXPIRATION_DATE, InputKind::Date) />
            </div>
        }
        .into_any(),
        "address" => view! {
            <div class="form-row">
                <FormInput label="Calle" binding=bind(STREET, InputKind::Text) />
                <FormInput label="Número" binding=bind(NUMBER, InputKind::Text) />
                <FormInput label="Piso" binding=bind(FLOOR, InputKind::Text) />
                <FormInput label="Puerta" binding=bind(DOOR, InputKind::Text) />
            </div>
            <div class="form-row">
                <FormInput label="Código postal" binding=bind(POSTAL_CODE, InputKind::Text) />
                <FormInput label="Ciudad" binding=bind(CITY, InputKind::Text) />
                <FormInput label="Provincia" binding=bind(PROVINCE, InputKind::Text) />
            </div>
        }
        .into_any(),
        "phone" => view! {
            <div class="form-row">
                <FormSelect label="Prefijo" binding=bind(COUNTRY_CODE, InputKind::Text) options=&COUNTRY_CODES />
                <FormInput label="Teléfono" binding=bind(PHONE_NUMBER, InputKind::Text) placeholder="600123456" />
            </div>
            <Show
                when=move || code_sent.get()
                fallback=move || view! {
                    <button type="button" class="send-code-btn" on:click=send_code>
                        "Enviar código"
                    </button>
                }
            >
                <SmsValidatorView state=sms_state />
            </Show>
        }
        .into_any(),
        _ => view! {
            <dl class="review-summary">
                {move || {
                    form.with(|f| f.summary())
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect_view()
                }}
            </dl>
        }
        .into_any(),
    };

    view! {
        <form
            class="entity-form verification-form"
            novalidate
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                let gate = ctx.gate();
                ctx.emit(form.try_update(|f| f.submit(gate)).flatten());
            }
        >
            <h2>"Verificación de Identidad"</h2>
            <p class="verification-status">
                {move || format!("Estado: {}", form.with(|f| f.status.label()))}
            </p>
            <StepIndicator
                form=form
                read=wizard
                on_jump=move |index: usize| {
                    match form.try_update(|f| f.wizard.jump_to(index)) {
                        Some(Ok(intent)) => {
                            ctx.emit(intent);
                        }
                        Some(Err(e)) => log::warn!("step jump: {e}"),
                        None => {}
                    }
                }
            />
            <h3>{move || form.with(|f| f.wizard.current_step().title.clone())}</h3>
            {step_fields}
            <div class="form-actions">
                <Show when=move || !form.with(|f| f.wizard.is_first())>
                    <button
                        type="button"
                        class="prev-btn"
                        on:click=move |_| {
                            ctx.emit(form.try_update(|f| f.wizard.previous()).flatten());
                        }
                    >
                        "Anterior"
                    </button>
                </Show>
                <Show
                    when=is_last
                    fallback=move || view! {
                        <button
                            type="button"
                            class="next-btn"
                            on:click=move |_| {
                                ctx.emit(form.try_update(|f| f.wizard.next()).flatten());
                            }
                        >
                            "Siguiente"
                        </button>
                    }
                >
                    <button type="submit" class="submit-btn">
                        {move || form.with(|f| f.submit_label())}
                    </button>
                </Show>
            </div>
        </form>
    }
    .into_any()
}
