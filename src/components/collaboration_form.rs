//! Collaboration Form
//!
//! Dates and collaborator counts are checked against each other; skills are
//! a bounded list.

use leptos::prelude::*;

use civic_core::forms::collaboration::{
    CollaborationForm, DESCRIPTION, END_DATE, KIND, KINDS, LOCATION, MAX_COLLABORATORS, MIN_COLLABORATORS,
    START_DATE, TITLE,
};
use civic_core::{FormState, FormValues};

use crate::components::{FieldBinding, FormActions, FormInput, FormSelect, FormTextArea, InputKind, TagListInput};
use crate::context::use_app_context;

const SKILL_SUGGESTIONS: [&str; 10] = [
    "Diseño",
    "Programación",
    "Comunicación",
    "Logística",
    "Fotografía",
    "Redacción",
    "Traducción",
    "Carpintería",
    "Jardinería",
    "Enseñanza",
];

fn state(f: &CollaborationForm) -> &FormState {
    f.inner.form()
}

fn state_mut(f: &mut CollaborationForm) -> &mut FormState {
    f.inner.form_mut()
}

#[component]
pub fn CollaborationFormView(#[prop(optional)] initial: Option<FormValues>) -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(CollaborationForm::new(&ctx.limits(), ctx.validation(), initial.as_ref()));
    let bind = move |id: &'static str, kind: InputKind| FieldBinding::new(form, id, kind, state, state_mut);

    view! {
        <form
            class="entity-form collaboration-form"
            novalidate
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                let gate = ctx.gate();
                ctx.emit(form.try_update(|f| f.submit(gate)).flatten());
            }
        >
            <h2>{move || form.with(|f| f.title())}</h2>
            <FormInput
                label="Título"
                binding=bind(TITLE, InputKind::Text)
                counter=Signal::derive(move || form.with(|f| f.title_counter()))
            />
            <FormTextArea
                label="Descripción"
                binding=bind(DESCRIPTION, InputKind::Text)
                counter=Signal::derive(move || form.with(|f| f.description_counter()))
            />
            <div class="form-row">
                <FormSelect
                    label="Tipo de colaboración"
                    binding=bind(KIND, InputKind::Text)
                    options=&KINDS
                    placeholder="Selecciona un tipo"
                />
                <FormInput label="Ubicación" binding=bind(LOCATION, InputKind::Text) />
            </div>
            <div class="form-row">
                <FormInput label="Fecha de inicio" binding=bind(START_DATE, InputKind::Date) />
                <FormInput label="Fecha de fin" binding=bind(END_DATE, InputKind::Date) />
            </div>
            <div class="form-row">
                <FormInput label="Mínimo de colaboradores" binding=bind(MIN_COLLABORATORS, InputKind::Number) />
                <FormInput label="Máximo de colaboradores" binding=bind(MAX_COLLABORATORS, InputKind::Number) />
            </div>
            <TagListInput
                label="Habilidades necesarias"
                items=Signal::derive(move || form.with(|f| f.skills().items().to_vec()))
                counter_label=Signal::derive(move || form.with(|f| f.skills_label()))
                is_full=Signal::derive(move || form.with(|f| f.skills().is_full()))
                on_add=move |skill: String| {
                    form.update(|f| {
                        f.add_skill(&skill);
                    });
                }
                on_remove=move |index: usize| {
                    form.update(|f| {
                        f.remove_skill(index);
                    });
                }
                suggestions=&SKILL_SUGGESTIONS
                placeholder="Añade habilidades separadas por comas"
            />
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
