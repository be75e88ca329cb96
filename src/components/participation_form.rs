//! Participation Team Form

use leptos::prelude::*;

use civic_core::forms::participation::{
    ParticipationForm, DESCRIPTION, MAX_MEMBERS, MEETING_SCHEDULE, NAME, STATUS,
};
use civic_core::tags::AddOutcome;
use civic_core::{FormState, FormValues};

use crate::components::{FieldBinding, FormActions, FormInput, FormSelect, FormTextArea, InputKind, TagListInput};
use crate::context::use_app_context;

const STATUS_OPTIONS: [(&str, &str); 3] = [("recruiting", "Reclutando"), ("active", "Activo"), ("inactive", "Inactivo")];

const TAG_SUGGESTIONS: [&str; 8] = [
    "Medio Ambiente",
    "Movilidad",
    "Cultura",
    "Educación",
    "Vivienda",
    "Juventud",
    "Mayores",
    "Deporte",
];

fn state(f: &ParticipationForm) -> &FormState {
    f.inner.form()
}

fn state_mut(f: &mut ParticipationForm) -> &mut FormState {
    f.inner.form_mut()
}

#[component]
pub fn ParticipationFormView(#[prop(optional)] initial: Option<FormValues>) -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(ParticipationForm::new(&ctx.limits(), ctx.validation(), initial.as_ref()));
    let bind = move |id: &'static str, kind: InputKind| FieldBinding::new(form, id, kind, state, state_mut);

    view! {
        <form
            class="entity-form participation-form"
            novalidate
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                let gate = ctx.gate();
                ctx.emit(form.try_update(|f| f.submit(gate)).flatten());
            }
        >
            <h2>{move || form.with(|f| f.title())}</h2>
            <FormInput
                label="Nombre del equipo"
                binding=bind(NAME, InputKind::Text)
                counter=Signal::derive(move || form.with(|f| f.name_counter()))
            />
            <FormTextArea
                label="Descripción"
                binding=bind(DESCRIPTION, InputKind::Text)
                counter=Signal::derive(move || form.with(|f| f.description_counter()))
            />
            <div class="form-row">
                <FormSelect label="Estado" binding=bind(STATUS, InputKind::Text) options=&STATUS_OPTIONS />
                <FormInput label="Máximo de miembros" binding=bind(MAX_MEMBERS, InputKind::Number) />
            </div>
            <FormInput
                label="Horario de reuniones"
                binding=bind(MEETING_SCHEDULE, InputKind::Text)
                placeholder="Ej: Martes 19:00"
            />
            <TagListInput
                label="Etiquetas"
                items=Signal::derive(move || form.with(|f| f.tags().items().to_vec()))
                counter_label=Signal::derive(move || form.with(|f| f.tags_label()))
                is_full=Signal::derive(move || form.with(|f| f.tags().is_full()))
                on_add=move |tag: String| {
                    if form.try_update(|f| f.add_tag(&tag)) == Some(AddOutcome::LimitReached) {
                        log::info!("tag limit reached, '{tag}' ignored");
                    }
                }
                on_remove=move |index: usize| {
                    form.update(|f| {
                        f.remove_tag(index);
                    });
                }
                suggestions=&TAG_SUGGESTIONS
                placeholder="Añade etiquetas separadas por comas"
            />
            <FormActions
                submit_label=Signal::derive(move || form.with(|f| f.submit_label()))
                can_submit=Signal::derive(move || !ctx.is_authenticated.get() || form.with(|f| f.inner.can_submit()))
                on_cancel=move |_| {
                    ctx.emit(Some(form.with_untracked(|f| f.inner.cancel())));
                }
            />
        </form>
    }
}
