//! Project Submission Wizard
//!
//! Four steps over one form. "Siguiente" checks only the current step,
//! the indicator jumps freely, and the final submit checks everything.

use leptos::prelude::*;

use civic_core::forms::project::{
    ProjectForm, BUDGET_BREAKDOWN, CATEGORIES, CATEGORY, DESCRIPTION, END_DATE, FUNDING_GOAL, MILESTONES,
    SKILLS_NEEDED, START_DATE, TEAM_MEMBERS, TITLE,
};
use civic_core::{FormState, FormValues, SteppedForm};

use crate::components::{
    FieldBinding, FormInput, FormSelect, FormTextArea, InputKind, StepIndicator,
};
use crate::context::use_app_context;

fn state(f: &ProjectForm) -> &FormState {
    f.wizard.form()
}

fn state_mut(f: &mut ProjectForm) -> &mut FormState {
    f.wizard.form_mut()
}

fn wizard(f: &ProjectForm) -> &SteppedForm {
    &f.wizard
}

#[component]
pub fn ProjectFormView(#[prop(optional)] initial: Option<FormValues>) -> impl IntoView {
    let ctx = use_app_context();
    let form = match ProjectForm::new(&ctx.limits(), ctx.validation(), initial.as_ref()) {
        Ok(form) => RwSignal::new(form),
        Err(e) => {
            log::error!("project form unavailable: {e}");
            return view! { <p class="field-error">"No se pudo cargar el formulario"</p> }.into_any();
        }
    };
    let bind = move |id: &'static str, kind: InputKind| FieldBinding::new(form, id, kind, state, state_mut);
    // Inputs rebuild only on step change
    let step_id = Memo::new(move |_| form.with(|f| f.wizard.current_step().id.clone()));
    let is_first = move || form.with(|f| f.wizard.is_first());
    let is_last = move || form.with(|f| f.wizard.is_last());

    let step_fields = move || match step_id.get().as_str() {
        "basic-info" => view! {
            <FormInput
                label="Título del proyecto"
                binding=bind(TITLE, InputKind::Text)
                counter=Signal::derive(move || form.with(|f| f.title_counter()))
            />
            <FormTextArea
                label="Descripción"
                binding=bind(DESCRIPTION, InputKind::Text)
                counter=Signal::derive(move || form.with(|f| f.description_counter()))
                rows=6
            />
            <FormSelect
                label="Categoría"
                binding=bind(CATEGORY, InputKind::Text)
                options=&CATEGORIES
                placeholder="Selecciona una categoría"
            />
        }
        .into_any(),
        "funding" => view! {
            <FormInput label="Objetivo de financiación (€)" binding=bind(FUNDING_GOAL, InputKind::Number) />
            <FormTextArea label="Desglose del presupuesto" binding=bind(BUDGET_BREAKDOWN, InputKind::Text) />
        }
        .into_any(),
        "team" => view! {
            <FormTextArea label="Miembros del equipo" binding=bind(TEAM_MEMBERS, InputKind::Text) />
            <FormTextArea label="Habilidades necesarias" binding=bind(SKILLS_NEEDED, InputKind::Text) rows=3 />
        }
        .into_any(),
        _ => view! {
            <div class="form-row">
                <FormInput label="Fecha de inicio" binding=bind(START_DATE, InputKind::Date) />
                <FormInput label="Fecha de finalización" binding=bind(END_DATE, InputKind::Date) />
            </div>
            <FormTextArea label="Hitos" binding=bind(MILESTONES, InputKind::Text) />
        }
        .into_any(),
    };

    view! {
        <form
            class="entity-form project-form"
            novalidate
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                let gate = ctx.gate();
                ctx.emit(form.try_update(|f| f.submit(gate)).flatten());
            }
        >
            <h2>{move || form.with(|f| f.title())}</h2>
            <StepIndicator
                form=form
                read=wizard
                on_jump=move |index: usize| {
                    match form.try_update(|f| f.jump_to(index)) {
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
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |_| {
                        ctx.emit(Some(form.with_untracked(|f| f.cancel())));
                    }
                >
                    "Cancelar"
                </button>
                <button
                    type="button"
                    class="draft-btn"
                    on:click=move |_| {
                        ctx.emit(form.with_untracked(|f| f.save_draft()));
                    }
                >
                    "Guardar borrador"
                </button>
                <Show when=move || !is_first()>
                    <button
                        type="button"
                        class="prev-btn"
                        on:click=move |_| {
                            ctx.emit(form.try_update(|f| f.previous()).flatten());
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
                                ctx.emit(form.try_update(|f| f.next()).flatten());
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
