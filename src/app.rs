//! Civic-UI Frontend App
//!
//! Component gallery: one tab per component family, with the intent log
//! in a right-hand column.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

use civic_core::widgets::SmsState;
use civic_core::{FormLimits, Intent};

use crate::components::{
    CollaborationFormView, CollaborationStatsView, CommentsSection, MicrocreditFormView, MicrocreditList,
    MicrocreditStatsView, ParticipationFormView, ProjectFormView, ProjectsList, ProposalFormView,
    ProposalsList, TeamsGrid, VerificationSteps,
};
use crate::context::AppContext;
use crate::models::SeedData;
use crate::store::{store_apply_intent, AppState, AppStateStoreFields};

/// Code the demo backend accepts
const DEMO_SMS_CODE: &str = "123456";
/// Simulated round-trip before the code result comes back
const VALIDATION_DELAY_MS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Proposals,
    Microcredits,
    Projects,
    Teams,
    Collaborations,
    Forms,
    Verification,
    Comments,
}

impl Section {
    const ALL: [Section; 8] = [
        Section::Proposals,
        Section::Microcredits,
        Section::Projects,
        Section::Teams,
        Section::Collaborations,
        Section::Forms,
        Section::Verification,
        Section::Comments,
    ];

    fn label(&self) -> &'static str {
        match self {
            Section::Proposals => "Propuestas",
            Section::Microcredits => "Microcréditos",
            Section::Projects => "Proyectos",
            Section::Teams => "Equipos",
            Section::Collaborations => "Colaboraciones",
            Section::Forms => "Formularios",
            Section::Verification => "Verificación",
            Section::Comments => "Comentarios",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKind {
    Proposal,
    Microcredit,
    Participation,
    Collaboration,
    Project,
}

impl FormKind {
    const ALL: [FormKind; 5] = [
        FormKind::Proposal,
        FormKind::Microcredit,
        FormKind::Participation,
        FormKind::Collaboration,
        FormKind::Project,
    ];

    fn label(&self) -> &'static str {
        match self {
            FormKind::Proposal => "Propuesta",
            FormKind::Microcredit => "Microcrédito",
            FormKind::Participation => "Equipo de participación",
            FormKind::Collaboration => "Colaboración",
            FormKind::Project => "Proyecto",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (limits, state) = match SeedData::load() {
        Ok(seed) => (seed.limits.clone(), AppState::from_seed(seed)),
        Err(e) => {
            log::error!("[APP] demo data failed to load: {e}");
            let limits = FormLimits::default();
            let state = AppState {
                max_nesting_level: limits.max_nesting_level,
                ..Default::default()
            };
            (limits, state)
        }
    };
    let store = Store::new(state);
    provide_context(store);

    let (is_authenticated, set_authenticated) = signal(true);
    let sms_state = RwSignal::new(SmsState::Pending);
    let section = RwSignal::new(Section::Proposals);
    let form_kind = RwSignal::new(FormKind::Proposal);

    let on_intent = Callback::new(move |intent: Intent| {
        log::info!("[APP] intent {}", intent.name());
        store_apply_intent(&store, &intent);
        match intent {
            Intent::ValidateCode(code) => {
                sms_state.set(SmsState::Validating);
                Timeout::new(VALIDATION_DELAY_MS, move || {
                    let result = if code == DEMO_SMS_CODE {
                        SmsState::Valid
                    } else {
                        SmsState::Invalid
                    };
                    sms_state.set(result);
                })
                .forget();
            }
            Intent::Resend | Intent::SendVerificationCode { .. } => sms_state.set(SmsState::Pending),
            _ => {}
        }
    });

    let ctx = AppContext::new((is_authenticated, set_authenticated), limits, on_intent);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <main class="main-content">
                <header class="app-header">
                    <h1>"Civic-UI"</h1>
                    <button class="btn btn-secondary auth-toggle" on:click=move |_| ctx.toggle_auth()>
                        {move || if is_authenticated.get() { "Cerrar sesión" } else { "Iniciar sesión" }}
                    </button>
                </header>

                <nav class="section-tabs">
                    {Section::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <button
                                    class=move || if section.get() == s { "tab active" } else { "tab" }
                                    on:click=move |_| section.set(s)
                                >
                                    {s.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                {move || match section.get() {
                    Section::Proposals => view! { <ProposalsList /> }.into_any(),
                    Section::Microcredits => {
                        view! {
                            <MicrocreditStatsView />
                            <MicrocreditList />
                        }
                            .into_any()
                    }
                    Section::Projects => view! { <ProjectsList /> }.into_any(),
                    Section::Teams => view! { <TeamsGrid /> }.into_any(),
                    Section::Collaborations => view! { <CollaborationStatsView /> }.into_any(),
                    Section::Forms => view! { <FormsGallery form_kind=form_kind /> }.into_any(),
                    Section::Verification => {
                        view! { <VerificationSteps sms_state=sms_state /> }.into_any()
                    }
                    Section::Comments => view! { <CommentsSection /> }.into_any(),
                }}
            </main>

            <aside class="intent-log">
                <h2>"Intenciones"</h2>
                <Show
                    when=move || !store.intent_log().read().is_empty()
                    fallback=|| view! { <p class="muted">"Todavía no hay intenciones"</p> }
                >
                    <ol class="intent-log-list">
                        {move || {
                            store
                                .intent_log()
                                .get()
                                .into_iter()
                                .rev()
                                .map(|line| view! { <li><code>{line}</code></li> })
                                .collect_view()
                        }}
                    </ol>
                </Show>
                <button class="btn btn-link" on:click=move |_| store.intent_log().write().clear()>
                    "Vaciar"
                </button>
            </aside>
        </div>
    }
}

/// Form picker plus the selected form
#[component]
fn FormsGallery(form_kind: RwSignal<FormKind>) -> impl IntoView {
    view! {
        <div class="forms-gallery">
            <div class="form-picker">
                {FormKind::ALL
                    .into_iter()
                    .map(|k| {
                        view! {
                            <label class="form-picker-option">
                                <input
                                    type="radio"
                                    name="form-kind"
                                    prop:checked=move || form_kind.get() == k
                                    on:change=move |_| form_kind.set(k)
                                />
                                {k.label()}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match form_kind.get() {
                FormKind::Proposal => view! { <ProposalFormView /> }.into_any(),
                FormKind::Microcredit => view! { <MicrocreditFormView /> }.into_any(),
                FormKind::Participation => view! { <ParticipationFormView /> }.into_any(),
                FormKind::Collaboration => view! { <CollaborationFormView /> }.into_any(),
                FormKind::Project => view! { <ProjectFormView /> }.into_any(),
            }}
        </div>
    }
}
