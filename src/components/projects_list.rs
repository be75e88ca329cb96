//! Projects List
//!
//! Search on title, description and author; status, category and funding
//! bucket filters; recent, votes, funding and title sorts.

use leptos::prelude::*;

use civic_core::collection::{CollectionState, SortKey, ALL};
use civic_core::domain::{project, FundingBucket, Project, ProjectSort, ProjectStatus};
use civic_core::forms::project::CATEGORIES;
use civic_core::format::euros;
use civic_core::{Action, Intent, VoteDirection};

use crate::components::{CollectionToolbar, PaginationBar, SelectOption};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let ctx = use_app_context();
    let id = project.id;
    let can_vote = project.can_vote();
    let category = CATEGORIES
        .iter()
        .find(|(value, _)| *value == project.category)
        .map(|(_, label)| *label)
        .unwrap_or("Otros");
    let percent = project.funding_percent();

    view! {
        <article class="card project-card">
            <header>
                <h3>{project.title}</h3>
                <span class=format!("badge status-{}", project.status.as_str())>{project.status.label()}</span>
            </header>
            <p>{project.description}</p>
            <p class="meta">{format!("{} · {} · {}", project.author, category, project.created_at.format("%d/%m/%Y"))}</p>
            <div class="progress">
                <div class="progress-bar" style=format!("width: {percent:.0}%")></div>
            </div>
            <p class="funding">
                {format!("{} de {}", euros(project.funding_received), euros(project.funding_goal))}
            </p>
            <div class="card-actions">
                <span class="votes">{format!("{} votos", project.votes)}</span>
                <button
                    class="vote-btn"
                    class:voted=project.has_voted
                    disabled=move || ctx.is_authenticated.get() && !can_vote
                    on:click=move |_| {
                        let intent = ctx.gate().guard(Action::Vote, || {
                            can_vote.then_some(Intent::Vote { id, direction: VoteDirection::Up })
                        });
                        ctx.emit(intent);
                    }
                >
                    {if project.has_voted { "Votado" } else { "Votar" }}
                </button>
            </div>
        </article>
    }
}

#[component]
pub fn ProjectsList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let state = RwSignal::new(CollectionState::<ProjectSort>::new(ctx.limits().page_size));

    let view_data = Memo::new(move |_| {
        let items = store.projects().read();
        state.with(|s| {
            let view = s.apply(&items);
            (view.items.into_iter().cloned().collect::<Vec<_>>(), view.pagination)
        })
    });

    let filters = vec![
        (
            project::STATUS,
            "Estado",
            std::iter::once(SelectOption::new(ALL, "Todos"))
                .chain(ProjectStatus::all().into_iter().map(|s| SelectOption::new(s.as_str(), s.label())))
                .collect(),
        ),
        (
            project::CATEGORY,
            "Categoría",
            std::iter::once(SelectOption::new(ALL, "Todas"))
                .chain(CATEGORIES.iter().map(|(value, label)| SelectOption::new(value, label)))
                .collect(),
        ),
        (
            project::FUNDING,
            "Financiación",
            std::iter::once(SelectOption::new(ALL, "Cualquiera"))
                .chain(FundingBucket::all().into_iter().map(|b| SelectOption::new(b.as_str(), b.label())))
                .collect(),
        ),
    ];

    view! {
        <section class="collection projects-list">
            <CollectionToolbar state=state placeholder="Buscar proyectos..." filters=filters />
            <p class="results-label">{move || view_data.get().1.results_label("proyectos")}</p>
            <Show
                when=move || !view_data.get().0.is_empty()
                fallback=|| view! { <p class="empty">"No se encontraron proyectos con esos criterios"</p> }
            >
                <div class="card-grid">
                    {move || {
                        view_data
                            .get()
                            .0
                            .into_iter()
                            .map(|p| view! { <ProjectCard project=p /> })
                            .collect_view()
                    }}
                </div>
            </Show>
            <PaginationBar
                pagination=Signal::derive(move || view_data.get().1)
                on_page=move |page| {
                    ctx.emit(state.try_update(|s| s.set_page(page)).flatten());
                }
            />
        </section>
    }
}
