//! Proposals List
//!
//! Search, status filter, sort and pages over the proposals in the store.

use leptos::prelude::*;

use civic_core::collection::{CollectionState, SortKey, ALL};
use civic_core::domain::{proposal, Proposal, ProposalSort, ProposalStatus, VoteData};
use civic_core::format::relative_time;
use civic_core::widgets::VotingWidget;

use crate::components::{CollectionToolbar, PaginationBar, SelectOption, VotingWidgetView};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn ProposalCard(proposal: Proposal, has_voted: bool) -> impl IntoView {
    let now = chrono::Utc::now();
    let widget = VotingWidget::new(
        proposal.id,
        VoteData {
            votes: proposal.votes,
            supports_count: proposal.supports_count,
            hotness: proposal.hotness,
            has_voted,
            has_supported: proposal.supported,
            closed: !proposal.is_open(),
        },
    );
    let status = ProposalStatus::all()
        .into_iter()
        .filter(|s| proposal.has_status(*s))
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <article class="card proposal-card">
            <header>
                <h3>{proposal.title}</h3>
                <span class="badge">{status}</span>
            </header>
            <p>{proposal.description}</p>
            <p class="meta">{relative_time(proposal.created_at, now)}</p>
            <VotingWidgetView widget=Signal::stored(widget) />
        </article>
    }
}

#[component]
pub fn ProposalsList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let state = RwSignal::new(CollectionState::<ProposalSort>::new(ctx.limits().page_size));

    let view_data = Memo::new(move |_| {
        let items = store.proposals().read();
        state.with(|s| {
            let view = s.apply(&items);
            (view.items.into_iter().cloned().collect::<Vec<_>>(), view.pagination)
        })
    });

    let status_options = std::iter::once(SelectOption::new(ALL, "Todas"))
        .chain(ProposalStatus::all().into_iter().map(|s| SelectOption::new(s.as_str(), s.label())))
        .collect::<Vec<_>>();

    view! {
        <section class="collection proposals-list">
            <CollectionToolbar
                state=state
                placeholder="Buscar propuestas..."
                filters=vec![(proposal::STATUS, "Estado", status_options)]
            />
            <p class="results-label">{move || view_data.get().1.results_label("propuestas")}</p>
            <div class="card-grid">
                {move || {
                    let voted = store.voted().get();
                    view_data
                        .get()
                        .0
                        .into_iter()
                        .map(|p| {
                            let has_voted = voted.contains(&p.id);
                            view! { <ProposalCard proposal=p has_voted=has_voted /> }
                        })
                        .collect_view()
                }}
            </div>
            <PaginationBar
                pagination=Signal::derive(move || view_data.get().1)
                on_page=move |page| {
                    ctx.emit(state.try_update(|s| s.set_page(page)).flatten());
                }
            />
        </section>
    }
}
