//! Microcredit List
//!
//! Search over title, description, borrower and category; filters on status,
//! risk and category; amount and interest sorts.

use leptos::prelude::*;

use civic_core::collection::{CollectionState, SortKey, ALL};
use civic_core::domain::{count_label, microcredit, MicrocreditSort, MicrocreditStatus, RiskLevel};

use crate::components::{CollectionToolbar, MicrocreditCard, PaginationBar, SelectOption};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MicrocreditList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let state = RwSignal::new(CollectionState::<MicrocreditSort>::new(ctx.limits().page_size));

    let view_data = Memo::new(move |_| {
        let items = store.microcredits().read();
        state.with(|s| {
            let view = s.apply(&items);
            (view.items.into_iter().cloned().collect::<Vec<_>>(), view.pagination)
        })
    });

    let mut categories = store
        .microcredits()
        .read_untracked()
        .iter()
        .map(|m| m.category.clone())
        .collect::<Vec<_>>();
    categories.sort();
    categories.dedup();

    let all = || SelectOption::new(ALL, "Todos");
    let filters = vec![
        (
            microcredit::STATUS,
            "Estado",
            std::iter::once(all())
                .chain(MicrocreditStatus::all().into_iter().map(|s| SelectOption::new(s.as_str(), s.label())))
                .collect(),
        ),
        (
            microcredit::RISK,
            "Riesgo",
            std::iter::once(all())
                .chain(RiskLevel::all().into_iter().map(|r| SelectOption::new(r.as_str(), r.label())))
                .collect(),
        ),
        (
            microcredit::CATEGORY,
            "Categoría",
            std::iter::once(SelectOption::new(ALL, "Todas"))
                .chain(categories.iter().map(|c| SelectOption::new(c, c)))
                .collect(),
        ),
    ];

    view! {
        <section class="collection microcredit-list">
            <CollectionToolbar state=state placeholder="Buscar microcréditos..." filters=filters />
            <p class="results-label">
                {move || count_label(view_data.get().1.total_items, "microcrédito", "microcréditos")}
            </p>
            <div class="card-grid">
                {move || {
                    let invested = store.investments().get();
                    view_data
                        .get()
                        .0
                        .into_iter()
                        .map(|m| {
                            let has_invested = invested.contains(&m.id);
                            view! { <MicrocreditCard microcredit=m has_invested=has_invested /> }
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
