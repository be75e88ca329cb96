//! Collection Toolbar
//!
//! Debounced search, one select per filter dimension, the sort select and
//! "Limpiar filtros". Every change updates the list state and notifies the parent.

use leptos::prelude::*;

use civic_core::collection::{CollectionState, SortKey};

use crate::components::SearchBox;
use crate::context::use_app_context;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// (dimension, label, options)
pub type FilterSpec = (&'static str, &'static str, Vec<SelectOption>);

#[component]
pub fn CollectionToolbar<S>(
    state: RwSignal<CollectionState<S>>,
    placeholder: &'static str,
    #[prop(optional)] filters: Vec<FilterSpec>,
) -> impl IntoView
where
    S: SortKey + Send + Sync,
{
    let ctx = use_app_context();
    // Only real changes of the applied query reach the search box
    let search = Memo::new(move |_| state.with(|s| s.search().to_string()));
    let clears = RwSignal::new(0u64);
    let clear_filters = move |_: web_sys::MouseEvent| {
        let intents = state.try_update(|s| s.clear_filters()).unwrap_or_default();
        clears.update(|n| *n += 1);
        for intent in intents {
            ctx.emit(Some(intent));
        }
    };

    let filter_views = filters
        .into_iter()
        .map(|(dimension, label, options)| {
            let selected = move || state.with(|s| s.filter(dimension).to_string());
            view! {
                <label class="toolbar-filter">
                    <span>{label}</span>
                    <select
                        prop:value=selected
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.emit(state.try_update(|s| s.set_filter(dimension, &value)));
                        }
                    >
                        {options
                            .into_iter()
                            .map(|o| view! { <option value=o.value>{o.label}</option> })
                            .collect_view()}
                    </select>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="collection-toolbar">
            <SearchBox
                value=search
                placeholder=placeholder
                delay_ms=ctx.limits().search_debounce_ms
                reset=clears
                on_search=move |query: String| {
                    ctx.emit(state.try_update(|s| s.set_search(&query)));
                }
            />
            {filter_views}
            <label class="toolbar-sort">
                <span>"Ordenar por"</span>
                <select
                    prop:value=move || state.with(|s| s.sort().as_str())
                    on:change=move |ev| {
                        if let Some(sort) = S::parse(&event_target_value(&ev)) {
                            ctx.emit(state.try_update(|s| s.set_sort(sort)));
                        }
                    }
                >
                    {S::all()
                        .iter()
                        .map(|sort| view! { <option value=sort.as_str()>{sort.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <Show when=move || state.with(|s| s.has_active_filters())>
                <button class="clear-filters-btn" on:click=clear_filters>
                    "Limpiar filtros"
                </button>
            </Show>
        </div>
    }
}
