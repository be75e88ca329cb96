//! Pagination Bar
//!
//! Previous/next buttons around a windowed page range with ellipses.

use leptos::prelude::*;

use civic_core::collection::{PageItem, Pagination};

#[component]
pub fn PaginationBar(
    #[prop(into)] pagination: Signal<Pagination>,
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    let page = move || pagination.get().page;

    view! {
        <Show when=move || { pagination.get().total_pages() > 1 }>
            <nav class="pagination" aria-label="Paginación">
                <button
                    class="page-btn"
                    disabled=move || !pagination.get().has_prev()
                    on:click=move |_| on_page.run(page() - 1)
                >
                    "Anterior"
                </button>
                {move || {
                    let current = page();
                    pagination
                        .get()
                        .page_range()
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(n) => view! {
                                <button
                                    class="page-btn"
                                    class:active={n == current}
                                    aria-current={(n == current).then_some("page")}
                                    on:click=move |_| on_page.run(n)
                                >
                                    {n}
                                </button>
                            }
                            .into_any(),
                            PageItem::Ellipsis => view! { <span class="page-ellipsis">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="page-btn"
                    disabled=move || !pagination.get().has_next()
                    on:click=move |_| on_page.run(page() + 1)
                >
                    "Siguiente"
                </button>
            </nav>
        </Show>
    }
}
