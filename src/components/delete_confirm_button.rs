//! Delete Confirm Button Component
//!
//! Inline two-phase confirmation: "Eliminar" first, then "¿Eliminar?" with
//! Sí / No. Only the confirm click produces a delete intent.

use leptos::prelude::*;

use civic_core::events::PendingConfirmation;
use civic_core::ItemId;

use crate::context::use_app_context;

#[component]
pub fn DeleteConfirmButton(
    id: ItemId,
    #[prop(into)] button_class: String,
) -> impl IntoView {
    let ctx = use_app_context();
    let pending = RwSignal::new(PendingConfirmation::default());
    let is_pending = move || pending.with(|p| p.is_pending(id));

    view! {
        <Show when=move || !is_pending()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    pending.update(|p| p.request(id));
                }
            >
                "Eliminar"
            </button>
        </Show>
        <Show when=is_pending>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"¿Eliminar?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.emit(pending.try_update(|p| p.confirm()).flatten());
                    }
                >
                    "Sí"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        pending.update(|p| p.cancel());
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
