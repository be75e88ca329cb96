//! Submit / cancel row shared by the forms

use leptos::prelude::*;

#[component]
pub fn FormActions(
    #[prop(into)] submit_label: Signal<&'static str>,
    #[prop(into)] can_submit: Signal<bool>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(optional, into)] on_reset: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="form-actions">
            <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                "Cancelar"
            </button>
            {on_reset.map(|reset| view! {
                <button type="button" class="reset-btn" on:click=move |_| reset.run(())>
                    "Restablecer"
                </button>
            })}
            <button type="submit" class="submit-btn" disabled=move || !can_submit.get()>
                {move || submit_label.get()}
            </button>
        </div>
    }
}
