//! Voting Widget
//!
//! Vote and support buttons with counters and a hotness badge. State comes
//! from the parent; clicks only emit intents.

use leptos::prelude::*;

use civic_core::widgets::VotingWidget;

use crate::context::use_app_context;

#[component]
pub fn VotingWidgetView(#[prop(into)] widget: Signal<VotingWidget>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="voting-widget">
            <span class=move || format!("hotness hotness-{}", widget.get().hotness().as_str())>
                {move || widget.get().hotness().label()}
            </span>
            <div class="voting-counts">
                <span>{move || widget.get().votes_label()}</span>
                <span>{move || widget.get().supports_label()}</span>
            </div>
            <div class="voting-actions">
                <button
                    class="vote-btn"
                    class:voted=move || widget.get().data.has_voted
                    aria-label=move || widget.get().vote_aria_label()
                    disabled=move || !widget.get().can_vote() && ctx.is_authenticated.get()
                    on:click=move |_| {
                        ctx.emit(widget.get_untracked().vote(ctx.gate()));
                    }
                >
                    {move || widget.get().vote_button_label()}
                </button>
                <button
                    class="support-btn"
                    class:supported=move || widget.get().data.has_supported
                    disabled=move || !widget.get().can_support() && ctx.is_authenticated.get()
                    on:click=move |_| {
                        ctx.emit(widget.get_untracked().support(ctx.gate()));
                    }
                >
                    {move || widget.get().support_button_label()}
                </button>
            </div>
            {move || widget.get().notice(ctx.gate()).map(|notice| view! { <p class="voting-notice">{notice}</p> })}
        </div>
    }
}
