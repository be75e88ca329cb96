//! Team Card
//!
//! Participation team summary with join / leave / contact actions.

use leptos::prelude::*;

use civic_core::domain::Team;
use civic_core::widgets::TeamCard;

use crate::context::{use_app_context, DEMO_USER_ID};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TeamCardView(team: Team, is_member: bool) -> impl IntoView {
    let ctx = use_app_context();
    let team = StoredValue::new(team);
    let user_id = move || ctx.is_authenticated.get().then_some(DEMO_USER_ID);
    let card = move |f: &dyn Fn(&TeamCard) -> Option<civic_core::Intent>| {
        team.with_value(|t| f(&TeamCard::new(t, user_id(), is_member)))
    };
    let flag = move |f: fn(&TeamCard) -> bool| team.with_value(|t| f(&TeamCard::new(t, user_id(), is_member)));

    let t = team.get_value();
    let (tags, hidden) = t.visible_tags();
    let tags = tags.to_vec();

    view! {
        <article class="card team-card">
            {team.with_value(|t| TeamCard::new(t, None, is_member).banner())
                .map(|b| view! { <div class="card-banner">{b}</div> })}
            <header>
                <h3>{t.name.clone()}</h3>
                <span class="badge">{t.status.label()}</span>
            </header>
            <p>{t.description.clone()}</p>
            <p class="meta">
                {format!("{} · {}", t.leader.name, t.leader.role_label())}
            </p>
            <p class="members">{t.members_label()}</p>
            {t.occupancy_percent().map(|percent| view! {
                <div class="progress">
                    <div class="progress-bar" style=format!("width: {percent}%")></div>
                </div>
            })}
            {t.activity_level.map(|a| view! { <p class="activity">{a.label()}</p> })}
            {t.meeting_schedule.clone().map(|s| view! { <p class="schedule">{s}</p> })}
            <div class="tags">
                {tags.into_iter().map(|tag| view! { <span class="tag-chip">{tag}</span> }).collect_view()}
                {(hidden > 0).then(|| view! { <span class="tag-chip more">{format!("+{hidden}")}</span> })}
            </div>
            <div class="card-actions">
                <Show
                    when=move || is_member
                    fallback=move || view! {
                        <button
                            class="join-btn"
                            disabled=move || ctx.is_authenticated.get() && !flag(|c| c.can_join())
                            on:click=move |_| {
                                ctx.emit(card(&|c| c.join(ctx.gate())));
                            }
                        >
                            {team.with_value(|t| TeamCard::new(t, None, false).join_label())}
                        </button>
                    }
                >
                    <Show
                        when=move || flag(|c| c.can_leave())
                        fallback=|| view! { <span class="leader-note">"Eres el coordinador"</span> }
                    >
                        <button class="leave-btn" on:click=move |_| {
                            ctx.emit(card(&|c| c.leave()));
                        }>
                            "Abandonar"
                        </button>
                    </Show>
                </Show>
                <Show when=move || !flag(|c| c.is_leader())>
                    <button class="contact-btn" on:click=move |_| {
                        ctx.emit(card(&|c| c.contact_leader(ctx.gate())));
                    }>
                        "Contactar"
                    </button>
                </Show>
            </div>
        </article>
    }
}

/// Every team in the store
#[component]
pub fn TeamsGrid() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="card-grid teams-grid">
            {move || {
                let memberships = store.memberships().get();
                store
                    .teams()
                    .get()
                    .into_iter()
                    .map(|team| {
                        let is_member = memberships.contains(&team.id);
                        view! { <TeamCardView team=team is_member=is_member /> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
