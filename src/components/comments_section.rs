//! Comments Section
//!
//! Nested comments rendered flat with depth indentation. Replies stop at the
//! configured depth; edit and delete follow each comment's permissions.

use leptos::prelude::*;

use civic_core::collection::SortKey;
use civic_core::comments::{Comment, CommentComposer, CommentSort, CommentTree};
use civic_core::format::relative_time;
use civic_core::widgets::VoteButton;
use civic_core::VoteDirection;

use crate::components::{CharCounterView, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::store::{store_comment_vote, use_app_store, AppStateStoreFields};

/// Text box with counter and submit/cancel buttons
#[component]
fn Composer(
    composer: RwSignal<CommentComposer>,
    submit_label: &'static str,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
    /// New comments and replies need a signed-in user; edits do not
    #[prop(optional)]
    gated: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let can_submit = move || {
        composer.with(|c| if gated { c.can_submit(ctx.gate()) } else { c.is_valid() })
    };
    view! {
        <div class="comment-composer">
            <textarea
                rows="3"
                placeholder="Escribe aquí..."
                prop:value=move || composer.with(|c| c.text.clone())
                on:input=move |ev| composer.update(|c| c.text = event_target_value(&ev))
            />
            <div class="composer-footer">
                <CharCounterView counter=Signal::derive(move || composer.with(|c| c.counter())) />
                {move || composer.with(|c| c.error()).map(|e| view! { <span class="field-error">{e}</span> })}
                {on_cancel.map(|cancel| view! {
                    <button type="button" class="cancel-btn" on:click=move |_| cancel.run(())>"Cancelar"</button>
                })}
                <button
                    type="button"
                    class="submit-btn"
                    disabled=move || !can_submit()
                    on:click=move |_| on_submit.run(())
                >
                    {submit_label}
                </button>
            </div>
        </div>
    }
}

#[component]
fn CommentRow(comment: Comment, depth: usize, can_reply: bool) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = comment.id;
    let limits = ctx.limits();
    let replying = RwSignal::new(false);
    let editing = RwSignal::new(false);
    let reply_composer = RwSignal::new(CommentComposer::new(limits.comment_min, limits.comment_max));
    let edit_composer = RwSignal::new(CommentComposer::new(limits.comment_min, limits.comment_max));
    let original = comment.content.clone();
    let score = comment.votes as i64;

    let vote = move |direction: VoteDirection| {
        let mut button = VoteButton::new(id, store_comment_vote(&store, id), score);
        ctx.emit(button.click(ctx.gate(), direction));
    };
    let current = move || store_comment_vote(&store, id);

    view! {
        <li class="comment" style=format!("margin-left: {}rem", depth * 2)>
            <div class="comment-header">
                <strong>{comment.author.name.clone()}</strong>
                <span class="meta">{relative_time(comment.created_at, chrono::Utc::now())}</span>
                {comment.is_edited.then(|| view! { <span class="meta">"(editado)"</span> })}
            </div>
            <Show
                when=move || editing.get()
                fallback=move || view! { <p class="comment-content">{original.clone()}</p> }
            >
                <Composer
                    composer=edit_composer
                    submit_label="Guardar"
                    on_submit=move |_| {
                        if ctx.emit(edit_composer.try_update(|c| c.save_edit(id)).flatten()) {
                            editing.set(false);
                        }
                    }
                    on_cancel=move |_| editing.set(false)
                />
            </Show>
            <div class="comment-actions">
                <button
                    class="vote-up"
                    class:active=move || current() == VoteDirection::Up
                    aria-label="Votar a favor"
                    on:click=move |_| vote(VoteDirection::Up)
                >
                    "▲"
                </button>
                <span class="score">{score}</span>
                <button
                    class="vote-down"
                    class:active=move || current() == VoteDirection::Down
                    aria-label="Votar en contra"
                    on:click=move |_| vote(VoteDirection::Down)
                >
                    "▼"
                </button>
                {can_reply.then(|| view! {
                    <button class="reply-btn" on:click=move |_| replying.update(|r| *r = !*r)>"Responder"</button>
                })}
                {comment.can_edit.then(|| {
                    let content = comment.content.clone();
                    view! {
                        <button class="edit-btn" on:click=move |_| {
                            edit_composer.update(|c| c.text = content.clone());
                            editing.set(true);
                        }>
                            "Editar"
                        </button>
                    }
                })}
                {comment.can_delete.then(|| view! { <DeleteConfirmButton id=id button_class="delete-btn" /> })}
                {(comment.reply_count > 0).then(|| view! { <span class="meta">{comment.reply_label()}</span> })}
            </div>
            <Show when=move || replying.get()>
                <Composer
                    composer=reply_composer
                    submit_label="Responder"
                    gated=true
                    on_submit=move |_| {
                        let intent = reply_composer.try_update(|c| c.submit(ctx.gate(), Some(id))).flatten();
                        if ctx.emit(intent) {
                            replying.set(false);
                        }
                    }
                    on_cancel=move |_| replying.set(false)
                />
            </Show>
        </li>
    }
}

#[component]
pub fn CommentsSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let limits = ctx.limits();
    let sort = RwSignal::new(CommentSort::default());
    let composer = RwSignal::new(CommentComposer::new(limits.comment_min, limits.comment_max));

    let tree = Memo::new(move |_| {
        let mut tree = CommentTree::new(store.comments().get(), store.max_nesting_level().get());
        tree.sort(sort.get());
        tree
    });

    let rows = move || {
        tree.with(|t| {
            t.flatten()
                .into_iter()
                .map(|(c, depth)| (c.clone(), depth, t.can_reply(depth)))
                .collect::<Vec<(Comment, usize, bool)>>()
        })
    };

    view! {
        <section class="comments-section">
            <header>
                <h3>{move || format!("Comentarios ({})", tree.with(|t| t.total_count()))}</h3>
                <select
                    prop:value=move || sort.get().as_str()
                    on:change=move |ev| {
                        if let Some(s) = CommentSort::parse(&event_target_value(&ev)) {
                            sort.set(s);
                        }
                    }
                >
                    {CommentSort::all()
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </header>
            <Composer
                composer=composer
                submit_label="Comentar"
                gated=true
                on_submit=move |_| {
                    ctx.emit(composer.try_update(|c| c.submit(ctx.gate(), None)).flatten());
                }
            />
            <Show
                when=move || !tree.with(|t| t.is_empty())
                fallback=|| view! { <p class="empty">"No hay comentarios todavía"</p> }
            >
                <ul class="comment-list">
                    {move || {
                        rows()
                            .into_iter()
                            .map(|(comment, depth, can_reply)| {
                                view! { <CommentRow comment=comment depth=depth can_reply=can_reply /> }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
