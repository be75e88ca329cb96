//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store plays
//! the parent/controller: intents coming out of components are applied here
//! the way a backend round-trip would eventually reflect them.

use chrono::Utc;
use leptos::prelude::*;
use reactive_stores::Store;

use civic_core::comments::{Comment, CommentAuthor, CommentTree};
use civic_core::domain::{Collaboration, Microcredit, Project, Proposal, Team};
use civic_core::{DomainResult, Intent, ItemId, VoteDirection};

use crate::context::DEMO_USER_ID;
use crate::models::SeedData;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub proposals: Vec<Proposal>,
    pub microcredits: Vec<Microcredit>,
    pub projects: Vec<Project>,
    pub teams: Vec<Team>,
    pub collaborations: Vec<Collaboration>,
    /// Top-level comments with their nested replies
    pub comments: Vec<Comment>,
    /// Teams the current user belongs to
    pub memberships: Vec<ItemId>,
    /// Proposals the current user has voted
    pub voted: Vec<ItemId>,
    /// Microcredits the current user has invested in
    pub investments: Vec<ItemId>,
    /// Current up/down direction per comment
    pub comment_votes: Vec<(ItemId, VoteDirection)>,
    /// JSON of every intent received, newest last
    pub intent_log: Vec<String>,
    pub max_nesting_level: usize,
}

impl AppState {
    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            max_nesting_level: seed.limits.max_nesting_level,
            memberships: seed
                .teams
                .iter()
                .filter(|t| t.leader.id == DEMO_USER_ID)
                .map(|t| t.id)
                .collect(),
            comment_votes: CommentTree::new(seed.comments.clone(), 0)
                .flatten()
                .into_iter()
                .filter(|(c, _)| c.has_voted)
                .map(|(c, _)| (c.id, VoteDirection::Up))
                .collect(),
            proposals: seed.proposals,
            microcredits: seed.microcredits,
            projects: seed.projects,
            teams: seed.teams,
            collaborations: seed.collaborations,
            comments: seed.comments,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record an intent in the log panel
pub fn store_log_intent(store: &AppStore, intent: &Intent) {
    let line = intent.to_json().unwrap_or_else(|_| intent.name().to_string());
    store.intent_log().write().push(line);
}

/// Apply an intent to the demo data. Intents with no local effect are only logged.
pub fn store_apply_intent(store: &AppStore, intent: &Intent) {
    store_log_intent(store, intent);
    let result = match intent {
        Intent::Vote { id, direction } => {
            store_vote(store, *id, *direction);
            Ok(())
        }
        Intent::Support { id } => {
            store_support_proposal(store, *id);
            Ok(())
        }
        Intent::Join { id } => {
            store_join_team(store, *id);
            Ok(())
        }
        Intent::Leave { id } => {
            store_leave_team(store, *id);
            Ok(())
        }
        Intent::Invest { id, amount } => {
            store_invest(store, *id, *amount);
            Ok(())
        }
        Intent::Reply { parent, content } => store_add_comment(store, *parent, content),
        Intent::Edit { id, content } => store_with_comments(store, |tree| tree.edit(*id, content)),
        Intent::Delete { id } => store_with_comments(store, |tree| tree.remove(*id).map(|_| ())),
        _ => Ok(()),
    };
    if let Err(e) = result {
        log::warn!("{} not applied: {e}", intent.name());
    }
}

/// Direction the user last gave a comment
pub fn store_comment_vote(store: &AppStore, id: ItemId) -> VoteDirection {
    store.comment_votes().read().iter()
        .find(|(comment, _)| *comment == id)
        .map(|(_, direction)| *direction)
        .unwrap_or_default()
}

/// Proposals and projects take single up-votes; comments move between up, down and neutral
pub fn store_vote(store: &AppStore, id: ItemId, direction: VoteDirection) {
    let is_comment = CommentTree::new(store.comments().get_untracked(), 0).find(id).is_some();
    if is_comment {
        store_vote_comment(store, id, direction);
        return;
    }
    if direction != VoteDirection::Up {
        return;
    }
    if store.proposals().read().iter().any(|p| p.id == id) {
        if !store.voted().read().contains(&id) {
            store.voted().write().push(id);
            store.proposals().write().iter_mut()
                .filter(|p| p.id == id)
                .for_each(|p| p.votes += 1);
        }
        return;
    }
    if let Some(p) = store.projects().write().iter_mut().find(|p| p.id == id) {
        if p.can_vote() {
            p.votes += 1;
            p.has_voted = true;
        }
    }
}

fn store_vote_comment(store: &AppStore, id: ItemId, direction: VoteDirection) {
    let previous = store_comment_vote(store, id);
    if store_with_comments(store, |tree| tree.apply_vote(id, previous, direction)).is_ok() {
        let comment_votes = store.comment_votes();
        let mut votes = comment_votes.write();
        votes.retain(|(comment, _)| *comment != id);
        votes.push((id, direction));
    }
}

pub fn store_support_proposal(store: &AppStore, id: ItemId) {
    if let Some(p) = store.proposals().write().iter_mut().find(|p| p.id == id) {
        if !p.supported {
            p.supported = true;
            p.supports_count += 1;
        }
    }
}

pub fn store_join_team(store: &AppStore, id: ItemId) {
    if store.memberships().read().contains(&id) {
        return;
    }
    if let Some(team) = store.teams().write().iter_mut().find(|t| t.id == id) {
        if team.is_full() {
            return;
        }
        team.member_count += 1;
    }
    store.memberships().write().push(id);
}

pub fn store_leave_team(store: &AppStore, id: ItemId) {
    let was_member = store.memberships().read().contains(&id);
    if !was_member {
        return;
    }
    store.memberships().write().retain(|m| *m != id);
    if let Some(team) = store.teams().write().iter_mut().find(|t| t.id == id) {
        team.member_count = team.member_count.saturating_sub(1);
    }
}

pub fn store_invest(store: &AppStore, id: ItemId, amount: f64) {
    if let Some(m) = store.microcredits().write().iter_mut().find(|m| m.id == id) {
        m.amount_funded = (m.amount_funded + amount).min(m.amount_requested);
    }
    if !store.investments().read().contains(&id) {
        store.investments().write().push(id);
    }
}

/// Run a tree operation on the comments and write the result back
fn store_with_comments(
    store: &AppStore,
    op: impl FnOnce(&mut CommentTree) -> DomainResult<()>,
) -> DomainResult<()> {
    let max_nesting_level = store.max_nesting_level().get_untracked();
    let mut tree = CommentTree::new(store.comments().get_untracked(), max_nesting_level);
    op(&mut tree)?;
    store.comments().set(tree.comments().to_vec());
    Ok(())
}

fn store_add_comment(store: &AppStore, parent: Option<ItemId>, content: &str) -> DomainResult<()> {
    store_with_comments(store, |tree| {
        let next_id = tree.flatten().iter().map(|(c, _)| c.id).max().unwrap_or(0) + 1;
        let comment = Comment {
            id: next_id,
            author: CommentAuthor {
                id: DEMO_USER_ID,
                name: "Tú".to_string(),
            },
            content: content.to_string(),
            created_at: Utc::now(),
            votes: 0,
            has_voted: false,
            reply_count: 0,
            is_edited: false,
            can_edit: true,
            can_delete: true,
            replies: Vec::new(),
        };
        tree.add(parent, comment)
    })
}
