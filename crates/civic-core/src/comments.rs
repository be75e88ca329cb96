//! Nested Comment Tree
//!
//! Comments nest to a bounded depth for replying; data nested deeper than the
//! limit still renders. `reply_count` is a cached number kept in step with
//! additions and removals of direct children.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::SortKey;
use crate::error::{DomainError, DomainResult};
use crate::events::{Action, AuthGate, Intent, ItemId, VoteDirection};
use crate::validation::CharCounter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub id: ItemId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: ItemId,
    pub author: CommentAuthor,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub votes: u64,
    pub has_voted: bool,
    pub reply_count: usize,
    pub is_edited: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// "1 respuesta", "2 respuestas"
    pub fn reply_label(&self) -> String {
        if self.reply_count == 1 {
            "1 respuesta".to_string()
        } else {
            format!("{} respuestas", self.reply_count)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentSort {
    #[default]
    Newest,
    Oldest,
    Popular,
}

impl SortKey for CommentSort {
    fn as_str(&self) -> &'static str {
        match self {
            CommentSort::Newest => "newest",
            CommentSort::Oldest => "oldest",
            CommentSort::Popular => "popular",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CommentSort::Newest => "Más recientes",
            CommentSort::Oldest => "Más antiguos",
            CommentSort::Popular => "Más votados",
        }
    }

    fn all() -> &'static [Self] {
        &[CommentSort::Newest, CommentSort::Oldest, CommentSort::Popular]
    }
}

/// Every node including all descendants
pub fn total_count(comments: &[Comment]) -> usize {
    comments.iter().map(|c| 1 + total_count(&c.replies)).sum()
}

/// Owned forest of comments with a reply depth limit
#[derive(Debug, Clone, PartialEq)]
pub struct CommentTree {
    comments: Vec<Comment>,
    max_nesting_level: usize,
}

impl CommentTree {
    pub fn new(comments: Vec<Comment>, max_nesting_level: usize) -> Self {
        Self {
            comments,
            max_nesting_level,
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn total_count(&self) -> usize {
        total_count(&self.comments)
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Top-level comments sit at depth 0
    pub fn can_reply(&self, depth: usize) -> bool {
        depth < self.max_nesting_level
    }

    /// (comment, depth) pairs in display order
    pub fn flatten(&self) -> Vec<(&Comment, usize)> {
        fn collect<'a>(nodes: &'a [Comment], depth: usize, result: &mut Vec<(&'a Comment, usize)>) {
            for node in nodes {
                result.push((node, depth));
                collect(&node.replies, depth + 1, result);
            }
        }

        let mut result = Vec::with_capacity(self.total_count());
        collect(&self.comments, 0, &mut result);
        result
    }

    pub fn find(&self, id: ItemId) -> Option<&Comment> {
        fn search(nodes: &[Comment], id: ItemId) -> Option<&Comment> {
            nodes
                .iter()
                .find_map(|n| if n.id == id { Some(n) } else { search(&n.replies, id) })
        }
        search(&self.comments, id)
    }

    fn find_mut(&mut self, id: ItemId) -> DomainResult<&mut Comment> {
        fn search(nodes: &mut [Comment], id: ItemId) -> Option<&mut Comment> {
            for node in nodes {
                if node.id == id {
                    return Some(node);
                }
                if let Some(found) = search(&mut node.replies, id) {
                    return Some(found);
                }
            }
            None
        }
        search(&mut self.comments, id).ok_or(DomainError::CommentNotFound(id))
    }

    /// Append a top-level comment or a reply, bumping the parent's reply count
    pub fn add(&mut self, parent: Option<ItemId>, comment: Comment) -> DomainResult<()> {
        match parent {
            None => self.comments.insert(0, comment),
            Some(parent_id) => {
                let parent = self.find_mut(parent_id)?;
                parent.replies.push(comment);
                parent.reply_count += 1;
            }
        }
        Ok(())
    }

    pub fn edit(&mut self, id: ItemId, content: &str) -> DomainResult<()> {
        let comment = self.find_mut(id)?;
        comment.content = content.to_string();
        comment.is_edited = true;
        Ok(())
    }

    /// Remove a node and its subtree. The parent's reply count drops by one.
    pub fn remove(&mut self, id: ItemId) -> DomainResult<Comment> {
        fn take(nodes: &mut Vec<Comment>, id: ItemId) -> Option<Comment> {
            if let Some(index) = nodes.iter().position(|n| n.id == id) {
                return Some(nodes.remove(index));
            }
            for node in nodes.iter_mut() {
                if let Some(removed) = take(&mut node.replies, id) {
                    node.reply_count = node.reply_count.saturating_sub(1);
                    if node.replies.is_empty() {
                        node.reply_count = 0;
                    }
                    return Some(removed);
                }
            }
            None
        }
        take(&mut self.comments, id).ok_or(DomainError::CommentNotFound(id))
    }

    /// Record the user's vote once
    pub fn mark_voted(&mut self, id: ItemId) -> DomainResult<()> {
        let comment = self.find_mut(id)?;
        if !comment.has_voted {
            comment.has_voted = true;
            comment.votes += 1;
        }
        Ok(())
    }

    /// Move the user's vote from `previous` to `next`, adjusting the score
    pub fn apply_vote(&mut self, id: ItemId, previous: VoteDirection, next: VoteDirection) -> DomainResult<()> {
        let comment = self.find_mut(id)?;
        comment.votes = comment.votes.saturating_add_signed(next.weight() - previous.weight());
        comment.has_voted = next != VoteDirection::Neutral;
        Ok(())
    }

    /// Order top-level comments; replies keep their order
    pub fn sort(&mut self, sort: CommentSort) {
        self.comments.sort_by(|a, b| match sort {
            CommentSort::Newest => b.created_at.cmp(&a.created_at),
            CommentSort::Oldest => a.created_at.cmp(&b.created_at),
            CommentSort::Popular => b.votes.cmp(&a.votes),
        });
    }

    /// Vote gesture on one comment
    pub fn vote(&self, gate: AuthGate, id: ItemId) -> Option<Intent> {
        gate.guard(Action::Vote, || {
            let comment = self.find(id)?;
            (!comment.has_voted).then_some(Intent::Vote {
                id,
                direction: VoteDirection::Up,
            })
        })
    }
}

/// Text box for a new comment, reply or edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentComposer {
    pub text: String,
    pub min: usize,
    pub max: usize,
}

impl CommentComposer {
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            text: String::new(),
            min,
            max,
        }
    }

    pub fn counter(&self) -> CharCounter {
        CharCounter::new(&self.text, self.max)
    }

    pub fn error(&self) -> Option<String> {
        let len = self.text.trim().chars().count();
        if len == 0 {
            None
        } else if len < self.min {
            Some(format!("Mínimo {} caracteres", self.min))
        } else if len > self.max {
            Some(format!("Máximo {} caracteres", self.max))
        } else {
            None
        }
    }

    /// Submit button state
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty() && self.error().is_none()
    }

    /// Signed-out users can always press submit, so they reach the login prompt
    pub fn can_submit(&self, gate: AuthGate) -> bool {
        !gate.is_authenticated || self.is_valid()
    }

    /// Auth first, then content. Clears the box once the intent is produced.
    pub fn submit(&mut self, gate: AuthGate, parent: Option<ItemId>) -> Option<Intent> {
        let action = if parent.is_some() { Action::Reply } else { Action::Comment };
        let intent = gate.guard(action, || {
            self.is_valid().then(|| Intent::Reply {
                parent,
                content: self.text.trim().to_string(),
            })
        });
        if matches!(intent, Some(Intent::Reply { .. })) {
            self.text.clear();
        }
        intent
    }

    /// Save an edit of an existing comment
    pub fn save_edit(&mut self, id: ItemId) -> Option<Intent> {
        if !self.is_valid() {
            return None;
        }
        let content = std::mem::take(&mut self.text);
        Some(Intent::Edit {
            id,
            content: content.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn comment(id: ItemId, replies: Vec<Comment>) -> Comment {
        Comment {
            id,
            author: CommentAuthor {
                id: 1,
                name: "Juan Pérez".into(),
            },
            content: format!("Comentario {id}"),
            created_at: Utc.with_ymd_and_hms(2025, 1, id as u32, 0, 0, 0).unwrap(),
            votes: id,
            has_voted: false,
            reply_count: replies.len(),
            is_edited: false,
            can_edit: true,
            can_delete: true,
            replies,
        }
    }

    fn tree() -> CommentTree {
        CommentTree::new(
            vec![
                comment(1, vec![]),
                comment(2, vec![comment(3, vec![comment(5, vec![])]), comment(4, vec![])]),
            ],
            3,
        )
    }

    #[test]
    fn test_total_count_includes_replies() {
        assert_eq!(tree().total_count(), 5);
        let single = CommentTree::new(vec![comment(2, vec![comment(3, vec![]), comment(4, vec![])])], 3);
        assert_eq!(single.total_count(), 3);
    }

    #[test]
    fn test_flatten_display_order() {
        let tree = tree();
        let flat: Vec<(ItemId, usize)> = tree.flatten().iter().map(|(c, d)| (c.id, *d)).collect();
        assert_eq!(flat, vec![(1, 0), (2, 0), (3, 1), (5, 2), (4, 1)]);
    }

    #[test]
    fn test_can_reply_depth_limit() {
        let tree = tree();
        assert!(tree.can_reply(0));
        assert!(tree.can_reply(2));
        assert!(!tree.can_reply(3));
    }

    #[test]
    fn test_remove_maintains_reply_count() {
        let mut tree = tree();
        tree.remove(4).unwrap();
        assert_eq!(tree.find(2).unwrap().reply_count, 1);
        tree.remove(3).unwrap();
        assert_eq!(tree.find(2).unwrap().reply_count, 0);
        assert_eq!(tree.total_count(), 2);
        assert!(matches!(tree.remove(42), Err(DomainError::CommentNotFound(42))));
    }

    #[test]
    fn test_add_edit_and_vote() {
        let mut tree = tree();
        tree.add(Some(1), comment(6, vec![])).unwrap();
        assert_eq!(tree.find(1).unwrap().reply_label(), "1 respuesta");
        tree.edit(6, "Texto nuevo").unwrap();
        assert!(tree.find(6).unwrap().is_edited);
        tree.mark_voted(6).unwrap();
        tree.mark_voted(6).unwrap();
        assert_eq!(tree.find(6).unwrap().votes, 7);
        assert_eq!(tree.vote(AuthGate::new(true), 6), None);
        assert_eq!(
            tree.vote(AuthGate::new(false), 6),
            Some(Intent::LoginRequired(Action::Vote))
        );
    }

    #[test]
    fn test_up_down_vote_moves_score() {
        let mut tree = tree();
        tree.apply_vote(4, VoteDirection::Neutral, VoteDirection::Up).unwrap();
        assert_eq!(tree.find(4).unwrap().votes, 5);
        tree.apply_vote(4, VoteDirection::Up, VoteDirection::Down).unwrap();
        assert_eq!(tree.find(4).unwrap().votes, 3);
        assert!(tree.find(4).unwrap().has_voted);
        tree.apply_vote(4, VoteDirection::Down, VoteDirection::Neutral).unwrap();
        assert_eq!(tree.find(4).unwrap().votes, 4);
        assert!(!tree.find(4).unwrap().has_voted);
        assert!(tree.apply_vote(99, VoteDirection::Neutral, VoteDirection::Up).is_err());
    }

    #[test]
    fn test_sort_top_level() {
        let mut tree = tree();
        tree.sort(CommentSort::Newest);
        assert_eq!(tree.comments()[0].id, 2);
        tree.sort(CommentSort::Oldest);
        assert_eq!(tree.comments()[0].id, 1);
    }

    #[test]
    fn test_composer_limits() {
        let mut composer = CommentComposer::new(10, 20);
        assert!(!composer.is_valid());
        composer.text = "corto".into();
        assert_eq!(composer.error().as_deref(), Some("Mínimo 10 caracteres"));
        composer.text = "x".repeat(21);
        assert_eq!(composer.error().as_deref(), Some("Máximo 20 caracteres"));
        composer.text = "Un comentario".into();
        assert_eq!(composer.counter().label(), "13 / 20");
        assert!(composer.is_valid());
    }

    #[test]
    fn test_composer_submit_checks_auth_first() {
        let mut composer = CommentComposer::new(1, 500);
        assert_eq!(
            composer.submit(AuthGate::new(false), None),
            Some(Intent::LoginRequired(Action::Comment))
        );
        assert_eq!(composer.submit(AuthGate::new(true), None), None);

        composer.text = "My comment".into();
        assert_eq!(
            composer.submit(AuthGate::new(true), Some(2)),
            Some(Intent::Reply { parent: Some(2), content: "My comment".into() })
        );
        assert!(composer.text.is_empty());
    }

    #[test]
    fn test_empty_composer_submittable_when_signed_out() {
        let composer = CommentComposer::new(1, 500);
        assert!(composer.can_submit(AuthGate::new(false)));
        assert!(!composer.can_submit(AuthGate::new(true)));
        let mut composer = composer;
        assert_eq!(
            composer.submit(AuthGate::new(false), Some(4)),
            Some(Intent::LoginRequired(Action::Reply))
        );
    }
}
