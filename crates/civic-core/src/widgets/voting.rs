use serde::Serialize;

use crate::domain::vote::{Hotness, VoteData};
use crate::domain::count_label;
use crate::events::{Action, AuthGate, Intent, ItemId, VoteDirection};
use crate::format::compact_count;

/// Vote and support buttons of a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VotingWidget {
    pub id: ItemId,
    pub data: VoteData,
    pub disabled: bool,
    pub loading: bool,
}

impl VotingWidget {
    pub fn new(id: ItemId, data: VoteData) -> Self {
        Self {
            id,
            data,
            disabled: false,
            loading: false,
        }
    }

    /// Closed, disabled and loading controls emit nothing at all
    fn is_inert(&self) -> bool {
        self.data.closed || self.disabled || self.loading
    }

    pub fn can_vote(&self) -> bool {
        !self.is_inert() && !self.data.has_voted
    }

    pub fn can_support(&self) -> bool {
        !self.is_inert() && !self.data.has_supported
    }

    pub fn vote(&self, gate: AuthGate) -> Option<Intent> {
        if self.is_inert() {
            return None;
        }
        gate.guard(Action::Vote, || {
            (!self.data.has_voted).then_some(Intent::Vote {
                id: self.id,
                direction: VoteDirection::Up,
            })
        })
    }

    pub fn support(&self, gate: AuthGate) -> Option<Intent> {
        if self.is_inert() {
            return None;
        }
        gate.guard(Action::Support, || {
            (!self.data.has_supported).then_some(Intent::Support { id: self.id })
        })
    }

    /// Record a confirmed vote locally
    pub fn apply_vote(&mut self) {
        if !self.data.has_voted {
            self.data.has_voted = true;
            self.data.votes += 1;
        }
    }

    pub fn apply_support(&mut self) {
        if !self.data.has_supported {
            self.data.has_supported = true;
            self.data.supports_count += 1;
        }
    }

    pub fn hotness(&self) -> Hotness {
        Hotness::of(self.data.hotness)
    }

    /// "1.2K votos", "1 voto"
    pub fn votes_label(&self) -> String {
        counted(self.data.votes, "voto", "votos")
    }

    pub fn supports_label(&self) -> String {
        counted(self.data.supports_count, "apoyo", "apoyos")
    }

    pub fn vote_button_label(&self) -> &'static str {
        if self.data.has_voted { "Votado" } else { "Votar" }
    }

    pub fn support_button_label(&self) -> &'static str {
        if self.data.has_supported { "Apoyado" } else { "Apoyar" }
    }

    pub fn vote_aria_label(&self) -> &'static str {
        if self.data.has_voted { "Ya has votado" } else { "Votar esta propuesta" }
    }

    /// Line shown under the buttons, if any
    pub fn notice(&self, gate: AuthGate) -> Option<&'static str> {
        if self.data.closed {
            Some("La votación ha finalizado")
        } else if !gate.is_authenticated {
            Some("Inicia sesión para participar")
        } else {
            None
        }
    }
}

fn counted(n: u64, singular: &str, plural: &str) -> String {
    if n >= 1_000 {
        format!("{} {plural}", compact_count(n))
    } else {
        count_label(n as usize, singular, plural)
    }
}

/// Direction after clicking `clicked`; clicking the active one withdraws it
pub fn toggle_vote(current: VoteDirection, clicked: VoteDirection) -> VoteDirection {
    if current == clicked {
        VoteDirection::Neutral
    } else {
        clicked
    }
}

/// Up/down vote control used on comments and debates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VoteButton {
    pub id: ItemId,
    pub current: VoteDirection,
    pub score: i64,
}

impl VoteButton {
    pub fn new(id: ItemId, current: VoteDirection, score: i64) -> Self {
        Self { id, current, score }
    }

    /// Toggle locally and describe the new direction
    pub fn click(&mut self, gate: AuthGate, clicked: VoteDirection) -> Option<Intent> {
        gate.guard(Action::Vote, || {
            let next = toggle_vote(self.current, clicked);
            self.score += next.weight() - self.current.weight();
            self.current = next;
            Some(Intent::Vote {
                id: self.id,
                direction: next,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(data: VoteData) -> VotingWidget {
        VotingWidget::new(9, data)
    }

    #[test]
    fn test_login_required_before_vote() {
        let w = widget(VoteData::default());
        assert_eq!(w.vote(AuthGate::new(false)), Some(Intent::LoginRequired(Action::Vote)));
        assert_eq!(w.support(AuthGate::new(false)), Some(Intent::LoginRequired(Action::Support)));
        assert_eq!(w.notice(AuthGate::new(false)), Some("Inicia sesión para participar"));
    }

    #[test]
    fn test_vote_and_support() {
        let mut w = widget(VoteData::default());
        let gate = AuthGate::new(true);
        assert_eq!(
            w.vote(gate),
            Some(Intent::Vote { id: 9, direction: VoteDirection::Up })
        );
        assert_eq!(w.support(gate), Some(Intent::Support { id: 9 }));
        w.apply_vote();
        w.apply_vote();
        assert_eq!(w.data.votes, 1);
        assert_eq!(w.vote(gate), None);
        assert_eq!(w.vote_button_label(), "Votado");
        assert_eq!(w.vote_aria_label(), "Ya has votado");
        assert_eq!(w.votes_label(), "1 voto");
    }

    #[test]
    fn test_closed_and_loading_emit_nothing() {
        let closed = widget(VoteData { closed: true, ..VoteData::default() });
        assert_eq!(closed.vote(AuthGate::new(false)), None);
        assert_eq!(closed.notice(AuthGate::new(true)), Some("La votación ha finalizado"));

        let mut loading = widget(VoteData::default());
        loading.loading = true;
        assert_eq!(loading.support(AuthGate::new(true)), None);
        assert!(!loading.can_support());
    }

    #[test]
    fn test_labels() {
        let w = widget(VoteData {
            votes: 1_234,
            supports_count: 0,
            hotness: 12_000,
            ..VoteData::default()
        });
        assert_eq!(w.votes_label(), "1.2K votos");
        assert_eq!(w.supports_label(), "0 apoyos");
        assert_eq!(w.hotness(), Hotness::Hot);
    }

    #[test]
    fn test_toggle_vote() {
        use VoteDirection::*;
        assert_eq!(toggle_vote(Neutral, Up), Up);
        assert_eq!(toggle_vote(Up, Up), Neutral);
        assert_eq!(toggle_vote(Up, Down), Down);

        let mut button = VoteButton::new(3, Neutral, 10);
        let gate = AuthGate::new(true);
        button.click(gate, Up);
        assert_eq!(button.score, 11);
        button.click(gate, Down);
        assert_eq!((button.current, button.score), (Down, 9));
        let out = button.click(gate, Down);
        assert_eq!(out, Some(Intent::Vote { id: 3, direction: Neutral }));
        assert_eq!(button.score, 10);
    }
}
