use crate::domain::team::{Team, TeamStatus};
use crate::events::{Action, AuthGate, Intent, ItemId};

/// Membership actions of a participation team card
#[derive(Debug, Clone, Copy)]
pub struct TeamCard<'a> {
    pub team: &'a Team,
    pub user_id: Option<ItemId>,
    pub is_member: bool,
    pub disabled: bool,
}

impl<'a> TeamCard<'a> {
    pub fn new(team: &'a Team, user_id: Option<ItemId>, is_member: bool) -> Self {
        Self {
            team,
            user_id,
            is_member,
            disabled: false,
        }
    }

    pub fn is_leader(&self) -> bool {
        self.user_id == Some(self.team.leader.id)
    }

    fn is_inactive(&self) -> bool {
        self.team.status == TeamStatus::Inactive
    }

    pub fn can_join(&self) -> bool {
        !self.disabled && !self.is_member && !self.team.is_full() && !self.is_inactive()
    }

    /// Leaders keep their team
    pub fn can_leave(&self) -> bool {
        !self.disabled && self.is_member && !self.is_leader()
    }

    pub fn join(&self, gate: AuthGate) -> Option<Intent> {
        if self.disabled {
            return None;
        }
        gate.guard(Action::Join, || {
            self.can_join().then_some(Intent::Join { id: self.team.id })
        })
    }

    pub fn leave(&self) -> Option<Intent> {
        self.can_leave().then_some(Intent::Leave { id: self.team.id })
    }

    /// Message the leader; hidden for the leader themself
    pub fn contact_leader(&self, gate: AuthGate) -> Option<Intent> {
        if self.disabled || self.is_leader() {
            return None;
        }
        gate.guard(Action::Contact, || {
            Some(Intent::Contact {
                id: self.team.leader.id,
            })
        })
    }

    pub fn join_label(&self) -> &'static str {
        if self.team.is_full() {
            "Equipo Lleno"
        } else {
            "Unirse al Equipo"
        }
    }

    /// Banner over the card body
    pub fn banner(&self) -> Option<&'static str> {
        if self.is_inactive() {
            Some("Este equipo está inactivo")
        } else if self.team.is_full() && !self.is_member {
            Some("Este equipo está completo")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::TeamLeader;

    fn team(members: u32, status: TeamStatus) -> Team {
        Team {
            id: 1,
            name: "Equipo de Medio Ambiente".into(),
            description: String::new(),
            leader: TeamLeader {
                id: 50,
                name: "María González".into(),
                role: Some("Coordinadora".into()),
            },
            member_count: members,
            max_members: Some(15),
            status,
            activity_level: None,
            tags: Vec::new(),
            meeting_schedule: None,
            last_activity: None,
        }
    }

    #[test]
    fn test_join_requires_auth_first() {
        let t = team(15, TeamStatus::Full);
        let card = TeamCard::new(&t, None, false);
        assert_eq!(card.join(AuthGate::new(false)), Some(Intent::LoginRequired(Action::Join)));
        assert_eq!(card.join(AuthGate::new(true)), None);
        assert_eq!(card.join_label(), "Equipo Lleno");
        assert_eq!(card.banner(), Some("Este equipo está completo"));
    }

    #[test]
    fn test_join_open_team() {
        let t = team(8, TeamStatus::Recruiting);
        let card = TeamCard::new(&t, Some(3), false);
        assert_eq!(card.join(AuthGate::new(true)), Some(Intent::Join { id: 1 }));
        assert_eq!(card.leave(), None);
        assert_eq!(card.banner(), None);
        assert_eq!(card.contact_leader(AuthGate::new(true)), Some(Intent::Contact { id: 50 }));
    }

    #[test]
    fn test_inactive_team_blocks_join() {
        let t = team(2, TeamStatus::Inactive);
        let card = TeamCard::new(&t, Some(3), false);
        assert!(!card.can_join());
        assert_eq!(card.banner(), Some("Este equipo está inactivo"));
    }

    #[test]
    fn test_leader_cannot_leave() {
        let t = team(8, TeamStatus::Active);
        let leader = TeamCard::new(&t, Some(50), true);
        assert!(leader.is_leader());
        assert_eq!(leader.leave(), None);
        assert_eq!(leader.contact_leader(AuthGate::new(true)), None);

        let member = TeamCard::new(&t, Some(4), true);
        assert_eq!(member.leave(), Some(Intent::Leave { id: 1 }));

        let mut disabled = member;
        disabled.disabled = true;
        assert_eq!(disabled.leave(), None);
    }
}
