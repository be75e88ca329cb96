//! Domain Items
//!
//! Read-only data the lists and cards display, with the search fields,
//! filter dimensions and sort orders each list offers.

pub mod collaboration;
pub mod microcredit;
pub mod project;
pub mod proposal;
pub mod team;
pub mod vote;

pub use collaboration::{Collaboration, CollaborationStatus};
pub use microcredit::{Borrower, Microcredit, MicrocreditSort, MicrocreditStatus, RiskLevel};
pub use project::{FundingBucket, Project, ProjectSort, ProjectStatus};
pub use proposal::{Proposal, ProposalSort, ProposalStatus};
pub use team::{ActivityLevel, Team, TeamLeader, TeamStatus};
pub use vote::{Hotness, VoteData};

/// "1 microcrédito", "3 microcréditos"
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{CollectionState, SortKey};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn proposal(id: u64, supports: u64, hotness: u64, day: u32, flags: (bool, bool, bool)) -> Proposal {
        Proposal {
            id,
            title: format!("Propuesta {id}"),
            description: format!("Descripción de la propuesta {id}"),
            votes: 0,
            supports_count: supports,
            hotness,
            created_at: Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap(),
            finishes_at: None,
            reddit_threshold: flags.0,
            supported: false,
            finished: flags.1,
            discarded: flags.2,
        }
    }

    fn proposals() -> Vec<Proposal> {
        vec![
            proposal(1, 200, 5000, 1, (true, false, false)),
            proposal(2, 100, 3000, 15, (false, false, false)),
            proposal(3, 150, 4000, 10, (false, true, false)),
            proposal(4, 20, 500, 20, (false, false, true)),
        ]
    }

    fn microcredit(id: u64, title: &str, borrower: &str, amount: f64, rate: f64, risk: RiskLevel, category: &str) -> Microcredit {
        Microcredit {
            id,
            title: title.to_string(),
            description: String::new(),
            borrower: Borrower {
                id: id + 100,
                name: borrower.to_string(),
                location: None,
            },
            amount_requested: amount,
            amount_funded: 0.0,
            interest_rate: rate,
            term_months: 12,
            status: MicrocreditStatus::Funding,
            risk_level: risk,
            category: category.to_string(),
            deadline: None,
            investors_count: 0,
        }
    }

    fn microcredits() -> Vec<Microcredit> {
        vec![
            microcredit(1, "Expansión de Panadería", "María García", 5000.0, 5.5, RiskLevel::Low, "Negocio"),
            microcredit(2, "Taller de Bicicletas", "Carlos Ruiz", 3000.0, 6.0, RiskLevel::Medium, "Ecología"),
            microcredit(3, "Huerto Urbano", "Ana López", 2000.0, 5.0, RiskLevel::Low, "Agricultura"),
        ]
    }

    fn project(id: u64, title: &str, goal: f64, votes: u64, status: ProjectStatus, day: u32) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: String::new(),
            category: "social".to_string(),
            funding_goal: goal,
            funding_received: 0.0,
            votes,
            has_voted: false,
            status,
            author: "Autora".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        }
    }

    fn projects() -> Vec<Project> {
        vec![
            project(1, "Centro Comunitario", 50_000.0, 156, ProjectStatus::Voting, 15),
            project(2, "Plataforma Digital", 20_000.0, 89, ProjectStatus::Voting, 20),
            project(3, "Festival Cultural", 120_000.0, 234, ProjectStatus::Funded, 10),
            project(4, "Huertos Urbanos", 15_000.0, 67, ProjectStatus::Evaluation, 25),
            project(5, "Programa Educativo", 30_000.0, 145, ProjectStatus::Voting, 18),
        ]
    }

    fn ids<T>(items: &[&T], id: impl Fn(&T) -> u64) -> Vec<u64> {
        items.iter().map(|item| id(item)).collect()
    }

    #[test]
    fn test_proposal_sorts() {
        let items = proposals();
        let mut state = CollectionState::<ProposalSort>::new(10);
        assert_eq!(ids(&state.apply(&items).items, |p| p.id), vec![4, 2, 3, 1]);
        state.set_sort(ProposalSort::Popular);
        assert_eq!(state.apply(&items).items[0].id, 1);
        state.set_sort(ProposalSort::Hot);
        assert_eq!(ids(&state.apply(&items).items, |p| p.id), vec![1, 3, 2, 4]);
        state.set_sort(ProposalSort::Time);
        assert_eq!(state.apply(&items).items[0].id, 1);
    }

    #[test]
    fn test_proposal_status_filters() {
        let items = proposals();
        let mut state = CollectionState::<ProposalSort>::new(10);
        state.set_filter(proposal::STATUS, "active");
        assert_eq!(state.apply(&items).total(), 2);
        state.set_filter(proposal::STATUS, "threshold");
        assert_eq!(ids(&state.apply(&items).items, |p| p.id), vec![1]);
        state.set_filter(proposal::STATUS, "discarded");
        assert_eq!(ids(&state.apply(&items).items, |p| p.id), vec![4]);
    }

    #[test]
    fn test_proposal_search_matches_description() {
        let items = proposals();
        let mut state = CollectionState::<ProposalSort>::new(10);
        state.set_search("PROPUESTA 2");
        assert_eq!(ids(&state.apply(&items).items, |p| p.id), vec![2]);
    }

    #[test]
    fn test_microcredit_amount_sorts() {
        let items = microcredits();
        let mut state = CollectionState::<MicrocreditSort>::new(10);
        assert_eq!(ids(&state.apply(&items).items, |m| m.id), vec![1, 2, 3]);
        state.set_sort(MicrocreditSort::AmountHigh);
        let amounts: Vec<f64> = state.apply(&items).items.iter().map(|m| m.amount_requested).collect();
        assert_eq!(amounts, vec![5000.0, 3000.0, 2000.0]);
        state.set_sort(MicrocreditSort::AmountLow);
        let amounts: Vec<f64> = state.apply(&items).items.iter().map(|m| m.amount_requested).collect();
        assert_eq!(amounts, vec![2000.0, 3000.0, 5000.0]);
        state.set_sort(MicrocreditSort::InterestHigh);
        assert_eq!(state.apply(&items).items[0].interest_rate, 6.0);
        state.set_sort(MicrocreditSort::InterestLow);
        assert_eq!(state.apply(&items).items[0].interest_rate, 5.0);
    }

    #[test]
    fn test_microcredit_search_and_filters() {
        let items = microcredits();
        let mut state = CollectionState::<MicrocreditSort>::new(10);
        state.set_search("carlos");
        assert_eq!(ids(&state.apply(&items).items, |m| m.id), vec![2]);
        state.set_search("agricultura");
        assert_eq!(ids(&state.apply(&items).items, |m| m.id), vec![3]);
        state.clear_filters();
        state.set_filter(microcredit::RISK, "low");
        assert_eq!(state.apply(&items).total(), 2);
        state.set_filter(microcredit::CATEGORY, "Negocio");
        assert_eq!(ids(&state.apply(&items).items, |m| m.id), vec![1]);
        assert_eq!(count_label(state.apply(&items).total(), "microcrédito", "microcréditos"), "1 microcrédito");
    }

    #[test]
    fn test_project_funding_buckets() {
        let items = projects();
        let mut state = CollectionState::<ProjectSort>::new(10);
        state.set_filter(project::FUNDING, "low");
        assert_eq!(state.apply(&items).total(), 2);
        state.set_filter(project::FUNDING, "medium");
        assert_eq!(state.apply(&items).total(), 2);
        state.set_filter(project::FUNDING, "high");
        assert_eq!(ids(&state.apply(&items).items, |p| p.id), vec![3]);
        assert_eq!(FundingBucket::of(25_000.0), FundingBucket::Low);
        assert_eq!(FundingBucket::of(100_000.0), FundingBucket::Medium);
    }

    #[test]
    fn test_project_sorts_and_combined_filters() {
        let items = projects();
        let mut state = CollectionState::<ProjectSort>::new(10);
        assert_eq!(state.apply(&items).items[0].id, 4);
        state.set_sort(ProjectSort::Votes);
        assert_eq!(state.apply(&items).items[0].votes, 234);
        state.set_sort(ProjectSort::Title);
        assert_eq!(state.apply(&items).items[0].title, "Centro Comunitario");
        assert_eq!(ProjectSort::parse("funding"), Some(ProjectSort::Funding));

        state.set_filter(project::STATUS, "voting");
        state.set_filter(project::FUNDING, "medium");
        // filters keep the selected sort
        assert_eq!(ids(&state.apply(&items).items, |p| p.id), vec![1, 5]);
        state.set_sort(ProjectSort::Recent);
        assert_eq!(ids(&state.apply(&items).items, |p| p.id), vec![5, 1]);
    }

    #[test]
    fn test_team_occupancy() {
        let mut team = Team {
            id: 1,
            name: "Equipo de Medio Ambiente".into(),
            description: String::new(),
            leader: TeamLeader { id: 7, name: "María González".into(), role: None },
            member_count: 8,
            max_members: Some(15),
            status: TeamStatus::Recruiting,
            activity_level: Some(ActivityLevel::High),
            tags: vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
            meeting_schedule: None,
            last_activity: None,
        };
        assert_eq!(team.occupancy_percent(), Some(53));
        assert_eq!(team.members_label(), "8 / 15 miembros");
        assert!(!team.is_full());
        assert_eq!(team.visible_tags().1, 2);
        assert_eq!(team.leader.role_label(), "Coordinador");

        team.member_count = 15;
        assert!(team.is_full());
        team.max_members = None;
        assert_eq!(team.occupancy_percent(), None);
        assert_eq!(team.members_label(), "15 miembros");
    }
}
