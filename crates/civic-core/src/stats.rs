//! Summary Statistics
//!
//! Aggregates shown above the microcredit and collaboration lists. Rates are
//! whole percentages; averages over an empty list are zero.

use serde::Serialize;

use crate::domain::collaboration::{Collaboration, CollaborationStatus};
use crate::domain::microcredit::{Microcredit, MicrocreditStatus, RiskLevel};

/// Categories listed in the microcredit breakdown
pub const TOP_CATEGORIES: usize = 5;
/// Types listed in the collaboration breakdown
pub const TOP_TYPES: usize = 5;
/// Skills listed in the collaboration breakdown
pub const TOP_SKILLS: usize = 10;

/// `part` over `whole`, rounded; 0 when `whole` is 0
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

/// Label frequencies, most frequent first; ties keep first appearance
fn ranked<'a>(labels: impl Iterator<Item = &'a str>, limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for label in labels.filter(|l| !l.trim().is_empty()) {
        match counts.iter_mut().find(|(l, _)| l == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }
    // stable sort keeps first appearance among equals
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MicrocreditStats {
    pub total: usize,
    /// Raising money or paying it back
    pub active: usize,
    pub total_requested: f64,
    pub total_funded: f64,
    pub total_investors: u64,
    /// Reached their goal at some point
    pub funded: usize,
    pub completed: usize,
    pub defaulted: usize,
    pub by_status: Vec<(MicrocreditStatus, usize)>,
    pub by_risk: Vec<(RiskLevel, usize)>,
    pub top_categories: Vec<(String, usize)>,
    pub average_interest: f64,
    pub average_term_months: u32,
}

impl MicrocreditStats {
    pub fn compute(items: &[Microcredit]) -> Self {
        let count = |status: MicrocreditStatus| items.iter().filter(|m| m.status == status).count();
        let total = items.len();
        let (average_interest, average_term_months) = if total == 0 {
            (0.0, 0)
        } else {
            let rate: f64 = items.iter().map(|m| m.interest_rate).sum();
            let term: u32 = items.iter().map(|m| m.term_months).sum();
            (rate / total as f64, (term as f64 / total as f64).round() as u32)
        };
        Self {
            total,
            active: count(MicrocreditStatus::Funding) + count(MicrocreditStatus::Repaying),
            total_requested: items.iter().map(|m| m.amount_requested).sum(),
            total_funded: items.iter().map(|m| m.amount_funded).sum(),
            total_investors: items.iter().map(|m| u64::from(m.investors_count)).sum(),
            funded: count(MicrocreditStatus::Funded)
                + count(MicrocreditStatus::Repaying)
                + count(MicrocreditStatus::Completed),
            completed: count(MicrocreditStatus::Completed),
            defaulted: count(MicrocreditStatus::Defaulted),
            by_status: MicrocreditStatus::all().into_iter().map(|s| (s, count(s))).collect(),
            by_risk: RiskLevel::all()
                .into_iter()
                .map(|r| (r, items.iter().filter(|m| m.risk_level == r).count()))
                .collect(),
            top_categories: ranked(items.iter().map(|m| m.category.as_str()), TOP_CATEGORIES),
            average_interest,
            average_term_months,
        }
    }

    /// Funded over requested across the list, 0 to 100
    pub fn funding_percent(&self) -> u32 {
        if self.total_requested <= 0.0 {
            return 0;
        }
        (self.total_funded / self.total_requested * 100.0).round().clamp(0.0, 100.0) as u32
    }

    /// Completed over everything that reached an end, repaid or not
    pub fn success_rate(&self) -> u32 {
        percent(self.completed, self.completed + self.defaulted)
    }

    /// Share of the list at a risk level
    pub fn risk_percent(&self, level: RiskLevel) -> u32 {
        let n = self.by_risk.iter().find(|(r, _)| *r == level).map_or(0, |(_, n)| *n);
        percent(n, self.total)
    }

    /// "5.6%"
    pub fn average_interest_label(&self) -> String {
        if self.average_interest == 0.0 {
            return "0%".to_string();
        }
        format!("{:.1}%", self.average_interest)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollaborationStats {
    pub total: usize,
    pub active: usize,
    pub total_collaborators: u64,
    pub average_collaborators: u32,
    pub completed: usize,
    pub cancelled: usize,
    /// Open with seats left
    pub seeking: usize,
    pub full: usize,
    pub by_status: Vec<(CollaborationStatus, usize)>,
    pub by_type: Vec<(String, usize)>,
    pub top_skills: Vec<(String, usize)>,
}

impl CollaborationStats {
    pub fn compute(items: &[Collaboration]) -> Self {
        let count = |status: CollaborationStatus| items.iter().filter(|c| c.status == status).count();
        let total = items.len();
        let total_collaborators: u64 = items.iter().map(|c| u64::from(c.current_collaborators)).sum();
        let average_collaborators = if total == 0 {
            0
        } else {
            (total_collaborators as f64 / total as f64).round() as u32
        };
        Self {
            total,
            active: items.iter().filter(|c| c.is_active()).count(),
            total_collaborators,
            average_collaborators,
            completed: count(CollaborationStatus::Completed),
            cancelled: count(CollaborationStatus::Cancelled),
            seeking: items
                .iter()
                .filter(|c| c.status == CollaborationStatus::Open && !c.is_full())
                .count(),
            full: items.iter().filter(|c| c.is_full()).count(),
            by_status: CollaborationStatus::all().into_iter().map(|s| (s, count(s))).collect(),
            by_type: ranked(items.iter().map(|c| c.kind.as_str()), TOP_TYPES),
            top_skills: ranked(items.iter().flat_map(|c| c.skills.iter().map(String::as_str)), TOP_SKILLS),
        }
    }

    /// Completed over everything that ended, finished or cancelled
    pub fn completion_rate(&self) -> u32 {
        percent(self.completed, self.completed + self.cancelled)
    }

    pub fn most_active_type(&self) -> Option<&(String, usize)> {
        self.by_type.first()
    }

    pub fn most_popular_skill(&self) -> Option<&(String, usize)> {
        self.top_skills.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::microcredit::Borrower;

    #[allow(clippy::too_many_arguments)]
    fn microcredit(
        id: u64,
        requested: f64,
        funded: f64,
        rate: f64,
        term: u32,
        status: MicrocreditStatus,
        risk: RiskLevel,
        category: &str,
        investors: u32,
    ) -> Microcredit {
        Microcredit {
            id,
            title: format!("Microcrédito {id}"),
            description: String::new(),
            borrower: Borrower {
                id: id + 100,
                name: "María".into(),
                location: None,
            },
            amount_requested: requested,
            amount_funded: funded,
            interest_rate: rate,
            term_months: term,
            status,
            risk_level: risk,
            category: category.into(),
            deadline: None,
            investors_count: investors,
        }
    }

    fn microcredits() -> Vec<Microcredit> {
        use MicrocreditStatus::*;
        vec![
            microcredit(1, 5_000.0, 3_000.0, 5.5, 12, Funding, RiskLevel::Low, "Negocio", 12),
            microcredit(2, 3_000.0, 3_000.0, 6.0, 12, Funded, RiskLevel::Medium, "Ecología", 8),
            microcredit(3, 2_000.0, 2_000.0, 5.0, 10, Completed, RiskLevel::Low, "Agricultura", 15),
            microcredit(4, 8_000.0, 6_000.0, 4.5, 18, Repaying, RiskLevel::Low, "Social", 25),
            microcredit(5, 10_000.0, 2_000.0, 7.0, 24, Defaulted, RiskLevel::High, "Cultura", 5),
        ]
    }

    fn collaboration(
        id: u64,
        kind: &str,
        skills: &[&str],
        current: u32,
        max: Option<u32>,
        status: CollaborationStatus,
    ) -> Collaboration {
        Collaboration {
            id,
            title: format!("Colaboración {id}"),
            description: String::new(),
            kind: kind.into(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            current_collaborators: current,
            max_collaborators: max,
            status,
        }
    }

    fn collaborations() -> Vec<Collaboration> {
        use CollaborationStatus::*;
        vec![
            collaboration(1, "project", &["Jardinería", "Agricultura"], 10, Some(20), Open),
            collaboration(2, "event", &["Producción", "Sonido"], 18, Some(20), InProgress),
            collaboration(3, "campaign", &["Organización", "Jardinería"], 25, Some(30), Completed),
            collaboration(4, "workshop", &["JavaScript", "Python"], 8, Some(10), Completed),
            collaboration(5, "initiative", &["Empatía", "Comunicación"], 5, None, Cancelled),
        ]
    }

    #[test]
    fn test_microcredit_totals() {
        let s = MicrocreditStats::compute(&microcredits());
        assert_eq!(s.total, 5);
        assert_eq!(s.active, 2);
        assert_eq!(s.total_requested, 28_000.0);
        assert_eq!(s.total_funded, 16_000.0);
        assert_eq!(s.funding_percent(), 57);
        assert_eq!(s.total_investors, 65);
        assert_eq!(s.funded, 3);
        assert_eq!(s.average_interest_label(), "5.6%");
        assert_eq!(s.average_term_months, 15);
    }

    #[test]
    fn test_success_rate_counts_only_finished_loans() {
        let s = MicrocreditStats::compute(&microcredits());
        assert_eq!((s.completed, s.defaulted), (1, 1));
        assert_eq!(s.success_rate(), 50);

        let still_funding: Vec<_> = microcredits()
            .into_iter()
            .filter(|m| m.status == MicrocreditStatus::Funding)
            .collect();
        assert_eq!(MicrocreditStats::compute(&still_funding).success_rate(), 0);
    }

    #[test]
    fn test_microcredit_breakdowns() {
        let s = MicrocreditStats::compute(&microcredits());
        assert_eq!(s.by_status.len(), 6);
        assert!(s.by_status.contains(&(MicrocreditStatus::Pending, 0)));
        assert!(s.by_status.contains(&(MicrocreditStatus::Defaulted, 1)));
        assert_eq!(s.by_risk, vec![(RiskLevel::Low, 3), (RiskLevel::Medium, 1), (RiskLevel::High, 1)]);
        assert_eq!(s.risk_percent(RiskLevel::Low), 60);
        assert_eq!(s.top_categories.len(), 5);
        assert_eq!(s.top_categories[0], ("Negocio".to_string(), 1));
    }

    #[test]
    fn test_top_categories_ranked_and_capped() {
        let mut items: Vec<_> = (0..10)
            .map(|i| {
                microcredit(i, 1_000.0, 0.0, 5.0, 12, MicrocreditStatus::Funding, RiskLevel::Low, &format!("Cat {i}"), 0)
            })
            .collect();
        items[7].category = "Cat 1".into();
        items[9].category = String::new();
        let s = MicrocreditStats::compute(&items);
        assert_eq!(s.top_categories.len(), TOP_CATEGORIES);
        assert_eq!(s.top_categories[0], ("Cat 1".to_string(), 2));
        assert_eq!(s.top_categories[1].0, "Cat 0");
    }

    #[test]
    fn test_empty_microcredits() {
        let s = MicrocreditStats::compute(&[]);
        assert_eq!(s.total, 0);
        assert_eq!(s.funding_percent(), 0);
        assert_eq!(s.success_rate(), 0);
        assert_eq!(s.average_interest_label(), "0%");
        assert_eq!(s.average_term_months, 0);
        assert!(s.top_categories.is_empty());
    }

    #[test]
    fn test_collaboration_totals() {
        let s = CollaborationStats::compute(&collaborations());
        assert_eq!(s.total, 5);
        assert_eq!(s.active, 2);
        assert_eq!(s.total_collaborators, 66);
        assert_eq!(s.average_collaborators, 13);
        assert_eq!(s.completed, 2);
        assert_eq!(s.completion_rate(), 67);
        assert_eq!(s.seeking, 1);
        assert_eq!(s.full, 0);
    }

    #[test]
    fn test_full_needs_a_maximum() {
        let mut items = collaborations();
        items[0].current_collaborators = 20;
        let s = CollaborationStats::compute(&items[..1]);
        assert_eq!((s.full, s.seeking), (1, 0));

        items[0].max_collaborators = None;
        let s = CollaborationStats::compute(&items[..1]);
        assert_eq!((s.full, s.seeking), (0, 1));
    }

    #[test]
    fn test_types_and_skills() {
        let mut items = collaborations();
        items[1].kind = "project".into();
        let s = CollaborationStats::compute(&items);
        assert_eq!(s.most_active_type(), Some(&("project".to_string(), 2)));
        assert_eq!(s.by_type.len(), 4);
        assert_eq!(s.most_popular_skill(), Some(&("Jardinería".to_string(), 2)));
        assert_eq!(s.top_skills.len(), 9);
    }

    #[test]
    fn test_empty_collaborations() {
        let s = CollaborationStats::compute(&[]);
        assert_eq!(s.average_collaborators, 0);
        assert_eq!(s.completion_rate(), 0);
        assert_eq!(s.most_active_type(), None);
        assert_eq!(s.most_popular_skill(), None);
    }
}
