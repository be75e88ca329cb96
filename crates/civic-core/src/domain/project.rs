use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::collection::{Listable, SortKey};
use crate::events::ItemId;

pub const STATUS: &str = "status";
pub const CATEGORY: &str = "category";
pub const FUNDING: &str = "funding";

/// Upper bound of the low funding bucket, inclusive
pub const LOW_FUNDING_MAX: f64 = 25_000.0;
/// Upper bound of the medium funding bucket, inclusive
pub const MEDIUM_FUNDING_MAX: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingBucket {
    Low,
    Medium,
    High,
}

impl FundingBucket {
    pub fn of(goal: f64) -> Self {
        if goal <= LOW_FUNDING_MAX {
            FundingBucket::Low
        } else if goal <= MEDIUM_FUNDING_MAX {
            FundingBucket::Medium
        } else {
            FundingBucket::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FundingBucket::Low => "low",
            FundingBucket::Medium => "medium",
            FundingBucket::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FundingBucket::Low => "Hasta 25.000€",
            FundingBucket::Medium => "25.000€ - 100.000€",
            FundingBucket::High => "Más de 100.000€",
        }
    }

    pub fn all() -> [FundingBucket; 3] {
        [FundingBucket::Low, FundingBucket::Medium, FundingBucket::High]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Submitted,
    Evaluation,
    Voting,
    Funded,
    Rejected,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Submitted => "submitted",
            ProjectStatus::Evaluation => "evaluation",
            ProjectStatus::Voting => "voting",
            ProjectStatus::Funded => "funded",
            ProjectStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Borrador",
            ProjectStatus::Submitted => "Enviado",
            ProjectStatus::Evaluation => "En evaluación",
            ProjectStatus::Voting => "En votación",
            ProjectStatus::Funded => "Financiado",
            ProjectStatus::Rejected => "Rechazado",
        }
    }

    pub fn all() -> [ProjectStatus; 6] {
        [
            ProjectStatus::Draft,
            ProjectStatus::Submitted,
            ProjectStatus::Evaluation,
            ProjectStatus::Voting,
            ProjectStatus::Funded,
            ProjectStatus::Rejected,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSort {
    #[default]
    Recent,
    Votes,
    Funding,
    Title,
}

impl SortKey for ProjectSort {
    fn as_str(&self) -> &'static str {
        match self {
            ProjectSort::Recent => "recent",
            ProjectSort::Votes => "votes",
            ProjectSort::Funding => "funding",
            ProjectSort::Title => "title",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProjectSort::Recent => "Más recientes",
            ProjectSort::Votes => "Más votados",
            ProjectSort::Funding => "Mayor financiación",
            ProjectSort::Title => "Alfabético",
        }
    }

    fn all() -> &'static [Self] {
        &[
            ProjectSort::Recent,
            ProjectSort::Votes,
            ProjectSort::Funding,
            ProjectSort::Title,
        ]
    }
}

/// Community project competing for funding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub funding_goal: f64,
    pub funding_received: f64,
    pub votes: u64,
    pub has_voted: bool,
    pub status: ProjectStatus,
    pub author: String,
    pub created_at: NaiveDate,
}

impl Project {
    pub fn funding_percent(&self) -> f64 {
        if self.funding_goal <= 0.0 {
            return 0.0;
        }
        (self.funding_received / self.funding_goal * 100.0).clamp(0.0, 100.0)
    }

    /// Votes are only accepted while the project is in its voting phase
    pub fn can_vote(&self) -> bool {
        self.status == ProjectStatus::Voting && !self.has_voted
    }
}

impl Listable for Project {
    type Sort = ProjectSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description, &self.author]
    }

    fn matches_filter(&self, dimension: &str, value: &str) -> bool {
        match dimension {
            STATUS => self.status.as_str() == value,
            CATEGORY => self.category == value,
            FUNDING => FundingBucket::of(self.funding_goal).as_str() == value,
            _ => true,
        }
    }

    fn compare(&self, other: &Self, sort: ProjectSort) -> Ordering {
        match sort {
            ProjectSort::Recent => other.created_at.cmp(&self.created_at),
            ProjectSort::Votes => other.votes.cmp(&self.votes),
            ProjectSort::Funding => other
                .funding_goal
                .partial_cmp(&self.funding_goal)
                .unwrap_or(Ordering::Equal),
            ProjectSort::Title => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
        }
    }
}
