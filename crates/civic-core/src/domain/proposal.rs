use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::{Listable, SortKey};
use crate::events::ItemId;

/// Filter dimension of the proposals list
pub const STATUS: &str = "status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    /// Open: neither finished nor discarded
    #[default]
    Active,
    Finished,
    /// Reached the support threshold
    Threshold,
    Discarded,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Active => "active",
            ProposalStatus::Finished => "finished",
            ProposalStatus::Threshold => "threshold",
            ProposalStatus::Discarded => "discarded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProposalStatus::Active => "Activas",
            ProposalStatus::Finished => "Finalizadas",
            ProposalStatus::Threshold => "Umbral alcanzado",
            ProposalStatus::Discarded => "Descartadas",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ProposalStatus::Active),
            "finished" => Some(ProposalStatus::Finished),
            "threshold" => Some(ProposalStatus::Threshold),
            "discarded" => Some(ProposalStatus::Discarded),
            _ => None,
        }
    }

    pub fn all() -> [ProposalStatus; 4] {
        [
            ProposalStatus::Active,
            ProposalStatus::Finished,
            ProposalStatus::Threshold,
            ProposalStatus::Discarded,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalSort {
    #[default]
    Recent,
    /// Most supports first
    Popular,
    /// Highest hotness first
    Hot,
    /// Oldest first
    Time,
}

impl SortKey for ProposalSort {
    fn as_str(&self) -> &'static str {
        match self {
            ProposalSort::Recent => "recent",
            ProposalSort::Popular => "popular",
            ProposalSort::Hot => "hot",
            ProposalSort::Time => "time",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProposalSort::Recent => "Más recientes",
            ProposalSort::Popular => "Más populares",
            ProposalSort::Hot => "Más activas",
            ProposalSort::Time => "Más antiguas",
        }
    }

    fn all() -> &'static [Self] {
        &[
            ProposalSort::Recent,
            ProposalSort::Popular,
            ProposalSort::Hot,
            ProposalSort::Time,
        ]
    }
}

/// Citizen proposal collecting supports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub votes: u64,
    pub supports_count: u64,
    pub hotness: u64,
    pub created_at: DateTime<Utc>,
    pub finishes_at: Option<DateTime<Utc>>,
    pub reddit_threshold: bool,
    pub supported: bool,
    pub finished: bool,
    pub discarded: bool,
}

impl Proposal {
    pub fn has_status(&self, status: ProposalStatus) -> bool {
        match status {
            ProposalStatus::Active => !self.finished && !self.discarded,
            ProposalStatus::Finished => self.finished,
            ProposalStatus::Threshold => self.reddit_threshold,
            ProposalStatus::Discarded => self.discarded,
        }
    }

    /// Whether a support can still be given
    pub fn is_open(&self) -> bool {
        self.has_status(ProposalStatus::Active)
    }
}

impl Listable for Proposal {
    type Sort = ProposalSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    fn matches_filter(&self, dimension: &str, value: &str) -> bool {
        match (dimension, ProposalStatus::from_str(value)) {
            (STATUS, Some(status)) => self.has_status(status),
            _ => true,
        }
    }

    fn compare(&self, other: &Self, sort: ProposalSort) -> Ordering {
        match sort {
            ProposalSort::Recent => other.created_at.cmp(&self.created_at),
            ProposalSort::Popular => other.supports_count.cmp(&self.supports_count),
            ProposalSort::Hot => other.hotness.cmp(&self.hotness),
            ProposalSort::Time => self.created_at.cmp(&other.created_at),
        }
    }
}
