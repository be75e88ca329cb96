use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::collection::{Listable, SortKey};
use crate::events::ItemId;

pub const STATUS: &str = "status";
pub const RISK: &str = "risk";
pub const CATEGORY: &str = "category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MicrocreditStatus {
    /// Awaiting review, not yet open to investors
    Pending,
    #[default]
    Funding,
    Funded,
    Repaying,
    Completed,
    Defaulted,
}

impl MicrocreditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MicrocreditStatus::Pending => "pending",
            MicrocreditStatus::Funding => "funding",
            MicrocreditStatus::Funded => "funded",
            MicrocreditStatus::Repaying => "repaying",
            MicrocreditStatus::Completed => "completed",
            MicrocreditStatus::Defaulted => "defaulted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MicrocreditStatus::Pending => "Pendiente",
            MicrocreditStatus::Funding => "En financiación",
            MicrocreditStatus::Funded => "Financiado",
            MicrocreditStatus::Repaying => "En devolución",
            MicrocreditStatus::Completed => "Completado",
            MicrocreditStatus::Defaulted => "Impagado",
        }
    }

    pub fn all() -> [MicrocreditStatus; 6] {
        [
            MicrocreditStatus::Pending,
            MicrocreditStatus::Funding,
            MicrocreditStatus::Funded,
            MicrocreditStatus::Repaying,
            MicrocreditStatus::Completed,
            MicrocreditStatus::Defaulted,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Riesgo bajo",
            RiskLevel::Medium => "Riesgo medio",
            RiskLevel::High => "Riesgo alto",
        }
    }

    pub fn all() -> [RiskLevel; 3] {
        [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MicrocreditSort {
    /// Original order
    #[default]
    Recent,
    AmountHigh,
    AmountLow,
    InterestHigh,
    InterestLow,
}

impl SortKey for MicrocreditSort {
    fn as_str(&self) -> &'static str {
        match self {
            MicrocreditSort::Recent => "recent",
            MicrocreditSort::AmountHigh => "amount-high",
            MicrocreditSort::AmountLow => "amount-low",
            MicrocreditSort::InterestHigh => "interest-high",
            MicrocreditSort::InterestLow => "interest-low",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MicrocreditSort::Recent => "Más Recientes",
            MicrocreditSort::AmountHigh => "Mayor Cantidad",
            MicrocreditSort::AmountLow => "Menor Cantidad",
            MicrocreditSort::InterestHigh => "Mayor Interés",
            MicrocreditSort::InterestLow => "Menor Interés",
        }
    }

    fn all() -> &'static [Self] {
        &[
            MicrocreditSort::Recent,
            MicrocreditSort::AmountHigh,
            MicrocreditSort::AmountLow,
            MicrocreditSort::InterestHigh,
            MicrocreditSort::InterestLow,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Borrower {
    pub id: ItemId,
    pub name: String,
    pub location: Option<String>,
}

/// Loan request funded by many small investments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Microcredit {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub borrower: Borrower,
    pub amount_requested: f64,
    pub amount_funded: f64,
    /// Annual percentage
    pub interest_rate: f64,
    pub term_months: u32,
    pub status: MicrocreditStatus,
    pub risk_level: RiskLevel,
    pub category: String,
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub investors_count: u32,
}

impl Microcredit {
    /// Funded share, 0 to 100
    pub fn funding_percent(&self) -> f64 {
        if self.amount_requested <= 0.0 {
            return 0.0;
        }
        (self.amount_funded / self.amount_requested * 100.0).clamp(0.0, 100.0)
    }

    pub fn remaining(&self) -> f64 {
        (self.amount_requested - self.amount_funded).max(0.0)
    }

    pub fn is_fully_funded(&self) -> bool {
        self.remaining() <= 0.0
    }
}

impl Listable for Microcredit {
    type Sort = MicrocreditSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description, &self.borrower.name, &self.category]
    }

    fn matches_filter(&self, dimension: &str, value: &str) -> bool {
        match dimension {
            STATUS => self.status.as_str() == value,
            RISK => self.risk_level.as_str() == value,
            CATEGORY => self.category == value,
            _ => true,
        }
    }

    fn compare(&self, other: &Self, sort: MicrocreditSort) -> Ordering {
        let by = |a: f64, b: f64| a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match sort {
            MicrocreditSort::Recent => Ordering::Equal,
            MicrocreditSort::AmountHigh => by(other.amount_requested, self.amount_requested),
            MicrocreditSort::AmountLow => by(self.amount_requested, other.amount_requested),
            MicrocreditSort::InterestHigh => by(other.interest_rate, self.interest_rate),
            MicrocreditSort::InterestLow => by(self.interest_rate, other.interest_rate),
        }
    }
}
