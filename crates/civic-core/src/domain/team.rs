use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::events::ItemId;

/// Tags shown on a card before collapsing into "+N"
pub const VISIBLE_TAGS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    #[default]
    Active,
    Recruiting,
    Full,
    Inactive,
}

impl TeamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamStatus::Active => "active",
            TeamStatus::Recruiting => "recruiting",
            TeamStatus::Full => "full",
            TeamStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeamStatus::Active => "Activo",
            TeamStatus::Recruiting => "Reclutando",
            TeamStatus::Full => "Completo",
            TeamStatus::Inactive => "Inactivo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    High,
    Medium,
    Low,
}

impl ActivityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::High => "Alta Actividad",
            ActivityLevel::Medium => "Actividad Media",
            ActivityLevel::Low => "Baja Actividad",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamLeader {
    pub id: ItemId,
    pub name: String,
    pub role: Option<String>,
}

impl TeamLeader {
    pub fn role_label(&self) -> &str {
        self.role.as_deref().unwrap_or("Coordinador")
    }
}

/// Participation team people can join
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub leader: TeamLeader,
    pub member_count: u32,
    pub max_members: Option<u32>,
    pub status: TeamStatus,
    pub activity_level: Option<ActivityLevel>,
    pub tags: Vec<String>,
    pub meeting_schedule: Option<String>,
    pub last_activity: Option<NaiveDate>,
}

impl Team {
    /// Rounded occupancy percent; `None` without a member cap
    pub fn occupancy_percent(&self) -> Option<u32> {
        let max = self.max_members.filter(|m| *m > 0)?;
        let percent = (self.member_count as f64 / max as f64 * 100.0).round();
        Some(percent.min(100.0) as u32)
    }

    pub fn is_full(&self) -> bool {
        self.status == TeamStatus::Full
            || self.max_members.is_some_and(|max| self.member_count >= max)
    }

    /// "8 / 15 miembros", or "8 miembros" without a cap
    pub fn members_label(&self) -> String {
        match self.max_members {
            Some(max) => format!("{} / {} miembros", self.member_count, max),
            None => format!("{} miembros", self.member_count),
        }
    }

    /// First tags plus the number left out
    pub fn visible_tags(&self) -> (&[String], usize) {
        let shown = self.tags.len().min(VISIBLE_TAGS);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}
