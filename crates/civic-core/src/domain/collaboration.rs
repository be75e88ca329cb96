use serde::{Deserialize, Serialize};

use crate::events::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaborationStatus {
    #[default]
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl CollaborationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollaborationStatus::Open => "open",
            CollaborationStatus::InProgress => "in_progress",
            CollaborationStatus::Completed => "completed",
            CollaborationStatus::Cancelled => "cancelled",
        }
    }

    /// Plural label used by the status breakdown
    pub fn label(&self) -> &'static str {
        match self {
            CollaborationStatus::Open => "Abiertas",
            CollaborationStatus::InProgress => "En Progreso",
            CollaborationStatus::Completed => "Completadas",
            CollaborationStatus::Cancelled => "Canceladas",
        }
    }

    pub fn all() -> [CollaborationStatus; 4] {
        [
            CollaborationStatus::Open,
            CollaborationStatus::InProgress,
            CollaborationStatus::Completed,
            CollaborationStatus::Cancelled,
        ]
    }
}

/// Plural label of a collaboration type; unknown types show as given
pub fn kind_label(kind: &str) -> &str {
    match kind {
        "project" => "Proyectos",
        "event" => "Eventos",
        "campaign" => "Campañas",
        "workshop" => "Talleres",
        "initiative" => "Iniciativas",
        "volunteer" => "Voluntariados",
        "other" => "Otras",
        other => other,
    }
}

/// Collaboration offer as listed in summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaboration {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub current_collaborators: u32,
    pub max_collaborators: Option<u32>,
    pub status: CollaborationStatus,
}

impl Collaboration {
    /// Only a declared maximum can be reached
    pub fn is_full(&self) -> bool {
        self.max_collaborators.is_some_and(|max| self.current_collaborators >= max)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, CollaborationStatus::Open | CollaborationStatus::InProgress)
    }
}
