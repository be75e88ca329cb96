//! Frontend Models
//!
//! Demo dataset shown by the component gallery. The shapes are the
//! civic-core domain items; ids are unique across collections so one intent
//! id always names one item.

use serde::Deserialize;

use civic_core::comments::Comment;
use civic_core::domain::{Collaboration, Microcredit, Project, Proposal, Team};
use civic_core::FormLimits;

const SEED: &str = include_str!("../demo/seed.json");

#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub limits: FormLimits,
    pub proposals: Vec<Proposal>,
    pub microcredits: Vec<Microcredit>,
    pub projects: Vec<Project>,
    pub teams: Vec<Team>,
    #[serde(default)]
    pub collaborations: Vec<Collaboration>,
    pub comments: Vec<Comment>,
}

impl SeedData {
    pub fn load() -> serde_json::Result<Self> {
        serde_json::from_str(SEED)
    }
}
