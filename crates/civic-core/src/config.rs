//! Form and list limits
//!
//! Components take these as configuration; any option left out of the JSON
//! falls back to the platform default.

use serde::{Deserialize, Serialize};

use crate::error::DomainResult;

/// Recognized configuration options with documented defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLimits {
    pub title_min: usize,
    pub title_max: usize,
    pub description_min: usize,
    pub description_max: usize,
    pub funding_min: f64,
    pub funding_max: f64,
    pub interest_min: f64,
    pub interest_max: f64,
    pub term_min: f64,
    pub term_max: f64,
    pub minimum_investment: f64,
    pub max_skills: usize,
    pub max_tags: usize,
    /// Exact-match dedup is the observed behavior; set to fold case instead.
    pub case_insensitive_tags: bool,
    pub page_size: usize,
    pub search_debounce_ms: u64,
    pub resend_timeout_secs: u64,
    pub code_length: usize,
    pub comment_min: usize,
    pub comment_max: usize,
    pub max_nesting_level: usize,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            title_min: 10,
            title_max: 100,
            description_min: 50,
            description_max: 1000,
            funding_min: 100.0,
            funding_max: 100_000.0,
            interest_min: 0.1,
            interest_max: 30.0,
            term_min: 3.0,
            term_max: 36.0,
            minimum_investment: 10.0,
            max_skills: 15,
            max_tags: 10,
            case_insensitive_tags: false,
            page_size: 10,
            search_debounce_ms: 300,
            resend_timeout_secs: 60,
            code_length: 6,
            comment_min: 1,
            comment_max: 500,
            max_nesting_level: 3,
        }
    }
}

impl FormLimits {
    /// Parse limits from a JSON object, defaulting every missing key
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let limits = serde_json::from_str(json)?;
        Ok(limits)
    }
}
