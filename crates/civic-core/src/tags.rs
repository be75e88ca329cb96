//! Bounded tag and skill lists

use serde::Serialize;

use crate::field::FieldValue;

/// Result of trying to add one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddOutcome {
    Added,
    Duplicate,
    LimitReached,
    Empty,
}

/// Ordered, duplicate-free list with a hard maximum
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BoundedTags {
    items: Vec<String>,
    max: usize,
    case_insensitive: bool,
}

impl BoundedTags {
    pub fn new(max: usize, case_insensitive: bool) -> Self {
        Self {
            items: Vec::new(),
            max,
            case_insensitive,
        }
    }

    /// Start from existing entries, dropping blanks, duplicates and overflow
    pub fn with_items(max: usize, case_insensitive: bool, items: &[String]) -> Self {
        let mut tags = Self::new(max, case_insensitive);
        for item in items {
            tags.add(item);
        }
        tags
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max
    }

    pub fn contains(&self, value: &str) -> bool {
        if self.case_insensitive {
            let folded = value.to_lowercase();
            self.items.iter().any(|t| t.to_lowercase() == folded)
        } else {
            self.items.iter().any(|t| t == value)
        }
    }

    /// Trimmed add; duplicates and overflow leave the list unchanged
    pub fn add(&mut self, raw: &str) -> AddOutcome {
        let value = raw.trim();
        if value.is_empty() {
            return AddOutcome::Empty;
        }
        if self.contains(value) {
            return AddOutcome::Duplicate;
        }
        if self.is_full() {
            log::debug!("tag '{value}' rejected: limit {} reached", self.max);
            return AddOutcome::LimitReached;
        }
        self.items.push(value.to_string());
        AddOutcome::Added
    }

    /// Add every comma-separated entry, stopping at the limit
    pub fn add_many(&mut self, raw: &str) -> Vec<AddOutcome> {
        raw.split(',').map(|part| self.add(part)).collect()
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Drop the last entry, as Backspace on an empty input does
    pub fn pop(&mut self) -> Option<String> {
        self.items.pop()
    }

    /// "3 / 15"
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.items.len(), self.max)
    }

    pub fn to_field_value(&self) -> FieldValue {
        FieldValue::List(self.items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_limit() {
        let mut skills = BoundedTags::new(15, false);
        for i in 0..15 {
            assert_eq!(skills.add(&format!("skill {i}")), AddOutcome::Added);
        }
        assert!(skills.is_full());
        assert_eq!(skills.add("una más"), AddOutcome::LimitReached);
        assert_eq!(skills.len(), 15);
        assert_eq!(skills.counter_label(), "15 / 15");
    }

    #[test]
    fn test_duplicates_are_noop() {
        let mut tags = BoundedTags::new(10, false);
        tags.add("  Rust ");
        assert_eq!(tags.add("Rust"), AddOutcome::Duplicate);
        assert_eq!(tags.add("rust"), AddOutcome::Added);
        assert_eq!(tags.items(), ["Rust", "rust"]);

        let mut folded = BoundedTags::new(10, true);
        folded.add("Rust");
        assert_eq!(folded.add("RUST"), AddOutcome::Duplicate);
    }

    #[test]
    fn test_blank_and_comma_input() {
        let mut tags = BoundedTags::new(2, false);
        assert_eq!(tags.add("   "), AddOutcome::Empty);
        let outcomes = tags.add_many("a, b, c");
        assert_eq!(outcomes, vec![AddOutcome::Added, AddOutcome::Added, AddOutcome::LimitReached]);
        assert_eq!(tags.remove(0).as_deref(), Some("a"));
        assert_eq!(tags.remove(5), None);
        assert_eq!(tags.to_field_value(), FieldValue::List(vec!["b".into()]));
    }
}
