//! Validation Rule Engine
//!
//! Pure functions from a field value and its rules to at most one message.
//! Requiredness is checked first; an empty optional value passes everything
//! else. The remaining rules run in declaration order and the first failure
//! wins. Numeric bounds are inclusive.

mod counter;
mod cross_field;

pub use counter::{CharCounter, CounterTone, ERROR_RATIO, WARNING_RATIO};
pub use cross_field::CrossRule;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::DomainResult;
use crate::field::FieldValue;

/// Reference data for rules that depend on "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

/// A single constraint with the message shown when it fails
#[derive(Debug, Clone)]
pub enum Rule {
    Required(String),
    MinLength(usize, String),
    MaxLength(usize, String),
    Min(f64, String),
    Max(f64, String),
    Pattern(Regex, String),
    Email(String),
    /// Date of birth must be at least this many whole years before today
    MinAge(u32, String),
    /// Date must not be before today
    NotExpired(String),
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Rule::Required(message.into())
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Rule::MinLength(min, message.into())
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Rule::MaxLength(max, message.into())
    }

    pub fn min(min: f64, message: impl Into<String>) -> Self {
        Rule::Min(min, message.into())
    }

    pub fn max(max: f64, message: impl Into<String>) -> Self {
        Rule::Max(max, message.into())
    }

    pub fn pattern(pattern: &str, message: impl Into<String>) -> DomainResult<Self> {
        Ok(Rule::Pattern(Regex::new(pattern)?, message.into()))
    }

    pub fn email(message: impl Into<String>) -> Self {
        Rule::Email(message.into())
    }

    pub fn min_age(years: u32, message: impl Into<String>) -> Self {
        Rule::MinAge(years, message.into())
    }

    pub fn not_expired(message: impl Into<String>) -> Self {
        Rule::NotExpired(message.into())
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Rule::Required(_))
    }

    /// Check a non-empty value. Rules that do not apply to the value's kind pass.
    fn check(&self, value: &FieldValue, ctx: &ValidationContext) -> Option<String> {
        let failed = match (self, value) {
            (Rule::Required(_), _) => false,
            (Rule::MinLength(min, _), v) => v.len().is_some_and(|len| len < *min),
            (Rule::MaxLength(max, _), v) => v.len().is_some_and(|len| len > *max),
            (Rule::Min(min, _), FieldValue::Number(Some(n))) => n < min,
            (Rule::Max(max, _), FieldValue::Number(Some(n))) => n > max,
            (Rule::Pattern(re, _), FieldValue::Text(text)) => !re.is_match(text.trim()),
            (Rule::Email(_), FieldValue::Text(text)) => !is_email(text.trim()),
            (Rule::MinAge(years, _), FieldValue::Date(Some(born))) => {
                ctx.today.years_since(*born).unwrap_or(0) < *years
            }
            (Rule::NotExpired(_), FieldValue::Date(Some(date))) => *date < ctx.today,
            _ => false,
        };
        failed.then(|| self.message().to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::Required(m)
            | Rule::MinLength(_, m)
            | Rule::MaxLength(_, m)
            | Rule::Min(_, m)
            | Rule::Max(_, m)
            | Rule::Pattern(_, m)
            | Rule::Email(m)
            | Rule::MinAge(_, m)
            | Rule::NotExpired(m) => m,
        }
    }
}

/// `local@domain.tld` with no whitespace and a dot inside the domain
fn is_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    match text.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
        }
        None => false,
    }
}

/// Evaluate a field's rules, returning the first failing message
pub fn validate(value: &FieldValue, rules: &[Rule], ctx: &ValidationContext) -> Option<String> {
    if value.is_empty() {
        return rules
            .iter()
            .find(|rule| rule.is_required())
            .map(|rule| rule.message().to_string());
    }
    rules.iter().find_map(|rule| rule.check(value, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
    }

    fn title_rules() -> Vec<Rule> {
        vec![
            Rule::required("El título es requerido"),
            Rule::min_length(10, "El título debe tener al menos 10 caracteres"),
            Rule::max_length(100, "El título no puede exceder 100 caracteres"),
        ]
    }

    #[test]
    fn test_length_boundaries() {
        let rules = title_rules();
        let at = |n: usize| validate(&FieldValue::text("a".repeat(n)), &rules, &ctx());
        assert!(at(9).is_some());
        assert!(at(10).is_none());
        assert!(at(100).is_none());
        assert_eq!(at(101).as_deref(), Some("El título no puede exceder 100 caracteres"));
    }

    #[test]
    fn test_required_short_circuits() {
        let rules = title_rules();
        let err = validate(&FieldValue::text("   "), &rules, &ctx());
        assert_eq!(err.as_deref(), Some("El título es requerido"));
    }

    #[test]
    fn test_empty_optional_value_passes() {
        let rules = vec![Rule::min_length(3, "short")];
        assert!(validate(&FieldValue::text(""), &rules, &ctx()).is_none());
        assert!(validate(&FieldValue::Number(None), &[Rule::min(2.0, "low")], &ctx()).is_none());
    }

    #[test]
    fn test_numeric_boundaries_inclusive() {
        let rules = vec![
            Rule::min(100.0, "La cantidad mínima es 100€"),
            Rule::max(100_000.0, "La cantidad máxima es 100,000€"),
        ];
        let at = |n: f64| validate(&FieldValue::number(n), &rules, &ctx());
        assert!(at(99.0).is_some());
        assert!(at(100.0).is_none());
        assert!(at(100_000.0).is_none());
        assert!(at(100_001.0).is_some());
        assert!(at(100_000.01).is_some());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let rules = vec![Rule::max_length(5, "max")];
        assert!(validate(&FieldValue::text("ñañañ"), &rules, &ctx()).is_none());
    }

    #[test]
    fn test_pattern_rule() {
        let rules = vec![Rule::pattern(r"^\d{5}$", "El código postal debe tener 5 dígitos").unwrap()];
        assert!(validate(&FieldValue::text("28013"), &rules, &ctx()).is_none());
        assert!(validate(&FieldValue::text("2801"), &rules, &ctx()).is_some());
        assert!(validate(&FieldValue::text("28O13"), &rules, &ctx()).is_some());
    }

    #[test]
    fn test_email_rule() {
        let rules = vec![Rule::email("El email no es válido")];
        let check = |s: &str| validate(&FieldValue::text(s), &rules, &ctx());
        assert!(check("ana@example.org").is_none());
        assert!(check("ana@example").is_some());
        assert!(check("@example.org").is_some());
        assert!(check("ana @example.org").is_some());
        assert!(check("ana@@example.org").is_some());
    }

    #[test]
    fn test_min_age() {
        let rules = vec![Rule::min_age(18, "Debes ser mayor de 18 años")];
        let born = |y, m, d| FieldValue::date(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert!(validate(&born(2007, 6, 15), &rules, &ctx()).is_none());
        assert!(validate(&born(2007, 6, 16), &rules, &ctx()).is_some());
        assert!(validate(&born(2030, 1, 1), &rules, &ctx()).is_some());
    }

    #[test]
    fn test_not_expired() {
        let rules = vec![Rule::not_expired("El documento ha caducado")];
        let on = |y, m, d| FieldValue::date(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert!(validate(&on(2025, 6, 15), &rules, &ctx()).is_none());
        assert!(validate(&on(2025, 6, 14), &rules, &ctx()).is_some());
    }

    #[test]
    fn test_first_failure_in_declaration_order() {
        let rules = vec![Rule::min(10.0, "first"), Rule::max(5.0, "second")];
        assert_eq!(validate(&FieldValue::number(3.0), &rules, &ctx()).as_deref(), Some("first"));
    }
}
