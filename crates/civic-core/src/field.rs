//! Field State Store
//!
//! Each field keeps its value, the value it started with, a touched flag and
//! the error currently shown. Validation is lazy: an untouched field never
//! displays an error, and `set_value` only revalidates fields already touched.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::validation::{validate, CrossRule, Rule, ValidationContext};

/// Submit payload: field id to current value
pub type FormValues = BTreeMap<String, FieldValue>;

/// Value held by one input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Option<f64>),
    Date(Option<NaiveDate>),
    List(Vec<String>),
    Flag(bool),
}

impl FieldValue {
    pub fn text(text: impl Into<String>) -> Self {
        FieldValue::Text(text.into())
    }

    pub fn number(n: f64) -> Self {
        FieldValue::Number(Some(n))
    }

    pub fn date(date: NaiveDate) -> Self {
        FieldValue::Date(Some(date))
    }

    pub fn list(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }

    /// Parse raw `<input type="number">` text; blank or malformed becomes empty
    pub fn parse_number(raw: &str) -> Self {
        FieldValue::Number(raw.trim().parse::<f64>().ok().filter(|n| n.is_finite()))
    }

    /// Parse raw `<input type="date">` text (`YYYY-MM-DD`)
    pub fn parse_date(raw: &str) -> Self {
        FieldValue::Date(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
    }

    /// Whether requiredness fails. Whitespace-only text and unchecked flags count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Number(n) => n.is_none(),
            FieldValue::Date(d) => d.is_none(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Flag(checked) => !checked,
        }
    }

    /// Length used by length rules: trimmed characters for text, item count for lists
    pub fn len(&self) -> Option<usize> {
        match self {
            FieldValue::Text(text) => Some(text.trim().chars().count()),
            FieldValue::List(items) => Some(items.len()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => *n,
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => *d,
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    /// Text shown back in an input element
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(Some(n)) => n.to_string(),
            FieldValue::Date(Some(d)) => d.format("%Y-%m-%d").to_string(),
            FieldValue::List(items) => items.join(", "),
            FieldValue::Flag(checked) => checked.to_string(),
            FieldValue::Number(None) | FieldValue::Date(None) => String::new(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::text(text)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Flag(checked)
    }
}

/// Runtime state of one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldState {
    pub value: FieldValue,
    pub initial: FieldValue,
    pub touched: bool,
    pub error: Option<String>,
}

impl FieldState {
    fn new(initial: FieldValue) -> Self {
        Self {
            value: initial.clone(),
            initial,
            touched: false,
            error: None,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.value != self.initial
    }
}

/// Per-form field store with its rules
#[derive(Debug, Clone)]
pub struct FormState {
    order: Vec<String>,
    fields: BTreeMap<String, FieldState>,
    rules: BTreeMap<String, Vec<Rule>>,
    cross_rules: Vec<CrossRule>,
    ctx: ValidationContext,
}

impl FormState {
    pub fn new(ctx: ValidationContext) -> Self {
        Self {
            order: Vec::new(),
            fields: BTreeMap::new(),
            rules: BTreeMap::new(),
            cross_rules: Vec::new(),
            ctx,
        }
    }

    /// Declare a field with its starting value and rules
    pub fn field(mut self, id: &str, initial: impl Into<FieldValue>, rules: Vec<Rule>) -> Self {
        if !self.fields.contains_key(id) {
            self.order.push(id.to_string());
        }
        self.fields.insert(id.to_string(), FieldState::new(initial.into()));
        self.rules.insert(id.to_string(), rules);
        self
    }

    pub fn cross_rule(mut self, rule: CrossRule) -> Self {
        self.cross_rules.push(rule);
        self
    }

    pub fn context(&self) -> &ValidationContext {
        &self.ctx
    }

    pub fn set_context(&mut self, ctx: ValidationContext) {
        self.ctx = ctx;
    }

    /// Field ids in declaration order
    pub fn field_ids(&self) -> &[String] {
        &self.order
    }

    pub fn contains(&self, id: &str) -> bool {
        self.fields.contains_key(id)
    }

    pub fn state(&self, id: &str) -> Option<&FieldState> {
        self.fields.get(id)
    }

    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.fields.get(id).map(|f| &f.value)
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.fields.get(id).and_then(|f| f.error.as_deref())
    }

    pub fn is_touched(&self, id: &str) -> bool {
        self.fields.get(id).is_some_and(|f| f.touched)
    }

    pub fn rules(&self, id: &str) -> &[Rule] {
        self.rules.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn field_mut(&mut self, id: &str) -> DomainResult<&mut FieldState> {
        self.fields
            .get_mut(id)
            .ok_or_else(|| DomainError::UnknownField(id.to_string()))
    }

    fn ensure(&self, id: &str) -> DomainResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(DomainError::UnknownField(id.to_string()))
        }
    }

    /// Error from the field's own rules only
    fn own_error(&self, id: &str) -> Option<String> {
        let value = self.value(id)?;
        validate(value, self.rules(id), &self.ctx)
    }

    /// Error a field would show right now, cross-field rules included.
    /// Cross rules run only once both referenced fields pass their own rules and are filled.
    fn evaluate(&self, id: &str) -> Option<String> {
        if let Some(err) = self.own_error(id) {
            return Some(err);
        }
        self.cross_rules
            .iter()
            .filter(|rule| rule.target() == id)
            .filter(|rule| {
                rule.fields().iter().all(|f| {
                    self.value(f).is_some_and(|v| !v.is_empty()) && self.own_error(f).is_none()
                })
            })
            .find_map(|rule| rule.check(|f| self.value(f)))
    }

    fn update_error(&mut self, id: &str) {
        let error = self.evaluate(id);
        if let Some(state) = self.fields.get_mut(id) {
            state.error = error;
        }
    }

    /// Recompute touched fields whose cross rules read `id`
    fn refresh_dependents(&mut self, id: &str) {
        let targets: Vec<String> = self
            .cross_rules
            .iter()
            .filter(|rule| rule.references(id) && rule.target() != id)
            .map(|rule| rule.target().to_string())
            .filter(|target| self.is_touched(target))
            .collect();
        for target in targets {
            self.update_error(&target);
        }
    }

    fn refresh(&mut self, id: &str) {
        self.update_error(id);
        self.refresh_dependents(id);
    }

    /// Update a value; revalidates only if the field was already touched
    pub fn set_value(&mut self, id: &str, value: impl Into<FieldValue>) -> DomainResult<()> {
        let state = self.field_mut(id)?;
        state.value = value.into();
        if state.touched {
            self.refresh(id);
        } else {
            self.refresh_dependents(id);
        }
        Ok(())
    }

    /// Mark touched and validate
    pub fn blur(&mut self, id: &str) -> DomainResult<()> {
        self.field_mut(id)?.touched = true;
        self.refresh(id);
        Ok(())
    }

    /// Mark each field touched and surface its error; true when all pass
    pub fn validate_fields<S: AsRef<str>>(&mut self, ids: &[S]) -> DomainResult<bool> {
        for id in ids {
            self.ensure(id.as_ref())?;
        }
        let mut all_valid = true;
        for id in ids {
            let id = id.as_ref();
            let error = self.evaluate(id);
            all_valid &= error.is_none();
            if let Some(state) = self.fields.get_mut(id) {
                state.touched = true;
                state.error = error;
            }
        }
        Ok(all_valid)
    }

    pub fn validate_all(&mut self) -> bool {
        let ids = self.order.clone();
        self.validate_fields(ids.as_slice()).unwrap_or(false)
    }

    /// Side-effect free check of a subset of fields
    pub fn fields_valid<S: AsRef<str>>(&self, ids: &[S]) -> bool {
        ids.iter().all(|id| self.contains(id.as_ref()) && self.evaluate(id.as_ref()).is_none())
    }

    /// Side-effect free check of the whole form
    pub fn is_valid(&self) -> bool {
        self.fields_valid(self.order.as_slice())
    }

    /// Whether any value differs from its initial value
    pub fn has_changes(&self) -> bool {
        self.fields.values().any(FieldState::is_dirty)
    }

    /// Restore initial values and clear touched flags and errors
    pub fn reset(&mut self) {
        for state in self.fields.values_mut() {
            *state = FieldState::new(state.initial.clone());
        }
    }

    pub fn reset_field(&mut self, id: &str) -> DomainResult<()> {
        let state = self.field_mut(id)?;
        *state = FieldState::new(state.initial.clone());
        Ok(())
    }

    /// Imperative set from the parent: the field counts as touched afterwards
    pub fn set_field_value(&mut self, id: &str, value: impl Into<FieldValue>) -> DomainResult<()> {
        let state = self.field_mut(id)?;
        state.value = value.into();
        state.touched = true;
        self.refresh(id);
        Ok(())
    }

    /// Show an externally produced error, e.g. one returned by the server
    pub fn set_field_error(&mut self, id: &str, error: Option<String>) -> DomainResult<()> {
        let state = self.field_mut(id)?;
        state.touched = true;
        state.error = error;
        Ok(())
    }

    pub fn clear_errors(&mut self) {
        for state in self.fields.values_mut() {
            state.error = None;
        }
    }

    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|(id, state)| (id.clone(), state.value.clone()))
            .collect()
    }
}
