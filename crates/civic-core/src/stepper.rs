//! Stepped Form Controller
//!
//! Ordered steps over one [`FormState`]. Forward navigation is gated on the
//! current step's fields; backward navigation and indicator jumps are free.
//! Final submit validates everything and lands on the first broken step.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::events::{Action, AuthGate, Intent};
use crate::field::FormState;

/// One wizard step and the fields it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDefinition {
    pub id: String,
    pub title: String,
    pub fields: Vec<String>,
}

impl StepDefinition {
    pub fn new(id: &str, title: &str, fields: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Indicator state of a step relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Completed => "completed",
            StepStatus::Current => "current",
            StepStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SteppedForm {
    steps: Vec<StepDefinition>,
    current: usize,
    form: FormState,
}

impl SteppedForm {
    /// Every step field must be declared on the form
    pub fn new(form: FormState, steps: Vec<StepDefinition>) -> DomainResult<Self> {
        if steps.is_empty() {
            return Err(DomainError::UnknownStep("no steps defined".to_string()));
        }
        if let Some(missing) = steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| !form.contains(f))
        {
            return Err(DomainError::UnknownField(missing.clone()));
        }
        Ok(Self {
            steps,
            current: 0,
            form,
        })
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// 0-based index of the current step
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &StepDefinition {
        &self.steps[self.current]
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    fn go_to(&mut self, index: usize) -> Intent {
        self.current = index;
        log::debug!("step -> {}", self.steps[index].id);
        Intent::StepChange(index + 1)
    }

    /// Advance one step if the current step validates; no-op on the last step
    pub fn next(&mut self) -> Option<Intent> {
        if self.is_last() {
            return None;
        }
        let fields = self.steps[self.current].fields.clone();
        match self.form.validate_fields(fields.as_slice()) {
            Ok(true) => Some(self.go_to(self.current + 1)),
            _ => {
                log::debug!("step {} blocked by validation", self.steps[self.current].id);
                None
            }
        }
    }

    /// Go back one step without validating
    pub fn previous(&mut self) -> Option<Intent> {
        if self.is_first() {
            return None;
        }
        Some(self.go_to(self.current - 1))
    }

    /// Indicator click. Intermediate steps are not validated.
    pub fn jump_to(&mut self, index: usize) -> DomainResult<Option<Intent>> {
        if index >= self.steps.len() {
            return Err(DomainError::UnknownStep(index.to_string()));
        }
        if index == self.current {
            return Ok(None);
        }
        Ok(Some(self.go_to(index)))
    }

    pub fn jump_to_id(&mut self, id: &str) -> DomainResult<Option<Intent>> {
        let index = self
            .steps
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| DomainError::UnknownStep(id.to_string()))?;
        self.jump_to(index)
    }

    /// `Submit` when every step is valid. Otherwise moves to the first invalid
    /// step, surfaces its errors and returns the resulting `StepChange`, if any.
    /// Signed out, it is `LoginRequired` and nothing moves.
    pub fn submit(&mut self, gate: AuthGate) -> Option<Intent> {
        gate.guard(Action::Submit, || {
            let first_invalid = self
                .steps
                .iter()
                .position(|step| !self.form.fields_valid(step.fields.as_slice()));
            match first_invalid {
                None => Some(Intent::Submit(self.form.values())),
                Some(index) => {
                    let fields = self.steps[index].fields.clone();
                    let _ = self.form.validate_fields(fields.as_slice());
                    log::debug!("submit blocked at step {}", self.steps[index].id);
                    (index != self.current).then(|| self.go_to(index))
                }
            }
        })
    }

    /// Unvalidated snapshot of the current values
    pub fn save_draft(&self) -> Intent {
        Intent::SaveDraft(self.form.values())
    }

    /// Percentage through the wizard; the last step is exactly 100
    pub fn progress(&self) -> f64 {
        let n = self.steps.len();
        if n <= 1 {
            return 100.0;
        }
        (self.current as f64 / (n - 1) as f64 * 100.0).clamp(0.0, 100.0)
    }

    pub fn step_status(&self, index: usize) -> StepStatus {
        match index.cmp(&self.current) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;
    use crate::validation::{Rule, ValidationContext};
    use chrono::NaiveDate;

    fn wizard() -> SteppedForm {
        let ctx = ValidationContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let form = FormState::new(ctx)
            .field("title", "", vec![Rule::required("El título es requerido")])
            .field("goal", FieldValue::Number(None), vec![Rule::required("La meta es requerida")])
            .field("notes", "", vec![]);
        SteppedForm::new(
            form,
            vec![
                StepDefinition::new("basic", "Información básica", &["title"]),
                StepDefinition::new("funding", "Financiación", &["goal"]),
                StepDefinition::new("review", "Revisión", &["notes"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_next_blocked_until_step_valid() {
        let mut w = wizard();
        assert_eq!(w.next(), None);
        assert_eq!(w.current(), 0);
        assert_eq!(w.form().error("title"), Some("El título es requerido"));

        w.form_mut().set_value("title", "Huerto comunitario").unwrap();
        assert_eq!(w.next(), Some(Intent::StepChange(2)));
        assert_eq!(w.current(), 1);
        // later steps are not touched by earlier validation
        assert!(!w.form().is_touched("goal"));
    }

    #[test]
    fn test_previous_never_validates() {
        let mut w = wizard();
        assert_eq!(w.previous(), None);
        w.form_mut().set_value("title", "Huerto comunitario").unwrap();
        w.next();
        w.form_mut().set_value("title", "").unwrap();
        assert_eq!(w.previous(), Some(Intent::StepChange(1)));
        assert_eq!(w.current(), 0);
    }

    #[test]
    fn test_next_on_last_step_is_noop() {
        let mut w = wizard();
        w.jump_to(2).unwrap();
        assert!(w.is_last());
        assert_eq!(w.next(), None);
        assert_eq!(w.current(), 2);
    }

    #[test]
    fn test_jump_skips_validation() {
        let mut w = wizard();
        assert_eq!(w.jump_to(2).unwrap(), Some(Intent::StepChange(3)));
        assert!(!w.form().is_touched("title"));
        assert!(w.jump_to(5).is_err());
        assert!(w.jump_to_id("missing").is_err());
        assert_eq!(w.jump_to_id("basic").unwrap(), Some(Intent::StepChange(1)));
    }

    #[test]
    fn test_submit_lands_on_first_invalid_step() {
        let mut w = wizard();
        w.form_mut().set_value("title", "Huerto comunitario").unwrap();
        w.jump_to(2).unwrap();
        assert_eq!(w.submit(AuthGate::new(true)), Some(Intent::StepChange(2)));
        assert_eq!(w.current(), 1);
        assert_eq!(w.form().error("goal"), Some("La meta es requerida"));

        w.form_mut().set_value("goal", 5000.0).unwrap();
        match w.submit(AuthGate::new(true)) {
            Some(Intent::Submit(values)) => {
                assert_eq!(values.get("goal"), Some(&FieldValue::number(5000.0)));
            }
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn test_signed_out_submit_stays_put() {
        let mut w = wizard();
        w.jump_to(2).unwrap();
        assert_eq!(
            w.submit(AuthGate::new(false)),
            Some(Intent::LoginRequired(Action::Submit))
        );
        assert_eq!(w.current(), 2);
        assert!(!w.form().is_touched("title"));
    }

    #[test]
    fn test_progress_and_status() {
        let mut w = wizard();
        assert_eq!(w.progress(), 0.0);
        w.jump_to(1).unwrap();
        assert_eq!(w.progress(), 50.0);
        w.jump_to(2).unwrap();
        assert_eq!(w.progress(), 100.0);
        assert_eq!(w.step_status(0), StepStatus::Completed);
        assert_eq!(w.step_status(2), StepStatus::Current);

        let ctx = ValidationContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let single = SteppedForm::new(
            FormState::new(ctx).field("a", "", vec![]),
            vec![StepDefinition::new("only", "Único", &["a"])],
        )
        .unwrap();
        assert_eq!(single.progress(), 100.0);
    }

    #[test]
    fn test_step_with_undeclared_field_rejected() {
        let ctx = ValidationContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let result = SteppedForm::new(
            FormState::new(ctx),
            vec![StepDefinition::new("s", "S", &["ghost"])],
        );
        assert!(matches!(result, Err(DomainError::UnknownField(f)) if f == "ghost"));
    }
}
