use crate::config::FormLimits;
use crate::events::{AuthGate, Intent};
use crate::field::{FieldValue, FormState, FormValues};
use crate::format::euros;
use crate::forms::{initial_value, Captions, FormMode, SimpleForm};
use crate::validation::{CharCounter, CrossRule, Rule, ValidationContext};
use crate::widgets::invest::{payment_summary, PaymentSummary};

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const AMOUNT: &str = "amount_requested";
pub const INTEREST: &str = "interest_rate";
pub const TERM: &str = "term_months";
pub const RISK: &str = "risk_level";
pub const CATEGORY: &str = "category";
pub const MINIMUM_INVESTMENT: &str = "minimum_investment";

const DEFAULT_TERM_MONTHS: f64 = 12.0;

const CAPTIONS: Captions = Captions {
    create_title: "Solicitar Microcrédito",
    edit_title: "Editar Microcrédito",
    create_submit: "Solicitar Microcrédito",
    edit_submit: "Guardar Cambios",
};

/// Microcredit request or edit
#[derive(Debug, Clone)]
pub struct MicrocreditForm {
    pub inner: SimpleForm,
    limits: FormLimits,
}

impl MicrocreditForm {
    pub fn new(limits: &FormLimits, ctx: ValidationContext, initial: Option<&FormValues>) -> Self {
        let value = |id: &str, default: FieldValue| initial_value(initial, id, default);
        let form = FormState::new(ctx)
            .field(
                TITLE,
                value(TITLE, FieldValue::text("")),
                vec![
                    Rule::required("El título es requerido"),
                    Rule::min_length(
                        limits.title_min,
                        format!("El título debe tener al menos {} caracteres", limits.title_min),
                    ),
                    Rule::max_length(
                        limits.title_max,
                        format!("El título no puede exceder {} caracteres", limits.title_max),
                    ),
                ],
            )
            .field(
                DESCRIPTION,
                value(DESCRIPTION, FieldValue::text("")),
                vec![
                    Rule::required("La descripción es requerida"),
                    Rule::min_length(
                        limits.description_min,
                        format!("La descripción debe tener al menos {} caracteres", limits.description_min),
                    ),
                    Rule::max_length(
                        limits.description_max,
                        format!("La descripción no puede exceder {} caracteres", limits.description_max),
                    ),
                ],
            )
            .field(
                AMOUNT,
                value(AMOUNT, FieldValue::Number(None)),
                vec![
                    Rule::required("La cantidad es requerida"),
                    Rule::min(limits.funding_min, format!("La cantidad mínima es {}", euros(limits.funding_min))),
                    Rule::max(limits.funding_max, format!("La cantidad máxima es {}", euros(limits.funding_max))),
                ],
            )
            .field(
                INTEREST,
                value(INTEREST, FieldValue::Number(None)),
                vec![
                    Rule::required("La tasa de interés es requerida"),
                    Rule::min(limits.interest_min, format!("La tasa de interés mínima es {}%", limits.interest_min)),
                    Rule::max(limits.interest_max, format!("La tasa de interés máxima es {}%", limits.interest_max)),
                ],
            )
            .field(
                TERM,
                value(TERM, FieldValue::number(DEFAULT_TERM_MONTHS)),
                vec![
                    Rule::required("El plazo es requerido"),
                    Rule::min(limits.term_min, format!("El plazo mínimo es {} meses", limits.term_min)),
                    Rule::max(limits.term_max, format!("El plazo máximo es {} meses", limits.term_max)),
                ],
            )
            .field(RISK, value(RISK, FieldValue::text("medium")), vec![])
            .field(CATEGORY, value(CATEGORY, FieldValue::text("")), vec![])
            .field(
                MINIMUM_INVESTMENT,
                value(MINIMUM_INVESTMENT, FieldValue::Number(None)),
                vec![Rule::min(
                    limits.minimum_investment,
                    format!("La inversión mínima debe ser al menos {}", euros(limits.minimum_investment)),
                )],
            )
            .cross_rule(CrossRule::not_greater(
                MINIMUM_INVESTMENT,
                AMOUNT,
                "La inversión mínima no puede ser mayor a la cantidad solicitada",
            ));
        Self {
            inner: SimpleForm::new(form, FormMode::of(initial)),
            limits: limits.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        CAPTIONS.title(self.inner.mode())
    }

    pub fn submit_label(&self) -> &'static str {
        CAPTIONS.submit(self.inner.mode())
    }

    pub fn submit(&mut self, gate: AuthGate) -> Option<Intent> {
        self.inner.submit(gate)
    }

    pub fn title_counter(&self) -> CharCounter {
        let text = self.inner.form().value(TITLE).and_then(FieldValue::as_text).unwrap_or("");
        CharCounter::new(text, self.limits.title_max)
    }

    pub fn description_counter(&self) -> CharCounter {
        let text = self
            .inner
            .form()
            .value(DESCRIPTION)
            .and_then(FieldValue::as_text)
            .unwrap_or("");
        CharCounter::new(text, self.limits.description_max)
    }

    /// Shown only once amount, rate and term are all valid
    pub fn payment_summary(&self) -> Option<PaymentSummary> {
        let form = self.inner.form();
        if !form.fields_valid(&[AMOUNT, INTEREST, TERM]) {
            return None;
        }
        let number = |id: &str| form.value(id).and_then(FieldValue::as_number);
        payment_summary(number(AMOUNT)?, number(INTEREST)?, number(TERM)?.round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Action;
    use chrono::NaiveDate;

    fn form() -> MicrocreditForm {
        let ctx = ValidationContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        MicrocreditForm::new(&FormLimits::default(), ctx, None)
    }

    fn fill(f: &mut MicrocreditForm) {
        let form = f.inner.form_mut();
        form.set_value(TITLE, "Expansión de Panadería").unwrap();
        form.set_value(DESCRIPTION, "Necesito financiación para comprar un horno industrial nuevo.").unwrap();
        form.set_value(AMOUNT, 5_000.0).unwrap();
        form.set_value(INTEREST, 5.5).unwrap();
    }

    #[test]
    fn test_required_and_length_messages() {
        let mut f = form();
        assert_eq!(f.submit(AuthGate::new(true)), None);
        assert_eq!(f.inner.form().error(TITLE), Some("El título es requerido"));
        assert_eq!(f.inner.form().error(DESCRIPTION), Some("La descripción es requerida"));

        let form = f.inner.form_mut();
        form.set_value(TITLE, "Corto").unwrap();
        assert_eq!(form.error(TITLE), Some("El título debe tener al menos 10 caracteres"));
        form.set_value(TITLE, "a".repeat(101).as_str()).unwrap();
        assert_eq!(form.error(TITLE), Some("El título no puede exceder 100 caracteres"));
        form.set_value(DESCRIPTION, "Muy corta").unwrap();
        assert_eq!(form.error(DESCRIPTION), Some("La descripción debe tener al menos 50 caracteres"));
    }

    #[test]
    fn test_amount_and_interest_bounds() {
        let mut f = form();
        f.submit(AuthGate::new(true));
        let form = f.inner.form_mut();
        form.set_value(AMOUNT, 50.0).unwrap();
        assert_eq!(form.error(AMOUNT), Some("La cantidad mínima es 100€"));
        form.set_value(AMOUNT, 150_000.0).unwrap();
        assert_eq!(form.error(AMOUNT), Some("La cantidad máxima es 100.000€"));
        form.set_value(INTEREST, 35.0).unwrap();
        assert_eq!(form.error(INTEREST), Some("La tasa de interés máxima es 30%"));
        assert_eq!(form.error(TERM), None);
    }

    #[test]
    fn test_minimum_investment_not_above_amount() {
        let mut f = form();
        fill(&mut f);
        f.inner.form_mut().set_value(MINIMUM_INVESTMENT, 5.0).unwrap();
        assert_eq!(f.submit(AuthGate::new(true)), None);
        assert_eq!(
            f.inner.form().error(MINIMUM_INVESTMENT),
            Some("La inversión mínima debe ser al menos 10€")
        );
        f.inner.form_mut().set_value(MINIMUM_INVESTMENT, 6_000.0).unwrap();
        assert_eq!(
            f.inner.form().error(MINIMUM_INVESTMENT),
            Some("La inversión mínima no puede ser mayor a la cantidad solicitada")
        );
        f.inner.form_mut().set_value(MINIMUM_INVESTMENT, 100.0).unwrap();
        assert!(matches!(f.submit(AuthGate::new(true)), Some(Intent::Submit(_))));
    }

    #[test]
    fn test_signed_out_submit_asks_for_login() {
        let mut f = form();
        fill(&mut f);
        assert_eq!(f.submit(AuthGate::new(false)), Some(Intent::LoginRequired(Action::Submit)));
        assert!(matches!(f.submit(AuthGate::new(true)), Some(Intent::Submit(_))));
    }

    #[test]
    fn test_payment_summary_and_counters() {
        let mut f = form();
        assert_eq!(f.payment_summary(), None);
        assert_eq!(f.title_counter().label(), "0 / 100");
        fill(&mut f);
        let summary = f.payment_summary().unwrap();
        assert!((summary.monthly_payment - 429.18).abs() < 0.01);
        assert_eq!(f.description_counter().label(), "61 / 1000");
        assert_eq!(f.title(), "Solicitar Microcrédito");
    }

    #[test]
    fn test_edit_mode_defaults() {
        let ctx = ValidationContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let mut initial = FormValues::new();
        initial.insert(TITLE.into(), FieldValue::text("Taller de Bicicletas"));
        let f = MicrocreditForm::new(&FormLimits::default(), ctx, Some(&initial));
        assert_eq!(f.title(), "Editar Microcrédito");
        assert_eq!(f.submit_label(), "Guardar Cambios");
        assert_eq!(f.inner.form().value(TERM), Some(&FieldValue::number(12.0)));
        assert_eq!(f.inner.form().value(RISK), Some(&FieldValue::text("medium")));
    }
}
