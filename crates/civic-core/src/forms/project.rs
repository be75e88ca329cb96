//! Project submission wizard

use crate::config::FormLimits;
use crate::error::DomainResult;
use crate::events::{AuthGate, Intent};
use crate::field::{FieldValue, FormState, FormValues};
use crate::forms::{initial_value, Captions, FormMode};
use crate::stepper::{StepDefinition, SteppedForm};
use crate::validation::{CharCounter, CrossRule, Rule, ValidationContext};

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const CATEGORY: &str = "category";
pub const FUNDING_GOAL: &str = "funding_goal";
pub const BUDGET_BREAKDOWN: &str = "budget_breakdown";
pub const TEAM_MEMBERS: &str = "team_members";
pub const SKILLS_NEEDED: &str = "skills_needed";
pub const START_DATE: &str = "start_date";
pub const END_DATE: &str = "end_date";
pub const MILESTONES: &str = "milestones";

const DESCRIPTION_MAX: usize = 2_000;
const FUNDING_GOAL_MAX: f64 = 1_000_000.0;

pub const CATEGORIES: [(&str, &str); 7] = [
    ("social", "Social"),
    ("technology", "Tecnología"),
    ("culture", "Cultura"),
    ("education", "Educación"),
    ("environment", "Medio Ambiente"),
    ("health", "Salud"),
    ("other", "Otro"),
];

const CAPTIONS: Captions = Captions {
    create_title: "Nuevo Proyecto",
    edit_title: "Editar Proyecto",
    create_submit: "Enviar Proyecto",
    edit_submit: "Actualizar Proyecto",
};

fn steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new("basic-info", "Información Básica", &[TITLE, DESCRIPTION, CATEGORY]),
        StepDefinition::new("funding", "Financiación", &[FUNDING_GOAL, BUDGET_BREAKDOWN]),
        StepDefinition::new("team", "Equipo", &[TEAM_MEMBERS, SKILLS_NEEDED]),
        StepDefinition::new("timeline", "Planificación", &[START_DATE, END_DATE, MILESTONES]),
    ]
}

/// Four-step project wizard
#[derive(Debug, Clone)]
pub struct ProjectForm {
    pub wizard: SteppedForm,
    mode: FormMode,
    limits: FormLimits,
    pub loading: bool,
    pub disabled: bool,
}

impl ProjectForm {
    pub fn new(limits: &FormLimits, ctx: ValidationContext, initial: Option<&FormValues>) -> DomainResult<Self> {
        let value = |id: &str, default: FieldValue| initial_value(initial, id, default);
        let text = |id: &str| value(id, FieldValue::text(""));
        let form = FormState::new(ctx)
            .field(
                TITLE,
                text(TITLE),
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
                text(DESCRIPTION),
                vec![
                    Rule::required("La descripción es requerida"),
                    Rule::min_length(
                        limits.description_min,
                        format!("La descripción debe tener al menos {} caracteres", limits.description_min),
                    ),
                    Rule::max_length(
                        DESCRIPTION_MAX,
                        format!("La descripción no puede exceder {DESCRIPTION_MAX} caracteres"),
                    ),
                ],
            )
            .field(CATEGORY, text(CATEGORY), vec![Rule::required("Debes seleccionar una categoría")])
            .field(
                FUNDING_GOAL,
                value(FUNDING_GOAL, FieldValue::Number(None)),
                vec![
                    Rule::required("El objetivo de financiación debe ser mayor a 0"),
                    Rule::min(1.0, "El objetivo de financiación debe ser mayor a 0"),
                    Rule::max(FUNDING_GOAL_MAX, "El objetivo no puede exceder 1.000.000€"),
                ],
            )
            .field(
                BUDGET_BREAKDOWN,
                text(BUDGET_BREAKDOWN),
                vec![Rule::required("Debes proporcionar un desglose del presupuesto")],
            )
            .field(
                TEAM_MEMBERS,
                text(TEAM_MEMBERS),
                vec![Rule::required("Describe los miembros del equipo")],
            )
            .field(
                SKILLS_NEEDED,
                text(SKILLS_NEEDED),
                vec![Rule::required("Describe las habilidades necesarias")],
            )
            .field(
                START_DATE,
                value(START_DATE, FieldValue::Date(None)),
                vec![Rule::required("La fecha de inicio es requerida")],
            )
            .field(
                END_DATE,
                value(END_DATE, FieldValue::Date(None)),
                vec![Rule::required("La fecha de finalización es requerida")],
            )
            .field(MILESTONES, text(MILESTONES), vec![Rule::required("Describe los hitos del proyecto")])
            .cross_rule(CrossRule::date_after(
                START_DATE,
                END_DATE,
                "La fecha de finalización debe ser posterior a la fecha de inicio",
            ));
        Ok(Self {
            wizard: SteppedForm::new(form, steps())?,
            mode: FormMode::of(initial),
            limits: limits.clone(),
            loading: false,
            disabled: false,
        })
    }

    fn is_inert(&self) -> bool {
        self.loading || self.disabled
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        CAPTIONS.title(self.mode)
    }

    pub fn submit_label(&self) -> &'static str {
        CAPTIONS.submit(self.mode)
    }

    pub fn title_counter(&self) -> CharCounter {
        let text = self.wizard.form().value(TITLE).and_then(FieldValue::as_text).unwrap_or("");
        CharCounter::new(text, self.limits.title_max)
    }

    pub fn description_counter(&self) -> CharCounter {
        let text = self
            .wizard
            .form()
            .value(DESCRIPTION)
            .and_then(FieldValue::as_text)
            .unwrap_or("");
        CharCounter::new(text, DESCRIPTION_MAX)
    }

    pub fn next(&mut self) -> Option<Intent> {
        if self.is_inert() {
            return None;
        }
        self.wizard.next()
    }

    pub fn previous(&mut self) -> Option<Intent> {
        if self.is_inert() {
            return None;
        }
        self.wizard.previous()
    }

    pub fn jump_to(&mut self, index: usize) -> DomainResult<Option<Intent>> {
        if self.is_inert() {
            return Ok(None);
        }
        self.wizard.jump_to(index)
    }

    pub fn submit(&mut self, gate: AuthGate) -> Option<Intent> {
        if self.is_inert() {
            return None;
        }
        self.wizard.submit(gate)
    }

    pub fn save_draft(&self) -> Option<Intent> {
        (!self.is_inert()).then(|| self.wizard.save_draft())
    }

    pub fn cancel(&self) -> Intent {
        Intent::Cancel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form() -> ProjectForm {
        let ctx = ValidationContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        ProjectForm::new(&FormLimits::default(), ctx, None).unwrap()
    }

    fn fill_basic(f: &mut ProjectForm) {
        let form = f.wizard.form_mut();
        form.set_value(TITLE, "Centro Comunitario").unwrap();
        form.set_value(DESCRIPTION, "x".repeat(60).as_str()).unwrap();
        form.set_value(CATEGORY, "social").unwrap();
    }

    fn fill_rest(f: &mut ProjectForm) {
        let form = f.wizard.form_mut();
        form.set_value(FUNDING_GOAL, 50_000.0).unwrap();
        form.set_value(BUDGET_BREAKDOWN, "Obras y materiales").unwrap();
        form.set_value(TEAM_MEMBERS, "Tres vecinas").unwrap();
        form.set_value(SKILLS_NEEDED, "Carpintería").unwrap();
        form.set_value(START_DATE, FieldValue::parse_date("2025-03-01")).unwrap();
        form.set_value(END_DATE, FieldValue::parse_date("2025-09-01")).unwrap();
        form.set_value(MILESTONES, "Apertura en septiembre").unwrap();
    }

    #[test]
    fn test_steps_and_progress() {
        let mut f = form();
        assert_eq!(f.wizard.step_count(), 4);
        assert_eq!(f.wizard.current_step().title, "Información Básica");
        assert_eq!(f.wizard.progress(), 0.0);
        assert_eq!(f.next(), None);
        assert_eq!(f.wizard.form().error(CATEGORY), Some("Debes seleccionar una categoría"));

        fill_basic(&mut f);
        assert_eq!(f.next(), Some(Intent::StepChange(2)));
        assert_eq!(f.wizard.progress().round(), 33.0);
        assert_eq!(f.jump_to(3).unwrap(), Some(Intent::StepChange(4)));
        assert_eq!(f.wizard.progress(), 100.0);
        assert_eq!(f.previous(), Some(Intent::StepChange(3)));
    }

    #[test]
    fn test_funding_goal_bounds() {
        let mut f = form();
        fill_basic(&mut f);
        f.next();
        assert_eq!(f.next(), None);
        assert_eq!(
            f.wizard.form().error(FUNDING_GOAL),
            Some("El objetivo de financiación debe ser mayor a 0")
        );
        f.wizard.form_mut().set_value(FUNDING_GOAL, 2_000_000.0).unwrap();
        assert_eq!(f.wizard.form().error(FUNDING_GOAL), Some("El objetivo no puede exceder 1.000.000€"));
    }

    #[test]
    fn test_end_date_after_start() {
        let mut f = form();
        fill_basic(&mut f);
        fill_rest(&mut f);
        f.wizard.form_mut().set_value(END_DATE, FieldValue::parse_date("2025-02-01")).unwrap();
        f.jump_to(3).unwrap();
        assert_eq!(f.submit(AuthGate::new(true)), None);
        assert_eq!(
            f.wizard.form().error(END_DATE),
            Some("La fecha de finalización debe ser posterior a la fecha de inicio")
        );
    }

    #[test]
    fn test_submit_returns_to_first_invalid_step() {
        let mut f = form();
        f.jump_to(3).unwrap();
        assert_eq!(f.submit(AuthGate::new(true)), Some(Intent::StepChange(1)));
        assert_eq!(f.wizard.current_step().id, "basic-info");

        fill_basic(&mut f);
        fill_rest(&mut f);
        let Some(Intent::Submit(values)) = f.submit(AuthGate::new(true)) else {
            panic!("expected submit");
        };
        assert_eq!(values[FUNDING_GOAL], FieldValue::number(50_000.0));
    }

    #[test]
    fn test_signed_out_submit_asks_for_login() {
        let mut f = form();
        fill_basic(&mut f);
        fill_rest(&mut f);
        assert_eq!(
            f.submit(AuthGate::new(false)),
            Some(Intent::LoginRequired(crate::events::Action::Submit))
        );
        assert_eq!(f.wizard.current(), 0);
    }

    #[test]
    fn test_draft_cancel_and_loading() {
        let mut f = form();
        assert!(matches!(f.save_draft(), Some(Intent::SaveDraft(_))));
        assert_eq!(f.cancel(), Intent::Cancel);
        assert_eq!(f.submit_label(), "Enviar Proyecto");
        f.loading = true;
        assert_eq!(f.save_draft(), None);
        assert_eq!(f.jump_to(2).unwrap(), None);
        assert_eq!(f.title_counter().label(), "0 / 100");
        assert_eq!(f.description_counter().label(), "0 / 2000");
    }
}
