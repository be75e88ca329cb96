use crate::config::FormLimits;
use crate::events::{AuthGate, Intent};
use crate::field::{FieldValue, FormState, FormValues};
use crate::forms::{initial_value, Captions, FormMode, SimpleForm};
use crate::tags::{AddOutcome, BoundedTags};
use crate::validation::{CharCounter, CrossRule, Rule, ValidationContext};

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const KIND: &str = "collaboration_type";
pub const LOCATION: &str = "location";
pub const START_DATE: &str = "start_date";
pub const END_DATE: &str = "end_date";
pub const MIN_COLLABORATORS: &str = "min_collaborators";
pub const MAX_COLLABORATORS: &str = "max_collaborators";
pub const SKILLS: &str = "skills_needed";

/// (value, label) options of the type select
pub const KINDS: [(&str, &str); 4] = [
    ("volunteer", "Voluntariado"),
    ("project", "Proyecto"),
    ("event", "Evento"),
    ("other", "Otro"),
];

const CAPTIONS: Captions = Captions {
    create_title: "Crear Colaboración",
    edit_title: "Editar Colaboración",
    create_submit: "Crear Colaboración",
    edit_submit: "Guardar Cambios",
};

#[derive(Debug, Clone)]
pub struct CollaborationForm {
    pub inner: SimpleForm,
    skills: BoundedTags,
    limits: FormLimits,
}

impl CollaborationForm {
    pub fn new(limits: &FormLimits, ctx: ValidationContext, initial: Option<&FormValues>) -> Self {
        let value = |id: &str, default: FieldValue| initial_value(initial, id, default);
        let skills = value(SKILLS, FieldValue::list(Vec::new()));
        let skills = BoundedTags::with_items(
            limits.max_skills,
            limits.case_insensitive_tags,
            skills.as_list().unwrap_or_default(),
        );
        let form = FormState::new(ctx)
            .field(
                TITLE,
                value(TITLE, FieldValue::text("")),
                vec![
                    Rule::required("El título es requerido"),
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
                    Rule::max_length(
                        limits.description_max,
                        format!("La descripción no puede exceder {} caracteres", limits.description_max),
                    ),
                ],
            )
            .field(
                KIND,
                value(KIND, FieldValue::text("")),
                vec![Rule::required("Selecciona un tipo de colaboración")],
            )
            .field(LOCATION, value(LOCATION, FieldValue::text("")), vec![])
            .field(START_DATE, value(START_DATE, FieldValue::Date(None)), vec![])
            .field(END_DATE, value(END_DATE, FieldValue::Date(None)), vec![])
            .field(
                MIN_COLLABORATORS,
                value(MIN_COLLABORATORS, FieldValue::Number(None)),
                vec![Rule::min(1.0, "Debe haber al menos 1 colaborador")],
            )
            .field(
                MAX_COLLABORATORS,
                value(MAX_COLLABORATORS, FieldValue::Number(None)),
                vec![Rule::min(1.0, "Debe haber al menos 1 colaborador")],
            )
            .field(SKILLS, skills.to_field_value(), vec![])
            .cross_rule(CrossRule::date_after(
                START_DATE,
                END_DATE,
                "La fecha de fin debe ser posterior a la fecha de inicio",
            ))
            .cross_rule(CrossRule::not_less(
                MIN_COLLABORATORS,
                MAX_COLLABORATORS,
                "El máximo de colaboradores no puede ser menor que el mínimo",
            ));
        Self {
            inner: SimpleForm::new(form, FormMode::of(initial)),
            skills,
            limits: limits.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        CAPTIONS.title(self.inner.mode())
    }

    pub fn submit_label(&self) -> &'static str {
        CAPTIONS.submit(self.inner.mode())
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

    pub fn skills(&self) -> &BoundedTags {
        &self.skills
    }

    fn sync_skills(&mut self) {
        let _ = self.inner.form_mut().set_value(SKILLS, self.skills.to_field_value());
    }

    pub fn add_skill(&mut self, raw: &str) -> AddOutcome {
        let outcome = self.skills.add(raw);
        if outcome == AddOutcome::Added {
            self.sync_skills();
        }
        outcome
    }

    pub fn remove_skill(&mut self, index: usize) -> Option<String> {
        let removed = self.skills.remove(index);
        if removed.is_some() {
            self.sync_skills();
        }
        removed
    }

    /// "1 / 15 habilidades"
    pub fn skills_label(&self) -> String {
        format!("{} habilidades", self.skills.counter_label())
    }

    pub fn submit(&mut self, gate: AuthGate) -> Option<Intent> {
        self.inner.submit(gate)
    }
}
