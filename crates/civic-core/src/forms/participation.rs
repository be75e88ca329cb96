use crate::config::FormLimits;
use crate::events::{AuthGate, Intent};
use crate::field::{FieldValue, FormState, FormValues};
use crate::forms::{initial_value, Captions, FormMode, SimpleForm};
use crate::tags::{AddOutcome, BoundedTags};
use crate::validation::{CharCounter, Rule, ValidationContext};

pub const NAME: &str = "name";
pub const DESCRIPTION: &str = "description";
pub const STATUS: &str = "status";
pub const MAX_MEMBERS: &str = "max_members";
pub const MEETING_SCHEDULE: &str = "meeting_schedule";
pub const TAGS: &str = "tags";

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 100;
const DESCRIPTION_MIN: usize = 20;
const DESCRIPTION_MAX: usize = 500;
const MIN_MEMBERS: f64 = 2.0;

const CAPTIONS: Captions = Captions {
    create_title: "Crear Equipo de Participación",
    edit_title: "Editar Equipo",
    create_submit: "Crear Equipo",
    edit_submit: "Guardar Cambios",
};

/// Participation team create/edit form
#[derive(Debug, Clone)]
pub struct ParticipationForm {
    pub inner: SimpleForm,
    tags: BoundedTags,
}

impl ParticipationForm {
    pub fn new(limits: &FormLimits, ctx: ValidationContext, initial: Option<&FormValues>) -> Self {
        let value = |id: &str, default: FieldValue| initial_value(initial, id, default);
        let tags = value(TAGS, FieldValue::list(Vec::new()));
        let tags = BoundedTags::with_items(
            limits.max_tags,
            limits.case_insensitive_tags,
            tags.as_list().unwrap_or_default(),
        );
        let form = FormState::new(ctx)
            .field(
                NAME,
                value(NAME, FieldValue::text("")),
                vec![
                    Rule::required("El nombre del equipo es requerido"),
                    Rule::min_length(NAME_MIN, format!("El nombre debe tener al menos {NAME_MIN} caracteres")),
                    Rule::max_length(NAME_MAX, format!("El nombre no puede exceder {NAME_MAX} caracteres")),
                ],
            )
            .field(
                DESCRIPTION,
                value(DESCRIPTION, FieldValue::text("")),
                vec![
                    Rule::required("La descripción es requerida"),
                    Rule::min_length(
                        DESCRIPTION_MIN,
                        format!("La descripción debe tener al menos {DESCRIPTION_MIN} caracteres"),
                    ),
                    Rule::max_length(
                        DESCRIPTION_MAX,
                        format!("La descripción no puede exceder {DESCRIPTION_MAX} caracteres"),
                    ),
                ],
            )
            .field(STATUS, value(STATUS, FieldValue::text("recruiting")), vec![])
            .field(
                MAX_MEMBERS,
                value(MAX_MEMBERS, FieldValue::Number(None)),
                vec![Rule::min(MIN_MEMBERS, "El equipo debe tener al menos 2 miembros")],
            )
            .field(MEETING_SCHEDULE, value(MEETING_SCHEDULE, FieldValue::text("")), vec![])
            .field(TAGS, tags.to_field_value(), vec![]);
        Self {
            inner: SimpleForm::new(form, FormMode::of(initial)),
            tags,
        }
    }

    pub fn title(&self) -> &'static str {
        CAPTIONS.title(self.inner.mode())
    }

    pub fn submit_label(&self) -> &'static str {
        CAPTIONS.submit(self.inner.mode())
    }

    pub fn name_counter(&self) -> CharCounter {
        let text = self.inner.form().value(NAME).and_then(FieldValue::as_text).unwrap_or("");
        CharCounter::new(text, NAME_MAX)
    }

    pub fn description_counter(&self) -> CharCounter {
        let text = self
            .inner
            .form()
            .value(DESCRIPTION)
            .and_then(FieldValue::as_text)
            .unwrap_or("");
        CharCounter::new(text, DESCRIPTION_MAX)
    }

    pub fn tags(&self) -> &BoundedTags {
        &self.tags
    }

    fn sync_tags(&mut self) {
        let _ = self.inner.form_mut().set_value(TAGS, self.tags.to_field_value());
    }

    pub fn add_tag(&mut self, raw: &str) -> AddOutcome {
        let outcome = self.tags.add(raw);
        if outcome == AddOutcome::Added {
            self.sync_tags();
        }
        outcome
    }

    pub fn remove_tag(&mut self, index: usize) -> Option<String> {
        let removed = self.tags.remove(index);
        if removed.is_some() {
            self.sync_tags();
        }
        removed
    }

    /// "3 / 10 etiquetas"
    pub fn tags_label(&self) -> String {
        format!("{} etiquetas", self.tags.counter_label())
    }

    pub fn submit(&mut self, gate: AuthGate) -> Option<Intent> {
        self.inner.submit(gate)
    }
}
