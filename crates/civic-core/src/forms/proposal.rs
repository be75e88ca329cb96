use crate::config::FormLimits;
use crate::domain::count_label;
use crate::error::DomainResult;
use crate::events::{AuthGate, Intent};
use crate::field::{FieldValue, FormState, FormValues};
use crate::forms::{initial_value, Captions, FormMode, SimpleForm};
use crate::validation::{CharCounter, Rule, ValidationContext};

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";

const FIELDS: [&str; 2] = [TITLE, DESCRIPTION];

const CAPTIONS: Captions = Captions {
    create_title: "Nueva propuesta",
    edit_title: "Editar propuesta",
    create_submit: "Crear propuesta",
    edit_submit: "Guardar cambios",
};

pub const GUIDELINES_TITLE: &str = "Guía para una buena propuesta";

pub const GUIDELINES: [&str; 4] = [
    "Usa un título claro que resuma la idea",
    "Explica el problema que quieres resolver",
    "Describe cómo beneficiará a la comunidad",
    "Sé concreto y evita propuestas duplicadas",
];

/// Outcome banner set by the parent after a round-trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "alert alert-success",
            Notice::Error(_) => "alert alert-error",
        }
    }
}

/// Title and description of a citizen proposal
#[derive(Debug, Clone)]
pub struct ProposalForm {
    pub inner: SimpleForm,
    pub notice: Option<Notice>,
    limits: FormLimits,
}

impl ProposalForm {
    pub fn new(limits: &FormLimits, ctx: ValidationContext, initial: Option<&FormValues>) -> Self {
        let value = |id: &str| initial_value(initial, id, FieldValue::text(""));
        let form = FormState::new(ctx)
            .field(
                TITLE,
                value(TITLE),
                vec![
                    Rule::required("El título es obligatorio"),
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
                value(DESCRIPTION),
                vec![
                    Rule::required("La descripción es obligatoria"),
                    Rule::min_length(
                        limits.description_min,
                        format!("La descripción debe tener al menos {} caracteres", limits.description_min),
                    ),
                    Rule::max_length(
                        limits.description_max,
                        format!("La descripción no puede exceder {} caracteres", limits.description_max),
                    ),
                ],
            );
        Self {
            inner: SimpleForm::new(form, FormMode::of(initial)),
            notice: None,
            limits: limits.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        CAPTIONS.title(self.inner.mode())
    }

    pub fn title_label(&self) -> &'static str {
        match self.inner.mode() {
            FormMode::Create => "Título de la propuesta",
            FormMode::Edit => "Editar título",
        }
    }

    pub fn description_label(&self) -> &'static str {
        match self.inner.mode() {
            FormMode::Create => "Descripción de la propuesta",
            FormMode::Edit => "Editar descripción",
        }
    }

    /// Button text, switched to progress wording while loading
    pub fn submit_label(&self) -> &'static str {
        match (self.inner.loading, self.inner.mode()) {
            (true, FormMode::Create) => "Creando...",
            (true, FormMode::Edit) => "Guardando...",
            (false, mode) => CAPTIONS.submit(mode),
        }
    }

    fn text(&self, id: &str) -> &str {
        self.inner.form().value(id).and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn title_counter(&self) -> CharCounter {
        CharCounter::new(self.text(TITLE), self.limits.title_max)
    }

    pub fn description_counter(&self) -> CharCounter {
        CharCounter::new(self.text(DESCRIPTION), self.limits.description_max)
    }

    /// Fields that are filled and pass their rules
    pub fn completed_fields(&self) -> usize {
        FIELDS
            .iter()
            .filter(|id| !self.text(id).trim().is_empty() && self.inner.form().fields_valid(&[**id]))
            .count()
    }

    /// "1/2 campos completados"
    pub fn progress_label(&self) -> String {
        format!("{}/{} campos completados", self.completed_fields(), FIELDS.len())
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed_fields() == FIELDS.len() {
            "Listo"
        } else {
            "Incompleto"
        }
    }

    /// "12 palabras" under the description
    pub fn description_words(&self) -> String {
        count_label(self.text(DESCRIPTION).split_whitespace().count(), "palabra", "palabras")
    }

    /// Programmatic value change from the parent, validated like typing
    pub fn set_field_value(&mut self, id: &str, value: impl Into<FieldValue>) -> DomainResult<()> {
        self.inner.form_mut().set_field_value(id, value)
    }

    /// Server-side error on a field; `None` clears it
    pub fn set_field_error(&mut self, id: &str, error: Option<String>) -> DomainResult<()> {
        self.inner.form_mut().set_field_error(id, error)
    }

    /// Back to the initial values with no errors or notice
    pub fn reset_form(&mut self) {
        self.inner.reset();
        self.notice = None;
    }

    pub fn submit(&mut self, gate: AuthGate) -> Option<Intent> {
        self.inner.submit(gate)
    }

    pub fn cancel(&self) -> Intent {
        self.inner.cancel()
    }
}
