//! Concrete Forms
//!
//! Screens assembled from the rule engine, the field store and the stepper.
//! Every constructor takes the configured [`FormLimits`] and a
//! [`ValidationContext`], plus optional initial values for edit mode.
//!
//! [`FormLimits`]: crate::config::FormLimits
//! [`ValidationContext`]: crate::validation::ValidationContext

pub mod collaboration;
pub mod microcredit;
pub mod participation;
pub mod project;
pub mod proposal;
pub mod verification;

pub use collaboration::CollaborationForm;
pub use microcredit::MicrocreditForm;
pub use participation::ParticipationForm;
pub use project::ProjectForm;
pub use proposal::ProposalForm;
pub use verification::{VerificationForm, VerificationStatus};

use serde::Serialize;

use crate::events::{Action, AuthGate, Intent};
use crate::field::{FieldValue, FormState, FormValues};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    pub fn of(initial: Option<&FormValues>) -> Self {
        if initial.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn is_edit(&self) -> bool {
        *self == FormMode::Edit
    }
}

/// Value from the edit payload, else the create default
pub(crate) fn initial_value(initial: Option<&FormValues>, id: &str, default: FieldValue) -> FieldValue {
    initial.and_then(|values| values.get(id)).cloned().unwrap_or(default)
}

/// Single-page form: one submit over every field
#[derive(Debug, Clone)]
pub struct SimpleForm {
    form: FormState,
    mode: FormMode,
    pub loading: bool,
    pub disabled: bool,
}

impl SimpleForm {
    pub fn new(form: FormState, mode: FormMode) -> Self {
        Self {
            form,
            mode,
            loading: false,
            disabled: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Submit button state. Edit mode also needs an actual change.
    pub fn can_submit(&self) -> bool {
        !self.loading
            && !self.disabled
            && self.form.is_valid()
            && (!self.mode.is_edit() || self.form.has_changes())
    }

    /// Signed-out users get `LoginRequired` before anything is validated.
    /// Otherwise validates every field, surfacing errors, before emitting.
    pub fn submit(&mut self, gate: AuthGate) -> Option<Intent> {
        if self.loading || self.disabled {
            return None;
        }
        gate.guard(Action::Submit, || {
            if !self.form.validate_all() {
                log::debug!("submit blocked by validation");
                return None;
            }
            if self.mode.is_edit() && !self.form.has_changes() {
                return None;
            }
            Some(Intent::Submit(self.form.values()))
        })
    }

    pub fn cancel(&self) -> Intent {
        Intent::Cancel
    }

    pub fn reset(&mut self) {
        self.form.reset();
    }
}

/// Create and edit captions of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captions {
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub create_submit: &'static str,
    pub edit_submit: &'static str,
}

impl Captions {
    pub fn title(&self, mode: FormMode) -> &'static str {
        match mode {
            FormMode::Create => self.create_title,
            FormMode::Edit => self.edit_title,
        }
    }

    pub fn submit(&self, mode: FormMode) -> &'static str {
        match mode {
            FormMode::Create => self.create_submit,
            FormMode::Edit => self.edit_submit,
        }
    }
}
