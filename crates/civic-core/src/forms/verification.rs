//! Identity verification wizard

use serde::{Deserialize, Serialize};

use crate::error::DomainResult;
use crate::events::{AuthGate, Intent};
use crate::field::{FieldValue, FormState, FormValues};
use crate::forms::initial_value;
use crate::stepper::{StepDefinition, SteppedForm};
use crate::validation::{Rule, ValidationContext};

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const DATE_OF_BIRTH: &str = "date_of_birth";
pub const NATIONALITY: &str = "nationality";
pub const DOCUMENT_TYPE: &str = "document_type";
pub const DOCUMENT_NUMBER: &str = "document_number";
pub const EXPIRATION_DATE: &str = "expiration_date";
pub const STREET: &str = "street";
pub const NUMBER: &str = "number";
pub const FLOOR: &str = "floor";
pub const DOOR: &str = "door";
pub const POSTAL_CODE: &str = "postal_code";
pub const CITY: &str = "city";
pub const PROVINCE: &str = "province";
pub const COUNTRY_CODE: &str = "country_code";
pub const PHONE_NUMBER: &str = "phone_number";

const MIN_AGE: u32 = 18;

pub const DOCUMENT_TYPES: [(&str, &str); 3] = [("dni", "DNI"), ("nie", "NIE"), ("passport", "Pasaporte")];

/// Where the user's verification stands on the server side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationStatus {
    #[default]
    NotStarted,
    InProgress,
    PendingReview,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::NotStarted => "not-started",
            VerificationStatus::InProgress => "in-progress",
            VerificationStatus::PendingReview => "pending-review",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotStarted => "No Iniciado",
            VerificationStatus::InProgress => "En Progreso",
            VerificationStatus::PendingReview => "Pendiente de Revisión",
            VerificationStatus::Verified => "Verificado",
            VerificationStatus::Rejected => "Rechazado",
        }
    }
}

fn steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new(
            "personal",
            "Datos Personales",
            &[FIRST_NAME, LAST_NAME, DATE_OF_BIRTH, NATIONALITY],
        ),
        StepDefinition::new(
            "document",
            "Documento de Identidad",
            &[DOCUMENT_TYPE, DOCUMENT_NUMBER, EXPIRATION_DATE],
        ),
        StepDefinition::new(
            "address",
            "Dirección de Residencia",
            &[STREET, NUMBER, FLOOR, DOOR, POSTAL_CODE, CITY, PROVINCE],
        ),
        StepDefinition::new("phone", "Verificación de Teléfono", &[COUNTRY_CODE, PHONE_NUMBER]),
        StepDefinition::new("review", "Revisión de Datos", &[]),
    ]
}

/// Five-step identity verification
#[derive(Debug, Clone)]
pub struct VerificationForm {
    pub wizard: SteppedForm,
    pub status: VerificationStatus,
    pub loading: bool,
}

impl VerificationForm {
    pub fn new(ctx: ValidationContext, initial: Option<&FormValues>) -> DomainResult<Self> {
        let text = |id: &str| initial_value(initial, id, FieldValue::text(""));
        let date = |id: &str| initial_value(initial, id, FieldValue::Date(None));
        let form = FormState::new(ctx)
            .field(
                FIRST_NAME,
                text(FIRST_NAME),
                vec![
                    Rule::required("El nombre es requerido"),
                    Rule::min_length(2, "El nombre debe tener al menos 2 caracteres"),
                ],
            )
            .field(
                LAST_NAME,
                text(LAST_NAME),
                vec![
                    Rule::required("Los apellidos son requeridos"),
                    Rule::min_length(2, "Los apellidos deben tener al menos 2 caracteres"),
                ],
            )
            .field(
                DATE_OF_BIRTH,
                date(DATE_OF_BIRTH),
                vec![
                    Rule::required("La fecha de nacimiento es requerida"),
                    Rule::min_age(MIN_AGE, format!("Debes ser mayor de {MIN_AGE} años")),
                ],
            )
            .field(NATIONALITY, text(NATIONALITY), vec![Rule::required("La nacionalidad es requerida")])
            .field(
                DOCUMENT_TYPE,
                text(DOCUMENT_TYPE),
                vec![Rule::required("Selecciona un tipo de documento")],
            )
            .field(
                DOCUMENT_NUMBER,
                text(DOCUMENT_NUMBER),
                vec![
                    Rule::required("El número de documento es requerido"),
                    Rule::pattern(r"^[A-Za-z0-9]{5,20}$", "El número de documento no es válido")?,
                ],
            )
            .field(
                EXPIRATION_DATE,
                date(EXPIRATION_DATE),
                vec![
                    Rule::required("La fecha de caducidad es requerida"),
                    Rule::not_expired("El documento ha caducado"),
                ],
            )
            .field(STREET, text(STREET), vec![Rule::required("La calle es requerida")])
            .field(NUMBER, text(NUMBER), vec![Rule::required("El número es requerido")])
            .field(FLOOR, text(FLOOR), vec![])
            .field(DOOR, text(DOOR), vec![])
            .field(
                POSTAL_CODE,
                text(POSTAL_CODE),
                vec![
                    Rule::required("El código postal es requerido"),
                    Rule::pattern(r"^\d{5}$", "El código postal debe tener 5 dígitos")?,
                ],
            )
            .field(CITY, text(CITY), vec![Rule::required("La ciudad es requerida")])
            .field(PROVINCE, text(PROVINCE), vec![Rule::required("La provincia es requerida")])
            .field(
                COUNTRY_CODE,
                initial_value(initial, COUNTRY_CODE, FieldValue::text("+34")),
                vec![Rule::required("El prefijo es requerido")],
            )
            .field(
                PHONE_NUMBER,
                text(PHONE_NUMBER),
                vec![
                    Rule::required("El teléfono es requerido"),
                    Rule::pattern(r"^\d{9,}$", "El teléfono debe tener al menos 9 dígitos")?,
                ],
            );
        Ok(Self {
            wizard: SteppedForm::new(form, steps())?,
            status: VerificationStatus::InProgress,
            loading: false,
        })
    }

    fn text(&self, id: &str) -> String {
        self.wizard.form().value(id).map(FieldValue::display).unwrap_or_default()
    }

    /// "+34 600123456"
    pub fn full_phone(&self) -> String {
        format!("{} {}", self.text(COUNTRY_CODE), self.text(PHONE_NUMBER))
    }

    /// Validates the phone fields first
    pub fn send_verification_code(&mut self) -> Option<Intent> {
        if self.loading {
            return None;
        }
        let valid = self
            .wizard
            .form_mut()
            .validate_fields(&[COUNTRY_CODE, PHONE_NUMBER])
            .unwrap_or(false);
        valid.then(|| Intent::SendVerificationCode {
            phone: self.full_phone(),
        })
    }

    /// (label, value) rows shown on the review step
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let document = self.text(DOCUMENT_TYPE);
        let document = DOCUMENT_TYPES
            .iter()
            .find(|(value, _)| *value == document)
            .map(|(_, label)| label.to_string())
            .unwrap_or(document);
        let mut address = format!("{} {}", self.text(STREET), self.text(NUMBER));
        for extra in [FLOOR, DOOR] {
            let part = self.text(extra);
            if !part.trim().is_empty() {
                address.push_str(", ");
                address.push_str(part.trim());
            }
        }
        vec![
            ("Nombre", format!("{} {}", self.text(FIRST_NAME), self.text(LAST_NAME))),
            ("Fecha de Nacimiento", self.text(DATE_OF_BIRTH)),
            ("Nacionalidad", self.text(NATIONALITY)),
            ("Documento", format!("{document} {}", self.text(DOCUMENT_NUMBER))),
            ("Dirección", address),
            (
                "Localidad",
                format!("{} {}, {}", self.text(POSTAL_CODE), self.text(CITY), self.text(PROVINCE)),
            ),
            ("Teléfono", self.full_phone()),
        ]
    }

    pub fn submit_label(&self) -> &'static str {
        "Enviar Verificación"
    }

    pub fn submit(&mut self, gate: AuthGate) -> Option<Intent> {
        if self.loading {
            return None;
        }
        let intent = self.wizard.submit(gate);
        if matches!(intent, Some(Intent::Submit(_))) {
            self.status = VerificationStatus::PendingReview;
        }
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    fn complete() -> FormValues {
        let mut values = FormValues::new();
        let mut put = |id: &str, value: FieldValue| {
            values.insert(id.to_string(), value);
        };
        put(FIRST_NAME, FieldValue::text("Juan"));
        put(LAST_NAME, FieldValue::text("García López"));
        put(DATE_OF_BIRTH, FieldValue::parse_date("1990-01-15"));
        put(NATIONALITY, FieldValue::text("Española"));
        put(DOCUMENT_TYPE, FieldValue::text("dni"));
        put(DOCUMENT_NUMBER, FieldValue::text("12345678A"));
        put(EXPIRATION_DATE, FieldValue::parse_date("2030-12-31"));
        put(STREET, FieldValue::text("Calle Mayor"));
        put(NUMBER, FieldValue::text("123"));
        put(FLOOR, FieldValue::text("3"));
        put(DOOR, FieldValue::text("B"));
        put(POSTAL_CODE, FieldValue::text("28013"));
        put(CITY, FieldValue::text("Madrid"));
        put(PROVINCE, FieldValue::text("Madrid"));
        put(PHONE_NUMBER, FieldValue::text("600123456"));
        values
    }

    #[test]
    fn test_personal_step_rules() {
        let mut f = VerificationForm::new(ctx(), None).unwrap();
        let form = f.wizard.form_mut();
        form.set_value(FIRST_NAME, "J").unwrap();
        form.set_value(DATE_OF_BIRTH, FieldValue::parse_date("2010-01-01")).unwrap();
        assert_eq!(f.wizard.next(), None);
        let form = f.wizard.form();
        assert_eq!(form.error(FIRST_NAME), Some("El nombre debe tener al menos 2 caracteres"));
        assert_eq!(form.error(DATE_OF_BIRTH), Some("Debes ser mayor de 18 años"));
        assert_eq!(form.error(NATIONALITY), Some("La nacionalidad es requerida"));
    }

    #[test]
    fn test_document_and_address_rules() {
        let mut values = complete();
        values.insert(EXPIRATION_DATE.into(), FieldValue::parse_date("2024-12-31"));
        values.insert(POSTAL_CODE.into(), FieldValue::text("2801"));
        let mut f = VerificationForm::new(ctx(), Some(&values)).unwrap();
        assert_eq!(f.submit(AuthGate::new(true)), Some(Intent::StepChange(2)));
        assert_eq!(f.wizard.form().error(EXPIRATION_DATE), Some("El documento ha caducado"));
        assert_eq!(f.wizard.form().error(POSTAL_CODE), None);

        f.wizard.form_mut().set_value(EXPIRATION_DATE, FieldValue::parse_date("2030-01-01")).unwrap();
        assert_eq!(f.submit(AuthGate::new(true)), Some(Intent::StepChange(3)));
        assert_eq!(f.wizard.form().error(POSTAL_CODE), Some("El código postal debe tener 5 dígitos"));
    }

    #[test]
    fn test_send_verification_code() {
        let mut values = complete();
        values.insert(PHONE_NUMBER.into(), FieldValue::text("123"));
        let mut f = VerificationForm::new(ctx(), Some(&values)).unwrap();
        assert_eq!(f.send_verification_code(), None);
        assert_eq!(
            f.wizard.form().error(PHONE_NUMBER),
            Some("El teléfono debe tener al menos 9 dígitos")
        );
        f.wizard.form_mut().set_value(PHONE_NUMBER, "600123456").unwrap();
        assert_eq!(
            f.send_verification_code(),
            Some(Intent::SendVerificationCode { phone: "+34 600123456".into() })
        );
    }

    #[test]
    fn test_review_and_submit() {
        let values = complete();
        let mut f = VerificationForm::new(ctx(), Some(&values)).unwrap();
        f.wizard.jump_to_id("review").unwrap();
        let summary = f.summary();
        assert_eq!(summary[0], ("Nombre", "Juan García López".to_string()));
        assert_eq!(summary[3], ("Documento", "DNI 12345678A".to_string()));
        assert_eq!(summary[4].1, "Calle Mayor 123, 3, B");
        assert!(matches!(f.submit(AuthGate::new(true)), Some(Intent::Submit(_))));
        assert_eq!(f.status.label(), "Pendiente de Revisión");
        assert_eq!(f.wizard.progress(), 100.0);
    }

    #[test]
    fn test_signed_out_submit_keeps_status() {
        let values = complete();
        let mut f = VerificationForm::new(ctx(), Some(&values)).unwrap();
        let before = f.status;
        assert_eq!(
            f.submit(AuthGate::new(false)),
            Some(Intent::LoginRequired(crate::events::Action::Submit))
        );
        assert_eq!(f.status, before);
    }
}
