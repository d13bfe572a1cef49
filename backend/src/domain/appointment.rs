//! Appointment booking submissions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::language::Language;
use crate::domain::validation::{Checker, ValidationError};

/// Kind of consultation the visitor is booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationType {
    /// Free discovery call.
    Discovery,
    /// Project quote request.
    Quote,
    /// Paid technical consultation.
    Consultation,
}

/// Error returned when parsing a consultation type from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConsultationTypeError;

impl ConsultationType {
    /// Wire representation of the tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discovery => "discovery",
            Self::Quote => "quote",
            Self::Consultation => "consultation",
        }
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ParseConsultationTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid consultation type")
    }
}

impl std::error::Error for ParseConsultationTypeError {}

impl FromStr for ConsultationType {
    type Err = ParseConsultationTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "discovery" => Ok(Self::Discovery),
            "quote" => Ok(Self::Quote),
            "consultation" => Ok(Self::Consultation),
            _ => Err(ParseConsultationTypeError),
        }
    }
}

/// Raw appointment form input, exactly as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub consultation_type: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub project_description: Option<String>,
    pub language: Option<String>,
}

/// An appointment payload that passed validation, ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointmentBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub consultation_type: ConsultationType,
    pub preferred_date: String,
    pub preferred_time: String,
    pub project_description: String,
    pub language: Language,
}

/// A stored appointment booking.
///
/// `id` and `created_at` are assigned by the store on creation and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentBooking {
    /// Store-assigned identifier.
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub consultation_type: ConsultationType,
    /// Date-valued text from the booking form's date picker. The picker
    /// limits past dates client side only; no server-side window is
    /// enforced.
    pub preferred_date: String,
    /// Free-form time-slot text (the form offers `09:00`-style slots).
    pub preferred_time: String,
    pub project_description: String,
    pub language: Language,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Validate an appointment draft, reporting every violated rule.
///
/// Rules: `name` at least 2 characters, `email` matching the email grammar,
/// `phone` at least 10 characters, `consultationType` one of the known
/// kinds, `preferredDate`/`preferredTime` present, `projectDescription` at
/// least 20 characters, `language` a known tag defaulting to English.
/// `company` is free-form and optional.
pub fn validate_appointment(
    draft: AppointmentDraft,
) -> Result<NewAppointmentBooking, ValidationError> {
    let mut checker = Checker::new();
    let name = checker.min_chars("name", draft.name, 2, "Name must be at least 2 characters");
    let email = checker.email("email", draft.email);
    let phone = checker.min_chars(
        "phone",
        draft.phone,
        10,
        "Phone number must be at least 10 characters",
    );
    let consultation_type = checker.choice::<ConsultationType>(
        "consultationType",
        draft.consultation_type,
        "Consultation type must be discovery, quote or consultation",
    );
    let preferred_date = checker.required("preferredDate", draft.preferred_date);
    let preferred_time = checker.required("preferredTime", draft.preferred_time);
    let project_description = checker.min_chars(
        "projectDescription",
        draft.project_description,
        20,
        "Please provide more details about your project",
    );
    let language =
        checker.optional_choice::<Language>("language", draft.language, "Language must be en or fr");

    match (
        name,
        email,
        phone,
        consultation_type,
        preferred_date,
        preferred_time,
        project_description,
        language,
    ) {
        (
            Some(name),
            Some(email),
            Some(phone),
            Some(consultation_type),
            Some(preferred_date),
            Some(preferred_time),
            Some(project_description),
            Some(language),
        ) => Ok(NewAppointmentBooking {
            name,
            email,
            phone,
            company: draft.company,
            consultation_type,
            preferred_date,
            preferred_time,
            project_description,
            language,
        }),
        _ => Err(checker.into_error()),
    }
}
