//! Contact form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::language::Language;
use crate::domain::validation::{Checker, ValidationError};

/// Raw contact form input, exactly as received from a client.
///
/// Every field is optional here; [`validate_contact`] decides which absences
/// and values are acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service_interest: Option<String>,
    pub message: Option<String>,
    pub language: Option<String>,
}

/// A contact payload that passed validation, ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_interest: Option<String>,
    pub message: String,
    pub language: Language,
}

/// A stored contact submission.
///
/// `id` and `created_at` are assigned by the store on creation and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Store-assigned identifier.
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Free-form service category tag chosen in the form.
    pub service_interest: Option<String>,
    pub message: String,
    pub language: Language,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Validate a contact draft, reporting every violated rule.
///
/// Rules: `name` at least 2 characters, `email` matching the email grammar,
/// `message` at least 10 characters, `language` one of the known tags
/// (defaulting to English when absent). `phone` and `serviceInterest` are
/// free-form and optional.
pub fn validate_contact(draft: ContactDraft) -> Result<NewContactSubmission, ValidationError> {
    let mut checker = Checker::new();
    let name = checker.min_chars("name", draft.name, 2, "Name must be at least 2 characters");
    let email = checker.email("email", draft.email);
    let message = checker.min_chars(
        "message",
        draft.message,
        10,
        "Message must be at least 10 characters",
    );
    let language =
        checker.optional_choice::<Language>("language", draft.language, "Language must be en or fr");

    match (name, email, message, language) {
        (Some(name), Some(email), Some(message), Some(language)) => Ok(NewContactSubmission {
            name,
            email,
            phone: draft.phone,
            service_interest: draft.service_interest,
            message,
            language,
        }),
        _ => Err(checker.into_error()),
    }
}
