//! Domain primitives and aggregates.
//!
//! Purpose: define the strongly typed submission entities, the validation
//! rules governing them, and the ports the adapters implement. Types here are
//! transport agnostic and immutable once constructed; each type's Rustdoc
//! documents its invariants and serde contract.

pub mod appointment;
pub mod contact;
pub mod error;
pub mod language;
pub mod ports;
pub mod trace_id;
pub mod validation;

pub use self::appointment::{
    AppointmentBooking, AppointmentDraft, ConsultationType, NewAppointmentBooking,
    ParseConsultationTypeError, validate_appointment,
};
pub use self::contact::{ContactDraft, ContactSubmission, NewContactSubmission, validate_contact};
pub use self::error::{Error, ErrorCode};
pub use self::language::{Language, ParseLanguageError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{FieldViolation, ValidationError, ViolationCode};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such record"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
