//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: submission endpoints, health probes, and the shared error
//! envelope. The generated document backs Swagger UI in debug builds and is
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, FieldViolation, ViolationCode};
use crate::inbound::http::appointments::{AppointmentRequestBody, AppointmentResponseBody};
use crate::inbound::http::contacts::{ContactRequestBody, ContactResponseBody};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Northspire Studio backend API",
        description = "Lead-capture endpoints for the bilingual marketing site: \
            contact messages, appointment bookings, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contacts::submit_contact,
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::get_contact,
        crate::inbound::http::appointments::submit_appointment,
        crate::inbound::http::appointments::list_appointments,
        crate::inbound::http::appointments::get_appointment,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ContactRequestBody,
        ContactResponseBody,
        AppointmentRequestBody,
        AppointmentResponseBody,
        Error,
        ErrorCode,
        FieldViolation,
        ViolationCode,
    )),
    tags(
        (name = "contacts", description = "Contact form submissions"),
        (name = "appointments", description = "Appointment bookings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
