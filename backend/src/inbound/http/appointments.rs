//! Appointment booking HTTP handlers.
//!
//! ```text
//! POST /api/v1/appointments
//! GET /api/v1/appointments
//! GET /api/v1/appointments/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AppointmentBooking, AppointmentDraft, Error, validate_appointment};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Request payload for `POST /api/v1/appointments`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequestBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    /// One of `discovery`, `quote`, or `consultation`.
    pub consultation_type: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub project_description: Option<String>,
    /// Site language the form was submitted from (`en` or `fr`).
    pub language: Option<String>,
}

impl From<AppointmentRequestBody> for AppointmentDraft {
    fn from(body: AppointmentRequestBody) -> Self {
        Self {
            name: body.name,
            email: body.email,
            phone: body.phone,
            company: body.company,
            consultation_type: body.consultation_type,
            preferred_date: body.preferred_date,
            preferred_time: body.preferred_time,
            project_description: body.project_description,
            language: body.language,
        }
    }
}

/// Stored appointment booking as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub consultation_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub project_description: String,
    pub language: String,
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<AppointmentBooking> for AppointmentResponseBody {
    fn from(record: AppointmentBooking) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name,
            email: record.email,
            phone: record.phone,
            company: record.company,
            consultation_type: record.consultation_type.as_str().to_owned(),
            preferred_date: record.preferred_date,
            preferred_time: record.preferred_time,
            project_description: record.project_description,
            language: record.language.as_str().to_owned(),
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// Accept an appointment booking.
///
/// Validates the payload, stores it, and echoes the stored record (including
/// its generated identifier and creation time) as the confirmation body.
#[utoipa::path(
    post,
    path = "/api/v1/appointments",
    request_body = AppointmentRequestBody,
    responses(
        (status = 201, description = "Booking stored", body = AppointmentResponseBody),
        (status = 400, description = "Validation failed", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["appointments"],
    operation_id = "submitAppointment"
)]
#[post("/appointments")]
pub async fn submit_appointment(
    state: web::Data<HttpState>,
    payload: web::Json<AppointmentRequestBody>,
) -> ApiResult<HttpResponse> {
    let booking = validate_appointment(AppointmentDraft::from(payload.into_inner()))?;
    let stored = state.appointments.create(booking).await?;
    Ok(HttpResponse::Created().json(AppointmentResponseBody::from(stored)))
}

/// List every stored appointment booking, most recent first.
#[utoipa::path(
    get,
    path = "/api/v1/appointments",
    responses(
        (status = 200, description = "Stored bookings", body = [AppointmentResponseBody]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["appointments"],
    operation_id = "listAppointments"
)]
#[get("/appointments")]
pub async fn list_appointments(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<AppointmentResponseBody>>> {
    let records = state.appointments.list().await?;
    Ok(web::Json(
        records
            .into_iter()
            .map(AppointmentResponseBody::from)
            .collect(),
    ))
}

/// Fetch one appointment booking by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/appointments/{id}",
    params(("id" = uuid::Uuid, Path, description = "Booking identifier")),
    responses(
        (status = 200, description = "Stored booking", body = AppointmentResponseBody),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "No such booking", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["appointments"],
    operation_id = "getAppointment"
)]
#[get("/appointments/{id}")]
pub async fn get_appointment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AppointmentResponseBody>> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    match state.appointments.find_by_id(&id).await? {
        Some(record) => Ok(web::Json(AppointmentResponseBody::from(record))),
        None => Err(Error::not_found("appointment booking not found")),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use actix_web::{App, http::StatusCode, test as actix_test, web};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
                actix_web::dev::ServiceRequest,
                Config = (),
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
                InitError = (),
            >,
    > {
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .service(submit_appointment)
                .service(list_appointments)
                .service(get_appointment),
        )
    }

    fn valid_body() -> Value {
        json!({
            "name": "Alice Smith",
            "email": "alice@example.com",
            "phone": "+1 514 555 0147",
            "company": "Example Inc",
            "consultationType": "discovery",
            "preferredDate": "2026-09-15",
            "preferredTime": "09:00",
            "projectDescription": "A storefront rebuild with bilingual content.",
            "language": "fr"
        })
    }

    #[actix_web::test]
    async fn submit_stores_and_echoes_the_record() {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/appointments")
                .set_json(valid_body())
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("consultationType"), Some(&json!("discovery")));
        assert_eq!(body.get("language"), Some(&json!("fr")));
        assert!(body.get("id").and_then(Value::as_str).is_some());
        assert!(body.get("createdAt").and_then(Value::as_str).is_some());
    }

    #[actix_web::test]
    async fn unknown_consultation_type_is_rejected_by_name() {
        let mut body = valid_body();
        body["consultationType"] = json!("strategy");

        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/appointments")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let value: Value = actix_test::read_body_json(response).await;
        let violations = value
            .pointer("/details/violations")
            .and_then(Value::as_array)
            .expect("violations array");
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].get("field").and_then(Value::as_str),
            Some("consultationType")
        );
        assert_eq!(
            violations[0].get("code").and_then(Value::as_str),
            Some("invalid_choice")
        );
    }

    #[rstest]
    #[case("phone", json!("555"))]
    #[case("projectDescription", json!("too vague"))]
    #[actix_web::test]
    async fn too_short_fields_are_rejected(#[case] field: &str, #[case] value: Value) {
        let mut body = valid_body();
        body[field] = value;

        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/appointments")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let value: Value = actix_test::read_body_json(response).await;
        let violations = value
            .pointer("/details/violations")
            .and_then(Value::as_array)
            .expect("violations array");
        assert_eq!(
            violations[0].get("field").and_then(Value::as_str),
            Some(field)
        );
    }

    #[actix_web::test]
    async fn round_trip_through_lookup_and_list() {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/appointments")
                .set_json(valid_body())
                .to_request(),
        )
        .await;
        let created: Value = actix_test::read_body_json(created).await;
        let id = created.get("id").and_then(Value::as_str).expect("id");

        let fetched = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/v1/appointments/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(fetched.status(), StatusCode::OK);
        let fetched: Value = actix_test::read_body_json(fetched).await;
        assert_eq!(fetched, created);

        let listed = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/appointments")
                .to_request(),
        )
        .await;
        let listed: Value = actix_test::read_body_json(listed).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
    }

    #[actix_web::test]
    async fn lookup_of_unknown_id_is_not_found() {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/appointments/3fa85f64-5717-4562-b3fc-2c963f66afa6")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
