//! Contact submission HTTP handlers.
//!
//! ```text
//! POST /api/v1/contacts
//! GET /api/v1/contacts
//! GET /api/v1/contacts/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ContactDraft, ContactSubmission, Error, validate_contact};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Request payload for `POST /api/v1/contacts`.
///
/// Every field is optional at the wire level; validation reports which of
/// them are missing or malformed, all in one response.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service_interest: Option<String>,
    pub message: Option<String>,
    /// Site language the form was submitted from (`en` or `fr`).
    pub language: Option<String>,
}

impl From<ContactRequestBody> for ContactDraft {
    fn from(body: ContactRequestBody) -> Self {
        Self {
            name: body.name,
            email: body.email,
            phone: body.phone,
            service_interest: body.service_interest,
            message: body.message,
            language: body.language,
        }
    }
}

/// Stored contact submission as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_interest: Option<String>,
    pub message: String,
    pub language: String,
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<ContactSubmission> for ContactResponseBody {
    fn from(record: ContactSubmission) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name,
            email: record.email,
            phone: record.phone,
            service_interest: record.service_interest,
            message: record.message,
            language: record.language.as_str().to_owned(),
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// Accept a contact form submission.
///
/// Validates the payload, stores it, and echoes the stored record (including
/// its generated identifier and creation time) as the confirmation body.
#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    request_body = ContactRequestBody,
    responses(
        (status = 201, description = "Submission stored", body = ContactResponseBody),
        (status = 400, description = "Validation failed", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "submitContact"
)]
#[post("/contacts")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactRequestBody>,
) -> ApiResult<HttpResponse> {
    let submission = validate_contact(ContactDraft::from(payload.into_inner()))?;
    let stored = state.contacts.create(submission).await?;
    Ok(HttpResponse::Created().json(ContactResponseBody::from(stored)))
}

/// List every stored contact submission, most recent first.
#[utoipa::path(
    get,
    path = "/api/v1/contacts",
    responses(
        (status = 200, description = "Stored submissions", body = [ContactResponseBody]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ContactResponseBody>>> {
    let records = state.contacts.list().await?;
    Ok(web::Json(
        records.into_iter().map(ContactResponseBody::from).collect(),
    ))
}

/// Fetch one contact submission by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/contacts/{id}",
    params(("id" = uuid::Uuid, Path, description = "Submission identifier")),
    responses(
        (status = 200, description = "Stored submission", body = ContactResponseBody),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "No such submission", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "getContact"
)]
#[get("/contacts/{id}")]
pub async fn get_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ContactResponseBody>> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    match state.contacts.find_by_id(&id).await? {
        Some(record) => Ok(web::Json(ContactResponseBody::from(record))),
        None => Err(Error::not_found("contact submission not found")),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test as actix_test, web};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{ContactRepositoryError, MockContactRepository};
    use crate::outbound::persistence::InMemoryAppointmentRepository;

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
                .service(submit_contact)
                .service(list_contacts)
                .service(get_contact),
        )
    }

    fn valid_body() -> Value {
        json!({
            "name": "Alice Smith",
            "email": "alice@example.com",
            "message": "I would like a quote for a new website.",
            "serviceInterest": "web"
        })
    }

    #[actix_web::test]
    async fn submit_stores_and_echoes_the_record() {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/contacts")
                .set_json(valid_body())
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("name"), Some(&json!("Alice Smith")));
        assert_eq!(body.get("language"), Some(&json!("en")));
        assert!(body.get("id").and_then(Value::as_str).is_some());
        assert!(body.get("createdAt").and_then(Value::as_str).is_some());
        assert!(body.get("phone").is_some_and(Value::is_null));
    }

    #[actix_web::test]
    async fn submit_round_trips_through_lookup() {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/contacts")
                .set_json(valid_body())
                .to_request(),
        )
        .await;
        let created: Value = actix_test::read_body_json(created).await;
        let id = created.get("id").and_then(Value::as_str).expect("id");

        let fetched = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/v1/contacts/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(fetched.status(), StatusCode::OK);
        let fetched: Value = actix_test::read_body_json(fetched).await;
        assert_eq!(fetched, created);
    }

    #[rstest]
    #[case(json!({ "email": "alice@example.com", "message": "long enough message" }), "name")]
    #[case(
        json!({ "name": "Alice", "email": "not-an-email", "message": "long enough message" }),
        "email"
    )]
    #[case(json!({ "name": "Jo", "email": "jo@x.com", "message": "short" }), "message")]
    #[actix_web::test]
    async fn submit_rejects_invalid_payloads(#[case] body: Value, #[case] field: &str) {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/contacts")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("code"), Some(&json!("invalid_request")));
        let violations = value
            .pointer("/details/violations")
            .and_then(Value::as_array)
            .expect("violations array");
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].get("field").and_then(Value::as_str),
            Some(field)
        );
    }

    #[actix_web::test]
    async fn lookup_of_unknown_id_is_not_found() {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/contacts/3fa85f64-5717-4562-b3fc-2c963f66afa6")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("code"), Some(&json!("not_found")));
    }

    #[actix_web::test]
    async fn lookup_of_malformed_id_is_invalid_request() {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/contacts/not-a-uuid")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn storage_failures_surface_as_redacted_internal_errors() {
        let mut contacts = MockContactRepository::new();
        contacts
            .expect_create()
            .returning(|_| Err(ContactRepositoryError::storage("mutex poisoned")));
        let state = HttpState::new(
            Arc::new(contacts),
            Arc::new(InMemoryAppointmentRepository::new()),
        );
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/contacts")
                .set_json(valid_body())
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("message"), Some(&json!("Internal server error")));
    }

    #[actix_web::test]
    async fn list_returns_submissions_most_recent_first() {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;

        for name in ["First Caller", "Second Caller"] {
            let mut body = valid_body();
            body["name"] = json!(name);
            let response = actix_test::call_service(
                &app,
                actix_test::TestRequest::post()
                    .uri("/api/v1/contacts")
                    .set_json(body)
                    .to_request(),
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/contacts")
                .to_request(),
        )
        .await;
        let listed: Value = actix_test::read_body_json(response).await;
        let listed = listed.as_array().expect("array body");
        assert_eq!(listed.len(), 2);
        assert_eq!(
            listed[0].get("name").and_then(Value::as_str),
            Some("Second Caller")
        );
        assert_eq!(
            listed[1].get("name").and_then(Value::as_str),
            Some("First Caller")
        );
    }
}
