//! Shared request-parsing helpers for inbound HTTP adapters.

use serde_json::json;
use uuid::Uuid;

use crate::domain::Error;

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_uuid",
    }))
}

pub(crate) fn parse_uuid(value: String, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(&value).map_err(|_| invalid_uuid_error(field, &value))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use serde_json::Value;

    #[test]
    fn parse_uuid_accepts_canonical_form() {
        let parsed = parse_uuid(
            "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_owned(),
            FieldName::new("id"),
        )
        .expect("canonical uuid");
        assert_eq!(
            parsed.to_string(),
            "3fa85f64-5717-4562-b3fc-2c963f66afa6"
        );
    }

    #[test]
    fn parse_uuid_rejects_garbage_with_field_context() {
        let err = parse_uuid("not-a-uuid".to_owned(), FieldName::new("id"))
            .expect_err("garbage id");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        let details = err.details.expect("details present");
        assert_eq!(
            details.get("field").and_then(Value::as_str),
            Some("id")
        );
        assert_eq!(
            details.get("code").and_then(Value::as_str),
            Some("invalid_uuid")
        );
    }
}
