//! OpenAPI schema definitions for domain and envelope types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror their serialised shape and live in the inbound
//! adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing service is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "service_unavailable")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "character PLOD repository unavailable")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::CharacterPlod`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CharacterPlod)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CharacterPlodSchema {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "Darth Vader")]
    name: String,
    /// Non-negative PLOD score.
    #[schema(example = 5, minimum = 0)]
    plod: i32,
    #[schema(example = "Sith Lord")]
    description: Option<String>,
}

/// OpenAPI schema for [`crate::domain::SearchCriteria`].
///
/// Every property is optional; any property not listed here is rejected.
#[derive(ToSchema)]
#[schema(as = crate::domain::SearchCriteria)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CriteriaSchema {
    id: Option<String>,
    #[schema(example = "Darth Vader")]
    name: Option<String>,
    plod: Option<i32>,
    description: Option<String>,
}

/// OpenAPI schema for [`crate::inbound::http::envelope::Envelope`].
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::envelope::Envelope)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EnvelopeSchema {
    #[schema(example = "Success")]
    message: String,
    /// Found payload, or the reason a lookup missed.
    data: Option<serde_json::Value>,
    /// Property that made search criteria unusable.
    #[schema(example = "house")]
    error_property: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn error_code_schema_lists_every_code() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "not_found",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[rstest]
    fn error_schema_uses_camel_case_trace_id() {
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_to_json::<ErrorSchema>().contains("traceId"));
    }

    #[rstest]
    fn envelope_schema_names_error_property() {
        assert!(schema_to_json::<EnvelopeSchema>().contains("errorProperty"));
    }

    #[rstest]
    fn character_plod_schema_has_expected_name() {
        assert_eq!(CharacterPlodSchema::name(), "crate.domain.CharacterPlod");
        assert!(schema_to_json::<CharacterPlodSchema>().contains("plod"));
    }
}
