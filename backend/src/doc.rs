//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP path from the inbound layer and the schema
//! wrappers standing in for domain types. The document backs Swagger UI in
//! debug builds and is printed by `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    CharacterPlodSchema, CriteriaSchema, EnvelopeSchema, ErrorCodeSchema, ErrorSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Character PLOD API",
        description = "Lookup endpoints for character PLOD records and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::characters_plod::find,
        crate::inbound::http::characters_plod::get_all,
        crate::inbound::http::characters_plod::get_by_plod,
        crate::inbound::http::characters_plod::get_by_id,
        crate::inbound::http::characters_plod::get_by_description,
        crate::inbound::http::characters_plod::get_by_key,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CharacterPlodSchema,
        CriteriaSchema,
        EnvelopeSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "characters-plod", description = "Character PLOD lookups"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ENVELOPE_SCHEMA_NAME: &str = "crate.inbound.http.envelope.Envelope";
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case(ENVELOPE_SCHEMA_NAME, "message")]
    #[case(ENVELOPE_SCHEMA_NAME, "errorProperty")]
    #[case(ERROR_SCHEMA_NAME, "code")]
    #[case(ERROR_SCHEMA_NAME, "traceId")]
    fn registered_schemas_expose_fields(#[case] name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");

        assert_object_schema_has_field(schema, field);
    }

    #[rstest]
    #[case("/api/characters/plod/find")]
    #[case("/api/characters/plod")]
    #[case("/api/characters/plod/top/{count}")]
    #[case("/api/characters/plod/{key}")]
    #[case("/health/ready")]
    fn document_lists_paths(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
