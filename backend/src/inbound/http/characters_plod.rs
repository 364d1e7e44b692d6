//! Character PLOD lookup endpoints.
//!
//! ```text
//! POST /api/characters/plod/find
//! GET  /api/characters/plod
//! GET  /api/characters/plod/top/{count}
//! GET  /api/characters/plod/id/{id}
//! GET  /api/characters/plod/description/{description}
//! GET  /api/characters/plod/{key}
//! ```
//!
//! `/{key}` keeps the historical shared path: an integer key lists the top
//! records by PLOD, a UUID key looks a record up by id, and any other key is
//! treated as a description.

use actix_web::{HttpResponse, Scope, get, post, web};
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{CharacterPlod, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ResponseContract;
use crate::inbound::http::error::invalid_json;
use crate::inbound::http::schemas::{
    CharacterPlodSchema, CriteriaSchema, EnvelopeSchema, ErrorSchema,
};
use crate::inbound::http::state::HttpState;

/// Shape of a `/{key}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlodKey {
    /// Base-10 integer: a record count.
    Count,
    /// Hyphenated or simple UUID: a record id.
    Id,
    /// Anything else: a description.
    Description,
}

impl PlodKey {
    /// Classify a raw path segment.
    ///
    /// # Examples
    /// ```
    /// use plod_backend::inbound::http::characters_plod::PlodKey;
    ///
    /// assert_eq!(PlodKey::classify("10"), PlodKey::Count);
    /// assert_eq!(PlodKey::classify("Sith Lord"), PlodKey::Description);
    /// ```
    pub fn classify(raw: &str) -> Self {
        if raw.parse::<i64>().is_ok() {
            Self::Count
        } else if Uuid::parse_str(raw).is_ok() {
            Self::Id
        } else {
            Self::Description
        }
    }
}

/// Find records matching a criteria object.
#[utoipa::path(
    post,
    path = "/api/characters/plod/find",
    description = "Exact-match search over character PLOD records. An empty object, or an empty body, matches every record. Example request: POST /api/characters/plod/find {\"name\":\"Darth Vader\"}",
    request_body = CriteriaSchema,
    responses(
        (status = 200, description = "Matching records", body = EnvelopeSchema),
        (status = 400, description = "Criteria name an unknown property", body = EnvelopeSchema),
        (status = 404, description = "No record matches", body = EnvelopeSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["characters-plod"],
    operation_id = "findCharacterPlods"
)]
#[post("/characters/plod/find")]
pub async fn find(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let criteria = parse_criteria(&body)?;
    let outcome = state.characters_plod.find(&criteria).await?;
    debug!(found = outcome.is_found(), "character PLOD criteria search");
    ResponseContract::Find.respond(outcome)
}

/// Decode a `find` body. A blank body carries no criteria.
fn parse_criteria(body: &[u8]) -> Result<Map<String, Value>, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    serde_json::from_slice(body).map_err(invalid_json)
}

/// List every record.
#[utoipa::path(
    get,
    path = "/api/characters/plod",
    description = "Return every character PLOD record ordered by name. Example request: GET /api/characters/plod",
    responses(
        (status = 200, description = "All records, possibly empty", body = [CharacterPlodSchema]),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["characters-plod"],
    operation_id = "listCharacterPlods"
)]
#[get("/characters/plod")]
pub async fn get_all(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CharacterPlod>>> {
    let records = state.characters_plod.list_all().await?;
    debug!(count = records.len(), "listed character PLOD records");
    Ok(web::Json(records))
}

async fn top_by_plod(state: &HttpState, count: &str) -> ApiResult<HttpResponse> {
    let outcome = state.characters_plod.top_by_plod(count).await?;
    debug!(count, found = outcome.is_found(), "character PLOD ranking");
    ResponseContract::TopByPlod.respond(outcome)
}

async fn by_id(state: &HttpState, id: &str) -> ApiResult<HttpResponse> {
    let outcome = state.characters_plod.find_by_id(id).await?;
    debug!(id, found = outcome.is_found(), "character PLOD id lookup");
    ResponseContract::ById.respond(outcome)
}

async fn by_description(state: &HttpState, description: &str) -> ApiResult<HttpResponse> {
    let outcome = state.characters_plod.find_by_description(description).await?;
    debug!(found = outcome.is_found(), "character PLOD description lookup");
    ResponseContract::ByDescription.respond(outcome)
}

/// List the records with the highest PLOD.
#[utoipa::path(
    get,
    path = "/api/characters/plod/top/{count}",
    description = "Return up to `count` records ordered by PLOD descending. Example request: GET /api/characters/plod/top/3",
    params(("count" = String, Path, description = "Positive number of records")),
    responses(
        (status = 200, description = "Ranked records", body = EnvelopeSchema),
        (status = 404, description = "No records, or the count is unusable", body = EnvelopeSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["characters-plod"],
    operation_id = "getCharacterPlodsByPlod"
)]
#[get("/characters/plod/top/{count}")]
pub async fn get_by_plod(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    top_by_plod(&state, &path).await
}

/// Fetch a record by id.
#[utoipa::path(
    get,
    path = "/api/characters/plod/id/{id}",
    description = "Return the record with the given id. Example request: GET /api/characters/plod/id/3fa85f64-5717-4562-b3fc-2c963f66afa6",
    params(("id" = String, Path, description = "Record UUID")),
    responses(
        (status = 200, description = "Matching record", body = EnvelopeSchema),
        (status = 404, description = "Unknown or malformed id", body = EnvelopeSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["characters-plod"],
    operation_id = "getCharacterPlodById"
)]
#[get("/characters/plod/id/{id}")]
pub async fn get_by_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    by_id(&state, &path).await
}

/// Fetch a record by description.
#[utoipa::path(
    get,
    path = "/api/characters/plod/description/{description}",
    description = "Return the record with exactly the given description. Example request: GET /api/characters/plod/description/Sith%20Lord",
    params(("description" = String, Path, description = "Exact description")),
    responses(
        (status = 200, description = "Matching record", body = EnvelopeSchema),
        (status = 404, description = "No record has that description", body = EnvelopeSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["characters-plod"],
    operation_id = "getCharacterPlodByDescription"
)]
#[get("/characters/plod/description/{description}")]
pub async fn get_by_description(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    by_description(&state, &path).await
}

/// Shared lookup path dispatched on the shape of `key`.
#[utoipa::path(
    get,
    path = "/api/characters/plod/{key}",
    description = "Integer keys rank by PLOD, UUID keys look up by id, any other key matches the description. Prefer the explicit top, id and description paths.",
    params(("key" = String, Path, description = "Count, id or description")),
    responses(
        (status = 200, description = "Lookup succeeded", body = EnvelopeSchema),
        (status = 404, description = "Lookup missed", body = EnvelopeSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["characters-plod"],
    operation_id = "getCharacterPlodByKey"
)]
#[get("/characters/plod/{key}")]
pub async fn get_by_key(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let key = path.into_inner();
    match PlodKey::classify(&key) {
        PlodKey::Count => top_by_plod(&state, &key).await,
        PlodKey::Id => by_id(&state, &key).await,
        PlodKey::Description => by_description(&state, &key).await,
    }
}

/// Scope mounting every character PLOD endpoint under `/api`.
///
/// Explicit paths are registered before `/{key}` so they win the match.
pub fn scope() -> Scope {
    web::scope("/api")
        .service(find)
        .service(get_all)
        .service(get_by_plod)
        .service(get_by_id)
        .service(get_by_description)
        .service(get_by_key)
}

#[cfg(test)]
#[path = "characters_plod_tests.rs"]
mod tests;
