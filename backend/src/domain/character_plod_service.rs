//! Character PLOD lookup service.
//!
//! Implements the [`CharacterPlodQuery`] driving port on top of a
//! [`CharacterPlodRepository`]. Raw request input is parsed here: malformed
//! input becomes [`StoreOutcome::Invalid`], empty results become
//! [`StoreOutcome::NotFound`], and repository failures become domain
//! [`Error`]s so they never masquerade as bad requests.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::ports::{
    CharacterPlodQuery, CharacterPlodRepository, CharacterPlodRepositoryError,
};
use crate::domain::{
    CharacterPlod, CharacterPlodId, Error, PlodCount, SearchCriteria, StoreOutcome,
};

const NO_MATCH: &str = "no character PLOD matches the given criteria";
const NO_RECORDS: &str = "no character PLOD records are stored";

/// Character PLOD service implementing the driving port.
pub struct CharacterPlodService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> CharacterPlodService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: CharacterPlodRepositoryError) -> Error {
    warn!(%error, "character PLOD repository failure");
    match error {
        CharacterPlodRepositoryError::Connection { message } => Error::service_unavailable(
            format!("character PLOD repository unavailable: {message}"),
        ),
        CharacterPlodRepositoryError::Query { message } => {
            Error::internal(format!("character PLOD repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> CharacterPlodQuery for CharacterPlodService<R>
where
    R: CharacterPlodRepository + ?Sized,
{
    async fn find(
        &self,
        criteria: &Map<String, Value>,
    ) -> Result<StoreOutcome<Vec<CharacterPlod>>, Error> {
        let criteria = match SearchCriteria::from_json(criteria) {
            Ok(criteria) => criteria,
            Err(err) => {
                debug!(%err, "rejecting character PLOD criteria");
                return Ok(StoreOutcome::invalid(err.property()));
            }
        };
        let matches = self
            .repository
            .find_matching(&criteria)
            .await
            .map_err(map_repository_error)?;
        Ok(StoreOutcome::from_matches(matches, NO_MATCH))
    }

    async fn list_all(&self) -> Result<Vec<CharacterPlod>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(map_repository_error)
    }

    async fn top_by_plod(&self, count: &str) -> Result<StoreOutcome<Vec<CharacterPlod>>, Error> {
        let count = match PlodCount::parse(count) {
            Ok(count) => count,
            Err(err) => return Ok(StoreOutcome::invalid(err.to_string())),
        };
        let ranked = self
            .repository
            .top_by_plod(count)
            .await
            .map_err(map_repository_error)?;
        Ok(StoreOutcome::from_matches(ranked, NO_RECORDS))
    }

    async fn find_by_id(&self, id: &str) -> Result<StoreOutcome<CharacterPlod>, Error> {
        let id = match CharacterPlodId::parse(id) {
            Ok(id) => id,
            Err(err) => return Ok(StoreOutcome::invalid(err.to_string())),
        };
        let record = self
            .repository
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)?;
        Ok(StoreOutcome::from_option(
            record,
            format!("no character PLOD with id {id}"),
        ))
    }

    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<StoreOutcome<CharacterPlod>, Error> {
        let record = self
            .repository
            .find_by_description(description)
            .await
            .map_err(map_repository_error)?;
        Ok(StoreOutcome::from_option(
            record,
            format!("no character PLOD described as {description:?}"),
        ))
    }
}

#[cfg(test)]
#[path = "character_plod_service_tests.rs"]
mod tests;
