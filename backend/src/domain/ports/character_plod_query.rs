//! Driving port for character PLOD lookups.
//!
//! HTTP handlers hand raw request input to this port and shape whatever
//! [`StoreOutcome`] comes back into a response. Each call resolves exactly
//! once; a hard [`Error`] means the store itself failed.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{CharacterPlod, Error, StoreOutcome};

/// Domain use-case port for character PLOD lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterPlodQuery: Send + Sync {
    /// Find records matching an arbitrary criteria object.
    async fn find(
        &self,
        criteria: &Map<String, Value>,
    ) -> Result<StoreOutcome<Vec<CharacterPlod>>, Error>;

    /// List every record.
    async fn list_all(&self) -> Result<Vec<CharacterPlod>, Error>;

    /// List the `count` records with the highest PLOD.
    async fn top_by_plod(&self, count: &str) -> Result<StoreOutcome<Vec<CharacterPlod>>, Error>;

    /// Fetch a record by id.
    async fn find_by_id(&self, id: &str) -> Result<StoreOutcome<CharacterPlod>, Error>;

    /// Fetch a record by its description.
    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<StoreOutcome<CharacterPlod>, Error>;
}

/// Fixture query answering every lookup with a miss.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCharacterPlodQuery;

const FIXTURE_MISS: &str = "no character PLOD records are configured";

#[async_trait]
impl CharacterPlodQuery for FixtureCharacterPlodQuery {
    async fn find(
        &self,
        _criteria: &Map<String, Value>,
    ) -> Result<StoreOutcome<Vec<CharacterPlod>>, Error> {
        Ok(StoreOutcome::not_found(FIXTURE_MISS))
    }

    async fn list_all(&self) -> Result<Vec<CharacterPlod>, Error> {
        Ok(Vec::new())
    }

    async fn top_by_plod(&self, _count: &str) -> Result<StoreOutcome<Vec<CharacterPlod>>, Error> {
        Ok(StoreOutcome::not_found(FIXTURE_MISS))
    }

    async fn find_by_id(&self, _id: &str) -> Result<StoreOutcome<CharacterPlod>, Error> {
        Ok(StoreOutcome::not_found(FIXTURE_MISS))
    }

    async fn find_by_description(
        &self,
        _description: &str,
    ) -> Result<StoreOutcome<CharacterPlod>, Error> {
        Ok(StoreOutcome::not_found(FIXTURE_MISS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_query_misses_every_lookup() {
        let query = FixtureCharacterPlodQuery;

        assert!(!query.find(&Map::new()).await.expect("find").is_found());
        assert!(query.list_all().await.expect("list").is_empty());
        assert!(!query.top_by_plod("3").await.expect("top").is_found());
        assert!(!query.find_by_id("abc").await.expect("by id").is_found());
        assert!(
            !query
                .find_by_description("Sith Lord")
                .await
                .expect("by description")
                .is_found()
        );
    }
}
