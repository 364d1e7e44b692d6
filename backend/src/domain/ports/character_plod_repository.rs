//! Driven port for reading character PLOD records.
//!
//! Adapters answer with plain collections and options; turning misses into
//! lookup outcomes is the domain service's job.

use async_trait::async_trait;

use crate::domain::{CharacterPlod, CharacterPlodId, PlodCount, SearchCriteria};

use super::define_port_error;

define_port_error! {
    /// Errors raised by character PLOD repositories.
    pub enum CharacterPlodRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "character PLOD store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "character PLOD store query failed: {message}",
    }
}

/// Port for character PLOD reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterPlodRepository: Send + Sync {
    /// Records satisfying every constrained criteria property, ordered by name.
    async fn find_matching(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<CharacterPlod>, CharacterPlodRepositoryError>;

    /// Every stored record, ordered by name.
    async fn list_all(&self) -> Result<Vec<CharacterPlod>, CharacterPlodRepositoryError>;

    /// Up to `count` records, highest PLOD first.
    async fn top_by_plod(
        &self,
        count: PlodCount,
    ) -> Result<Vec<CharacterPlod>, CharacterPlodRepositoryError>;

    /// The record with the given id, if stored.
    async fn find_by_id(
        &self,
        id: &CharacterPlodId,
    ) -> Result<Option<CharacterPlod>, CharacterPlodRepositoryError>;

    /// The first record (by name) whose description equals `description`.
    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<Option<CharacterPlod>, CharacterPlodRepositoryError>;
}

/// Fixture implementation for wiring that does not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCharacterPlodRepository;

#[async_trait]
impl CharacterPlodRepository for FixtureCharacterPlodRepository {
    async fn find_matching(
        &self,
        _criteria: &SearchCriteria,
    ) -> Result<Vec<CharacterPlod>, CharacterPlodRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_all(&self) -> Result<Vec<CharacterPlod>, CharacterPlodRepositoryError> {
        Ok(Vec::new())
    }

    async fn top_by_plod(
        &self,
        _count: PlodCount,
    ) -> Result<Vec<CharacterPlod>, CharacterPlodRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(
        &self,
        _id: &CharacterPlodId,
    ) -> Result<Option<CharacterPlod>, CharacterPlodRepositoryError> {
        Ok(None)
    }

    async fn find_by_description(
        &self,
        _description: &str,
    ) -> Result<Option<CharacterPlod>, CharacterPlodRepositoryError> {
        Ok(None)
    }
}
