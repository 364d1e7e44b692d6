//! PostgreSQL-backed character PLOD repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CharacterPlodRepository, CharacterPlodRepositoryError};
use crate::domain::{CharacterPlod, CharacterPlodId, PlodCount, SearchCriteria};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::CharacterPlodRow;
use super::pool::DbPool;
use super::schema::character_plods;

/// Diesel-backed implementation of [`CharacterPlodRepository`].
#[derive(Clone)]
pub struct DieselCharacterPlodRepository {
    pool: DbPool,
}

impl DieselCharacterPlodRepository {
    /// Create a new repository with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/plod")).await?;
    /// let repo = DieselCharacterPlodRepository::new(pool);
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_record(row: CharacterPlodRow) -> Result<CharacterPlod, CharacterPlodRepositoryError> {
    let id = row.id;
    CharacterPlod::try_from(row).map_err(|err| {
        CharacterPlodRepositoryError::query(format!("stored row {id} is invalid: {err}"))
    })
}

fn to_records(
    rows: Vec<CharacterPlodRow>,
) -> Result<Vec<CharacterPlod>, CharacterPlodRepositoryError> {
    rows.into_iter().map(to_record).collect()
}

#[async_trait]
impl CharacterPlodRepository for DieselCharacterPlodRepository {
    async fn find_matching(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<CharacterPlod>, CharacterPlodRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = character_plods::table
            .select(CharacterPlodRow::as_select())
            .into_boxed();
        if let Some(id) = criteria.id() {
            query = query.filter(character_plods::id.eq(*id.as_uuid()));
        }
        if let Some(name) = criteria.name() {
            query = query.filter(character_plods::name.eq(name.to_owned()));
        }
        if let Some(plod) = criteria.plod() {
            query = query.filter(character_plods::plod.eq(plod));
        }
        match criteria.description() {
            Some(Some(description)) => {
                query = query.filter(character_plods::description.eq(description.to_owned()));
            }
            Some(None) => query = query.filter(character_plods::description.is_null()),
            None => {}
        }

        let rows: Vec<CharacterPlodRow> = query
            .order_by(character_plods::name.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        to_records(rows)
    }

    async fn list_all(&self) -> Result<Vec<CharacterPlod>, CharacterPlodRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CharacterPlodRow> = character_plods::table
            .select(CharacterPlodRow::as_select())
            .order_by(character_plods::name.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        to_records(rows)
    }

    async fn top_by_plod(
        &self,
        count: PlodCount,
    ) -> Result<Vec<CharacterPlod>, CharacterPlodRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CharacterPlodRow> = character_plods::table
            .select(CharacterPlodRow::as_select())
            .order_by((character_plods::plod.desc(), character_plods::name.asc()))
            .limit(i64::from(count.get()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        to_records(rows)
    }

    async fn find_by_id(
        &self,
        id: &CharacterPlodId,
    ) -> Result<Option<CharacterPlod>, CharacterPlodRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CharacterPlodRow> = character_plods::table
            .filter(character_plods::id.eq(*id.as_uuid()))
            .select(CharacterPlodRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(to_record).transpose()
    }

    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<Option<CharacterPlod>, CharacterPlodRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CharacterPlodRow> = character_plods::table
            .filter(character_plods::description.eq(description))
            .select(CharacterPlodRow::as_select())
            .order_by(character_plods::name.asc())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(to_record).transpose()
    }
}
