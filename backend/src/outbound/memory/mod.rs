//! In-memory character PLOD repository.
//!
//! Used when no database is configured. Records live in a `tokio` `RwLock`
//! and can be seeded from a JSON array on disk at startup.

mod seed;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{CharacterPlodRepository, CharacterPlodRepositoryError};
use crate::domain::{CharacterPlod, CharacterPlodId, PlodCount, SearchCriteria, rank_by_plod};

pub use seed::{SeedError, load_seed_file, parse_seed};

/// Repository keeping every record in process memory, ordered by name.
///
/// # Examples
/// ```
/// use plod_backend::outbound::memory::InMemoryCharacterPlodRepository;
///
/// let repo = InMemoryCharacterPlodRepository::default();
/// # let _ = repo;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCharacterPlodRepository {
    records: RwLock<Vec<CharacterPlod>>,
}

impl InMemoryCharacterPlodRepository {
    /// Create a repository holding `records`.
    pub fn new(mut records: Vec<CharacterPlod>) -> Self {
        sort_by_name(&mut records);
        Self {
            records: RwLock::new(records),
        }
    }

    /// Insert or replace a record, keyed by id.
    pub async fn upsert(&self, record: CharacterPlod) {
        let mut records = self.records.write().await;
        records.retain(|existing| existing.id() != record.id());
        records.push(record);
        sort_by_name(&mut records);
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns `true` when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn sort_by_name(records: &mut [CharacterPlod]) {
    records.sort_by(|a, b| a.name().cmp(b.name()));
}

#[async_trait]
impl CharacterPlodRepository for InMemoryCharacterPlodRepository {
    async fn find_matching(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<CharacterPlod>, CharacterPlodRepositoryError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|record| criteria.matches(record))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<CharacterPlod>, CharacterPlodRepositoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn top_by_plod(
        &self,
        count: PlodCount,
    ) -> Result<Vec<CharacterPlod>, CharacterPlodRepositoryError> {
        let mut ranked = self.records.read().await.clone();
        rank_by_plod(&mut ranked);
        ranked.truncate(count.as_usize());
        Ok(ranked)
    }

    async fn find_by_id(
        &self,
        id: &CharacterPlodId,
    ) -> Result<Option<CharacterPlod>, CharacterPlodRepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.id() == *id).cloned())
    }

    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<Option<CharacterPlod>, CharacterPlodRepositoryError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|record| record.description() == Some(description))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CharacterPlodDraft;
    use rstest::{fixture, rstest};
    use serde_json::json;
    use uuid::Uuid;

    fn record(name: &str, plod: i32, description: Option<&str>) -> CharacterPlod {
        CharacterPlod::new(CharacterPlodDraft {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            plod,
            description: description.map(str::to_owned),
        })
        .expect("valid record")
    }

    #[fixture]
    fn repo() -> InMemoryCharacterPlodRepository {
        InMemoryCharacterPlodRepository::new(vec![
            record("Sansa Stark", 20, Some("Lady of Winterfell")),
            record("Arya Stark", 80, None),
            record("Bran Stark", 80, Some("Three-eyed raven")),
            record("Hodor", 5, None),
        ])
    }

    fn names(records: &[CharacterPlod]) -> Vec<&str> {
        records.iter().map(CharacterPlod::name).collect()
    }

    #[rstest]
    #[tokio::test]
    async fn list_all_orders_by_name(repo: InMemoryCharacterPlodRepository) {
        let all = repo.list_all().await.expect("list");
        assert_eq!(
            names(&all),
            ["Arya Stark", "Bran Stark", "Hodor", "Sansa Stark"]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn top_by_plod_ranks_and_truncates(repo: InMemoryCharacterPlodRepository) {
        let count = PlodCount::parse("3").expect("count");
        let top = repo.top_by_plod(count).await.expect("rank");
        assert_eq!(names(&top), ["Arya Stark", "Bran Stark", "Sansa Stark"]);
    }

    #[rstest]
    #[tokio::test]
    async fn find_matching_applies_every_criterion(repo: InMemoryCharacterPlodRepository) {
        let criteria = json!({"plod": 80, "description": null});
        let criteria =
            SearchCriteria::from_json(criteria.as_object().expect("object")).expect("criteria");

        let matches = repo.find_matching(&criteria).await.expect("find");
        assert_eq!(names(&matches), ["Arya Stark"]);
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_description_is_exact(repo: InMemoryCharacterPlodRepository) {
        let hit = repo
            .find_by_description("Three-eyed raven")
            .await
            .expect("lookup");
        let miss = repo
            .find_by_description("three-eyed raven")
            .await
            .expect("lookup");

        assert_eq!(hit.map(|r| r.name().to_owned()).as_deref(), Some("Bran Stark"));
        assert!(miss.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn upsert_replaces_by_id(repo: InMemoryCharacterPlodRepository) {
        let hodor = repo
            .find_matching(&SearchCriteria::default())
            .await
            .expect("find")
            .into_iter()
            .find(|r| r.name() == "Hodor")
            .expect("hodor stored");
        let promoted = CharacterPlod::new(CharacterPlodDraft {
            id: *hodor.id().as_uuid(),
            name: "Hodor".to_owned(),
            plod: 99,
            description: None,
        })
        .expect("valid record");

        repo.upsert(promoted).await;

        assert_eq!(repo.len().await, 4);
        let found = repo.find_by_id(&hodor.id()).await.expect("lookup");
        assert_eq!(found.map(|r| r.plod()), Some(99));
    }
}
