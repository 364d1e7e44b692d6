//! Character PLOD records and lookup inputs.
//!
//! A character PLOD record pairs a character name with its PLOD score, the
//! key used to rank characters in "top x" listings. Records are immutable
//! once constructed; every constructor validates its input.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod criteria;
#[cfg(test)]
mod tests;

pub use criteria::{CriteriaError, SearchCriteria};

/// Validation errors raised by character PLOD constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterPlodValidationError {
    InvalidId,
    EmptyName,
    NegativePlod { value: i32 },
    InvalidCount,
}

impl fmt::Display for CharacterPlodValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "character PLOD id must be a valid UUID"),
            Self::EmptyName => write!(f, "character name must not be empty"),
            Self::NegativePlod { value } => {
                write!(f, "plod must be non-negative (got {value})")
            }
            Self::InvalidCount => write!(f, "count must be a positive integer"),
        }
    }
}

impl std::error::Error for CharacterPlodValidationError {}

/// Stable identifier of a character PLOD record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterPlodId(Uuid);

impl CharacterPlodId {
    /// Parse an identifier from its textual form.
    ///
    /// # Examples
    /// ```
    /// use plod_backend::domain::CharacterPlodId;
    ///
    /// assert!(CharacterPlodId::parse("abc").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, CharacterPlodValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed != raw {
            return Err(CharacterPlodValidationError::InvalidId);
        }
        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|_| CharacterPlodValidationError::InvalidId)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for CharacterPlodId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for CharacterPlodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input payload for [`CharacterPlod::new`].
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterPlodDraft {
    #[serde(default = "Uuid::new_v4", alias = "_id")]
    pub id: Uuid,
    pub name: String,
    pub plod: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// A character together with its PLOD score.
///
/// ## Invariants
/// - `name` is non-empty and carries no surrounding whitespace.
/// - `plod` is non-negative.
///
/// # Examples
/// ```
/// use plod_backend::domain::{CharacterPlod, CharacterPlodDraft};
/// use uuid::Uuid;
///
/// let record = CharacterPlod::new(CharacterPlodDraft {
///     id: Uuid::new_v4(),
///     name: "Darth Vader".to_owned(),
///     plod: 5,
///     description: None,
/// })
/// .expect("valid record");
/// assert_eq!(record.plod(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CharacterPlodDraft")]
pub struct CharacterPlod {
    id: CharacterPlodId,
    name: String,
    plod: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl CharacterPlod {
    /// Creates a validated record.
    pub fn new(draft: CharacterPlodDraft) -> Result<Self, CharacterPlodValidationError> {
        Self::try_from(draft)
    }

    /// Record identifier.
    pub fn id(&self) -> CharacterPlodId {
        self.id
    }

    /// Character name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// PLOD score.
    pub fn plod(&self) -> i32 {
        self.plod
    }

    /// Optional free-text description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl TryFrom<CharacterPlodDraft> for CharacterPlod {
    type Error = CharacterPlodValidationError;

    fn try_from(value: CharacterPlodDraft) -> Result<Self, Self::Error> {
        let name = value.name.trim();
        if name.is_empty() {
            return Err(CharacterPlodValidationError::EmptyName);
        }
        if value.plod < 0 {
            return Err(CharacterPlodValidationError::NegativePlod { value: value.plod });
        }
        Ok(Self {
            id: CharacterPlodId(value.id),
            name: name.to_owned(),
            plod: value.plod,
            description: value.description,
        })
    }
}

/// Number of records requested from a "top x by PLOD" listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlodCount(NonZeroU32);

impl PlodCount {
    /// Parse a count from a path segment.
    ///
    /// # Examples
    /// ```
    /// use plod_backend::domain::PlodCount;
    ///
    /// assert_eq!(PlodCount::parse("10").map(|c| c.get()), Ok(10));
    /// assert!(PlodCount::parse("0").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, CharacterPlodValidationError> {
        raw.trim()
            .parse::<NonZeroU32>()
            .map(Self)
            .map_err(|_| CharacterPlodValidationError::InvalidCount)
    }

    /// The requested count.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The requested count as a collection length.
    pub fn as_usize(self) -> usize {
        usize::try_from(self.0.get()).unwrap_or(usize::MAX)
    }
}

impl From<NonZeroU32> for PlodCount {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

/// Order records for a "top x" listing: highest PLOD first, ties by name.
pub fn rank_by_plod(records: &mut [CharacterPlod]) {
    records.sort_by(|a, b| b.plod.cmp(&a.plod).then_with(|| a.name.cmp(&b.name)));
}
