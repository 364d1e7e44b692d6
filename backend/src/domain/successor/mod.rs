//! Successor episode records.
//!
//! A successor episode lists the characters appearing in it and the episodes
//! it follows. Episode running time is bounded because broadcast slots vary
//! between 60 and 70 minutes.

use std::fmt;

use chrono::{DateTime, Utc};
use mockable::Clock;
use uuid::Uuid;

use crate::domain::CharacterPlodId;

mod validation;

/// Shortest allowed episode, in minutes.
pub const EPISODE_LENGTH_MIN: u16 = 60;
/// Longest allowed episode, in minutes.
pub const EPISODE_LENGTH_MAX: u16 = 70;

/// Validation errors raised by [`Successor::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuccessorValidationError {
    EmptyName,
    EpisodeLengthOutOfRange { minutes: u16 },
    SelfPredecessor,
    DuplicatePredecessor { episode_id: Uuid },
    DuplicateCharacter { character_id: CharacterPlodId },
    UpdatedBeforeCreated,
}

impl fmt::Display for SuccessorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "episode name must not be empty"),
            Self::EpisodeLengthOutOfRange { minutes } => write!(
                f,
                "episode length must be between {EPISODE_LENGTH_MIN} and \
                 {EPISODE_LENGTH_MAX} minutes (got {minutes})"
            ),
            Self::SelfPredecessor => write!(f, "an episode cannot be its own predecessor"),
            Self::DuplicatePredecessor { episode_id } => {
                write!(f, "predecessor {episode_id} is listed more than once")
            }
            Self::DuplicateCharacter { character_id } => {
                write!(f, "character {character_id} is listed more than once")
            }
            Self::UpdatedBeforeCreated => write!(f, "updated_at must be >= created_at"),
        }
    }
}

impl std::error::Error for SuccessorValidationError {}

/// Input payload for [`Successor::new`].
///
/// Timestamps left as `None` default to the clock's current time.
#[derive(Debug, Clone)]
pub struct SuccessorDraft {
    pub id: Uuid,
    pub name: String,
    pub characters: Vec<CharacterPlodId>,
    pub start_time: Option<DateTime<Utc>>,
    pub episode_length_minutes: u16,
    pub predecessors: Vec<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A validated successor episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor {
    pub(super) id: Uuid,
    pub(super) name: String,
    pub(super) characters: Vec<CharacterPlodId>,
    pub(super) start_time: DateTime<Utc>,
    pub(super) episode_length_minutes: u16,
    pub(super) predecessors: Vec<Uuid>,
    pub(super) created_at: DateTime<Utc>,
    pub(super) updated_at: DateTime<Utc>,
}

impl Successor {
    /// Creates a validated episode, filling missing timestamps from `clock`.
    pub fn new(draft: SuccessorDraft, clock: &dyn Clock) -> Result<Self, SuccessorValidationError> {
        validation::validate(draft, clock.utc())
    }

    /// Episode id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Episode name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Characters appearing in the episode.
    pub fn characters(&self) -> &[CharacterPlodId] {
        self.characters.as_slice()
    }

    /// Broadcast start time.
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Running time in minutes.
    pub fn episode_length_minutes(&self) -> u16 {
        self.episode_length_minutes
    }

    /// Episodes this one follows.
    pub fn predecessors(&self) -> &[Uuid] {
        self.predecessors.as_slice()
    }

    /// When the episode record was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the episode record was last changed; never before `created_at`.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
