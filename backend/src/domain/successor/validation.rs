//! Successor episode validation.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::{
    EPISODE_LENGTH_MAX, EPISODE_LENGTH_MIN, Successor, SuccessorDraft, SuccessorValidationError,
};

pub(super) fn validate(
    draft: SuccessorDraft,
    now: DateTime<Utc>,
) -> Result<Successor, SuccessorValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(SuccessorValidationError::EmptyName);
    }

    let minutes = draft.episode_length_minutes;
    if !(EPISODE_LENGTH_MIN..=EPISODE_LENGTH_MAX).contains(&minutes) {
        return Err(SuccessorValidationError::EpisodeLengthOutOfRange { minutes });
    }

    let mut seen_predecessors = HashSet::new();
    for episode_id in &draft.predecessors {
        if *episode_id == draft.id {
            return Err(SuccessorValidationError::SelfPredecessor);
        }
        if !seen_predecessors.insert(*episode_id) {
            return Err(SuccessorValidationError::DuplicatePredecessor {
                episode_id: *episode_id,
            });
        }
    }

    let mut seen_characters = HashSet::new();
    for character_id in &draft.characters {
        if !seen_characters.insert(*character_id) {
            return Err(SuccessorValidationError::DuplicateCharacter {
                character_id: *character_id,
            });
        }
    }

    let created_at = draft.created_at.unwrap_or(now);
    let updated_at = draft.updated_at.unwrap_or(now);
    if updated_at < created_at {
        return Err(SuccessorValidationError::UpdatedBeforeCreated);
    }

    Ok(Successor {
        id: draft.id,
        name: name.to_owned(),
        characters: draft.characters,
        start_time: draft.start_time.unwrap_or(now),
        episode_length_minutes: minutes,
        predecessors: draft.predecessors,
        created_at,
        updated_at,
    })
}
