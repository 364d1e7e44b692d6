//! Diesel row structs. Internal to the persistence adapter.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{CharacterPlod, CharacterPlodDraft, CharacterPlodValidationError};

use super::schema::character_plods;

/// Queryable row for `character_plods`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = character_plods)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CharacterPlodRow {
    pub id: Uuid,
    pub name: String,
    pub plod: i32,
    pub description: Option<String>,
}

impl TryFrom<CharacterPlodRow> for CharacterPlod {
    type Error = CharacterPlodValidationError;

    fn try_from(row: CharacterPlodRow) -> Result<Self, Self::Error> {
        CharacterPlod::new(CharacterPlodDraft {
            id: row.id,
            name: row.name,
            plod: row.plod,
            description: row.description,
        })
    }
}
