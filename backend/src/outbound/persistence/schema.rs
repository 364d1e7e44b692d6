//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations`; regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Characters and their PLOD scores.
    character_plods (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Character name, trimmed and non-empty.
        name -> Varchar,
        /// Non-negative PLOD score used for ranking.
        plod -> Int4,
        /// Optional free-text description, matched exactly by lookups.
        description -> Nullable<Text>,
    }
}
