//! Diesel and pool error mapping for the character PLOD repository.

use tracing::debug;

use crate::domain::ports::CharacterPlodRepositoryError;

use super::pool::PoolError;

/// Map pool failures to connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> CharacterPlodRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    CharacterPlodRepositoryError::connection(message)
}

/// Map Diesel failures, keeping driver details out of the returned message.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> CharacterPlodRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "character PLOD query failed");
        }
        other => debug!(error = %other, "character PLOD query failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            CharacterPlodRepositoryError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => {
            CharacterPlodRepositoryError::query("database query error")
        }
        _ => CharacterPlodRepositoryError::query("database error"),
    }
}
