//! PostgreSQL persistence adapter using Diesel.
//!
//! Implements [`crate::domain::ports::CharacterPlodRepository`] over
//! `diesel-async` with `bb8` pooling. Row structs and table definitions are
//! private; only the repository and pool types are exported.
//!
//! # Example
//!
//! ```ignore
//! use plod_backend::outbound::persistence::{DbPool, DieselCharacterPlodRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/plod")).await?;
//! let repo = DieselCharacterPlodRepository::new(pool);
//! ```

mod diesel_character_plod_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_character_plod_repository::DieselCharacterPlodRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
