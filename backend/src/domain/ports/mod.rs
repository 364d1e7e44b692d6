//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod character_plod_query;
mod character_plod_repository;

#[cfg(test)]
pub use character_plod_query::MockCharacterPlodQuery;
pub use character_plod_query::{CharacterPlodQuery, FixtureCharacterPlodQuery};
#[cfg(test)]
pub use character_plod_repository::MockCharacterPlodRepository;
pub use character_plod_repository::{
    CharacterPlodRepository, CharacterPlodRepositoryError, FixtureCharacterPlodRepository,
};
