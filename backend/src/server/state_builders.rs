//! Builders wiring repositories and services into HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use plod_backend::domain::CharacterPlodService;
use plod_backend::domain::ports::CharacterPlodRepository;
use plod_backend::inbound::http::state::HttpState;
use plod_backend::outbound::memory::InMemoryCharacterPlodRepository;
use plod_backend::outbound::persistence::DieselCharacterPlodRepository;

use super::ServerConfig;

/// Pick the repository backing the lookup service.
///
/// PostgreSQL wins when a pool is configured; otherwise the seed records are
/// served from memory.
pub(super) fn build_repository(config: &ServerConfig) -> Arc<dyn CharacterPlodRepository> {
    match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "character PLOD store selected");
            Arc::new(DieselCharacterPlodRepository::new(pool.clone()))
        }
        None => {
            info!(
                store = "memory",
                seeded = config.seed.len(),
                "character PLOD store selected"
            );
            Arc::new(InMemoryCharacterPlodRepository::new(config.seed.clone()))
        }
    }
}

/// Build the shared HTTP state from configuration.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = build_repository(config);
    let service = CharacterPlodService::new(repository);
    web::Data::new(HttpState::new(Arc::new(service)))
}
