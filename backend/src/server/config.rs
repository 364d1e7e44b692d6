//! HTTP server configuration object.

use std::net::SocketAddr;

use plod_backend::domain::CharacterPlod;
use plod_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) seed: Vec<CharacterPlod>,
}

impl ServerConfig {
    /// Configuration serving an empty in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            seed: Vec::new(),
        }
    }

    /// Serve records from PostgreSQL instead of process memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Records loaded into the in-memory store. Ignored once a pool is set.
    #[must_use]
    pub fn with_seed(mut self, seed: Vec<CharacterPlod>) -> Self {
        self.seed = seed;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "read by server tests for fixture access")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
