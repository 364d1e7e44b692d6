//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::CharacterPlodQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub characters_plod: Arc<dyn CharacterPlodQuery>,
}

impl HttpState {
    /// Construct state from the character PLOD lookup port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use plod_backend::domain::ports::FixtureCharacterPlodQuery;
    /// use plod_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureCharacterPlodQuery));
    /// let _query = state.characters_plod.clone();
    /// ```
    pub fn new(characters_plod: Arc<dyn CharacterPlodQuery>) -> Self {
        Self { characters_plod }
    }
}
