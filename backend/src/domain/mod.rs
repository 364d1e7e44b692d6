//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed character PLOD entities and the lookup
//! use-cases served over HTTP. Types are immutable once constructed and
//! document their invariants in Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure payload.
//! - StoreOutcome — tagged found / not-found / invalid lookup result.
//! - CharacterPlod and friends — the record served by the lookup endpoints.
//! - CharacterPlodService — default implementation of the lookup port.
//! - Successor — validated successor episode record.

pub mod character_plod;
mod character_plod_service;
pub mod error;
pub mod outcome;
pub mod ports;
pub mod successor;
pub mod trace_id;

pub use self::character_plod::{
    CharacterPlod, CharacterPlodDraft, CharacterPlodId, CharacterPlodValidationError,
    CriteriaError, PlodCount, SearchCriteria, rank_by_plod,
};
pub use self::character_plod_service::CharacterPlodService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::outcome::StoreOutcome;
pub use self::successor::{
    EPISODE_LENGTH_MAX, EPISODE_LENGTH_MIN, Successor, SuccessorDraft, SuccessorValidationError,
};
pub use self::trace_id::TraceId;
