//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local store, optionally seeded from a JSON file
//! - **persistence**: PostgreSQL-backed repository using Diesel
//!
//! Adapters only translate between storage representations and domain
//! types; lookup rules live in the domain service.

pub mod memory;
pub mod persistence;
