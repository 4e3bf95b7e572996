//! Infrastructure layer for Explore.
//!
//! Contains implementations of the repository traits defined in `explore-core`
//! (SQLite decision storage with split read/write pools) and the service
//! configuration loader.

pub mod config;
pub mod sqlite;
