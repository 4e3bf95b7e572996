//! Business logic and repository trait definitions for Explore.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements, and the services that orchestrate them. It depends only
//! on `explore-types` -- never on `explore-infra` or any database/IO crate.

pub mod repository;
pub mod service;
