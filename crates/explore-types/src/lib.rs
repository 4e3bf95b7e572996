//! Shared domain types for Explore.
//!
//! This crate contains the domain types used across the Explore service:
//! Decision, DecisionFilter, pagination tokens, request/response shapes,
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod decision;
pub mod error;
pub mod pagination;
