//! HTTP/REST API layer for Explore.
//!
//! Axum-based REST API at `/api/v1/` with an envelope response format and
//! CORS support. This is the transport for the four decision operations.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
