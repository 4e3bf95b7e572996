//! Observability setup for Explore: tracing subscriber and OpenTelemetry bridge.

pub mod tracing_setup;
