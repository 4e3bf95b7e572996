//! Service configuration types for Explore.
//!
//! `ServiceConfig` represents the top-level `config.toml` that controls the
//! database location, the HTTP listener, and the background seen-marking
//! timeout.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Explore service.
///
/// Loaded from `~/.explore/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Full sqlx database URL. Defaults to `{data_dir}/explore.db` when unset.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Host the HTTP listener binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP listener binds to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Timeout for the detached "mark decisions as seen" task.
    #[serde(default = "default_mark_seen_timeout_secs")]
    pub mark_seen_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_mark_seen_timeout_secs() -> u64 {
    5
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: default_host(),
            port: default_port(),
            mark_seen_timeout_secs: default_mark_seen_timeout_secs(),
        }
    }
}
