//! Query parameter extractors for list endpoints.

use serde::Deserialize;

/// Query parameters for the liked-you listing endpoints.
#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    /// Opaque token from the previous page's `next_pagination_token`.
    #[serde(default)]
    pub pagination_token: String,
}
