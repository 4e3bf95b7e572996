//! Decision store trait definition.

use explore_types::decision::{Decision, DecisionFilter};
use explore_types::error::RepositoryError;

/// Fixed number of decisions returned per listing page.
pub const PAGE_LENGTH: usize = 10;

/// Repository trait for decision persistence.
///
/// Implementations live in explore-infra (e.g., SqliteDecisionStore).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait DecisionStore: Send + Sync {
    /// List up to [`PAGE_LENGTH`] decisions matching `filter`, ordered by
    /// `(actor_user_id, recipient_user_id)` ascending.
    ///
    /// `page_token` is empty for the first page. Otherwise it is decoded into
    /// two independent strict lower bounds, `actor_user_id > a` AND
    /// `recipient_user_id > r`. This is not a composite-key comparison: rows
    /// that share the token's actor, or whose recipient sorts at or before
    /// the token's recipient, are excluded from the page that follows it.
    /// Existing tokens depend on this, so implementations must keep it.
    ///
    /// Returns the page and the token for the next one. The next token is
    /// empty iff the page is empty; a full or partial page always yields a
    /// token built from its last row.
    fn list_decisions(
        &self,
        filter: &DecisionFilter,
        page_token: &str,
    ) -> impl std::future::Future<Output = Result<(Vec<Decision>, String), RepositoryError>> + Send;

    /// Count all decisions matching `filter`.
    fn count_decisions(
        &self,
        filter: &DecisionFilter,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Insert `decision`, replacing any row with the same
    /// `(actor_user_id, recipient_user_id)`. Every column is overwritten.
    fn upsert_decision(
        &self,
        decision: &Decision,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Set `seen_by_recipient` on every decision about `recipient_user_id`
    /// whose `last_modified` is strictly before `threshold`.
    ///
    /// Rows stamped exactly at `threshold` stay unseen: showing a like twice
    /// is preferred over dropping one recorded while the listing was read.
    fn mark_decisions_as_seen(
        &self,
        recipient_user_id: &str,
        threshold: i64,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
