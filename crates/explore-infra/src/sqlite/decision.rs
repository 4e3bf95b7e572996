//! SQLite decision store implementation.
//!
//! Implements `DecisionStore` from `explore-core` using sqlx with split
//! read/write pools. Filters are rendered with `QueryBuilder` so every value
//! is bound as a parameter.

use explore_core::repository::decision::{DecisionStore, PAGE_LENGTH};
use explore_types::decision::{Decision, DecisionFilter};
use explore_types::error::RepositoryError;
use explore_types::pagination::PageToken;
use sqlx::{QueryBuilder, Row, Sqlite};

use super::pool::DatabasePool;

const SELECT_DECISIONS: &str = "SELECT actor_user_id, recipient_user_id, liked_recipient, last_modified, seen_by_recipient FROM decisions";

/// SQLite-backed implementation of `DecisionStore`.
pub struct SqliteDecisionStore {
    pool: DatabasePool,
}

impl SqliteDecisionStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct DecisionRow {
    actor_user_id: String,
    recipient_user_id: String,
    liked_recipient: bool,
    last_modified: i64,
    seen_by_recipient: bool,
}

impl DecisionRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            actor_user_id: row.try_get("actor_user_id")?,
            recipient_user_id: row.try_get("recipient_user_id")?,
            liked_recipient: row.try_get("liked_recipient")?,
            last_modified: row.try_get("last_modified")?,
            seen_by_recipient: row.try_get("seen_by_recipient")?,
        })
    }

    fn into_decision(self) -> Result<Decision, RepositoryError> {
        if self.actor_user_id.is_empty() || self.recipient_user_id.is_empty() {
            return Err(RepositoryError::Query(format!(
                "decision row with empty user id: '{}' -> '{}'",
                self.actor_user_id, self.recipient_user_id
            )));
        }

        Ok(Decision {
            actor_user_id: self.actor_user_id,
            recipient_user_id: self.recipient_user_id,
            liked_recipient: self.liked_recipient,
            last_modified: self.last_modified,
            seen_by_recipient: self.seen_by_recipient,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn query_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => RepositoryError::Connection,
        other => RepositoryError::Query(other.to_string()),
    }
}

/// Tracks whether the next predicate opens the WHERE clause or extends it.
struct Predicates<'q, 'args> {
    qb: &'q mut QueryBuilder<'args, Sqlite>,
    any: bool,
}

impl<'q, 'args> Predicates<'q, 'args> {
    fn new(qb: &'q mut QueryBuilder<'args, Sqlite>) -> Self {
        Self { qb, any: false }
    }

    fn push<T>(&mut self, column_op: &str, value: T)
    where
        T: 'args + sqlx::Encode<'args, Sqlite> + sqlx::Type<Sqlite> + Send,
    {
        self.qb.push(if self.any { " AND " } else { " WHERE " });
        self.qb.push(column_op);
        self.qb.push_bind(value);
        self.any = true;
    }

    fn filter(&mut self, filter: &DecisionFilter) {
        if let Some(actor) = &filter.actor_user_id {
            self.push("actor_user_id = ", actor.clone());
        }
        if let Some(recipient) = &filter.recipient_user_id {
            self.push("recipient_user_id = ", recipient.clone());
        }
        if let Some(liked) = filter.liked_recipient {
            self.push("liked_recipient = ", liked);
        }
        if let Some(last_modified) = filter.last_modified {
            self.push("last_modified = ", last_modified);
        }
        if let Some(seen) = filter.seen_by_recipient {
            self.push("seen_by_recipient = ", seen);
        }
    }

    /// Two independent strict bounds, one per key column.
    fn after(&mut self, token: PageToken) {
        self.push("actor_user_id > ", token.actor_user_id);
        self.push("recipient_user_id > ", token.recipient_user_id);
    }
}

// ---------------------------------------------------------------------------
// DecisionStore implementation
// ---------------------------------------------------------------------------

impl DecisionStore for SqliteDecisionStore {
    async fn list_decisions(
        &self,
        filter: &DecisionFilter,
        page_token: &str,
    ) -> Result<(Vec<Decision>, String), RepositoryError> {
        let after = PageToken::parse_optional(page_token)?;

        let mut qb = QueryBuilder::<Sqlite>::new(SELECT_DECISIONS);
        {
            let mut predicates = Predicates::new(&mut qb);
            predicates.filter(filter);
            if let Some(token) = after {
                predicates.after(token);
            }
        }
        qb.push(" ORDER BY actor_user_id, recipient_user_id LIMIT ");
        qb.push_bind(PAGE_LENGTH as i64);

        let rows = qb
            .build()
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_error)?;

        let mut decisions = Vec::with_capacity(rows.len());
        for row in &rows {
            let decoded = DecisionRow::from_row(row)
                .map_err(|e| RepositoryError::Query(e.to_string()))
                .and_then(DecisionRow::into_decision);
            match decoded {
                Ok(decision) => decisions.push(decision),
                // One bad row should not cost the caller the whole page.
                Err(e) => tracing::error!(error = %e, "failed to scan decision, skipping row"),
            }
        }

        let next_page_token = decisions
            .last()
            .map(|last| PageToken::after(last).to_string())
            .unwrap_or_default();

        Ok((decisions, next_page_token))
    }

    async fn count_decisions(&self, filter: &DecisionFilter) -> Result<u64, RepositoryError> {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) AS count FROM decisions");
        Predicates::new(&mut qb).filter(filter);

        let row = qb
            .build()
            .fetch_one(&self.pool.reader)
            .await
            .map_err(query_error)?;
        let count: i64 = row.try_get("count").map_err(query_error)?;

        Ok(count.max(0) as u64)
    }

    async fn upsert_decision(&self, decision: &Decision) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"REPLACE INTO decisions (actor_user_id, recipient_user_id, liked_recipient, last_modified, seen_by_recipient)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(&decision.actor_user_id)
        .bind(&decision.recipient_user_id)
        .bind(decision.liked_recipient)
        .bind(decision.last_modified)
        .bind(decision.seen_by_recipient)
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;

        Ok(())
    }

    async fn mark_decisions_as_seen(
        &self,
        recipient_user_id: &str,
        threshold: i64,
    ) -> Result<(), RepositoryError> {
        // Strictly less than: a row stamped at `threshold` may not have been
        // part of the listing that triggered this update.
        let result = sqlx::query(
            "UPDATE decisions SET seen_by_recipient = 1 WHERE recipient_user_id = ? AND last_modified < ?",
        )
        .bind(recipient_user_id)
        .bind(threshold)
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;

        tracing::debug!(
            recipient = recipient_user_id,
            threshold,
            rows = result.rows_affected(),
            "marked decisions as seen"
        );

        Ok(())
    }
}
