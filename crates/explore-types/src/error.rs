use thiserror::Error;

use crate::decision::PutDecisionResponse;

/// Errors from repository operations (used by trait definitions in explore-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("invalid pagination token: '{0}'")]
    InvalidPageToken(String),
}

/// Errors surfaced by the decision service use cases.
#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("failed to list decisions: {0}")]
    List(#[source] RepositoryError),

    #[error("failed to count decisions: {0}")]
    Count(#[source] RepositoryError),

    #[error("failed to upsert decision: {0}")]
    Upsert(#[source] RepositoryError),

    /// The decision was stored but the reverse lookup failed. `response`
    /// is what the caller still receives (`mutual_likes == false`).
    #[error("failed to check if it's mutual: {source}")]
    MatchCheck {
        response: PutDecisionResponse,
        #[source]
        source: RepositoryError,
    },
}

impl DecisionError {
    /// Partial response carried alongside the error, if any.
    pub fn partial_response(&self) -> Option<PutDecisionResponse> {
        match self {
            DecisionError::MatchCheck { response, .. } => Some(*response),
            _ => None,
        }
    }
}
