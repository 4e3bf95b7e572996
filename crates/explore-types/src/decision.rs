//! Decision domain types.
//!
//! A [`Decision`] is a recorded like/pass from one user about another. At
//! most one decision exists per ordered `(actor, recipient)` pair; recording a
//! new one replaces the old row in place.

use serde::{Deserialize, Serialize};

/// A like/pass decision made by `actor_user_id` about `recipient_user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Decision {
    /// The user who made the decision.
    pub actor_user_id: String,
    /// The user the decision is about.
    pub recipient_user_id: String,
    /// `true` for a like, `false` for a pass.
    pub liked_recipient: bool,
    /// Unix seconds at which the decision was last recorded.
    pub last_modified: i64,
    /// Whether the recipient has already been shown this decision.
    pub seen_by_recipient: bool,
}

impl Decision {
    /// Build a freshly recorded decision. Not yet seen by the recipient.
    pub fn new(
        actor_user_id: impl Into<String>,
        recipient_user_id: impl Into<String>,
        liked_recipient: bool,
        last_modified: i64,
    ) -> Self {
        Self {
            actor_user_id: actor_user_id.into(),
            recipient_user_id: recipient_user_id.into(),
            liked_recipient,
            last_modified,
            seen_by_recipient: false,
        }
    }
}

/// Equality predicates over every [`Decision`] field.
///
/// Each predicate is independently present or absent; `None` means the field
/// is unconstrained. Used to shape both listing and counting queries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecisionFilter {
    pub actor_user_id: Option<String>,
    pub recipient_user_id: Option<String>,
    pub liked_recipient: Option<bool>,
    pub last_modified: Option<i64>,
    pub seen_by_recipient: Option<bool>,
}

impl DecisionFilter {
    /// Likes received by `recipient_user_id`.
    pub fn likes_for(recipient_user_id: impl Into<String>) -> Self {
        Self {
            recipient_user_id: Some(recipient_user_id.into()),
            liked_recipient: Some(true),
            ..Default::default()
        }
    }

    /// Restrict to decisions the recipient has not been shown yet.
    pub fn unseen(mut self) -> Self {
        self.seen_by_recipient = Some(false);
        self
    }

    /// Whether `decision` satisfies every present predicate.
    pub fn matches(&self, decision: &Decision) -> bool {
        self.actor_user_id
            .as_ref()
            .is_none_or(|v| *v == decision.actor_user_id)
            && self
                .recipient_user_id
                .as_ref()
                .is_none_or(|v| *v == decision.recipient_user_id)
            && self
                .liked_recipient
                .is_none_or(|v| v == decision.liked_recipient)
            && self
                .last_modified
                .is_none_or(|v| v == decision.last_modified)
            && self
                .seen_by_recipient
                .is_none_or(|v| v == decision.seen_by_recipient)
    }
}

/// A user who liked the requester, as returned by listing operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liker {
    pub actor_id: String,
    pub unix_timestamp: u64,
}

impl From<&Decision> for Liker {
    fn from(decision: &Decision) -> Self {
        Self {
            actor_id: decision.actor_user_id.clone(),
            unix_timestamp: decision.last_modified.max(0) as u64,
        }
    }
}

/// Response for ListLikedYou / ListNewLikedYou.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListLikedYouResponse {
    pub likers: Vec<Liker>,
    /// Token for the next page; empty when the page was empty.
    pub next_pagination_token: String,
}

/// Response for CountLikedYou.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountLikedYouResponse {
    pub count: u64,
}

/// Request body for PutDecision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutDecisionRequest {
    pub actor_user_id: String,
    pub recipient_user_id: String,
    pub liked_recipient: bool,
}

/// Response for PutDecision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PutDecisionResponse {
    /// Whether the recipient had already liked the actor back.
    pub mutual_likes: bool,
}
