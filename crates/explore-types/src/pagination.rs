//! Opaque pagination tokens for decision listings.
//!
//! A token encodes the primary key of the last row of the previous page as
//! `"{actor_user_id}##{recipient_user_id}"`. Transport callers treat it as an
//! opaque string; an empty string requests the first page.

use std::fmt;
use std::str::FromStr;

use crate::decision::Decision;
use crate::error::RepositoryError;

/// Separator between the two key components of a token.
pub const PAGE_TOKEN_DELIMITER: &str = "##";

/// Decoded pagination token: the key of the last row already returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageToken {
    pub actor_user_id: String,
    pub recipient_user_id: String,
}

impl PageToken {
    /// Token pointing just past `decision`.
    pub fn after(decision: &Decision) -> Self {
        Self {
            actor_user_id: decision.actor_user_id.clone(),
            recipient_user_id: decision.recipient_user_id.clone(),
        }
    }

    /// Decode a raw token. The empty string means "no cursor".
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, RepositoryError> {
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{PAGE_TOKEN_DELIMITER}{}",
            self.actor_user_id, self.recipient_user_id
        )
    }
}

impl FromStr for PageToken {
    type Err = RepositoryError;

    /// Splits on every delimiter and keeps the first two components, so
    /// anything after a second `##` is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(PAGE_TOKEN_DELIMITER);
        match (parts.next(), parts.next()) {
            (Some(actor), Some(recipient)) => Ok(Self {
                actor_user_id: actor.to_string(),
                recipient_user_id: recipient.to_string(),
            }),
            _ => Err(RepositoryError::InvalidPageToken(s.to_string())),
        }
    }
}
