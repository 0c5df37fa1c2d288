//! Arcjet API response types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A team visible to the current session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub is_default: bool,
    pub is_owner: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A site belonging to a team.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub name: String,
    pub team_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outcome of a listing request.
///
/// Upstream failures of any kind collapse into [`Listing::Failed`]; the cause
/// is only logged.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    /// No payload could be obtained.
    Failed,
    /// The upstream returned an empty array.
    Empty,
    /// Entities in upstream order.
    Items(Vec<T>),
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Items(items)
        }
    }
}
