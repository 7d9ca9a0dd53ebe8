//! Post model as supplied by the backend
//!
//! Records are immutable inputs to the composer: the client never edits
//! them locally, it only derives ordered views.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-post access scope tag as stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Circle,
}

/// Visibility resolved at ingestion
///
/// Posts created before the `visibility` field existed carry no tag at
/// all; they resolve to `Public` here, once, so downstream code never
/// re-interprets a missing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Public,
    Circle,
}

/// Feed-relevant fields of a post
///
/// `visibility` and both flags default when absent rather than failing to
/// deserialize, so legacy records keep rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_announcement: bool,
    pub created_at: String,
}

impl PostRecord {
    /// Resolve the legacy-optional visibility into a concrete scope
    pub fn scope(&self) -> Scope {
        match self.visibility {
            Some(Visibility::Circle) => Scope::Circle,
            Some(Visibility::Public) | None => Scope::Public,
        }
    }

    /// Parse the creation timestamp for ordering
    ///
    /// Accepts RFC 3339 or the bare dates older clients wrote. Returns
    /// `None` when the value is unparseable; such records sort last
    /// within their tier.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&self.created_at, "%Y-%m-%d")
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
    }
}
