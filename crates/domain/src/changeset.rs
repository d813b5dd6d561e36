//! Changeset model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::element::Tags;

/// A changeset: the transactional grouping every element edit belongs to.
///
/// Created open, closed explicitly or by the server after inactivity.
/// Tags can only be updated while the changeset is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Changeset {
    /// The server-assigned changeset id.
    pub id: i64,
    /// When the changeset was opened.
    pub created_at: DateTime<Utc>,
    /// When the changeset was closed, absent while it is open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// Whether the changeset is still open for edits.
    pub open: bool,
    /// Id of the owning user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<i64>,
    /// Display name of the owning user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Number of edits uploaded so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes_count: Option<u64>,
    /// The changeset tag set (`created_by`, `comment`, ...).
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,
}
