//! Relation element

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ElementType, Tags};

/// One member of a relation: an element reference plus its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The type of the referenced element.
    #[serde(rename = "type")]
    pub member_type: ElementType,
    /// The id of the referenced element.
    #[serde(rename = "ref")]
    pub member_ref: i64,
    /// The member's role within the relation, possibly empty.
    #[serde(default)]
    pub role: String,
}

impl Member {
    /// Creates a member reference.
    #[must_use]
    pub fn new(member_type: ElementType, member_ref: i64, role: impl Into<String>) -> Self {
        Self {
            member_type,
            member_ref,
            role: role.into(),
        }
    }
}

/// A relation: a grouping of elements, each with a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    /// The server-assigned id, 0 for a not-yet-uploaded relation.
    #[serde(default)]
    pub id: i64,
    /// The ordered member list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,
    /// The server-assigned version, absent before the first upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    /// The changeset of the last edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changeset: Option<i64>,
    /// Timestamp of the last edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Id of the user who last touched the relation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<i64>,
    /// Display name of the user who last touched the relation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Whether the relation is visible; `false` only on deleted versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// The tag set; keys are unique.
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,
}
