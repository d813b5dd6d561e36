//! Way element

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Tags;

/// A way: an ordered list of node references with tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Way {
    /// The server-assigned id, 0 for a not-yet-uploaded way.
    #[serde(default)]
    pub id: i64,
    /// The ids of the member nodes, in drawing order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<i64>,
    /// The server-assigned version, absent before the first upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    /// The changeset of the last edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changeset: Option<i64>,
    /// Timestamp of the last edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Id of the user who last touched the way.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<i64>,
    /// Display name of the user who last touched the way.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Whether the way is visible; `false` only on deleted versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// The tag set; keys are unique.
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_way_from_json() {
        let json = r#"{
            "id": 5090250,
            "nodes": [822403, 21533912, 821601],
            "version": 12,
            "tags": {"highway": "residential", "name": "Clipstone Street"}
        }"#;
        let way: Way = serde_json::from_str(json).unwrap();
        assert_eq!(way.id, 5_090_250);
        assert_eq!(way.nodes, vec![822_403, 21_533_912, 821_601]);
        assert_eq!(way.tags.get("highway").unwrap(), "residential");
    }
}
