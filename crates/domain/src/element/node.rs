//! Node element

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Tags;

/// A node: a single point on the map with coordinates and tags.
///
/// Matches the OSM JSON element object shape. Elements that have never
/// been uploaded carry `id` 0 and no version; both are assigned by the
/// server on the first upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// The server-assigned id, 0 for a not-yet-uploaded node.
    #[serde(default)]
    pub id: i64,
    /// Latitude in degrees.
    #[serde(default)]
    pub lat: f64,
    /// Longitude in degrees.
    #[serde(default)]
    pub lon: f64,
    /// The server-assigned version, absent before the first upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    /// The changeset of the last edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changeset: Option<i64>,
    /// Timestamp of the last edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Id of the user who last touched the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<i64>,
    /// Display name of the user who last touched the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Whether the node is visible; `false` only on deleted versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// The tag set; keys are unique.
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,
}

impl Node {
    /// Creates a brand-new node at the given position, ready to be sent
    /// to the server inside a changeset.
    #[must_use]
    pub fn create(lat: f64, lon: f64, tags: Tags) -> Self {
        Self {
            id: 0,
            lat,
            lon,
            version: None,
            changeset: None,
            timestamp: None,
            uid: None,
            user: None,
            visible: None,
            tags,
        }
    }

    /// Returns a copy of this node moved to the given position.
    ///
    /// All other fields, tags included, are left untouched.
    #[must_use]
    pub fn with_coordinates(&self, lat: f64, lon: f64) -> Self {
        let mut next = self.clone();
        next.lat = lat;
        next.lon = lon;
        next
    }
}
