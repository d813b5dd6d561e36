//! OSM map elements
//!
//! The element model is a tagged union over nodes, ways and relations,
//! matching the OSM JSON element objects. Mutators follow a copy-on-write
//! discipline: they take `&self`, return a modified copy and never touch
//! the fields they do not target.

mod kind;
mod node;
mod relation;
mod way;

pub use kind::{ElementId, ElementType};
pub use node::Node;
pub use relation::{Member, Relation};
pub use way::Way;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{DomainError, DomainResult};

/// An element tag set. Keys are unique by construction.
pub type Tags = BTreeMap<String, String>;

/// A map element: node, way or relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// A single point.
    Node(Node),
    /// An ordered list of nodes.
    Way(Way),
    /// A grouping of elements with roles.
    Relation(Relation),
}

impl Element {
    /// Returns the element type.
    #[must_use]
    pub const fn element_type(&self) -> ElementType {
        match self {
            Self::Node(_) => ElementType::Node,
            Self::Way(_) => ElementType::Way,
            Self::Relation(_) => ElementType::Relation,
        }
    }

    /// Returns the numeric id, 0 for a not-yet-uploaded element.
    #[must_use]
    pub const fn id(&self) -> i64 {
        match self {
            Self::Node(n) => n.id,
            Self::Way(w) => w.id,
            Self::Relation(r) => r.id,
        }
    }

    /// Returns the typed element id.
    #[must_use]
    pub const fn element_id(&self) -> ElementId {
        ElementId::new(self.element_type(), self.id())
    }

    /// Returns the version, if the element has been uploaded before.
    #[must_use]
    pub const fn version(&self) -> Option<u64> {
        match self {
            Self::Node(n) => n.version,
            Self::Way(w) => w.version,
            Self::Relation(r) => r.version,
        }
    }

    /// Returns the timestamp of the last edit, if any.
    #[must_use]
    pub const fn timestamp(&self) -> Option<chrono::DateTime<Utc>> {
        match self {
            Self::Node(n) => n.timestamp,
            Self::Way(w) => w.timestamp,
            Self::Relation(r) => r.timestamp,
        }
    }

    /// Returns true if the element has never been uploaded.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.id() == 0
    }

    /// Returns the tag set.
    #[must_use]
    pub const fn tags(&self) -> &Tags {
        match self {
            Self::Node(n) => &n.tags,
            Self::Way(w) => &w.tags,
            Self::Relation(r) => &r.tags,
        }
    }

    const fn tags_mut(&mut self) -> &mut Tags {
        match self {
            Self::Node(n) => &mut n.tags,
            Self::Way(w) => &mut w.tags,
            Self::Relation(r) => &mut r.tags,
        }
    }

    /// Returns a copy with the tag upserted: an existing entry for the
    /// key is replaced, everything else is untouched.
    #[must_use]
    pub fn with_tag(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.tags_mut().insert(key.into(), value.into());
        next
    }

    /// Returns a copy with every entry of `tags` upserted.
    #[must_use]
    pub fn with_tags(&self, tags: Tags) -> Self {
        let mut next = self.clone();
        next.tags_mut().extend(tags);
        next
    }

    /// Returns a copy without the given tag. Removing an absent key is
    /// a no-op.
    #[must_use]
    pub fn without_tag(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.tags_mut().remove(key);
        next
    }

    /// Returns a copy of the node moved to the given position.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotANode`] for ways and relations, which
    /// carry no coordinates of their own.
    pub fn with_coordinates(&self, lat: f64, lon: f64) -> DomainResult<Self> {
        match self {
            Self::Node(n) => Ok(Self::Node(n.with_coordinates(lat, lon))),
            other => Err(DomainError::NotANode(other.element_type())),
        }
    }

    /// Returns a copy stamped with the current UTC time.
    #[must_use]
    pub fn with_timestamp_now(&self) -> Self {
        let now = Utc::now();
        let mut next = self.clone();
        match &mut next {
            Self::Node(n) => n.timestamp = Some(now),
            Self::Way(w) => w.timestamp = Some(now),
            Self::Relation(r) => r.timestamp = Some(now),
        }
        next
    }

    /// Returns a copy with the given version number.
    #[must_use]
    pub fn with_version(&self, version: u64) -> Self {
        let mut next = self.clone();
        match &mut next {
            Self::Node(n) => n.version = Some(version),
            Self::Way(w) => w.version = Some(version),
            Self::Relation(r) => r.version = Some(version),
        }
        next
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Way> for Element {
    fn from(way: Way) -> Self {
        Self::Way(way)
    }
}

impl From<Relation> for Element {
    fn from(relation: Relation) -> Self {
        Self::Relation(relation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cafe() -> Element {
        let mut tags = Tags::new();
        tags.insert("amenity".to_string(), "cafe".to_string());
        tags.insert("name".to_string(), "Old Name".to_string());
        Element::Node(Node::create(48.8, 2.3, tags))
    }

    #[test]
    fn test_with_tag_upserts_and_keeps_input() {
        let element = cafe();
        let renamed = element.with_tag("name", "New Name");

        assert_eq!(renamed.tags().get("name").unwrap(), "New Name");
        assert_eq!(renamed.tags().get("amenity").unwrap(), "cafe");
        assert_eq!(renamed.tags().len(), 2);
        // the input is untouched
        assert_eq!(element.tags().get("name").unwrap(), "Old Name");
    }

    #[test]
    fn test_with_tags_merges() {
        let mut extra = Tags::new();
        extra.insert("cuisine".to_string(), "coffee_shop".to_string());
        extra.insert("name".to_string(), "New Name".to_string());

        let merged = cafe().with_tags(extra);
        assert_eq!(merged.tags().len(), 3);
        assert_eq!(merged.tags().get("name").unwrap(), "New Name");
    }

    #[test]
    fn test_without_tag_then_again_is_noop() {
        let element = cafe();
        let stripped = element.without_tag("name");
        assert!(stripped.tags().get("name").is_none());
        assert_eq!(stripped.tags().len(), 1);

        let stripped_twice = stripped.without_tag("name");
        assert_eq!(stripped_twice.tags(), stripped.tags());
        // the input keeps its tag
        assert!(element.tags().contains_key("name"));
    }

    #[test]
    fn test_with_coordinates_preserves_tags() {
        let element = cafe();
        let moved = element.with_coordinates(50.0, 3.0).unwrap();
        assert_eq!(moved.tags(), element.tags());
        let Element::Node(node) = moved else {
            unreachable!("moved element should still be a node");
        };
        assert!((node.lat - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_coordinates_rejects_way() {
        let way = Element::Way(Way {
            id: 1,
            nodes: vec![1, 2],
            version: Some(1),
            changeset: None,
            timestamp: None,
            uid: None,
            user: None,
            visible: None,
            tags: Tags::new(),
        });
        let result = way.with_coordinates(1.0, 2.0);
        assert_eq!(result, Err(DomainError::NotANode(ElementType::Way)));
    }

    #[test]
    fn test_with_version_leaves_tags() {
        let element = cafe();
        let versioned = element.with_version(7);
        assert_eq!(versioned.version(), Some(7));
        assert_eq!(versioned.tags(), element.tags());
    }

    #[test]
    fn test_timestamp_now_is_monotonic() {
        let element = cafe();
        let first = element.with_timestamp_now();
        let second = first.with_timestamp_now();
        let t1 = first.timestamp().unwrap();
        let t2 = second.timestamp().unwrap();
        assert!(t2 >= t1);
        assert!(element.timestamp().is_none());
    }

    #[test]
    fn test_tagged_json_roundtrip() {
        let json = r#"{"type":"node","id":123,"lat":48.8,"lon":2.3,"tags":{"name":"Cafe"}}"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.element_type(), ElementType::Node);
        assert_eq!(element.id(), 123);

        let back = serde_json::to_string(&element).unwrap();
        assert!(back.contains(r#""type":"node""#));
    }
}
