//! Element type and identifier

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// The three primitive OSM element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// A single point with coordinates.
    #[default]
    Node,
    /// An ordered list of nodes.
    Way,
    /// A grouping of elements with roles.
    Relation,
}

impl ElementType {
    /// Returns all element types.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Node, Self::Way, Self::Relation]
    }

    /// Returns the type as the lowercase string used in API paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
        }
    }

    /// Returns the plural form used by the multi-fetch endpoints.
    #[must_use]
    pub const fn as_plural_str(self) -> &'static str {
        match self {
            Self::Node => "nodes",
            Self::Way => "ways",
            Self::Relation => "relations",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_lowercase().as_str() {
            "node" => Ok(Self::Node),
            "way" => Ok(Self::Way),
            "relation" => Ok(Self::Relation),
            other => Err(DomainError::UnknownElementType(other.to_string())),
        }
    }
}

/// Identifies one element: its type plus its numeric server id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId {
    /// The element type.
    pub kind: ElementType,
    /// The numeric id assigned by the server.
    pub id: i64,
}

impl ElementId {
    /// Creates an element id.
    #[must_use]
    pub const fn new(kind: ElementType, id: i64) -> Self {
        Self { kind, id }
    }

    /// Creates a node id.
    #[must_use]
    pub const fn node(id: i64) -> Self {
        Self::new(ElementType::Node, id)
    }

    /// Creates a way id.
    #[must_use]
    pub const fn way(id: i64) -> Self {
        Self::new(ElementType::Way, id)
    }

    /// Creates a relation id.
    #[must_use]
    pub const fn relation(id: i64) -> Self {
        Self::new(ElementType::Relation, id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}
