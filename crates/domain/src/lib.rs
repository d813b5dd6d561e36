//! Meridian Domain - OSM data model
//!
//! This crate defines the domain model for the Meridian OSM API client:
//! map elements (nodes, ways, relations), changesets, notes, bounding
//! boxes and user preferences, together with the copy-on-write mutators
//! over elements. All types here are pure Rust with no I/O dependencies.

pub mod bbox;
pub mod changeset;
pub mod element;
pub mod error;
pub mod note;
pub mod user;

pub use bbox::Bbox;
pub use changeset::Changeset;
pub use element::{Element, ElementId, ElementType, Member, Node, Relation, Tags, Way};
pub use error::{DomainError, DomainResult};
pub use note::{Note, NoteAction, NoteComment, NoteStatus, format_note_date, parse_note_date};
pub use user::{Preferences, UserDetails};
