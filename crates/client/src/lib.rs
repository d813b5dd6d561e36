//! Meridian Client - the OpenStreetMap 0.6 API over HTTP
//!
//! This crate wraps the OSM editing API: reading and writing map
//! elements, notes, changesets and user preferences, with OAuth 1.0a
//! request signing on authenticated calls. Pure element manipulation
//! lives in [`meridian_domain`], re-exported here as [`domain`].
//!
//! ```no_run
//! use meridian_client::{Config, Credentials, Osm};
//! use meridian_client::domain::{Node, Tags};
//!
//! # async fn run() -> Result<(), meridian_client::ApiError> {
//! let config = Config::new("https://api.example.org/api/0.6")?
//!     .with_credentials(Credentials::new("ck", "cs", "tk", "ts"));
//! let osm = Osm::new(config)?;
//!
//! let changeset = osm.create_changeset("my editor", "add a cafe").await?;
//! let mut tags = Tags::new();
//! tags.insert("name".to_string(), "Cafe".to_string());
//! let node = Node::create(48.8, 2.3, tags);
//! let id = osm.send_element(&node.into(), changeset).await?;
//! # let _ = id;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
mod http;
mod xml;

pub use api::{NoteFormat, Osm};
pub use auth::Credentials;
pub use config::Config;
pub use error::{ApiError, ApiResult};

/// The domain model: elements, changesets, notes and their mutators.
pub use meridian_domain as domain;
