//! The API facade
//!
//! [`Osm`] exposes every operation as an async method over one
//! configured endpoint/credential pair. Operations are independent
//! request-response calls with no ordering guarantee between them;
//! the facade holds no mutable state.

mod changesets;
mod elements;
mod notes;
mod user;

pub use notes::NoteFormat;

use crate::config::Config;
use crate::error::ApiResult;

/// The OSM API facade.
///
/// Cheap to clone is not a goal; create one per endpoint and share it
/// by reference. The underlying HTTP client reuses connections across
/// calls.
#[derive(Debug)]
pub struct Osm {
    http: reqwest::Client,
    config: Config,
}

impl Osm {
    /// Creates a facade over the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError::Http`] when the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: Config) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent().to_string())
            .build()?;
        Ok(Self { http, config })
    }

    /// Returns the configuration this facade was built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) const fn http_client(&self) -> &reqwest::Client {
        &self.http
    }
}
