//! Client configuration
//!
//! An explicit configuration struct passed to the facade constructor;
//! there is no process-wide default state.

use url::Url;

use crate::auth::Credentials;
use crate::error::{ApiError, ApiResult};

/// The public OSM API endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://www.openstreetmap.org/api/0.6";

const DEFAULT_USER_AGENT: &str = concat!("meridian/", env!("CARGO_PKG_VERSION"));

/// Configuration for an [`crate::Osm`] facade: the API endpoint,
/// optional OAuth credentials and the User-Agent header.
#[derive(Debug, Clone)]
pub struct Config {
    endpoint: String,
    credentials: Option<Credentials>,
    user_agent: String,
}

impl Config {
    /// Creates a configuration for the given endpoint base URL.
    ///
    /// The endpoint is normalized by stripping trailing slashes, so
    /// `https://host/api/0.6/` and `https://host/api/0.6` configure the
    /// same client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidEndpoint`] when the endpoint does not
    /// parse as an absolute http(s) URL.
    pub fn new(endpoint: &str) -> ApiResult<Self> {
        let trimmed = endpoint.trim_end_matches('/');
        let parsed =
            Url::parse(trimmed).map_err(|e| ApiError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidEndpoint(format!(
                "{endpoint}: unsupported scheme {}",
                parsed.scheme()
            )));
        }
        Ok(Self {
            endpoint: trimmed.to_string(),
            credentials: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Attaches OAuth 1.0a credentials for authenticated operations.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Overrides the User-Agent header sent with every request.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the normalized endpoint, without a trailing slash.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the configured credentials, if any.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the configured User-Agent.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            credentials: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
