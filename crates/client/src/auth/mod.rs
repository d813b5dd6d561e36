//! OAuth 1.0a authentication
//!
//! Write calls are signed with HMAC-SHA1 per RFC 5849. Obtaining the
//! user token and secret is outside this library; the caller supplies
//! the four credential strings and every signed request carries a
//! fresh nonce and timestamp.

mod signer;

pub(crate) use signer::authorization_header;

/// OAuth 1.0a credentials: the registered consumer pair plus the
/// authorized user token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The consumer (application) key.
    pub consumer_key: String,
    /// The consumer (application) secret.
    pub consumer_secret: String,
    /// The authorized user token.
    pub token: String,
    /// The authorized user token secret.
    pub token_secret: String,
}

impl Credentials {
    /// Creates a credential set.
    #[must_use]
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
        }
    }
}
