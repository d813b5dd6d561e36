//! Client error types

use thiserror::Error;

/// Errors surfaced by API operations.
///
/// Every failure propagates unchanged to the caller; the client never
/// retries, refreshes or falls back on its own.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// An authenticated operation was attempted without credentials.
    #[error("{0} requires OAuth credentials")]
    MissingCredentials(&'static str),

    /// The HTTP transport failed (connect, DNS, TLS, read).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status. The body is
    /// passed through verbatim.
    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedHttpStatus {
        /// The HTTP status code.
        status: u16,
        /// The response body, unmodified.
        body: String,
    },

    /// A tag update was refused locally because the changeset is no
    /// longer open.
    #[error("changeset {0} is already closed")]
    ChangesetAlreadyClosed(i64),

    /// The response was syntactically valid but did not contain the
    /// requested entity.
    #[error("response did not contain the requested {0}")]
    MissingPayload(&'static str),

    /// A JSON response failed to parse.
    #[error("malformed JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// A plain-text id or version response failed to parse.
    #[error("malformed numeric response: {0}")]
    ParseId(#[from] std::num::ParseIntError),

    /// A note timestamp did not match the server's date format.
    #[error("malformed note timestamp: {0}")]
    NoteTimestamp(#[from] chrono::ParseError),

    /// Query-string serialization failed.
    #[error("query serialization failed: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// Writing an XML request body failed.
    #[error("XML body construction failed: {0}")]
    Xml(String),

    /// A domain-level validation failed.
    #[error(transparent)]
    Domain(#[from] meridian_domain::DomainError),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
