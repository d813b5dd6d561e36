//! HTTP dispatch
//!
//! Every API operation funnels through [`Osm::request_text`]: build the
//! URL from the normalized endpoint, sign when credentials apply, send,
//! and either hand back the body or surface the status and body
//! unmodified. No retries, no queueing; concurrency is the caller's.

use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::Osm;
use crate::auth;
use crate::error::{ApiError, ApiResult};

/// Whether an operation signs its request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthMode {
    /// Read call, never signed.
    None,
    /// Signed when credentials are configured, anonymous otherwise.
    Optional,
    /// Refused up front without credentials.
    Required,
}

/// An XML or plain-text request body with its content type.
pub(crate) struct Body {
    pub(crate) content_type: &'static str,
    pub(crate) content: String,
}

impl Body {
    pub(crate) const fn xml(content: String) -> Self {
        Self {
            content_type: "text/xml; charset=utf-8",
            content,
        }
    }

    pub(crate) const fn text(content: String) -> Self {
        Self {
            content_type: "text/plain; charset=utf-8",
            content,
        }
    }
}

impl Osm {
    /// Joins a path onto the configured endpoint.
    pub(crate) fn api_url(&self, path: &str) -> ApiResult<Url> {
        let joined = format!("{}/{}", self.config().endpoint(), path);
        Url::parse(&joined).map_err(|e| ApiError::InvalidEndpoint(format!("{joined}: {e}")))
    }

    /// Joins a path onto the endpoint and attaches a query string.
    pub(crate) fn api_url_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<Url> {
        let mut url = self.api_url(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Executes one request and returns the response body.
    ///
    /// Non-2xx statuses become [`ApiError::UnexpectedHttpStatus`] with
    /// the body passed through verbatim.
    pub(crate) async fn request_text(
        &self,
        method: Method,
        url: Url,
        body: Option<Body>,
        auth: AuthMode,
        operation: &'static str,
    ) -> ApiResult<String> {
        let mut builder = self.http_client().request(method.clone(), url.clone());

        match (auth, self.config().credentials()) {
            (AuthMode::Required, None) => {
                return Err(ApiError::MissingCredentials(operation));
            }
            (AuthMode::Required | AuthMode::Optional, Some(credentials)) => {
                builder = builder.header(
                    "Authorization",
                    auth::authorization_header(credentials, method.as_str(), &url),
                );
            }
            _ => {}
        }

        if let Some(body) = body {
            builder = builder
                .header("Content-Type", body.content_type)
                .body(body.content);
        }

        tracing::debug!("{} {} ({})", method, url, operation);
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("{} {} -> {}", method, url, status);

        if !status.is_success() {
            return Err(ApiError::UnexpectedHttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }

    /// GETs a URL and parses the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        operation: &'static str,
    ) -> ApiResult<T> {
        let text = self
            .request_text(Method::GET, url, None, AuthMode::None, operation)
            .await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// GETs a URL with a signed request and parses the JSON body.
    pub(crate) async fn get_json_authenticated<T: DeserializeOwned>(
        &self,
        url: Url,
        operation: &'static str,
    ) -> ApiResult<T> {
        let text = self
            .request_text(Method::GET, url, None, AuthMode::Required, operation)
            .await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Parses the plain-text numeric responses of the element and
    /// changeset write endpoints.
    pub(crate) fn parse_numeric(text: &str) -> ApiResult<i64> {
        Ok(text.trim().parse()?)
    }
}
