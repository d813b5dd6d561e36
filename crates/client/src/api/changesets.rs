//! Changeset operations

use reqwest::Method;
use serde::Deserialize;

use meridian_domain::{Changeset, Tags};

use crate::error::{ApiError, ApiResult};
use crate::http::{AuthMode, Body};
use crate::xml;

use super::Osm;

/// The `{"changeset": {...}}` envelope of the single-changeset read.
#[derive(Debug, Deserialize)]
struct ChangesetEnvelope {
    changeset: Changeset,
}

impl Osm {
    /// Opens a new changeset and returns its id.
    ///
    /// `created_by` and `comment` become the conventional changeset
    /// tags of the same names.
    pub async fn create_changeset(&self, created_by: &str, comment: &str) -> ApiResult<i64> {
        let mut tags = Tags::new();
        tags.insert("created_by".to_string(), created_by.to_string());
        tags.insert("comment".to_string(), comment.to_string());

        let url = self.api_url("changeset/create")?;
        let payload = xml::changeset_payload(&tags)?;
        let text = self
            .request_text(
                Method::PUT,
                url,
                Some(Body::xml(payload)),
                AuthMode::Required,
                "create_changeset",
            )
            .await?;
        Self::parse_numeric(&text)
    }

    /// Fetches a changeset with its current state and tags.
    pub async fn fetch_changeset(&self, id: i64) -> ApiResult<Changeset> {
        let url = self.api_url(&format!("changeset/{id}.json"))?;
        let envelope: ChangesetEnvelope = self.get_json(url, "fetch_changeset").await?;
        Ok(envelope.changeset)
    }

    /// Returns whether the changeset is still open for edits.
    ///
    /// Changesets close on explicit request or server-side after
    /// inactivity, so a `true` answer is already stale by the time it
    /// arrives; the server remains the source of truth.
    pub async fn is_changeset_still_open(&self, id: i64) -> ApiResult<bool> {
        Ok(self.fetch_changeset(id).await?.open)
    }

    /// Replaces the tags of an open changeset.
    ///
    /// The open state is re-checked first and a closed changeset fails
    /// with [`ApiError::ChangesetAlreadyClosed`] without issuing the
    /// write. The check is optimistic, not transactional: a concurrent
    /// close between check and update surfaces as the server's 409.
    pub async fn update_changeset_tags(&self, id: i64, tags: Tags) -> ApiResult<()> {
        if !self.is_changeset_still_open(id).await? {
            return Err(ApiError::ChangesetAlreadyClosed(id));
        }

        let url = self.api_url(&format!("changeset/{id}"))?;
        let payload = xml::changeset_payload(&tags)?;
        self.request_text(
            Method::PUT,
            url,
            Some(Body::xml(payload)),
            AuthMode::Required,
            "update_changeset_tags",
        )
        .await?;
        Ok(())
    }

    /// Closes a changeset explicitly.
    pub async fn close_changeset(&self, id: i64) -> ApiResult<()> {
        let url = self.api_url(&format!("changeset/{id}/close"))?;
        self.request_text(
            Method::PUT,
            url,
            None,
            AuthMode::Required,
            "close_changeset",
        )
        .await?;
        Ok(())
    }
}
