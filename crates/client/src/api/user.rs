//! Authenticated user operations: details and preferences

use reqwest::Method;
use serde::Deserialize;

use meridian_domain::{Preferences, UserDetails};

use crate::error::ApiResult;
use crate::http::{AuthMode, Body};
use crate::xml;

use super::Osm;

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: UserDetails,
}

#[derive(Debug, Deserialize)]
struct PreferencesEnvelope {
    #[serde(default)]
    preferences: Preferences,
}

impl Osm {
    /// Fetches the details of the authenticated user.
    pub async fn fetch_user_details(&self) -> ApiResult<UserDetails> {
        let url = self.api_url("user/details.json")?;
        let envelope: UserEnvelope = self
            .get_json_authenticated(url, "fetch_user_details")
            .await?;
        Ok(envelope.user)
    }

    /// Fetches the full preference set of the authenticated user.
    pub async fn preferences(&self) -> ApiResult<Preferences> {
        let url = self.api_url("user/preferences.json")?;
        let envelope: PreferencesEnvelope =
            self.get_json_authenticated(url, "preferences").await?;
        Ok(envelope.preferences)
    }

    /// Replaces the full preference set of the authenticated user.
    pub async fn set_preferences(&self, preferences: &Preferences) -> ApiResult<()> {
        let url = self.api_url("user/preferences")?;
        let payload = xml::preferences_payload(preferences)?;
        self.request_text(
            Method::PUT,
            url,
            Some(Body::xml(payload)),
            AuthMode::Required,
            "set_preferences",
        )
        .await?;
        Ok(())
    }

    /// Fetches a single preference value by key.
    pub async fn preference(&self, key: &str) -> ApiResult<String> {
        let url = self.api_url(&format!("user/preferences/{key}"))?;
        self.request_text(Method::GET, url, None, AuthMode::Required, "preference")
            .await
    }

    /// Sets a single preference to the given value.
    pub async fn set_preference(&self, key: &str, value: &str) -> ApiResult<()> {
        let url = self.api_url(&format!("user/preferences/{key}"))?;
        self.request_text(
            Method::PUT,
            url,
            Some(Body::text(value.to_string())),
            AuthMode::Required,
            "set_preference",
        )
        .await?;
        Ok(())
    }

    /// Deletes a single preference.
    pub async fn delete_preference(&self, key: &str) -> ApiResult<()> {
        let url = self.api_url(&format!("user/preferences/{key}"))?;
        self.request_text(
            Method::DELETE,
            url,
            None,
            AuthMode::Required,
            "delete_preference",
        )
        .await?;
        Ok(())
    }
}
