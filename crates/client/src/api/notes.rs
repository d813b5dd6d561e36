//! Note operations

use reqwest::Method;
use serde::{Deserialize, Serialize};
use url::Url;

use meridian_domain::{Bbox, Note, NoteComment, NoteStatus, parse_note_date};

use crate::error::ApiResult;
use crate::http::AuthMode;

use super::Osm;

/// Response format selector for the raw note reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteFormat {
    /// OSM native XML, the server default.
    #[default]
    Xml,
    /// GeoJSON.
    Json,
    /// GPX waypoints.
    Gpx,
    /// GeoRSS feed.
    Rss,
}

impl NoteFormat {
    /// Returns the path extension selecting this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xml => "",
            Self::Json => ".json",
            Self::Gpx => ".gpx",
            Self::Rss => ".rss",
        }
    }
}

/// Query parameters of the note list and search endpoints.
///
/// The server accepts `limit` between 1 and 10000 and `closed` as a
/// number of days; out-of-range values are the server's to reject, no
/// local validation happens.
#[derive(Debug, Serialize)]
struct NotesQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    bbox: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    closed: Option<i64>,
}

#[derive(Debug, Serialize)]
struct CreateNoteQuery<'a> {
    lat: f64,
    lon: f64,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct NoteActionQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

/// The GeoJSON feature collection the note list endpoints return.
#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<NoteFeature>,
}

/// One note as the server returns it: a GeoJSON feature wrapping the
/// note fields.
#[derive(Debug, Deserialize)]
struct NoteFeature {
    geometry: PointGeometry,
    properties: NoteProperties,
}

#[derive(Debug, Deserialize)]
struct PointGeometry {
    /// `[lon, lat]`, GeoJSON axis order.
    coordinates: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct NoteProperties {
    id: i64,
    status: NoteStatus,
    date_created: String,
    #[serde(default)]
    date_closed: Option<String>,
    #[serde(default)]
    comments: Vec<NoteComment>,
}

impl NoteFeature {
    fn into_note(self) -> ApiResult<Note> {
        let [lon, lat] = self.geometry.coordinates;
        Ok(Note {
            id: self.properties.id,
            lat,
            lon,
            status: self.properties.status,
            date_created: parse_note_date(&self.properties.date_created)?,
            date_closed: self
                .properties
                .date_closed
                .as_deref()
                .map(parse_note_date)
                .transpose()?,
            comments: self.properties.comments,
        })
    }
}

fn query_string<T: Serialize>(query: &T) -> ApiResult<String> {
    Ok(serde_urlencoded::to_string(query)?)
}

impl Osm {
    fn notes_url<T: Serialize>(&self, path: &str, query: &T) -> ApiResult<Url> {
        let mut url = self.api_url(path)?;
        let qs = query_string(query)?;
        if !qs.is_empty() {
            url.set_query(Some(&qs));
        }
        Ok(url)
    }

    async fn note_from_response(&self, url: Url, auth: AuthMode, op: &'static str) -> ApiResult<Note> {
        let text = self.request_text(Method::POST, url, None, auth, op).await?;
        let feature: NoteFeature = serde_json::from_str(&text)?;
        feature.into_note()
    }

    /// Fetches the notes inside a bounding box.
    ///
    /// `limit` caps the result count (server range 1..=10000);
    /// `closed` keeps notes closed within that many days, 0 for open
    /// notes only, negative for all.
    pub async fn fetch_notes(
        &self,
        bbox: Bbox,
        limit: Option<u32>,
        closed: Option<i64>,
    ) -> ApiResult<Vec<Note>> {
        let url = self.notes_url(
            "notes.json",
            &NotesQuery {
                bbox: Some(bbox.to_string()),
                q: None,
                limit,
                closed,
            },
        )?;
        let collection: FeatureCollection = self.get_json(url, "fetch_notes").await?;
        collection
            .features
            .into_iter()
            .map(NoteFeature::into_note)
            .collect()
    }

    /// Fetches the notes inside a bounding box in the requested raw
    /// format, returning the body unparsed.
    pub async fn fetch_notes_raw(
        &self,
        bbox: Bbox,
        limit: Option<u32>,
        closed: Option<i64>,
        format: NoteFormat,
    ) -> ApiResult<String> {
        let url = self.notes_url(
            &format!("notes{}", format.extension()),
            &NotesQuery {
                bbox: Some(bbox.to_string()),
                q: None,
                limit,
                closed,
            },
        )?;
        self.request_text(Method::GET, url, None, AuthMode::None, "fetch_notes_raw")
            .await
    }

    /// Searches notes by free text.
    pub async fn fetch_notes_search(
        &self,
        query: &str,
        limit: Option<u32>,
        closed: Option<i64>,
    ) -> ApiResult<Vec<Note>> {
        let url = self.notes_url(
            "notes/search.json",
            &NotesQuery {
                bbox: None,
                q: Some(query),
                limit,
                closed,
            },
        )?;
        let collection: FeatureCollection = self.get_json(url, "fetch_notes_search").await?;
        collection
            .features
            .into_iter()
            .map(NoteFeature::into_note)
            .collect()
    }

    /// Fetches a single note by id.
    pub async fn fetch_note(&self, id: i64) -> ApiResult<Note> {
        let url = self.api_url(&format!("notes/{id}.json"))?;
        let text = self
            .request_text(Method::GET, url, None, AuthMode::None, "fetch_note")
            .await?;
        let feature: NoteFeature = serde_json::from_str(&text)?;
        feature.into_note()
    }

    /// Fetches a single note in the requested raw format.
    pub async fn fetch_note_raw(&self, id: i64, format: NoteFormat) -> ApiResult<String> {
        let url = self.api_url(&format!("notes/{id}{}", format.extension()))?;
        self.request_text(Method::GET, url, None, AuthMode::None, "fetch_note_raw")
            .await
    }

    /// Creates a note at the given position.
    ///
    /// Works anonymously; when credentials are configured the request
    /// is signed and the note is attributed to the user.
    pub async fn create_note(&self, lat: f64, lon: f64, text: &str) -> ApiResult<Note> {
        let url = self.notes_url("notes.json", &CreateNoteQuery { lat, lon, text })?;
        self.note_from_response(url, AuthMode::Optional, "create_note")
            .await
    }

    /// Appends a comment to an open note.
    pub async fn comment_note(&self, id: i64, text: &str) -> ApiResult<Note> {
        let url = self.notes_url(
            &format!("notes/{id}/comment.json"),
            &NoteActionQuery { text: Some(text) },
        )?;
        self.note_from_response(url, AuthMode::Required, "comment_note")
            .await
    }

    /// Closes an open note, optionally with a final comment.
    pub async fn close_note(&self, id: i64, text: Option<&str>) -> ApiResult<Note> {
        let url = self.notes_url(&format!("notes/{id}/close.json"), &NoteActionQuery { text })?;
        self.note_from_response(url, AuthMode::Required, "close_note")
            .await
    }

    /// Reopens a closed note, optionally with a comment.
    pub async fn reopen_note(&self, id: i64, text: Option<&str>) -> ApiResult<Note> {
        let url = self.notes_url(&format!("notes/{id}/reopen.json"), &NoteActionQuery { text })?;
        self.note_from_response(url, AuthMode::Required, "reopen_note")
            .await
    }
}
