//! Map note model
//!
//! Notes are freeform annotations with their own open/closed lifecycle
//! and a comment thread. The server formats note dates as
//! `2019-06-15 08:26:04 UTC`, unlike the RFC 3339 timestamps used
//! everywhere else, hence the custom codec here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note's lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    /// The note is open and awaiting resolution.
    Open,
    /// The note has been resolved.
    Closed,
    /// The note was hidden by a moderator.
    Hidden,
}

/// The kind of event a note comment records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteAction {
    /// The note was created.
    Opened,
    /// A comment was appended.
    Commented,
    /// The note was closed.
    Closed,
    /// The note was reopened.
    Reopened,
    /// The note was hidden by a moderator.
    Hidden,
}

/// One entry in a note's comment thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteComment {
    /// When the event happened.
    #[serde(with = "osm_note_time")]
    pub date: DateTime<Utc>,
    /// The event kind.
    pub action: NoteAction,
    /// The comment text, empty for bare status changes.
    #[serde(default)]
    pub text: String,
    /// The comment rendered as HTML, when the server provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Id of the commenting user, absent for anonymous comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<i64>,
    /// Display name of the commenting user, absent for anonymous comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// A map note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// The server-assigned note id.
    pub id: i64,
    /// Latitude of the note's anchor point.
    pub lat: f64,
    /// Longitude of the note's anchor point.
    pub lon: f64,
    /// Current lifecycle status.
    pub status: NoteStatus,
    /// When the note was created.
    #[serde(with = "osm_note_time")]
    pub date_created: DateTime<Utc>,
    /// When the note was closed, absent while it is open.
    #[serde(
        default,
        with = "osm_note_time_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_closed: Option<DateTime<Utc>>,
    /// The comment thread, oldest first.
    #[serde(default)]
    pub comments: Vec<NoteComment>,
}

const NOTE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Parses a timestamp in the note endpoints' date format.
///
/// # Errors
///
/// Returns the underlying chrono error when the input does not match
/// `2019-06-15 08:26:04 UTC`.
pub fn parse_note_date(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    chrono::NaiveDateTime::parse_from_str(s, NOTE_TIME_FORMAT).map(|naive| naive.and_utc())
}

/// Formats a timestamp in the note endpoints' date format.
#[must_use]
pub fn format_note_date(date: &DateTime<Utc>) -> String {
    date.format(NOTE_TIME_FORMAT).to_string()
}

mod osm_note_time {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(super) fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_note_date(date))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_note_date(&s).map_err(de::Error::custom)
    }
}

mod osm_note_time_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(super) fn serialize<S>(
        date: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&super::format_note_date(date)),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        s.map(|s| super::parse_note_date(&s).map_err(de::Error::custom))
            .transpose()
    }
}
