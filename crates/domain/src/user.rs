//! Authenticated user details and preferences

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The preference set of the authenticated user. Keys are unique,
/// insertion order is irrelevant.
pub type Preferences = BTreeMap<String, String>;

/// Details of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    /// The user's id.
    pub id: i64,
    /// The user's display name.
    pub display_name: String,
    /// When the account was created.
    pub account_created: DateTime<Utc>,
}
