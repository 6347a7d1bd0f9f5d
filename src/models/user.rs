//! Local user account models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A local IdHub user account.
///
/// `role` drives route-guard authorization; the backend is the authority on
/// which values exist (currently `user`, `admin`, `superuser`), so it travels
/// as a plain string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Full display name assembled by the backend.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub role: String,
    pub is_active: bool,
    #[serde(default)]
    pub last_active_at: Option<DateTime<Utc>>,
    pub date_joined: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Note ids owned by the user, present only in expanded listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_group: Option<Vec<String>>,
}

/// Partial user body for create and PATCH requests.
///
/// Every field is optional; absent fields are omitted from the wire so the
/// backend leaves them untouched. `password` is write-only and never comes
/// back in a read response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Shortened user reference embedded by other resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
}

/// Token + user bundle returned by every login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// JWT access token; persisted as the session token.
    pub access: String,
    /// JWT refresh token.
    pub refresh: String,
    pub user: User,
}
