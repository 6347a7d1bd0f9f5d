//! LDAP and directory-sync configuration models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Target directory of a sync job.
///
/// The `Other` variant keeps unrecognized wire values verbatim: the client
/// never validates what the backend will or won't accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncType {
    Wecom,
    Feishu,
    Dingtalk,
    #[serde(untagged)]
    Other(String),
}

impl From<&str> for SyncType {
    fn from(s: &str) -> Self {
        match s {
            "wecom" => SyncType::Wecom,
            "feishu" => SyncType::Feishu,
            "dingtalk" => SyncType::Dingtalk,
            other => SyncType::Other(other.to_string()),
        }
    }
}

/// How often a sync job runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncFrequency {
    Realtime,
    Hourly,
    Daily,
    Weekly,
    Manual,
    #[serde(untagged)]
    Other(String),
}

impl From<&str> for SyncFrequency {
    fn from(s: &str) -> Self {
        match s {
            "realtime" => SyncFrequency::Realtime,
            "hourly" => SyncFrequency::Hourly,
            "daily" => SyncFrequency::Daily,
            "weekly" => SyncFrequency::Weekly,
            "manual" => SyncFrequency::Manual,
            other => SyncFrequency::Other(other.to_string()),
        }
    }
}

/// LDAP server configuration, as read from the backend.
///
/// `bind_password` is write-only on the backend and never appears in read
/// responses, so the read model has no field for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LdapConfig {
    pub id: String,
    pub server_uri: String,
    pub bind_dn: String,
    pub base_dn: String,
    pub use_ssl: bool,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial LDAP config body for create and PATCH requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LdapConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_dn: Option<String>,
    /// Write-only credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// A sync job definition: one LDAP source mapped to one target directory,
/// with a frequency policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub id: String,
    pub name: String,
    pub sync_type: SyncType,
    /// Id of the referenced [`LdapConfig`].
    pub ldap_config: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldap_config_details: Option<LdapConfig>,
    pub sync_users: bool,
    pub sync_departments: bool,
    pub user_ou: String,
    pub department_ou: String,
    pub sync_frequency: SyncFrequency,
    #[serde(default)]
    pub last_sync_time: Option<DateTime<Utc>>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Recent runs, embedded by the detail serializer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<SyncLog>>,
}

/// Output of the form adapter: the two constrained fields typed, everything
/// else passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfigForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_type: Option<SyncType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_frequency: Option<SyncFrequency>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// An immutable record of one executed sync job run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncLog {
    pub id: String,
    /// Id of the owning [`SyncConfig`].
    pub config: String,
    pub sync_time: DateTime<Utc>,
    pub success: bool,
    /// Summary message; dropped from newer backend schemas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub users_synced: i64,
    pub departments_synced: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<SyncLogDetail>>,
}

/// Kind of directory object a log detail refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    User,
    Department,
}

/// What a sync run did to one directory object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncAction {
    Create,
    Update,
    Delete,
    Move,
}

/// One per-object entry under a sync log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncLogDetail {
    pub id: String,
    pub object_type: ObjectType,
    /// Human-readable label for `object_type`, localized by the backend.
    #[serde(default)]
    pub object_type_display: String,
    pub action: SyncAction,
    #[serde(default)]
    pub action_display: String,
    pub object_id: String,
    pub object_name: String,
    #[serde(default)]
    pub old_data: Option<Value>,
    #[serde(default)]
    pub new_data: Option<Value>,
    #[serde(default)]
    pub details: String,
}

/// Body of a successful `test_connection` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConnectionResult {
    pub message: String,
}

/// Body of a successful `sync_now` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncNowResult {
    pub message: String,
    pub success: bool,
    pub users_synced: i64,
    pub departments_synced: i64,
}
