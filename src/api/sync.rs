//! Directory-synchronization endpoints under `/sync/`.
//!
//! All synchronization work (LDAP binding, provider API calls, scheduling)
//! happens in the backend; these wrappers only configure it, trigger it, and
//! read its logs.

use chrono::NaiveDate;
use serde::Serialize;

use super::Pagination;
use crate::errors::ApiError;
use crate::http::Http;
use crate::models::{
    LdapConfig, LdapConfigPatch, ObjectType, Paginated, SyncAction, SyncConfig, SyncConfigForm,
    SyncFrequency, SyncLog, SyncLogDetail, SyncNowResult, SyncType, TestConnectionResult,
};

/// LDAP server configuration endpoints.
#[derive(Clone)]
pub struct LdapConfigApi {
    http: Http,
}

impl LdapConfigApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    /// GET /sync/ldap-configs/ - list configurations.
    pub async fn list(&self) -> Result<Vec<LdapConfig>, ApiError> {
        self.http.get("/sync/ldap-configs/").await
    }

    /// GET /sync/ldap-configs/{id}/ - one configuration.
    pub async fn get(&self, id: &str) -> Result<LdapConfig, ApiError> {
        self.http.get(&format!("/sync/ldap-configs/{}/", id)).await
    }

    /// POST /sync/ldap-configs/ - create a configuration.
    pub async fn create(&self, config: &LdapConfigPatch) -> Result<LdapConfig, ApiError> {
        self.http.post("/sync/ldap-configs/", config).await
    }

    /// PATCH /sync/ldap-configs/{id}/ - partially update a configuration.
    pub async fn update(&self, id: &str, config: &LdapConfigPatch) -> Result<LdapConfig, ApiError> {
        self.http
            .patch(&format!("/sync/ldap-configs/{}/", id), config)
            .await
    }

    /// DELETE /sync/ldap-configs/{id}/ - remove a configuration.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.http
            .delete(&format!("/sync/ldap-configs/{}/", id))
            .await
    }

    /// POST /sync/ldap-configs/{id}/test_connection/ - bind against the
    /// configured server. No body; connectivity failure comes back as a 400
    /// and therefore as `ApiError::Server`.
    pub async fn test_connection(&self, id: &str) -> Result<TestConnectionResult, ApiError> {
        self.http
            .post_action(&format!("/sync/ldap-configs/{}/test_connection/", id))
            .await
    }
}

/// Sync job configuration endpoints.
#[derive(Clone)]
pub struct SyncConfigApi {
    http: Http,
}

impl SyncConfigApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    /// GET /sync/sync-configs/ - list job configurations.
    pub async fn list(&self, page: &Pagination) -> Result<Vec<SyncConfig>, ApiError> {
        self.http.get_query("/sync/sync-configs/", page).await
    }

    /// GET /sync/sync-configs/{id}/ - one job configuration.
    pub async fn get(&self, id: &str) -> Result<SyncConfig, ApiError> {
        self.http.get(&format!("/sync/sync-configs/{}/", id)).await
    }

    /// POST /sync/sync-configs/ - create a job configuration.
    pub async fn create(&self, form: &SyncConfigForm) -> Result<SyncConfig, ApiError> {
        self.http.post("/sync/sync-configs/", form).await
    }

    /// PATCH /sync/sync-configs/{id}/ - partially update a job
    /// configuration.
    pub async fn update(&self, id: &str, form: &SyncConfigForm) -> Result<SyncConfig, ApiError> {
        self.http
            .patch(&format!("/sync/sync-configs/{}/", id), form)
            .await
    }

    /// DELETE /sync/sync-configs/{id}/ - remove a job configuration.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.http
            .delete(&format!("/sync/sync-configs/{}/", id))
            .await
    }

    /// POST /sync/sync-configs/{id}/sync_now/ - trigger an immediate,
    /// out-of-band run of the job. No body.
    pub async fn sync_now(&self, id: &str) -> Result<SyncNowResult, ApiError> {
        self.http
            .post_action(&format!("/sync/sync-configs/{}/sync_now/", id))
            .await
    }
}

/// Filter/pagination parameters for the sync log listing.
///
/// An explicit enumeration of what the backend actually filters on, in
/// place of an untyped parameter bag.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncLogQuery {
    /// Restrict to runs of one sync config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Restrict embedded details to one object type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<ObjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<SyncAction>,
    /// Free-text search over the owning config's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Filter/pagination parameters for the log `details` sub-resource.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LogDetailQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<ObjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<SyncAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Read-only sync log endpoints.
#[derive(Clone)]
pub struct SyncLogApi {
    http: Http,
}

impl SyncLogApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    /// GET /sync/sync-logs/ - paginated run listing.
    pub async fn list(&self, query: &SyncLogQuery) -> Result<Paginated<SyncLog>, ApiError> {
        self.http.get_query("/sync/sync-logs/", query).await
    }

    /// GET /sync/sync-logs/{id}/ - one run.
    pub async fn get(&self, id: &str) -> Result<SyncLog, ApiError> {
        self.http.get(&format!("/sync/sync-logs/{}/", id)).await
    }

    /// GET /sync/sync-logs/{id}/details/ - per-object entries of one run.
    pub async fn details(
        &self,
        id: &str,
        query: &LogDetailQuery,
    ) -> Result<Paginated<SyncLogDetail>, ApiError> {
        self.http
            .get_query(&format!("/sync/sync-logs/{}/details/", id), query)
            .await
    }
}

/// Read-only aggregate analytics endpoints.
#[derive(Clone)]
pub struct AnalyticsApi {
    http: Http,
}

impl AnalyticsApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    /// GET /sync/user-trend/?range= - per-platform growth over a window.
    pub async fn user_trend(
        &self,
        range: crate::models::TrendRange,
    ) -> Result<crate::models::UserTrend, ApiError> {
        self.http
            .get_query("/sync/user-trend/", &[("range", range.as_str())])
            .await
    }

    /// GET /sync/user-stats/ - current per-platform totals.
    pub async fn user_stats(&self) -> Result<crate::models::UserStats, ApiError> {
        self.http.get("/sync/user-stats/").await
    }
}

/// Narrow an untyped form map into a sync config body.
///
/// The only adapter in the API layer. Pure and total: `sync_type` and
/// `sync_frequency` are lifted into their constrained types when they are
/// strings (unrecognized strings survive verbatim through the `Other`
/// variants), every other key passes through untouched, and nothing is
/// validated — the backend owns validation.
pub fn convert_form_to_sync_config(mut form: serde_json::Map<String, serde_json::Value>) -> SyncConfigForm {
    let sync_type = match form.get("sync_type").and_then(|v| v.as_str()) {
        Some(s) => {
            let value = SyncType::from(s);
            form.remove("sync_type");
            Some(value)
        }
        None => None,
    };
    let sync_frequency = match form.get("sync_frequency").and_then(|v| v.as_str()) {
        Some(s) => {
            let value = SyncFrequency::from(s);
            form.remove("sync_frequency");
            Some(value)
        }
        None => None,
    };
    SyncConfigForm {
        sync_type,
        sync_frequency,
        rest: form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn form(value: Value) -> serde_json::Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_convert_preserves_constrained_fields_verbatim() {
        let converted = convert_form_to_sync_config(form(json!({
            "sync_type": "wecom",
            "sync_frequency": "daily",
            "name": "x"
        })));

        assert_eq!(converted.sync_type, Some(SyncType::Wecom));
        assert_eq!(converted.sync_frequency, Some(SyncFrequency::Daily));

        let body = serde_json::to_value(&converted).unwrap();
        assert_eq!(
            body,
            json!({ "sync_type": "wecom", "sync_frequency": "daily", "name": "x" })
        );
    }

    #[test]
    fn test_convert_is_identity_on_unrelated_keys() {
        let converted = convert_form_to_sync_config(form(json!({
            "name": "weekly pull",
            "ldap_config": "c-1",
            "sync_users": true,
            "user_ou": "ou=users",
            "enabled": false
        })));

        assert!(converted.sync_type.is_none());
        assert!(converted.sync_frequency.is_none());

        let body = serde_json::to_value(&converted).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "weekly pull",
                "ldap_config": "c-1",
                "sync_users": true,
                "user_ou": "ou=users",
                "enabled": false
            })
        );
    }

    #[test]
    fn test_convert_passes_invalid_strings_through() {
        // Validation is the backend's responsibility: an unknown sync_type
        // must reach the wire unchanged.
        let converted = convert_form_to_sync_config(form(json!({
            "sync_type": "slack",
            "sync_frequency": "fortnightly"
        })));

        assert_eq!(converted.sync_type, Some(SyncType::Other("slack".to_string())));
        let body = serde_json::to_value(&converted).unwrap();
        assert_eq!(
            body,
            json!({ "sync_type": "slack", "sync_frequency": "fortnightly" })
        );
    }

    #[test]
    fn test_convert_leaves_non_string_values_in_place() {
        // A numeric sync_type is nonsense, but the adapter never validates;
        // it stays in the pass-through map exactly as given.
        let converted = convert_form_to_sync_config(form(json!({ "sync_type": 3 })));

        assert!(converted.sync_type.is_none());
        let body = serde_json::to_value(&converted).unwrap();
        assert_eq!(body, json!({ "sync_type": 3 }));
    }
}
