//! Third-party identity providers and their user records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An external identity provider the backend can authenticate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Wecom,
    Feishu,
    Dingtalk,
    Github,
    Google,
    Gitlab,
    Gitee,
}

impl Provider {
    /// Every provider the backend knows about.
    pub const ALL: [Provider; 7] = [
        Provider::Wecom,
        Provider::Feishu,
        Provider::Dingtalk,
        Provider::Github,
        Provider::Google,
        Provider::Gitlab,
        Provider::Gitee,
    ];

    /// Wire name, as it appears in URL path segments and `third_party_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Wecom => "wecom",
            Provider::Feishu => "feishu",
            Provider::Dingtalk => "dingtalk",
            Provider::Github => "github",
            Provider::Google => "google",
            Provider::Gitlab => "gitlab",
            Provider::Gitee => "gitee",
        }
    }

    /// Whether this is a directory provider (WeCom/Feishu/DingTalk), i.e.
    /// one that can be the target of an LDAP sync job.
    pub fn is_directory(&self) -> bool {
        matches!(self, Provider::Wecom | Provider::Feishu | Provider::Dingtalk)
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A third-party identity record mirrored by the backend.
///
/// The backend stores the provider-native id under a per-provider column
/// (`wecom_userid`, `github_id`, ...); serde aliases normalize all of them
/// into `external_id`. Directory providers carry mobile/department/position,
/// OAuth providers carry `avatar_url` — absent fields stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThirdPartyUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(
        alias = "wecom_userid",
        alias = "feishu_userid",
        alias = "dingtalk_userid",
        alias = "github_id",
        alias = "google_id",
        alias = "gitlab_id",
        alias = "gitee_id"
    )]
    pub external_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Whether this record is linked to a local account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked: Option<bool>,
    /// Id of the linked local account, when linked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Per-provider authorization URLs for the login page.
///
/// A provider left unconfigured on the backend comes back as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthUrls {
    pub wecom_url: Option<String>,
    pub feishu_url: Option<String>,
    pub dingtalk_url: Option<String>,
    pub github_url: Option<String>,
    pub google_url: Option<String>,
    pub gitlab_url: Option<String>,
    #[serde(default)]
    pub gitee_url: Option<String>,
}

impl OAuthUrls {
    /// Authorization URL for one provider, if configured.
    pub fn url_for(&self, provider: Provider) -> Option<&str> {
        let url = match provider {
            Provider::Wecom => &self.wecom_url,
            Provider::Feishu => &self.feishu_url,
            Provider::Dingtalk => &self.dingtalk_url,
            Provider::Github => &self.github_url,
            Provider::Google => &self.google_url,
            Provider::Gitlab => &self.gitlab_url,
            Provider::Gitee => &self.gitee_url,
        };
        url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_wire_names() {
        assert_eq!(Provider::Wecom.as_str(), "wecom");
        assert_eq!(Provider::Github.to_string(), "github");
        assert_eq!(
            serde_json::to_string(&Provider::Dingtalk).unwrap(),
            "\"dingtalk\""
        );
    }

    #[test]
    fn test_directory_providers() {
        let directory: Vec<_> = Provider::ALL
            .iter()
            .filter(|p| p.is_directory())
            .collect();
        assert_eq!(
            directory,
            [&Provider::Wecom, &Provider::Feishu, &Provider::Dingtalk]
        );
    }

    #[test]
    fn test_external_id_alias_wecom() {
        let body = r#"{
            "id": "1",
            "name": "Bob",
            "username": "bob",
            "email": "bob@example.com",
            "mobile": "1380000",
            "department": "Engineering",
            "position": "Developer",
            "wecom_userid": "WC-42",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "linked": true,
            "user_id": "u-1"
        }"#;
        let user: ThirdPartyUser = serde_json::from_str(body).unwrap();
        assert_eq!(user.external_id, "WC-42");
        assert_eq!(user.linked, Some(true));
        assert_eq!(user.department.as_deref(), Some("Engineering"));
    }

    #[test]
    fn test_external_id_alias_github() {
        let body = r#"{
            "id": "2",
            "name": "Carol",
            "username": "carol",
            "email": "carol@example.com",
            "avatar_url": "https://example.com/a.png",
            "github_id": "9912"
        }"#;
        let user: ThirdPartyUser = serde_json::from_str(body).unwrap();
        assert_eq!(user.external_id, "9912");
        assert!(user.mobile.is_none());
        assert!(user.linked.is_none());
    }

    #[test]
    fn test_oauth_urls_nulls() {
        let body = r#"{
            "wecom_url": "https://open.weixin.qq.com/x",
            "feishu_url": null,
            "dingtalk_url": null,
            "github_url": "https://github.com/login/oauth/authorize?x",
            "google_url": null,
            "gitlab_url": null
        }"#;
        let urls: OAuthUrls = serde_json::from_str(body).unwrap();
        assert!(urls.url_for(Provider::Wecom).is_some());
        assert!(urls.url_for(Provider::Feishu).is_none());
        // gitee_url absent entirely on older backends
        assert!(urls.url_for(Provider::Gitee).is_none());
    }
}
