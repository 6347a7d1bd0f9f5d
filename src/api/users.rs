//! Users and authentication endpoints under `/auth/`.

use serde_json::json;

use crate::errors::ApiError;
use crate::http::Http;
use crate::models::{
    ApiMessage, LoginResponse, OAuthUrls, Provider, ThirdPartyUser, User, UserPatch,
};

/// Typed wrapper over the `/auth/` resource group.
#[derive(Clone)]
pub struct UserApi {
    http: Http,
}

impl UserApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    /// POST /auth/login/ - username/password login.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.http
            .post(
                "/auth/login/",
                &json!({ "username": username, "password": password }),
            )
            .await
    }

    /// GET /auth/me/ - the authenticated user.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.http.get("/auth/me/").await
    }

    /// POST /auth/{provider}/login/ - exchange an OAuth authorization code
    /// for a token + user bundle.
    ///
    /// Every provider takes the code under `code` except DingTalk, whose
    /// endpoint reads `authCode` (the provider SDK's parameter name leaks
    /// through the backend contract).
    pub async fn oauth_login(
        &self,
        provider: Provider,
        code: &str,
    ) -> Result<LoginResponse, ApiError> {
        let path = format!("/auth/{}/login/", provider);
        let body = match provider {
            Provider::Dingtalk => json!({ "authCode": code }),
            _ => json!({ "code": code }),
        };
        self.http.post(&path, &body).await
    }

    /// GET /auth/login/qrcode/ - per-provider authorization URLs, `null`
    /// where a provider is unconfigured.
    pub async fn login_urls(&self) -> Result<OAuthUrls, ApiError> {
        self.http.get("/auth/login/qrcode/").await
    }

    /// GET /auth/users/ - list local users.
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.http.get("/auth/users/").await
    }

    /// POST /auth/users/ - create a local user.
    pub async fn create(&self, user: &UserPatch) -> Result<User, ApiError> {
        self.http.post("/auth/users/", user).await
    }

    /// PATCH /auth/users/{id}/ - partially update a local user.
    pub async fn update(&self, id: &str, user: &UserPatch) -> Result<User, ApiError> {
        self.http.patch(&format!("/auth/users/{}/", id), user).await
    }

    /// DELETE /auth/users/{id}/ - remove a local user.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("/auth/users/{}/", id)).await
    }

    /// GET /auth/{provider}-users/ - list mirrored identities for one
    /// provider.
    pub async fn third_party_users(
        &self,
        provider: Provider,
    ) -> Result<Vec<ThirdPartyUser>, ApiError> {
        self.http.get(&format!("/auth/{}-users/", provider)).await
    }

    /// POST /auth/link-user/ - associate a local account with a third-party
    /// identity.
    pub async fn link(
        &self,
        local_user_id: &str,
        third_party_user_id: &str,
        provider: Provider,
    ) -> Result<ApiMessage, ApiError> {
        self.http
            .post(
                "/auth/link-user/",
                &json!({
                    "local_user_id": local_user_id,
                    "third_party_user_id": third_party_user_id,
                    "third_party_type": provider,
                }),
            )
            .await
    }

    /// POST /auth/users/{id}/unlink/ - dissociate one provider's identity
    /// from a local account.
    pub async fn unlink(&self, user_id: &str, provider: Provider) -> Result<ApiMessage, ApiError> {
        self.http
            .post(
                &format!("/auth/users/{}/unlink/", user_id),
                &json!({ "third_party_type": provider }),
            )
            .await
    }
}
