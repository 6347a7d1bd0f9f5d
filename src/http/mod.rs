//! The request wrapper: one configured HTTP client shared by every API
//! module.
//!
//! Responsibilities: base-URL joining, bearer-token injection from the
//! session, and unwrapping responses into typed payloads or [`ApiError`].
//! API modules build a method + path + body and delegate here; they add no
//! error handling of their own.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{extract_error_message, ApiError};
use crate::session::Session;

/// Configured HTTP client bound to one backend and one session.
#[derive(Clone)]
pub struct Http {
    client: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl Http {
    pub fn new(base_url: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Join a backend path onto the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Generic call form: a request builder for `method` + `path` with the
    /// session's bearer token attached when one is present.
    pub fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a built request and unwrap the response.
    pub async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = extract_error_message(status.as_u16(), &body);
            tracing::debug!("Backend error {}: {}", status, message);
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }
        resp.json::<T>().await.map_err(ApiError::from)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.builder(Method::GET, path)).await
    }

    /// GET with query parameters.
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(self.builder(Method::GET, path).query(query))
            .await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.builder(Method::POST, path).json(body))
            .await
    }

    /// POST with no body, for action-style endpoints (`test_connection`,
    /// `sync_now`).
    pub async fn post_action<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.builder(Method::POST, path)).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.builder(Method::PATCH, path).json(body))
            .await
    }

    /// DELETE; the backend answers 204 with an empty body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self.builder(Method::DELETE, path).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = extract_error_message(status.as_u16(), &body);
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;

    #[test]
    fn test_trailing_slash_normalization() {
        let session = Arc::new(Session::new(Box::new(MemoryTokenStore::new())));
        let http = Http::new("http://127.0.0.1:8000/api/", session);
        assert_eq!(
            http.url("/auth/login/"),
            "http://127.0.0.1:8000/api/auth/login/"
        );
    }
}
