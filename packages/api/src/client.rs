//! REST client for the remote `/users` service.

use tracing::debug;

use crate::error::ApiError;
use crate::models::{User, UserDraft};

/// Base URL used when `USERS_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Thin wrapper around [`reqwest::Client`] bound to one service base URL.
///
/// Cloning is cheap (the inner client is reference-counted), so platform
/// crates provide a single instance via context and components clone it into
/// their async handlers.
#[derive(Clone, Debug)]
pub struct UsersClient {
    http: reqwest::Client,
    base_url: String,
}

impl UsersClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Build a client from the `USERS_API_URL` environment variable.
    ///
    /// Native targets read it at runtime; for wasm the value is baked in at
    /// compile time. Falls back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base = std::env::var("USERS_API_URL")
            .ok()
            .or_else(|| option_env!("USERS_API_URL").map(String::from))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every stored record. `GET {base}/users/`
    pub async fn fetch_all(&self) -> Result<Vec<User>, ApiError> {
        let url = format!("{}/users/", self.base_url);
        debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Store a new record. `POST {base}/users` — the response carries the
    /// server-assigned identifier.
    pub async fn create(&self, draft: &UserDraft) -> Result<User, ApiError> {
        let url = format!("{}/users", self.base_url);
        debug!("POST {url}");
        let response = self.http.post(&url).json(draft).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Replace the record with the given identifier. `PUT {base}/users/{id}`
    pub async fn update(&self, id: &str, draft: &UserDraft) -> Result<User, ApiError> {
        let url = format!("{}/users/{id}", self.base_url);
        debug!("PUT {url}");
        let response = self.http.put(&url).json(draft).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Delete the record with the given identifier. `DELETE {base}/users/{id}`
    ///
    /// Success is decided by status alone; any response body is ignored.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/users/{id}", self.base_url);
        debug!("DELETE {url}");
        let response = self.http.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
}

impl Default for UsersClient {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_normalized() {
        let client = UsersClient::new("http://localhost:8080///");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn base_url_is_kept_verbatim_otherwise() {
        let client = UsersClient::new("https://users.example.com/api");
        assert_eq!(client.base_url(), "https://users.example.com/api");
    }
}
