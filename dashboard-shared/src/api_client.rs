//! HTTP client for the dashboard backend API.
//!
//! Works in both native Rust and WASM environments; all API interactions
//! are consolidated here for consistent error handling and type safety.
//! Every endpoint except login/register carries the bearer token.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::json;

use crate::{ApiMessage, AuthResponse, FramePayload, Zone, ZonePoint, ZonesResponse};

/// Error type for backend API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(String),
    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),
    /// Server returned an error status
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Http(err.to_string())
    }
}

/// Client for the dashboard backend HTTP API.
#[derive(Debug, Clone, Default)]
pub struct DashboardClient {
    base_url: String,
    token: Option<String>,
}

impl DashboardClient {
    /// Create a new client pointing at the given base URL (the `/api`
    /// prefix is appended per request).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Create a client for same-origin web requests. Uses relative URLs,
    /// which works in WASM when the frontend is served from the same origin
    /// as the API.
    pub fn for_web() -> Self {
        Self::new("")
    }

    /// Attach a bearer token for authenticated endpoints.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute URL of the multipart video upload endpoint. The upload body
    /// is browser `FormData`, so the frontend issues that request itself.
    pub fn upload_video_url(&self) -> String {
        self.url("/upload_video")
    }

    // === Internal HTTP helpers ===

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Pull the failure message out of a non-2xx response body, preferring
    /// the backend's `error`/`message` fields over raw text.
    async fn failure(response: Response) -> ApiError {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ApiMessage>(&text)
            .ok()
            .and_then(|body| body.text().map(str::to_string))
            .unwrap_or(text);
        ApiError::Server { status, message }
    }

    async fn get(&self, path: &str) -> Result<Response, ApiError> {
        let response = self.authorize(Request::get(&self.url(path))).send().await?;
        if !response.ok() {
            return Err(Self::failure(response).await);
        }
        Ok(response)
    }

    async fn post_empty(&self, path: &str) -> Result<Response, ApiError> {
        let response = self.authorize(Request::post(&self.url(path))).send().await?;
        if !response.ok() {
            return Err(Self::failure(response).await);
        }
        Ok(response)
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<Response, ApiError> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await?;
        if !response.ok() {
            return Err(Self::failure(response).await);
        }
        Ok(response)
    }

    // === Auth ===

    /// Log in with an existing account.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let response = self
            .post_json("/login", &json!({ "email": email, "password": password }))
            .await?;
        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Register a new account.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let response = self
            .post_json(
                "/register",
                &json!({ "username": username, "email": email, "password": password }),
            )
            .await?;
        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Check whether the held token is still valid.
    pub async fn verify_token(&self) -> Result<(), ApiError> {
        self.post_empty("/verify_token").await.map(|_| ())
    }

    // === Zones ===

    /// Fetch the full zone collection. An empty or malformed body degrades
    /// to an empty list rather than failing the dashboard.
    pub async fn list_zones(&self) -> Result<Vec<Zone>, ApiError> {
        let response = self.get("/zones").await?;
        Ok(match response.json::<ZonesResponse>().await {
            Ok(body) => body.zones,
            Err(e) => {
                log::warn!("zone listing was malformed, treating as empty: {e}");
                Vec::new()
            }
        })
    }

    /// Persist a new zone from its four normalized corners.
    pub async fn create_zone(
        &self,
        name: &str,
        coordinates: [ZonePoint; 4],
    ) -> Result<(), ApiError> {
        self.post_json("/zones", &json!({ "name": name, "coordinates": coordinates }))
            .await
            .map(|_| ())
    }

    /// Delete a zone by id.
    pub async fn delete_zone(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::delete(&self.url(&format!("/zones/{id}"))))
            .send()
            .await?;
        if !response.ok() {
            return Err(Self::failure(response).await);
        }
        Ok(())
    }

    // === Analysis ===

    /// Ask the backend to open the uploaded video for analysis.
    pub async fn start_analysis(&self) -> Result<(), ApiError> {
        self.post_empty("/analysis/start").await.map(|_| ())
    }

    /// Fetch one analysis frame.
    pub async fn fetch_frame(&self) -> Result<FramePayload, ApiError> {
        let response = self.get("/analysis/frame").await?;
        response
            .json::<FramePayload>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_url_construction() {
        let client = DashboardClient::new("http://localhost:5000");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/zones"), "http://localhost:5000/api/zones");
        assert_eq!(
            client.upload_video_url(),
            "http://localhost:5000/api/upload_video"
        );
    }

    #[test]
    fn client_strips_trailing_slash() {
        let client = DashboardClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn same_origin_client_builds_relative_urls() {
        let client = DashboardClient::for_web();
        assert_eq!(client.url("/analysis/frame"), "/api/analysis/frame");
    }

    #[test]
    fn with_token_holds_the_bearer_credential() {
        let client = DashboardClient::for_web().with_token("abc123");
        assert_eq!(client.token(), Some("abc123"));
        assert_eq!(DashboardClient::for_web().token(), None);
    }
}
