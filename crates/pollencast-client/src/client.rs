//! HTTP client for the backend Environment API.
//!
//! Wraps `reqwest` with bearer auth, `{success, data, error}` envelope
//! handling and retries on transient failures. Successful payloads are run
//! through [`pollencast_core::normalize_environment`] unless a `raw_*`
//! method is used.

use std::time::Duration;

use pollencast_core::{
    normalize_environment, AppConfig, NormalizedEnvironmentData, RawEnvironmentResponse,
};
use reqwest::{Client, StatusCode, Url};

use crate::error::ClientError;
use crate::retry::retry_with_backoff;
use crate::types::ApiResponse;

const USER_AGENT: &str = "pollencast/0.1 (allergy-tracking)";

/// Client for the `/environment` endpoints.
///
/// Use [`EnvironmentClient::new`] with loaded configuration, or
/// [`EnvironmentClient::with_base_url`] to point at a mock server in tests.
pub struct EnvironmentClient {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl EnvironmentClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if the
    /// configured API URL is not usable as a base.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Ok(Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            config.api_token.as_deref(),
        )?
        .with_retry(config.max_retries, config.retry_backoff_base_ms))
    }

    /// Creates a client with retries disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse or cannot carry path segments.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        auth_token: Option<&str>,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        // Exactly one trailing slash so endpoint segments are appended rather
        // than replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot carry path segments".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            auth_token: auth_token.map(str::to_owned),
            max_retries: 0,
            backoff_base_ms: 0,
        })
    }

    /// Sets the retry policy: up to `max_retries` extra attempts, waiting
    /// `backoff_base_ms * 2^(n-1)` (with jitter) before the n-th retry.
    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Fetches and normalizes environment data for a named location.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Api`] if the API reports failure or sends no data,
    ///   including a 4xx response whose body carries an envelope `error`.
    /// - [`ClientError::Unauthorized`] on HTTP 401.
    /// - [`ClientError::Http`] on network failure or another non-2xx status.
    /// - [`ClientError::Deserialize`] if the body does not match the envelope.
    pub async fn get_environment_data(
        &self,
        location: &str,
    ) -> Result<NormalizedEnvironmentData, ClientError> {
        let raw = self.raw_environment_data(location).await?;
        Ok(normalize_environment(raw))
    }

    /// Fetches and normalizes environment data for coordinates.
    ///
    /// # Errors
    ///
    /// Same as [`EnvironmentClient::get_environment_data`].
    pub async fn get_current_environment_data(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<NormalizedEnvironmentData, ClientError> {
        let raw = self.raw_current_environment_data(lat, lon).await?;
        Ok(normalize_environment(raw))
    }

    /// Fetches the raw payload for a named location without normalizing it.
    ///
    /// # Errors
    ///
    /// Same as [`EnvironmentClient::get_environment_data`].
    pub async fn raw_environment_data(
        &self,
        location: &str,
    ) -> Result<RawEnvironmentResponse, ClientError> {
        let url = self.endpoint_url(&["environment", location])?;
        self.fetch_environment(&url).await
    }

    /// Fetches the raw payload for coordinates without normalizing it.
    ///
    /// # Errors
    ///
    /// Same as [`EnvironmentClient::get_environment_data`].
    pub async fn raw_current_environment_data(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<RawEnvironmentResponse, ClientError> {
        let mut url = self.endpoint_url(&["environment", "current"])?;
        url.query_pairs_mut()
            .append_pair("lat", &lat.to_string())
            .append_pair("lon", &lon.to_string());
        self.fetch_environment(&url).await
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot carry path segments".to_owned(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_environment(&self, url: &Url) -> Result<RawEnvironmentResponse, ClientError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move { self.request_envelope(url).await }
        })
        .await
    }

    /// Sends one GET request and unwraps the response envelope.
    async fn request_envelope(&self, url: Url) -> Result<RawEnvironmentResponse, ClientError> {
        tracing::debug!(url = %url, "requesting environment data");

        let mut request = self.client.get(url.clone());
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(url = %url, "environment API rejected credentials");
            return Err(ClientError::Unauthorized);
        }
        let status_error = response.error_for_status_ref().err();
        if let Some(status_error) = status_error {
            return Err(Self::status_failure(&url, status, status_error, response).await);
        }

        let body = response.text().await?;
        let envelope: ApiResponse<RawEnvironmentResponse> =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        if !envelope.success {
            tracing::warn!(
                url = %url,
                error = envelope.error.as_deref().unwrap_or("none"),
                "environment API reported failure"
            );
        }
        envelope.into_data()
    }

    /// Maps a non-2xx response to an error, logging any envelope `error`
    /// message carried in the body.
    ///
    /// A 4xx with a message becomes [`ClientError::Api`]. Everything else
    /// keeps the status error so 5xx responses stay retriable.
    async fn status_failure(
        url: &Url,
        status: StatusCode,
        status_error: reqwest::Error,
        response: reqwest::Response,
    ) -> ClientError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.error);

        tracing::warn!(
            url = %url,
            status = status.as_u16(),
            error = message.as_deref().unwrap_or("none"),
            "environment API returned an error status"
        );

        match message {
            Some(message) if status.is_client_error() => ClientError::Api(message),
            _ => ClientError::Http(status_error),
        }
    }
}
