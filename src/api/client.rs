//! HTTP client for the Generative Language API.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::types::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};
use crate::error::{ApiFailureKind, CheckError};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Base URL of the Generative Language API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// Client for issuing `generateContent` requests with one API key.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Build the underlying HTTP client. Construction fails when the TLS
    /// backend cannot be initialized; callers surface that as a missing
    /// dependency.
    pub fn new(api_key: String) -> Result<Self, CheckError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Same as [`GeminiClient::new`] with a custom base URL.
    fn with_base_url(api_key: String, base_url: &str) -> Result<Self, CheckError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(CheckError::DependencyMissing)?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key,
        })
    }

    fn build_url(base_url: &str, model: &str) -> Result<Url, CheckError> {
        let endpoint = format!("models/{}:generateContent", model);
        Url::parse(base_url)
            .and_then(|base| base.join(&endpoint))
            .map_err(|e| CheckError::ApiCallFailed {
                kind: ApiFailureKind::Unknown,
                message: format!("invalid API URL {}{}: {}", base_url, endpoint, e),
            })
    }

    /// Send one prompt to the given model and return the reply text.
    pub async fn generate_content(&self, model: &str, prompt: &str) -> Result<String, CheckError> {
        let url = Self::build_url(&self.base_url, model)?;
        let body = GenerateContentRequest::from_prompt(prompt);

        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CheckError::ApiCallFailed {
                kind: ApiFailureKind::classify(&e.to_string()),
                message: e.to_string(),
            })?;

        let status = response.status();
        debug!("API response status: {}", status);

        let raw = response
            .text()
            .await
            .map_err(|e| CheckError::ApiCallFailed {
                kind: ApiFailureKind::Unknown,
                message: format!("failed to read response body: {}", e),
            })?;

        if !status.is_success() {
            let message = ApiErrorBody::message_from(&raw);
            return Err(CheckError::ApiCallFailed {
                kind: ApiFailureKind::classify(&message),
                message: format!("HTTP {}: {}", status.as_u16(), message),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|e| CheckError::ApiCallFailed {
                kind: ApiFailureKind::Unknown,
                message: format!("failed to parse API response: {}", e),
            })?;

        parsed.text().ok_or(CheckError::EmptyResponse)
    }
}
