// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP client for the participation backend.
//!
//! Every call is a JSON request answered by an `ApiResponse` envelope. Each
//! attempt is bounded by the configured timeout; transient failures are
//! retried according to the `RetryPolicy`. The client never touches form
//! state; callers decide what to do with the result.

use std::sync::Arc;
use std::time::Duration;

use awards_domain::ApiResponse;
use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::ClientError;
use crate::retry::RetryPolicy;
use crate::token::TokenSource;

/// Deadline for a single attempt unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the backend lives and how patient to be with it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `https://api.example.org/v1`.
    pub base_url: String,
    /// Deadline for each attempt.
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// Sends form payloads to the backend.
pub struct SubmissionClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<Arc<dyn TokenSource>>,
}

impl std::fmt::Debug for SubmissionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionClient")
            .field("config", &self.config)
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

impl SubmissionClient {
    /// Creates a client without a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http: reqwest::Client = reqwest::Client::builder()
            .build()
            .map_err(|err| ClientError::Unknown(err.to_string()))?;
        Ok(Self {
            http,
            config,
            token: None,
        })
    }

    /// Attaches a bearer token source consulted before every request.
    #[must_use]
    pub fn with_token_source(mut self, source: Arc<dyn TokenSource>) -> Self {
        self.token = Some(source);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POSTs `body` as JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns the last error once the retry policy gives up, or the first
    /// non-retryable error.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload: serde_json::Value = serde_json::to_value(body)
            .map_err(|err| ClientError::Unknown(format!("Could not encode request: {err}")))?;
        self.execute(Method::POST, path, Some(&payload)).await
    }

    /// GETs `path`.
    ///
    /// # Errors
    ///
    /// Same as `post_json`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ClientError> {
        self.execute(Method::GET, path, None).await
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ApiResponse<T>, ClientError> {
        let url: String = self.url(path);
        let mut attempt: u32 = 1;
        loop {
            match self.attempt(method.clone(), &url, body).await {
                Ok(response) => {
                    if attempt > 1 {
                        info!(%method, %url, attempt, "Request succeeded after retry");
                    }
                    return Ok(response);
                }
                Err(err) if self.config.retry.should_retry(attempt, &err) => {
                    let delay: Duration = self.config.retry.delay_for(attempt);
                    warn!(
                        %method,
                        %url,
                        attempt,
                        delay_ms = delay.as_millis(),
                        error = %err,
                        "Request failed; retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    warn!(%method, %url, attempt, error = %err, "Request failed");
                    return Err(err);
                }
            }
        }
    }

    async fn attempt<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ApiResponse<T>, ClientError> {
        let mut request: reqwest::RequestBuilder =
            self.http.request(method, url).header(ACCEPT, "application/json");
        if let Some(token) = self.token.as_ref().and_then(|source| source.token()) {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let exchange = async move {
            let response: reqwest::Response = request.send().await?;
            let status: StatusCode = response.status();
            let text: String = response.text().await?;
            Ok::<(StatusCode, String), ClientError>((status, text))
        };
        let (status, text): (StatusCode, String) =
            tokio::time::timeout(self.config.timeout, exchange)
                .await
                .map_err(|_| ClientError::Timeout(self.config.timeout))??;

        debug!(url, status = status.as_u16(), bytes = text.len(), "Received response");
        decode_response(status, &text)
    }
}

/// Turns a status and body into an envelope or an error.
///
/// Non-2xx statuses become `Api` errors carrying the backend's message when
/// the body has one. A 2xx envelope with `success: false` is also an `Api`
/// error. An empty 2xx body is a success without data.
fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<ApiResponse<T>, ClientError> {
    if !status.is_success() {
        let message: String = serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
            .ok()
            .and_then(|envelope| envelope.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    if body.trim().is_empty() {
        return Ok(ApiResponse {
            success: true,
            message: None,
            data: None,
        });
    }

    let envelope: ApiResponse<T> = serde_json::from_str(body)?;
    if !envelope.success {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: envelope.message.unwrap_or_default(),
        });
    }
    Ok(envelope)
}
