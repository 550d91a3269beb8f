//! Shared HTTP transport with a fixed retry/backoff policy.
//!
//! One [`Transport`] instance (and its underlying connection pool) is shared
//! across every request in a run. All requests carry the OAuth credential,
//! the catalog client user-agent and a wildcard accept header; retries apply
//! only to idempotent GETs and only for transient failures.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONNECTION, HeaderMap, HeaderValue, USER_AGENT},
};
use tokio::time::sleep;

use crate::{Res, error::Error, warning};

/// Base URL of the catalog API.
pub const API_BASE: &str = "https://api.music.yandex.net";

/// Timeout for metadata/control calls.
pub const CONTROL_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for content streaming calls.
pub const CONTENT_TIMEOUT: Duration = Duration::from_secs(30);

const RETRY_STATUS: [StatusCode; 5] = [
    StatusCode::TOO_MANY_REQUESTS,
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

/// Retry budget and backoff curve for transient failures.
///
/// The default gives five attempts with delays of 0.5, 1, 2 and 4 seconds
/// between them (factor 0.5, doubling per attempt).
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff_factor: 0.5,
        }
    }
}

/// HTTP client wrapper shared by every component in the pipeline.
pub struct Transport {
    client: Client,
    api_base: String,
    policy: RetryPolicy,
}

impl Transport {
    /// Builds a transport against the production catalog API with the
    /// default retry policy.
    pub fn new(token: &str) -> Res<Self> {
        Self::with_options(token, API_BASE, RetryPolicy::default())
    }

    /// Builds a transport against an explicit API base, mainly so tests can
    /// point the pipeline at a local server and shrink the backoff.
    pub fn with_options(token: &str, api_base: &str, policy: RetryPolicy) -> Res<Self> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("OAuth {token}"))
            .map_err(|_| Error::Config("token contains characters not valid in a header".into()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(USER_AGENT, HeaderValue::from_static("Yandex-Music-API"));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            policy,
        })
    }

    /// Base URL the catalog endpoints are resolved against.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Issues a GET with the default header set.
    ///
    /// Transient failures (connect/timeout errors and 429/500/502/503/504
    /// statuses) are retried with exponential backoff until the attempt
    /// budget runs out; the last response or transport error is then handed
    /// to the caller, which decides what a non-200 means for its operation.
    pub async fn get(&self, url: &str, timeout: Duration) -> Res<Response> {
        self.get_with_headers(url, timeout, &[]).await
    }

    /// Issues a GET with additional per-request headers layered over the
    /// defaults (per-request values win, which is how the cover host gets
    /// its referer and browser user-agent).
    pub async fn get_with_headers(
        &self,
        url: &str,
        timeout: Duration,
        headers: &[(&str, &str)],
    ) -> Res<Response> {
        let mut attempt: u32 = 1;
        loop {
            let mut request = self.client.get(url).timeout(timeout);
            for (name, value) in headers {
                request = request.header(*name, *value);
            }

            match request.send().await {
                Ok(response)
                    if RETRY_STATUS.contains(&response.status())
                        && attempt < self.policy.max_attempts =>
                {
                    warning!(
                        "Request returned {status}, retrying ({attempt}/{max})",
                        status = response.status(),
                        max = self.policy.max_attempts,
                    );
                }
                Ok(response) => return Ok(response),
                Err(err)
                    if (err.is_timeout() || err.is_connect())
                        && attempt < self.policy.max_attempts =>
                {
                    warning!(
                        "Request failed ({err}), retrying ({attempt}/{max})",
                        max = self.policy.max_attempts,
                    );
                }
                Err(err) => return Err(err.into()),
            }

            sleep(self.backoff_delay(attempt)).await;
            attempt += 1;
        }
    }

    // delay before retry n: factor * 2^(n-1)
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        Duration::from_secs_f64(self.policy.backoff_factor * f64::from(1u32 << exponent))
    }
}
