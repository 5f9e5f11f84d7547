//! Generic HTTP client tools
//!
//! Reusable request execution for provider adapters: sending, logging,
//! status checking and retrying. Each provider still builds its own
//! `RequestBuilder` (URL, auth, body).

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::{ProviderConfig, RetryPolicy};
use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(
    config: &ProviderConfig,
    provider_name: &str,
) -> Result<Client, ProviderError> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| ProviderError::Configuration {
            provider: provider_name.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body, ...)
    /// * `provider_name` - Provider name (for logging and errors)
    /// * `method_name` - request method name, for logs
    /// * `url_or_action` - URL or action name, for logs
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any 2xx response
    /// * `Err(ProviderError::RequestFailed)` for other statuses, body preserved
    /// * `Err(ProviderError::NetworkError | Timeout)` for transport failures
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let status_code = status.as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        if !status.is_success() {
            log::warn!(
                "[{provider_name}] {method_name} {url_or_action} failed (HTTP {status_code}): {}",
                truncate_for_log(&response_text)
            );
            return Err(ProviderError::RequestFailed {
                provider: provider_name.to_string(),
                status: status_code,
                body: response_text,
            });
        }

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request under a fixed-delay retry policy
    ///
    /// # Retry strategy
    /// - Only transient failures are retried (see [`is_retryable`])
    /// - The same `policy.delay` is waited between every two attempts
    /// - At most `policy.max_attempts` requests are sent in total
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
        policy: RetryPolicy,
    ) -> Result<(u16, String), ProviderError> {
        let max_retries = policy.max_retries();
        if max_retries == 0 {
            return Self::execute_request(
                request_builder,
                provider_name,
                method_name,
                url_or_action,
            )
            .await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder can only be sent once
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{provider_name}] Cannot clone request, disabling retry");
                return Self::execute_request(
                    request_builder,
                    provider_name,
                    method_name,
                    url_or_action,
                )
                .await;
            };

            match Self::execute_request(req, provider_name, method_name, url_or_action).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && is_retryable(&e) => {
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        provider_name,
                        attempt + 1,
                        policy.max_attempts,
                        policy.delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(policy.delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Determine whether the error can be retried
///
/// Network errors, timeouts, throttling and server-side failures are retried;
/// client errors (bad key, unknown item) are not.
fn is_retryable(error: &ProviderError) -> bool {
    match error {
        ProviderError::NetworkError { .. } | ProviderError::Timeout { .. } => true,
        ProviderError::RequestFailed { status, .. } => *status == 429 || *status >= 500,
        _ => false,
    }
}
