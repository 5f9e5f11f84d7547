//! Planet HTTP 请求方法

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::RetryPolicy;
use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::utils::log_sanitizer::truncate_for_log;

use super::{PROVIDER_NAME, PlanetProvider};

impl PlanetProvider {
    /// Absolute URL for a path below the configured base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let request = self
            .client
            .get(url)
            .basic_auth(self.config.api_key(), Some(""));

        let (_, response_text) = HttpUtils::execute_request_with_retry(
            request,
            PROVIDER_NAME,
            "GET",
            url,
            self.config.retry,
        )
        .await?;

        HttpUtils::parse_json(&response_text, PROVIDER_NAME)
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let body_json =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: PROVIDER_NAME.to_string(),
                detail: e.to_string(),
            })?;
        log::debug!("[{PROVIDER_NAME}] Request Body: {}", truncate_for_log(&body_json));

        let request = self
            .client
            .post(url)
            .basic_auth(self.config.api_key(), Some(""))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_json);

        let (_, response_text) = HttpUtils::execute_request_with_retry(
            request,
            PROVIDER_NAME,
            "POST",
            url,
            self.config.retry,
        )
        .await?;

        HttpUtils::parse_json(&response_text, PROVIDER_NAME)
    }

    /// 执行无请求体的 POST 请求（激活链接），忽略响应体
    pub(crate) async fn post_trigger(&self, url: &str, policy: RetryPolicy) -> Result<u16> {
        let request = self
            .client
            .post(url)
            .basic_auth(self.config.api_key(), Some(""));

        let (status, _) =
            HttpUtils::execute_request_with_retry(request, PROVIDER_NAME, "POST", url, policy)
                .await?;

        Ok(status)
    }
}
