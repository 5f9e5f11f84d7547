//! Immutable adapter configuration.

use std::time::Duration;

/// Planet Data API base URL.
pub const PLANET_API_BASE: &str = "https://api.planet.com/data/v1";
/// PlanetScope scene item type.
pub const DEFAULT_ITEM_TYPE: &str = "PSScene";
/// Asset activated by [`ImageryProvider::activate_and_check`](crate::ImageryProvider::activate_and_check).
pub const DEFAULT_ASSET_TYPE: &str = "basic_analytic_4b";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// 激活后重新检查前的等待时间（毫秒）
const DEFAULT_ACTIVATION_GRACE_MS: u64 = 500;

/// Fixed-delay retry policy applied to outbound calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. `1` disables retrying.
    pub max_attempts: u32,
    /// Pause between two attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    /// A policy that sends the request exactly once.
    pub const fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            delay: Duration::ZERO,
        }
    }

    /// Number of retries after the first attempt.
    pub fn max_retries(&self) -> u32 {
        self.max_attempts.saturating_sub(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(100),
        }
    }
}

/// Everything the adapter needs, fixed at construction.
#[derive(Clone)]
pub struct ProviderConfig {
    api_key: String,
    pub base_url: String,
    pub item_type: String,
    pub asset_type: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub retry: RetryPolicy,
    /// Single wait between triggering activation and re-reading the asset.
    pub activation_grace: Duration,
    /// Whether the activation trigger POST goes through `retry` as well.
    ///
    /// Off by default: a retried trigger can activate twice if the first
    /// response was lost after the provider accepted it.
    pub retry_activation_trigger: bool,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: PLANET_API_BASE.to_string(),
            item_type: DEFAULT_ITEM_TYPE.to_string(),
            asset_type: DEFAULT_ASSET_TYPE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
            activation_grace: Duration::from_millis(DEFAULT_ACTIVATION_GRACE_MS),
            retry_activation_trigger: false,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    #[must_use]
    pub fn with_asset_type(mut self, asset_type: impl Into<String>) -> Self {
        self.asset_type = asset_type.into();
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, request: Duration, connect: Duration) -> Self {
        self.request_timeout = request;
        self.connect_timeout = connect;
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn with_activation_grace(mut self, grace: Duration) -> Self {
        self.activation_grace = grace;
        self
    }

    #[must_use]
    pub fn with_retry_activation_trigger(mut self, enabled: bool) -> Self {
        self.retry_activation_trigger = enabled;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Policy used for the activation trigger POST.
    pub fn activation_retry(&self) -> RetryPolicy {
        if self.retry_activation_trigger {
            self.retry
        } else {
            RetryPolicy::single_attempt()
        }
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("item_type", &self.item_type)
            .field("asset_type", &self.asset_type)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("retry", &self.retry)
            .field("activation_grace", &self.activation_grace)
            .field("retry_activation_trigger", &self.retry_activation_trigger)
            .finish()
    }
}
