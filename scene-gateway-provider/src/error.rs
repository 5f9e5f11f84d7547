use serde::{Deserialize, Serialize};

/// Unified error type for all imagery provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RequestFailed`](Self::RequestFailed) with HTTP 429 or 5xx
///
/// The built-in HTTP client retries these with a fixed delay between attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The adapter could not be constructed (missing API key, bad base URL, ...).
    ///
    /// Only produced at construction time, never per request.
    Configuration {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The provider answered with a non-2xx status.
    RequestFailed {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code returned by the provider.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The requested asset type is not part of the item's asset map.
    AssetUnavailable {
        /// Provider that produced the error.
        provider: String,
        /// Item the asset was looked up on.
        item_id: String,
        /// Asset type that was expected.
        asset_type: String,
    },

    /// The asset is inactive but the provider did not supply an activation link.
    ActivationLinkMissing {
        /// Provider that produced the error.
        provider: String,
        /// Item the asset belongs to.
        item_id: String,
        /// Asset type that could not be activated.
        asset_type: String,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::AssetUnavailable { .. } | Self::ActivationLinkMissing { .. } => true,
            Self::RequestFailed { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// HTTP status returned by the provider, if the failure carries one.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration { provider, detail } => {
                write!(f, "[{provider}] Configuration error: {detail}")
            }
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::RequestFailed {
                provider,
                status,
                body,
            } => {
                write!(f, "[{provider}] Request failed (HTTP {status}): {body}")
            }
            Self::AssetUnavailable { asset_type, .. } => {
                write!(f, "{asset_type} not available")
            }
            Self::ActivationLinkMissing {
                provider,
                item_id,
                asset_type,
            } => {
                write!(
                    f,
                    "[{provider}] {asset_type} of item '{item_id}' has no activation link"
                )
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_configuration() {
        let e = ProviderError::Configuration {
            provider: "planet".to_string(),
            detail: "API key is empty".to_string(),
        };
        assert_eq!(e.to_string(), "[planet] Configuration error: API key is empty");
    }

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "test".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[test] Network error: connection refused");
    }

    #[test]
    fn display_request_failed_keeps_status_and_body() {
        let e = ProviderError::RequestFailed {
            provider: "planet".to_string(),
            status: 401,
            body: r#"{"message":"Please enter your API key"}"#.to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"[planet] Request failed (HTTP 401): {"message":"Please enter your API key"}"#
        );
        assert_eq!(e.upstream_status(), Some(401));
    }

    #[test]
    fn display_asset_unavailable() {
        let e = ProviderError::AssetUnavailable {
            provider: "planet".to_string(),
            item_id: "20240101_000000_00_0000".to_string(),
            asset_type: "basic_analytic_4b".to_string(),
        };
        assert_eq!(e.to_string(), "basic_analytic_4b not available");
    }

    #[test]
    fn display_activation_link_missing() {
        let e = ProviderError::ActivationLinkMissing {
            provider: "planet".to_string(),
            item_id: "abc".to_string(),
            asset_type: "basic_analytic_4b".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[planet] basic_analytic_4b of item 'abc' has no activation link"
        );
    }

    #[test]
    fn display_timeout() {
        let e = ProviderError::Timeout {
            provider: "test".to_string(),
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[test] Request timeout: 30s elapsed");
    }

    #[test]
    fn expected_errors_are_client_side() {
        let missing = ProviderError::AssetUnavailable {
            provider: "t".into(),
            item_id: "i".into(),
            asset_type: "a".into(),
        };
        let not_found = ProviderError::RequestFailed {
            provider: "t".into(),
            status: 404,
            body: String::new(),
        };
        let bad_gateway = ProviderError::RequestFailed {
            provider: "t".into(),
            status: 502,
            body: String::new(),
        };
        let network = ProviderError::NetworkError {
            provider: "t".into(),
            detail: "x".into(),
        };

        assert!(missing.is_expected());
        assert!(not_found.is_expected());
        assert!(!bad_gateway.is_expected());
        assert!(!network.is_expected());
        assert_eq!(network.upstream_status(), None);
    }

    #[test]
    fn serialize_carries_code_tag() {
        let e = ProviderError::RequestFailed {
            provider: "planet".to_string(),
            status: 503,
            body: "unavailable".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"RequestFailed\""));
        assert!(json.contains("\"status\":503"));
    }
}
