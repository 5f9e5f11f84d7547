//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use scene_gateway_provider::ProviderError;

use crate::types::ValidationErrors;

/// Error taxonomy exposed to callers of the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Client-supplied parameters failed validation.
    InvalidInput,
    /// The target asset type is missing or cannot be activated.
    UpstreamUnavailable,
    /// The provider answered non-2xx, or the call never completed.
    ProviderRequestFailed,
    /// The adapter could not be built.
    Configuration,
}

impl ErrorKind {
    /// Short, human-readable summary used as the `error` field of envelopes.
    pub fn summary(self) -> &'static str {
        match self {
            Self::InvalidInput => "Validation failed",
            Self::UpstreamUnavailable => "Upstream asset unavailable",
            Self::ProviderRequestFailed => "Provider request failed",
            Self::Configuration => "Configuration error",
        }
    }
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error, field → messages
    #[error("Validation failed: {0}")]
    InvalidInput(ValidationErrors),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Provider(e) => match e {
                ProviderError::AssetUnavailable { .. }
                | ProviderError::ActivationLinkMissing { .. } => ErrorKind::UpstreamUnavailable,
                ProviderError::Configuration { .. } => ErrorKind::Configuration,
                ProviderError::RequestFailed { .. }
                | ProviderError::NetworkError { .. }
                | ProviderError::Timeout { .. }
                | ProviderError::ParseError { .. }
                | ProviderError::SerializationError { .. } => ErrorKind::ProviderRequestFailed,
            },
        }
    }

    /// Whether it is expected behavior (bad input, missing asset), used for log levels.
    ///
    /// `warn` when `true`, `error` otherwise.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidInput(_) => true,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
