//! Provider factory functions.

use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::providers::PlanetProvider;
use crate::traits::ImageryProvider;

/// Creates an [`ImageryProvider`] from an immutable configuration.
///
/// The returned provider is wrapped in `Arc<dyn ImageryProvider>` for easy
/// sharing across request handlers.
///
/// # Errors
///
/// [`ProviderError::Configuration`](crate::ProviderError::Configuration) when
/// the API key is empty or the HTTP client cannot be built.
///
/// # Examples
///
/// ```rust,no_run
/// use scene_gateway_provider::{create_provider, ProviderConfig};
///
/// let provider = create_provider(ProviderConfig::new("your-api-key")).unwrap();
/// ```
pub fn create_provider(config: ProviderConfig) -> Result<Arc<dyn ImageryProvider>> {
    Ok(Arc::new(PlanetProvider::new(config)?))
}
