//! Planet Data API provider

mod filter;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::config::ProviderConfig;
use crate::error::{ProviderError, Result};
use crate::http_client::create_http_client;

pub(crate) use filter::build_search_filter;
pub(crate) use types::{QuickSearchRequest, QuickSearchResponse};

pub(crate) const PROVIDER_NAME: &str = "planet";

/// Planet Data API provider
pub struct PlanetProvider {
    pub(crate) client: Client,
    pub(crate) config: ProviderConfig,
}

impl PlanetProvider {
    /// Builds the provider; fails when the API key is empty.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        if config.api_key().trim().is_empty() {
            return Err(ProviderError::Configuration {
                provider: PROVIDER_NAME.to_string(),
                detail: "API key is missing or empty".to_string(),
            });
        }

        Ok(Self {
            client: create_http_client(&config, PROVIDER_NAME)?,
            config,
        })
    }
}
