//! # scene-gateway-provider
//!
//! Adapter for a satellite imagery provider's REST API (the Planet Data API).
//!
//! The adapter owns the base URL, credentials and retry/timeout policy, turns
//! a simplified [`SearchFilter`] into the provider's nested filter tree, and
//! performs the activate-then-check sequence for one asset type.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use scene_gateway_provider::{
//!     create_provider, DateRange, Geometry, ProviderConfig, SearchFilter,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderConfig::new(std::env::var("PLANET_API_KEY")?))?;
//!
//!     let filter = SearchFilter {
//!         geometry: Geometry::polygon(vec![vec![
//!             vec![-122.5, 37.7],
//!             vec![-122.3, 37.7],
//!             vec![-122.3, 37.8],
//!             vec![-122.5, 37.7],
//!         ]]),
//!         date_range: DateRange::new(
//!             NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!             NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//!         )
//!         .unwrap(),
//!         max_cloud_cover: Some(10.0),
//!     };
//!
//!     let features = provider.search(&filter).await?;
//!     if let Some(id) = features.first().and_then(|f| f["id"].as_str()) {
//!         let asset = provider.activate_and_check(id).await?;
//!         println!("{id}: {}", asset.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::RequestFailed`]: non-2xx answer, status and body kept
//! - [`ProviderError::AssetUnavailable`]: the item has no asset of the target type
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`]: transport failures
//!
//! Transient failures are retried with a fixed delay; see [`RetryPolicy`].

mod config;
mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use config::{
    DEFAULT_ASSET_TYPE, DEFAULT_ITEM_TYPE, PLANET_API_BASE, ProviderConfig, RetryPolicy,
};
pub use error::{ProviderError, Result};
pub use factory::create_provider;
pub use providers::PlanetProvider;
pub use traits::ImageryProvider;
pub use types::{
    Asset, AssetLinks, AssetMap, AssetStatus, DateRange, Feature, Geometry, Position,
    SearchFilter,
};
pub use utils::log_sanitizer;
