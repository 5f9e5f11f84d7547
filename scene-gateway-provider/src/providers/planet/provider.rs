//! Planet ImageryProvider trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::ImageryProvider;
use crate::types::{Asset, AssetMap, AssetStatus, Feature, SearchFilter};

use super::{
    PROVIDER_NAME, PlanetProvider, QuickSearchRequest, QuickSearchResponse, build_search_filter,
};

impl PlanetProvider {
    fn assets_url(&self, item_id: &str) -> String {
        self.url(&format!(
            "/item-types/{}/items/{}/assets",
            urlencoding::encode(&self.config.item_type),
            urlencoding::encode(item_id)
        ))
    }

    /// Extracts the target asset from an asset map.
    fn target_asset(&self, item_id: &str, assets: &AssetMap) -> Result<Asset> {
        let asset_type = &self.config.asset_type;
        Asset::from_map(assets, asset_type)
            .map_err(|e| ProviderError::ParseError {
                provider: PROVIDER_NAME.to_string(),
                detail: format!("{asset_type}: {e}"),
            })?
            .ok_or_else(|| ProviderError::AssetUnavailable {
                provider: PROVIDER_NAME.to_string(),
                item_id: item_id.to_string(),
                asset_type: asset_type.clone(),
            })
    }
}

#[async_trait]
impl ImageryProvider for PlanetProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn asset_type(&self) -> &str {
        &self.config.asset_type
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Feature>> {
        let body = QuickSearchRequest {
            item_types: vec![self.config.item_type.as_str()],
            filter: build_search_filter(filter),
        };

        let response: QuickSearchResponse = self.post(&self.url("/quick-search"), &body).await?;
        let features = response.features.unwrap_or_default();
        log::info!("[{PROVIDER_NAME}] Quick-search returned {} feature(s)", features.len());

        Ok(features)
    }

    async fn list_assets(&self, item_id: &str) -> Result<AssetMap> {
        self.get(&self.assets_url(item_id)).await
    }

    async fn activate_and_check(&self, item_id: &str) -> Result<Asset> {
        let assets = self.list_assets(item_id).await?;
        let asset = self.target_asset(item_id, &assets)?;

        if asset.status != AssetStatus::Inactive {
            log::debug!(
                "[{PROVIDER_NAME}] {} of {item_id} is {}, skipping activation",
                asset.name,
                asset.status
            );
            return Ok(asset);
        }

        let Some(activate_url) = asset.links.activate.as_deref() else {
            return Err(ProviderError::ActivationLinkMissing {
                provider: PROVIDER_NAME.to_string(),
                item_id: item_id.to_string(),
                asset_type: asset.name.clone(),
            });
        };

        let status = self
            .post_trigger(activate_url, self.config.activation_retry())
            .await?;
        log::info!(
            "[{PROVIDER_NAME}] Activation of {} for {item_id} requested (HTTP {status})",
            asset.name
        );

        // One grace period, then exactly one re-check.
        tokio::time::sleep(self.config.activation_grace).await;

        let assets = self.list_assets(item_id).await?;
        self.target_asset(item_id, &assets)
    }
}
