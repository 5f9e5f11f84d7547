//! Search, asset listing and activation on top of an [`ImageryProvider`]

use std::sync::Arc;

use serde_json::Value;

use scene_gateway_provider::ImageryProvider;

use crate::error::{CoreError, CoreResult};
use crate::types::{ActivationResult, AssetsOverview, SearchResult, ValidationErrors};
use crate::validation::validate_search_params;

/// Stateless request handling: validate, delegate to the provider, shape the result.
pub struct ImageryService {
    provider: Arc<dyn ImageryProvider>,
}

impl ImageryService {
    #[must_use]
    pub fn new(provider: Arc<dyn ImageryProvider>) -> Self {
        Self { provider }
    }

    /// Validates `params` and runs a quick-search.
    ///
    /// Invalid parameters never reach the provider.
    pub async fn search(&self, params: &Value) -> CoreResult<SearchResult> {
        let filter = validate_search_params(params).map_err(CoreError::InvalidInput)?;

        let features = self.provider.search(&filter).await?;
        Ok(SearchResult::from_features(features))
    }

    /// Asset map of an item plus the target asset's status and activation link.
    pub async fn list_assets(&self, item_id: &str) -> CoreResult<AssetsOverview> {
        let item_id = require_item_id(item_id)?;

        let assets = self.provider.list_assets(item_id).await?;
        Ok(AssetsOverview::new(assets, self.provider.asset_type()))
    }

    /// Same view as [`list_assets`](Self::list_assets); activation progress is
    /// observed by re-reading the asset map.
    pub async fn check_activation(&self, item_id: &str) -> CoreResult<AssetsOverview> {
        self.list_assets(item_id).await
    }

    /// One activate-and-check round for the target asset.
    pub async fn activate(&self, item_id: &str) -> CoreResult<ActivationResult> {
        let item_id = require_item_id(item_id)?;

        let asset = self.provider.activate_and_check(item_id).await?;
        log::info!(
            "Asset {} of item {item_id} is {}",
            asset.name,
            asset.status
        );
        Ok(ActivationResult::from(asset))
    }
}

fn require_item_id(item_id: &str) -> CoreResult<&str> {
    let trimmed = item_id.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput(ValidationErrors::single(
            "id",
            "The item id is required.",
        )));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;
    use crate::test_utils::{MockImageryProvider, asset_map, sample_asset};
    use crate::types::AssetStatus;
    use scene_gateway_provider::ProviderError;

    fn valid_params() -> Value {
        json!({
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
            },
            "date_range": {"start": "2024-01-01", "end": "2024-01-31"}
        })
    }

    #[tokio::test]
    async fn search_shapes_result() {
        let provider = Arc::new(MockImageryProvider::new());
        provider
            .set_features(vec![json!({"id": "a"}), json!({"id": "b"})])
            .await;
        let svc = ImageryService::new(provider.clone());

        let result = svc.search(&valid_params()).await.unwrap();

        assert_eq!(result.count, 2);
        assert_eq!(result.image_ids, vec![json!("a"), json!("b")]);
        assert_eq!(provider.search_calls().await.len(), 1);
    }

    #[tokio::test]
    async fn search_passes_cloud_cover_through() {
        let provider = Arc::new(MockImageryProvider::new());
        let svc = ImageryService::new(provider.clone());

        let mut params = valid_params();
        params["max_cloud_cover"] = json!(15);
        svc.search(&params).await.unwrap();

        let calls = provider.search_calls().await;
        assert_eq!(calls[0].max_cloud_cover, Some(15.0));
    }

    #[tokio::test]
    async fn invalid_search_does_not_reach_provider() {
        let provider = Arc::new(MockImageryProvider::new());
        let svc = ImageryService::new(provider.clone());

        let mut params = valid_params();
        params["date_range"] = json!({"start": "2024-01-31", "end": "2024-01-01"});
        let err = svc.search(&params).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(provider.search_calls().await.is_empty());
    }

    #[tokio::test]
    async fn search_provider_failure_propagates() {
        let provider = Arc::new(MockImageryProvider::new());
        provider
            .set_error(ProviderError::RequestFailed {
                provider: "mock".into(),
                status: 500,
                body: "internal".into(),
            })
            .await;
        let svc = ImageryService::new(provider);

        let err = svc.search(&valid_params()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ProviderRequestFailed);
        assert!(err.to_string().contains("HTTP 500"));
        assert!(err.to_string().contains("internal"));
    }

    #[tokio::test]
    async fn list_assets_surfaces_target_asset() {
        let provider = Arc::new(MockImageryProvider::new());
        provider.set_assets(asset_map("inactive")).await;
        let svc = ImageryService::new(provider);

        let overview = svc.list_assets("item-1").await.unwrap();

        assert_eq!(overview.asset_status.as_deref(), Some("inactive"));
        assert!(overview.activation_link.is_some());
        assert!(overview.assets.contains_key("basic_analytic_4b"));
    }

    #[tokio::test]
    async fn check_activation_matches_list_assets() {
        let provider = Arc::new(MockImageryProvider::new());
        provider.set_assets(asset_map("activating")).await;
        let svc = ImageryService::new(provider);

        let listed = svc.list_assets("item-1").await.unwrap();
        let checked = svc.check_activation("item-1").await.unwrap();

        assert_eq!(listed, checked);
    }

    #[tokio::test]
    async fn blank_item_id_rejected() {
        let provider = Arc::new(MockImageryProvider::new());
        let svc = ImageryService::new(provider);

        let err = svc.activate("  ").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn activate_reports_download_url_when_active() {
        let provider = Arc::new(MockImageryProvider::new());
        provider
            .set_activation(sample_asset(AssetStatus::Active, Some("https://dl/x.tif")))
            .await;
        let svc = ImageryService::new(provider.clone());

        let result = svc.activate("item-1").await.unwrap();

        assert_eq!(result.status, AssetStatus::Active);
        assert_eq!(result.download_url.as_deref(), Some("https://dl/x.tif"));
        assert_eq!(provider.activation_calls().await, vec!["item-1".to_string()]);
    }

    #[tokio::test]
    async fn activate_in_progress_has_no_download_url() {
        let provider = Arc::new(MockImageryProvider::new());
        provider
            .set_activation(sample_asset(AssetStatus::Activating, None))
            .await;
        let svc = ImageryService::new(provider);

        let result = svc.activate("item-1").await.unwrap();

        assert_eq!(result.status, AssetStatus::Activating);
        assert_eq!(result.download_url, None);
        assert!(!result.message.is_empty());
    }

    #[tokio::test]
    async fn activate_missing_asset_is_upstream_unavailable() {
        let provider = Arc::new(MockImageryProvider::new());
        provider
            .set_error(ProviderError::AssetUnavailable {
                provider: "mock".into(),
                item_id: "item-1".into(),
                asset_type: "basic_analytic_4b".into(),
            })
            .await;
        let svc = ImageryService::new(provider);

        let err = svc.activate("item-1").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
        assert_eq!(err.to_string(), "basic_analytic_4b not available");
    }
}
