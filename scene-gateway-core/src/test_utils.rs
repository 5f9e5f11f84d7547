//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;

use scene_gateway_provider::{ImageryProvider, ProviderError, Result};

use crate::types::{Asset, AssetLinks, AssetMap, AssetStatus, Feature, SearchFilter};

pub const ASSET_TYPE: &str = "basic_analytic_4b";

// ===== MockImageryProvider =====

/// Records calls and answers with canned data.
///
/// If an error is set, every operation returns it.
pub struct MockImageryProvider {
    features: RwLock<Vec<Feature>>,
    assets: RwLock<AssetMap>,
    activation: RwLock<Option<Asset>>,
    error: RwLock<Option<ProviderError>>,
    search_calls: RwLock<Vec<SearchFilter>>,
    activation_calls: RwLock<Vec<String>>,
}

impl MockImageryProvider {
    pub fn new() -> Self {
        Self {
            features: RwLock::new(Vec::new()),
            assets: RwLock::new(AssetMap::new()),
            activation: RwLock::new(None),
            error: RwLock::new(None),
            search_calls: RwLock::new(Vec::new()),
            activation_calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_features(&self, features: Vec<Feature>) {
        *self.features.write().await = features;
    }

    pub async fn set_assets(&self, assets: AssetMap) {
        *self.assets.write().await = assets;
    }

    pub async fn set_activation(&self, asset: Asset) {
        *self.activation.write().await = Some(asset);
    }

    pub async fn set_error(&self, err: ProviderError) {
        *self.error.write().await = Some(err);
    }

    pub async fn search_calls(&self) -> Vec<SearchFilter> {
        self.search_calls.read().await.clone()
    }

    pub async fn activation_calls(&self) -> Vec<String> {
        self.activation_calls.read().await.clone()
    }

    async fn fail_if_set(&self) -> Result<()> {
        match self.error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ImageryProvider for MockImageryProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn asset_type(&self) -> &str {
        ASSET_TYPE
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Feature>> {
        self.search_calls.write().await.push(filter.clone());
        self.fail_if_set().await?;
        Ok(self.features.read().await.clone())
    }

    async fn list_assets(&self, _item_id: &str) -> Result<AssetMap> {
        self.fail_if_set().await?;
        Ok(self.assets.read().await.clone())
    }

    async fn activate_and_check(&self, item_id: &str) -> Result<Asset> {
        self.activation_calls.write().await.push(item_id.to_string());
        self.fail_if_set().await?;
        self.activation
            .read()
            .await
            .clone()
            .ok_or_else(|| ProviderError::AssetUnavailable {
                provider: "mock".to_string(),
                item_id: item_id.to_string(),
                asset_type: ASSET_TYPE.to_string(),
            })
    }
}

// ===== Fixtures =====

/// Asset map holding the target asset in `status`, plus one unrelated asset.
pub fn asset_map(status: &str) -> AssetMap {
    let mut assets = AssetMap::new();
    assets.insert(
        ASSET_TYPE.to_string(),
        json!({
            "_links": {
                "_self": "https://api.example.com/assets/item-1/basic_analytic_4b",
                "activate": "https://api.example.com/assets/item-1/basic_analytic_4b/activate"
            },
            "status": status,
            "type": ASSET_TYPE
        }),
    );
    assets.insert(
        "ortho_visual".to_string(),
        json!({"status": "inactive", "type": "ortho_visual"}),
    );
    assets
}

pub fn sample_asset(status: AssetStatus, location: Option<&str>) -> Asset {
    Asset {
        name: ASSET_TYPE.to_string(),
        status,
        links: AssetLinks::default(),
        location: location.map(str::to_string),
    }
}
