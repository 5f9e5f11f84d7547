//! Response payloads produced by the services

use serde::Serialize;
use serde_json::Value;

use scene_gateway_provider::{Asset, AssetMap, AssetStatus, Feature};

/// Result of a search: features plus the ids derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub features: Vec<Feature>,
    /// `id` of each feature, in order; `null` where a feature has none.
    pub image_ids: Vec<Value>,
    pub count: usize,
}

impl SearchResult {
    pub fn from_features(features: Vec<Feature>) -> Self {
        let image_ids = features
            .iter()
            .map(|feature| feature.get("id").cloned().unwrap_or(Value::Null))
            .collect();
        let count = features.len();

        Self {
            features,
            image_ids,
            count,
        }
    }
}

/// Full asset map of an item plus the target asset's state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetsOverview {
    pub assets: AssetMap,
    #[serde(rename = "basic_analytic_status")]
    pub asset_status: Option<String>,
    pub activation_link: Option<String>,
}

impl AssetsOverview {
    /// Reads status and activation link of `asset_type` straight from the raw map.
    pub fn new(assets: AssetMap, asset_type: &str) -> Self {
        let target = assets.get(asset_type);
        let asset_status = target
            .and_then(|asset| asset.get("status"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let activation_link = target
            .and_then(|asset| asset.pointer("/_links/activate"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            assets,
            asset_status,
            activation_link,
        }
    }
}

/// Outcome of a single activate-and-check round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivationResult {
    pub status: AssetStatus,
    pub download_url: Option<String>,
    pub message: String,
}

impl From<Asset> for ActivationResult {
    fn from(asset: Asset) -> Self {
        let download_url = asset.download_url().map(str::to_string);
        let message = match (asset.status, &download_url) {
            (AssetStatus::Active, Some(_)) => "Asset is active and ready for download",
            (AssetStatus::Active, None) => "Asset is active but no download location was reported",
            (AssetStatus::Activating, _) => "Asset activation in progress, check again later",
            (AssetStatus::Inactive, _) => "Activation requested, asset is not yet activating",
        };

        Self {
            status: asset.status,
            download_url,
            message: message.to_string(),
        }
    }
}
