use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Asset, AssetMap, Feature, SearchFilter};

/// 卫星影像提供商 Trait
#[async_trait]
pub trait ImageryProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Asset type targeted by [`activate_and_check`](Self::activate_and_check).
    fn asset_type(&self) -> &str;

    /// Quick-search; returns the provider's features in order.
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Feature>>;

    /// Asset map of one item, verbatim.
    async fn list_assets(&self, item_id: &str) -> Result<AssetMap>;

    /// Triggers activation of the target asset if it is inactive, waits once,
    /// and returns whatever state the provider reports afterwards.
    async fn activate_and_check(&self, item_id: &str) -> Result<Asset>;
}
