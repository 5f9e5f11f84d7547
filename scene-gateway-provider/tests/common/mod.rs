//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use scene_gateway_provider::{
    DateRange, Geometry, ImageryProvider, ProviderConfig, RetryPolicy, SearchFilter,
    create_provider,
};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const ITEM_ID: &str = "20240115_181512_12_2474";
pub const ASSET_TYPE: &str = "basic_analytic_4b";

/// Path of the asset listing for [`ITEM_ID`].
pub fn assets_path() -> String {
    format!("/item-types/PSScene/items/{ITEM_ID}/assets")
}

/// Config pointing at the mock server, with short delays.
pub fn test_config(server: &MockServer) -> ProviderConfig {
    ProviderConfig::new(TEST_API_KEY)
        .with_base_url(server.uri())
        .with_retry(RetryPolicy {
            max_attempts: 3,
            delay: Duration::from_millis(10),
        })
        .with_activation_grace(Duration::from_millis(10))
}

pub fn provider_for(config: ProviderConfig) -> Arc<dyn ImageryProvider> {
    match create_provider(config) {
        Ok(provider) => provider,
        Err(e) => panic!("provider construction failed: {e}"),
    }
}

pub fn sample_filter(max_cloud_cover: Option<f64>) -> SearchFilter {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap_or_default();
    SearchFilter {
        geometry: Geometry::polygon(vec![vec![
            vec![-122.5, 37.7],
            vec![-122.3, 37.7],
            vec![-122.3, 37.8],
            vec![-122.5, 37.8],
            vec![-122.5, 37.7],
        ]]),
        date_range: DateRange::new(start, end).unwrap_or_else(|| unreachable!()),
        max_cloud_cover,
    }
}

/// Asset map with a single target asset in the given state.
pub fn asset_map(server: &MockServer, status: &str, location: Option<&str>) -> Value {
    let mut asset = json!({
        "_links": {
            "_self": format!("{}/assets/{ITEM_ID}/{ASSET_TYPE}", server.uri()),
            "activate": format!("{}/assets/{ITEM_ID}/{ASSET_TYPE}/activate", server.uri()),
            "type": format!("{}/asset-types/{ASSET_TYPE}", server.uri()),
        },
        "_permissions": ["download"],
        "md5_digest": null,
        "status": status,
        "type": ASSET_TYPE,
    });
    if let Some(location) = location {
        asset["location"] = json!(location);
    }
    let mut assets = serde_json::Map::new();
    assets.insert(ASSET_TYPE.to_string(), asset);
    Value::Object(assets)
}
