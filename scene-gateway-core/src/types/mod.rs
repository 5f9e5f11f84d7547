//! 类型定义模块

mod response;
mod validation_errors;

pub use response::{ActivationResult, AssetsOverview, SearchResult};
pub use validation_errors::ValidationErrors;

// Re-export provider 库的公共类型
pub use scene_gateway_provider::{
    Asset, AssetLinks, AssetMap, AssetStatus, DateRange, Feature, Geometry, Position,
    SearchFilter,
};
