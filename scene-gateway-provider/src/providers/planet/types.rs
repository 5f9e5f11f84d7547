//! Planet Data API 类型定义

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Geometry;

/// Planet search filter tree node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum PlanetFilter {
    AndFilter {
        config: Vec<PlanetFilter>,
    },
    GeometryFilter {
        field_name: &'static str,
        config: Geometry,
    },
    DateRangeFilter {
        field_name: &'static str,
        config: DateRangeConfig,
    },
    RangeFilter {
        field_name: &'static str,
        config: RangeConfig,
    },
}

/// RFC 3339 bounds, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRangeConfig {
    pub gte: String,
    pub lte: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<f64>,
}

/// Body of `POST /quick-search`.
#[derive(Debug, Serialize)]
pub struct QuickSearchRequest<'a> {
    pub item_types: Vec<&'a str>,
    pub filter: PlanetFilter,
}

/// Response of `POST /quick-search`; only the features are kept.
#[derive(Debug, Deserialize)]
pub struct QuickSearchResponse {
    #[serde(default)]
    pub features: Option<Vec<Value>>,
}
