//! Domain types shared by the adapter and its callers.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single search hit. The provider defines its fields; only `id` is read.
pub type Feature = Value;

/// Asset name → provider asset object, exactly as returned upstream.
pub type AssetMap = Map<String, Value>;

/// A `[lon, lat]` (optionally `[lon, lat, alt]`) position.
pub type Position = Vec<f64>;

// ============ Search ============

/// Area of interest. Only polygons are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon {
        /// Linear rings; the first is the exterior ring.
        coordinates: Vec<Vec<Position>>,
    },
}

impl Geometry {
    pub fn polygon(coordinates: Vec<Vec<Position>>) -> Self {
        Self::Polygon { coordinates }
    }
}

/// Inclusive calendar date range. `end` is never before `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// Unchecked wire form; deserialization goes through [`DateRange::new`].
#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = String;

    fn try_from(raw: RawDateRange) -> std::result::Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
            .ok_or_else(|| format!("end {} is before start {}", raw.end, raw.start))
    }
}

impl DateRange {
    /// Returns `None` when `end` is earlier than `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (end >= start).then_some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// `start` at 00:00:00 UTC.
    pub fn start_of_day_utc(&self) -> DateTime<Utc> {
        self.start.and_time(NaiveTime::MIN).and_utc()
    }

    /// `end` at 23:59:59 UTC.
    pub fn end_of_day_utc(&self) -> DateTime<Utc> {
        let last_second = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        self.end.and_time(last_second).and_utc()
    }
}

/// Simplified search filter accepted by [`ImageryProvider::search`](crate::ImageryProvider::search).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub geometry: Geometry,
    pub date_range: DateRange,
    /// Upper bound in percent (0–100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cloud_cover: Option<f64>,
}

// ============ Assets ============

/// Activation lifecycle of an asset, as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Inactive,
    Activating,
    Active,
}

impl AssetStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Activating => "activating",
            Self::Active => "active",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hypermedia links attached to an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLinks {
    #[serde(rename = "_self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activate: Option<String>,
}

/// A downloadable product of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "type", default)]
    pub name: String,
    pub status: AssetStatus,
    #[serde(rename = "_links", default)]
    pub links: AssetLinks,
    /// Download URL; only present once the asset is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Asset {
    /// Parses the asset stored under `name` in an [`AssetMap`].
    ///
    /// Returns `Ok(None)` when the map has no such entry.
    pub fn from_map(assets: &AssetMap, name: &str) -> serde_json::Result<Option<Self>> {
        let Some(raw) = assets.get(name) else {
            return Ok(None);
        };
        let mut asset: Self = serde_json::from_value(raw.clone())?;
        if asset.name.is_empty() {
            asset.name = name.to_string();
        }
        Ok(Some(asset))
    }

    /// Download URL, only when the asset is active.
    pub fn download_url(&self) -> Option<&str> {
        match self.status {
            AssetStatus::Active => self.location.as_deref(),
            AssetStatus::Inactive | AssetStatus::Activating => None,
        }
    }
}
