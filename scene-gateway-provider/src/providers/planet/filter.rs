//! Translation of [`SearchFilter`] into Planet's filter tree.

use chrono::SecondsFormat;

use crate::types::SearchFilter;

use super::types::{DateRangeConfig, PlanetFilter, RangeConfig};

const GEOMETRY_FIELD: &str = "geometry";
const ACQUIRED_FIELD: &str = "acquired";
const CLOUD_COVER_FIELD: &str = "cloud_cover";

/// Builds the conjunctive filter: geometry and acquisition date always,
/// cloud cover only when an upper bound was given.
///
/// Planet stores cloud cover as a 0–1 fraction, so the percentage is scaled.
pub(crate) fn build_search_filter(filter: &SearchFilter) -> PlanetFilter {
    let mut clauses = vec![
        PlanetFilter::GeometryFilter {
            field_name: GEOMETRY_FIELD,
            config: filter.geometry.clone(),
        },
        PlanetFilter::DateRangeFilter {
            field_name: ACQUIRED_FIELD,
            config: DateRangeConfig {
                gte: filter
                    .date_range
                    .start_of_day_utc()
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
                lte: filter
                    .date_range
                    .end_of_day_utc()
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
            },
        },
    ];

    if let Some(max_cloud_cover) = filter.max_cloud_cover {
        clauses.push(PlanetFilter::RangeFilter {
            field_name: CLOUD_COVER_FIELD,
            config: RangeConfig {
                gte: None,
                lte: Some(max_cloud_cover / 100.0),
            },
        });
    }

    PlanetFilter::AndFilter { config: clauses }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::types::{DateRange, Geometry};

    fn sample_filter(max_cloud_cover: Option<f64>) -> SearchFilter {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        SearchFilter {
            geometry: Geometry::polygon(vec![vec![
                vec![-122.5, 37.7],
                vec![-122.3, 37.7],
                vec![-122.3, 37.8],
                vec![-122.5, 37.7],
            ]]),
            date_range: DateRange::new(start, end).unwrap(),
            max_cloud_cover,
        }
    }

    fn clauses(filter: &PlanetFilter) -> &[PlanetFilter] {
        match filter {
            PlanetFilter::AndFilter { config } => config,
            other => panic!("expected AndFilter, got {other:?}"),
        }
    }

    #[test]
    fn two_clauses_without_cloud_cover() {
        let tree = build_search_filter(&sample_filter(None));
        let clauses = clauses(&tree);
        assert_eq!(clauses.len(), 2);
        assert!(
            !clauses
                .iter()
                .any(|c| matches!(c, PlanetFilter::RangeFilter { .. }))
        );
    }

    #[test]
    fn three_clauses_with_cloud_cover() {
        let tree = build_search_filter(&sample_filter(Some(20.0)));
        let clauses = clauses(&tree);
        assert_eq!(clauses.len(), 3);
        assert_eq!(
            clauses[2],
            PlanetFilter::RangeFilter {
                field_name: "cloud_cover",
                config: RangeConfig {
                    gte: None,
                    lte: Some(0.2),
                },
            }
        );
    }

    #[test]
    fn zero_cloud_cover_still_adds_clause() {
        let tree = build_search_filter(&sample_filter(Some(0.0)));
        assert_eq!(clauses(&tree).len(), 3);
    }

    #[test]
    fn date_range_uses_day_boundaries() {
        let value = serde_json::to_value(build_search_filter(&sample_filter(None))).unwrap();
        assert_eq!(
            value["config"][1],
            json!({
                "type": "DateRangeFilter",
                "field_name": "acquired",
                "config": {
                    "gte": "2024-01-01T00:00:00Z",
                    "lte": "2024-01-31T23:59:59Z"
                }
            })
        );
    }

    #[test]
    fn serialized_tree_shape() {
        let value = serde_json::to_value(build_search_filter(&sample_filter(Some(50.0)))).unwrap();
        assert_eq!(value["type"], "AndFilter");
        assert_eq!(value["config"][0]["type"], "GeometryFilter");
        assert_eq!(value["config"][0]["field_name"], "geometry");
        assert_eq!(value["config"][0]["config"]["type"], "Polygon");
        assert_eq!(value["config"][2]["config"], json!({"lte": 0.5}));
    }
}
