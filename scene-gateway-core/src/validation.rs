//! Validation of inbound search parameters
//!
//! Works on raw JSON so that every problem is reported against its field
//! path, instead of stopping at the first deserialization error.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::types::{DateRange, Geometry, Position, SearchFilter, ValidationErrors};

const DATE_FORMAT: &str = "%Y-%m-%d";
/// A closed linear ring needs at least four positions.
const MIN_RING_POSITIONS: usize = 4;
const MAX_CLOUD_COVER: f64 = 100.0;

/// Validates search parameters and turns them into a [`SearchFilter`].
///
/// Rules:
/// - `geometry`: required object, `type` equal to `Polygon`, `coordinates`
///   a non-empty array of rings of at least four `[lon, lat]` positions
/// - `date_range.start` / `date_range.end`: required `YYYY-MM-DD`, `end >= start`
/// - `max_cloud_cover`: optional number within `0..=100`
pub fn validate_search_params(params: &Value) -> Result<SearchFilter, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let Some(body) = params.as_object() else {
        errors.add("body", "The request body must be a JSON object.");
        return Err(errors);
    };

    let geometry = validate_geometry(body.get("geometry"), &mut errors);
    let date_range = validate_date_range(body.get("date_range"), &mut errors);
    let max_cloud_cover = validate_cloud_cover(body.get("max_cloud_cover"), &mut errors);

    match (geometry, date_range) {
        (Some(geometry), Some(date_range)) if errors.is_empty() => Ok(SearchFilter {
            geometry,
            date_range,
            max_cloud_cover,
        }),
        _ => Err(errors),
    }
}

/// Treats JSON `null` like an absent key.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn validate_geometry(value: Option<&Value>, errors: &mut ValidationErrors) -> Option<Geometry> {
    let Some(value) = present(value) else {
        errors.add("geometry", "The geometry field is required.");
        return None;
    };
    let Some(geometry) = value.as_object() else {
        errors.add("geometry", "The geometry field must be an object.");
        return None;
    };

    let type_ok = match present(geometry.get("type")) {
        None => {
            errors.add("geometry.type", "The geometry.type field is required.");
            false
        }
        Some(Value::String(t)) if t == "Polygon" => true,
        Some(_) => {
            errors.add("geometry.type", "The selected geometry.type is invalid, expected Polygon.");
            false
        }
    };

    let coordinates = validate_coordinates(geometry, errors);

    match (type_ok, coordinates) {
        (true, Some(coordinates)) => Some(Geometry::polygon(coordinates)),
        _ => None,
    }
}

fn validate_coordinates(
    geometry: &Map<String, Value>,
    errors: &mut ValidationErrors,
) -> Option<Vec<Vec<Position>>> {
    const FIELD: &str = "geometry.coordinates";

    let Some(value) = present(geometry.get("coordinates")) else {
        errors.add(FIELD, "The geometry.coordinates field is required.");
        return None;
    };
    let Some(rings) = value.as_array() else {
        errors.add(FIELD, "The geometry.coordinates field must be an array.");
        return None;
    };
    if rings.is_empty() {
        errors.add(FIELD, "The geometry.coordinates field must contain at least one ring.");
        return None;
    }

    let mut parsed = Vec::with_capacity(rings.len());
    let mut valid = true;
    for (index, ring) in rings.iter().enumerate() {
        match parse_ring(ring) {
            Ok(ring) => parsed.push(ring),
            Err(message) => {
                errors.add(format!("{FIELD}.{index}"), message);
                valid = false;
            }
        }
    }

    valid.then_some(parsed)
}

fn parse_ring(ring: &Value) -> Result<Vec<Position>, String> {
    let positions = ring
        .as_array()
        .ok_or_else(|| "Each ring must be an array of positions.".to_string())?;
    if positions.len() < MIN_RING_POSITIONS {
        return Err(format!(
            "Each ring must contain at least {MIN_RING_POSITIONS} positions."
        ));
    }

    positions
        .iter()
        .map(|position| {
            let numbers = position
                .as_array()
                .filter(|p| p.len() >= 2)
                .ok_or_else(|| {
                    "Each position must be an array of at least two numbers.".to_string()
                })?;
            numbers
                .iter()
                .map(|n| {
                    n.as_f64()
                        .ok_or_else(|| "Position coordinates must be numbers.".to_string())
                })
                .collect::<Result<Position, _>>()
        })
        .collect()
}

fn validate_date_range(value: Option<&Value>, errors: &mut ValidationErrors) -> Option<DateRange> {
    let Some(value) = present(value) else {
        errors.add("date_range", "The date_range field is required.");
        return None;
    };
    let Some(range) = value.as_object() else {
        errors.add("date_range", "The date_range field must be an object.");
        return None;
    };

    let start = parse_date(range.get("start"), "date_range.start", errors);
    let end = parse_date(range.get("end"), "date_range.end", errors);

    let (start, end) = (start?, end?);
    let range = DateRange::new(start, end);
    if range.is_none() {
        errors.add(
            "date_range.end",
            "The date_range.end must be a date after or equal to date_range.start.",
        );
    }
    range
}

fn parse_date(
    value: Option<&Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<NaiveDate> {
    let Some(value) = present(value) else {
        errors.add(field, format!("The {field} field is required."));
        return None;
    };

    let parsed = value
        .as_str()
        .filter(|s| s.len() == 10)
        .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok());
    if parsed.is_none() {
        errors.add(
            field,
            format!("The {field} field must be a valid date in the format YYYY-MM-DD."),
        );
    }
    parsed
}

fn validate_cloud_cover(value: Option<&Value>, errors: &mut ValidationErrors) -> Option<f64> {
    let value = present(value)?;

    let Some(number) = value.as_f64() else {
        errors.add("max_cloud_cover", "The max_cloud_cover field must be a number.");
        return None;
    };
    if !(0.0..=MAX_CLOUD_COVER).contains(&number) {
        errors.add(
            "max_cloud_cover",
            "The max_cloud_cover field must be between 0 and 100.",
        );
        return None;
    }
    Some(number)
}
