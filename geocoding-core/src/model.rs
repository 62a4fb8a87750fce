use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Rectangular extent of a result, in the order Nominatim reports it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Whether the point lies inside the box, edges included.
    pub fn contains(&self, point: Coordinates) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lon..=self.max_lon).contains(&point.lon)
    }

    pub fn center(&self) -> Coordinates {
        Coordinates {
            lat: (self.min_lat + self.max_lat) / 2.0,
            lon: (self.min_lon + self.max_lon) / 2.0,
        }
    }
}

/// Snapshot of every typed field of a [`crate::Location`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LocationSummary {
    pub display_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub place_id: Option<i64>,
    pub osm_type: Option<String>,
    pub osm_id: Option<i64>,
    pub class: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub importance: Option<f64>,
    pub license: Option<String>,
    pub bounding_box: Option<BoundingBox>,
    pub house_number: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub borough: Option<String>,

    /// Additionally requested address components that were present.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}
