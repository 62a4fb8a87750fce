use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::{
    coerce::{float_field, int_field, map_field, seq_field, str_field, to_f64},
    error::{LocationError, json_kind},
    model::{BoundingBox, Coordinates, LocationSummary},
};

/// A single geocoding result, as returned by a Nominatim-style API.
///
/// The raw mapping is stored as-is and never modified. Each accessor looks up
/// its key on demand and returns `None` when the key is missing, `null`, or of
/// an unexpected shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location {
    data: Map<String, Value>,
}

impl Location {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Decode a single result object from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, LocationError> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    pub fn latitude(&self) -> Option<f64> {
        float_field(&self.data, "lat")
    }

    pub fn longitude(&self) -> Option<f64> {
        float_field(&self.data, "lon")
    }

    /// Both coordinates, when the result carries both.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates { lat: self.latitude()?, lon: self.longitude()? })
    }

    pub fn display_name(&self) -> Option<&str> {
        str_field(&self.data, "display_name")
    }

    pub fn place_id(&self) -> Option<i64> {
        int_field(&self.data, "place_id")
    }

    /// OpenStreetMap element type: `node`, `way` or `relation`.
    pub fn osm_type(&self) -> Option<&str> {
        str_field(&self.data, "osm_type")
    }

    pub fn osm_id(&self) -> Option<i64> {
        int_field(&self.data, "osm_id")
    }

    /// Coarse classification, e.g. `place`, `building`, `tourism`.
    pub fn class(&self) -> Option<&str> {
        str_field(&self.data, "class")
    }

    /// Fine classification stored under `type`, e.g. `city`, `house`.
    pub fn place_type(&self) -> Option<&str> {
        str_field(&self.data, "type")
    }

    pub fn importance(&self) -> Option<f64> {
        float_field(&self.data, "importance")
    }

    /// Attribution text, stored under the British spelling `licence`.
    pub fn license(&self) -> Option<&str> {
        str_field(&self.data, "licence")
    }

    /// True when `boundingbox` is present and is a sequence, whatever its length.
    pub fn has_bounding_box(&self) -> bool {
        seq_field(&self.data, "boundingbox").is_some()
    }

    /// The bounding box, or `None` when it is absent or malformed.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.try_bounding_box().unwrap_or_else(|err| {
            debug!("ignoring malformed bounding box: {err}");
            None
        })
    }

    /// Like [`Location::bounding_box`], but reports a malformed box instead of
    /// hiding it. A missing or non-sequence `boundingbox` is `Ok(None)`.
    pub fn try_bounding_box(&self) -> Result<Option<BoundingBox>, LocationError> {
        let Some(entries) = seq_field(&self.data, "boundingbox") else {
            return Ok(None);
        };

        if entries.len() < 4 {
            return Err(LocationError::BoundingBoxTooShort { len: entries.len() });
        }

        let entry = |index: usize| {
            to_f64(&entries[index]).ok_or(LocationError::BoundingBoxEntry { index })
        };

        Ok(Some(BoundingBox {
            min_lat: entry(0)?,
            max_lat: entry(1)?,
            min_lon: entry(2)?,
            max_lon: entry(3)?,
        }))
    }

    pub fn address(&self) -> Option<&Map<String, Value>> {
        map_field(&self.data, "address")
    }

    /// A single address component, e.g. `city`, `postcode`, `suburb`.
    pub fn address_component(&self, component: &str) -> Option<&str> {
        str_field(self.address()?, component)
    }

    pub fn house_number(&self) -> Option<&str> {
        self.address_component("house_number")
    }

    /// Street name; Nominatim calls it `road`.
    pub fn street(&self) -> Option<&str> {
        self.address_component("road")
    }

    pub fn city(&self) -> Option<&str> {
        self.address_component("city")
    }

    pub fn state(&self) -> Option<&str> {
        self.address_component("state")
    }

    pub fn postcode(&self) -> Option<&str> {
        self.address_component("postcode")
    }

    pub fn country(&self) -> Option<&str> {
        self.address_component("country")
    }

    /// ISO 3166-1 alpha-2 code, upper-cased (`us` becomes `US`).
    pub fn country_code(&self) -> Option<String> {
        self.address_component("country_code")
            .filter(|code| !code.is_empty())
            .map(str::to_ascii_uppercase)
    }

    pub fn borough(&self) -> Option<&str> {
        self.address_component("borough")
    }

    pub fn raw_data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn into_raw_data(self) -> Map<String, Value> {
        self.data
    }

    /// Collect every typed field, plus the requested extra address components
    /// that are present.
    pub fn summary<S: AsRef<str>>(&self, extra_components: &[S]) -> LocationSummary {
        let extra: BTreeMap<String, String> = extra_components
            .iter()
            .filter_map(|name| {
                let name = name.as_ref();
                self.address_component(name).map(|v| (name.to_string(), v.to_string()))
            })
            .collect();

        LocationSummary {
            display_name: self.display_name().map(str::to_string),
            latitude: self.latitude(),
            longitude: self.longitude(),
            place_id: self.place_id(),
            osm_type: self.osm_type().map(str::to_string),
            osm_id: self.osm_id(),
            class: self.class().map(str::to_string),
            place_type: self.place_type().map(str::to_string),
            importance: self.importance(),
            license: self.license().map(str::to_string),
            bounding_box: self.bounding_box(),
            house_number: self.house_number().map(str::to_string),
            street: self.street().map(str::to_string),
            city: self.city().map(str::to_string),
            state: self.state().map(str::to_string),
            postcode: self.postcode().map(str::to_string),
            country: self.country().map(str::to_string),
            country_code: self.country_code(),
            borough: self.borough().map(str::to_string),
            extra,
        }
    }
}

impl From<Map<String, Value>> for Location {
    fn from(data: Map<String, Value>) -> Self {
        Self::new(data)
    }
}

impl TryFrom<Value> for Location {
    type Error = LocationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(data) => Ok(Self::new(data)),
            other => Err(LocationError::NotAnObject { found: json_kind(&other) }),
        }
    }
}

/// Decode a provider response holding either one result object (reverse
/// geocoding) or an array of result objects (search).
pub fn parse_results(json: &str) -> Result<Vec<Location>, LocationError> {
    let value: Value = serde_json::from_str(json)?;

    match value {
        Value::Array(items) => items.into_iter().map(Location::try_from).collect(),
        other => Location::try_from(other).map(|location| vec![location]),
    }
}
