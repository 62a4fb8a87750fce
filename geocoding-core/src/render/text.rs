use anyhow::Result;

use crate::{Location, model::BoundingBox};

use super::LocationRenderer;

/// Plain `Label: value` lines, one per present field.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    extra_components: Vec<String>,
}

impl TextRenderer {
    pub fn new(extra_components: Vec<String>) -> Self {
        Self { extra_components }
    }
}

impl LocationRenderer for TextRenderer {
    fn render(&self, location: &Location) -> Result<String> {
        let mut lines: Vec<(String, String)> = Vec::new();
        let mut push = |label: &str, value: Option<String>| {
            if let Some(value) = value {
                lines.push((label.to_string(), value));
            }
        };

        push("Name", location.display_name().map(str::to_string));
        push(
            "Coordinates",
            location.coordinates().map(|c| format!("{}, {}", c.lat, c.lon)),
        );
        push("Place ID", location.place_id().map(|id| id.to_string()));
        push(
            "OSM",
            match (location.osm_type(), location.osm_id()) {
                (Some(kind), Some(id)) => Some(format!("{kind} {id}")),
                (Some(kind), None) => Some(kind.to_string()),
                (None, Some(id)) => Some(id.to_string()),
                (None, None) => None,
            },
        );
        push(
            "Category",
            match (location.class(), location.place_type()) {
                (Some(class), Some(kind)) => Some(format!("{class}/{kind}")),
                (class, kind) => class.or(kind).map(str::to_string),
            },
        );
        push("Importance", location.importance().map(|i| i.to_string()));
        push("Bounding box", location.bounding_box().map(format_bbox));
        push("House number", location.house_number().map(str::to_string));
        push("Street", location.street().map(str::to_string));
        push("Borough", location.borough().map(str::to_string));
        push("City", location.city().map(str::to_string));
        push("State", location.state().map(str::to_string));
        push("Postcode", location.postcode().map(str::to_string));
        push("Country", location.country().map(str::to_string));
        push("Country code", location.country_code());

        for name in &self.extra_components {
            push(name.as_str(), location.address_component(name).map(str::to_string));
        }

        push("Licence", location.license().map(str::to_string));

        let out = lines
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(out)
    }
}

fn format_bbox(bbox: BoundingBox) -> String {
    format!("{},{},{},{}", bbox.min_lat, bbox.max_lat, bbox.min_lon, bbox.max_lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn location(value: serde_json::Value) -> Location {
        Location::try_from(value).expect("fixture must be an object")
    }

    #[test]
    fn renders_present_fields_only() {
        let loc = location(json!({
            "lat": "51.5",
            "lon": "-0.12",
            "osm_type": "node",
            "osm_id": 42,
            "class": "place",
            "type": "city",
            "boundingbox": ["51.28", "51.69", "-0.51", "0.33"],
            "address": { "city": "London", "country_code": "gb" }
        }));

        let out = TextRenderer::default().render(&loc).expect("render must succeed");

        assert_eq!(
            out,
            "Coordinates: 51.5, -0.12\n\
             OSM: node 42\n\
             Category: place/city\n\
             Bounding box: 51.28,51.69,-0.51,0.33\n\
             City: London\n\
             Country code: GB"
        );
    }

    #[test]
    fn empty_location_renders_nothing() {
        let out = TextRenderer::default()
            .render(&Location::default())
            .expect("render must succeed");

        assert!(out.is_empty());
    }

    #[test]
    fn extra_components_follow_address() {
        let loc = location(json!({
            "address": { "suburb": "Soho", "country": "United Kingdom" },
            "licence": "ODbL"
        }));

        let renderer = TextRenderer::new(vec!["suburb".to_string(), "county".to_string()]);
        let out = renderer.render(&loc).expect("render must succeed");

        assert_eq!(out, "Country: United Kingdom\nsuburb: Soho\nLicence: ODbL");
    }
}
