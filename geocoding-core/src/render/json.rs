use anyhow::{Context, Result};

use crate::Location;

use super::LocationRenderer;

/// Pretty-printed JSON, either the typed summary or the raw mapping.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    extra_components: Vec<String>,
    raw: bool,
}

impl JsonRenderer {
    pub fn new(extra_components: Vec<String>) -> Self {
        Self { extra_components, raw: false }
    }

    /// Emit the provider's mapping untouched instead of the typed summary.
    pub fn raw() -> Self {
        Self { extra_components: Vec::new(), raw: true }
    }
}

impl LocationRenderer for JsonRenderer {
    fn render(&self, location: &Location) -> Result<String> {
        if self.raw {
            return serde_json::to_string_pretty(location.raw_data())
                .context("Failed to serialize raw location data to JSON");
        }

        let summary = location.summary(&self.extra_components);
        serde_json::to_string_pretty(&summary).context("Failed to serialize location summary to JSON")
    }
}
