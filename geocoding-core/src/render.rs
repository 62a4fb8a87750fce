use crate::{
    Config, Location,
    render::{json::JsonRenderer, text::TextRenderer},
};
use std::fmt::Debug;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    pub const fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OutputFormat {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow::anyhow!("Unknown output format '{value}'. Supported formats: text, json.")),
        }
    }
}

pub trait LocationRenderer: Send + Sync + Debug {
    fn render(&self, location: &Location) -> anyhow::Result<String>;
}

/// Construct a renderer for an explicit format, carrying the configured extra
/// address components.
pub fn renderer_for(format: OutputFormat, config: &Config) -> Box<dyn LocationRenderer> {
    let extra = config.extra_components.clone();

    match format {
        OutputFormat::Text => Box::new(TextRenderer::new(extra)),
        OutputFormat::Json => Box::new(JsonRenderer::new(extra)),
    }
}

/// Construct the renderer for the configured `default_format`.
pub fn default_renderer_from_config(config: &Config) -> anyhow::Result<Box<dyn LocationRenderer>> {
    let format = config.default_format()?;
    Ok(renderer_for(format, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;

    #[test]
    fn output_format_as_str_roundtrip() {
        for format in OutputFormat::all() {
            let s = format.as_str();
            let parsed = OutputFormat::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*format, parsed);
        }
    }

    #[test]
    fn output_format_is_case_insensitive() {
        assert_eq!(OutputFormat::try_from("JSON").expect("JSON is known"), OutputFormat::Json);
    }

    #[test]
    fn unknown_format_error() {
        let err = OutputFormat::try_from("yaml").unwrap_err();
        assert!(err.to_string().contains("Unknown output format"));
    }

    #[test]
    fn default_renderer_is_text() {
        let cfg = Config::default();
        let renderer = default_renderer_from_config(&cfg).expect("default must resolve");
        let loc = Location::try_from(json!({ "display_name": "Springfield" }))
            .expect("fixture must be an object");

        let out = renderer.render(&loc).expect("render must succeed");
        assert_eq!(out, "Name: Springfield");
    }

    #[test]
    fn default_renderer_errors_on_invalid_stored_format() {
        let cfg = Config { default_format: Some("xml".to_string()), ..Default::default() };

        let err = default_renderer_from_config(&cfg).unwrap_err();

        let msg = format!("{err:#}");
        assert!(msg.contains("Invalid `default_format`"));
        assert!(msg.contains("Unknown output format 'xml'"));
    }

    #[test]
    fn renderer_for_json_uses_configured_extras() {
        let mut cfg = Config::default();
        cfg.add_extra_component("suburb");

        let renderer = renderer_for(OutputFormat::Json, &cfg);
        let loc = Location::try_from(json!({ "address": { "suburb": "Soho" } }))
            .expect("fixture must be an object");

        let out = renderer.render(&loc).expect("render must succeed");
        assert!(out.contains("\"suburb\": \"Soho\""));
    }
}
