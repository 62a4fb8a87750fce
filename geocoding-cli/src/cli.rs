use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use geocoding_core::{
    Config, OutputFormat,
    render::{self, LocationRenderer, json::JsonRenderer},
};
use inquire::{Select, Text};
use std::path::{Path, PathBuf};

use crate::input::{read_response, select_result};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "geocode", version, about = "Inspect saved Nominatim geocoding responses")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Choose the default output format and extra address components.
    Configure,

    /// Show the typed fields of a geocoding result.
    Show {
        /// Response file; reads stdin when omitted or "-".
        input: Option<PathBuf>,

        /// Output format, overriding the configured default ("text" or "json").
        #[arg(long)]
        format: Option<String>,

        /// Which result to show when the response holds several.
        #[arg(long, default_value_t = 0)]
        index: usize,

        /// Print the provider's raw JSON for the result.
        #[arg(long)]
        raw: bool,
    },

    /// Print one address component, e.g. "postcode" or "suburb".
    Component {
        /// Component name as used by the provider.
        name: String,

        /// Response file; reads stdin when omitted or "-".
        input: Option<PathBuf>,

        #[arg(long, default_value_t = 0)]
        index: usize,
    },

    /// Print the bounding box as min_lat,max_lat,min_lon,max_lon.
    Bbox {
        /// Response file; reads stdin when omitted or "-".
        input: Option<PathBuf>,

        #[arg(long, default_value_t = 0)]
        index: usize,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let output = match self.command {
            Command::Configure => return configure(),
            Command::Show { input, format, index, raw } => {
                let config = Config::load()?;
                show(input.as_deref(), format.as_deref(), index, raw, &config)?
            }
            Command::Component { name, input, index } => {
                component(input.as_deref(), &name, index)?
            }
            Command::Bbox { input, index } => bbox(input.as_deref(), index)?,
        };

        println!("{output}");
        Ok(())
    }
}

/// Render one result; `raw` wins over any format.
fn show(
    input: Option<&Path>,
    format: Option<&str>,
    index: usize,
    raw: bool,
    config: &Config,
) -> Result<String> {
    let location = select_result(&read_response(input)?, index)?;

    let renderer: Box<dyn LocationRenderer> = if raw {
        Box::new(JsonRenderer::raw())
    } else {
        match format {
            Some(f) => render::renderer_for(OutputFormat::try_from(f)?, config),
            None => render::default_renderer_from_config(config)?,
        }
    };

    renderer.render(&location)
}

fn component(input: Option<&Path>, name: &str, index: usize) -> Result<String> {
    let location = select_result(&read_response(input)?, index)?;
    let value = location
        .address_component(name)
        .ok_or_else(|| anyhow!("Address component '{name}' is not present in this result"))?;

    Ok(value.to_string())
}

fn bbox(input: Option<&Path>, index: usize) -> Result<String> {
    let location = select_result(&read_response(input)?, index)?;
    let bbox = location
        .try_bounding_box()?
        .ok_or_else(|| anyhow!("This result has no bounding box"))?;

    Ok(format!("{},{},{},{}", bbox.min_lat, bbox.max_lat, bbox.min_lon, bbox.max_lon))
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let current = config.default_format().unwrap_or_default();
    let formats = OutputFormat::all().to_vec();
    let cursor = formats.iter().position(|f| *f == current).unwrap_or(0);

    let format = Select::new("Default output format:", formats)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Format selection was cancelled")?;
    config.set_default_format(format);

    let existing = config.extra_components.join(", ");
    let components = Text::new("Extra address components (comma-separated):")
        .with_default(&existing)
        .prompt()
        .context("Component entry was cancelled")?;

    config.extra_components.clear();
    for name in components.split(',') {
        config.add_extra_component(name);
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
