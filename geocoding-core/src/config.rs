use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::render::OutputFormat;

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional default output format, e.g. "text" or "json".
    pub default_format: Option<String>,

    /// Address components shown in addition to the built-in ones.
    ///
    /// Example TOML:
    /// extra_components = ["suburb", "county"]
    #[serde(default)]
    pub extra_components: Vec<String>,
}

impl Config {
    /// Return the default format as a strongly-typed OutputFormat, `Text` when unset.
    pub fn default_format(&self) -> Result<OutputFormat> {
        match self.default_format.as_deref() {
            None => Ok(OutputFormat::default()),
            Some(s) => OutputFormat::try_from(s).with_context(|| {
                format!(
                    "Invalid `default_format` in configuration.\n\
                     Hint: run `geocode configure` to pick one of: {}.",
                    formats_list()
                )
            }),
        }
    }

    /// Store default format as string.
    pub fn set_default_format(&mut self, format: OutputFormat) {
        self.default_format = Some(format.as_str().to_string());
    }

    /// Add an extra address component; duplicates are ignored.
    pub fn add_extra_component(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.extra_components.iter().any(|c| c == name) {
            return;
        }
        self.extra_components.push(name.to_string());
    }

    /// Returns whether the component was configured.
    pub fn remove_extra_component(&mut self, name: &str) -> bool {
        let before = self.extra_components.len();
        self.extra_components.retain(|c| c != name);
        self.extra_components.len() != before
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "geocoding", "geocode")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn formats_list() -> String {
    OutputFormat::all().iter().map(OutputFormat::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_format_is_text_when_not_set() {
        let cfg = Config::default();

        assert_eq!(cfg.default_format().expect("unset format must resolve"), OutputFormat::Text);
    }

    #[test]
    fn invalid_default_format_errors_with_hint() {
        let cfg = Config { default_format: Some("xml".to_string()), ..Default::default() };
        let err = cfg.default_format().unwrap_err();

        let msg = format!("{err:#}");
        assert!(msg.contains("Hint: run `geocode configure`"));
        assert!(msg.contains("Unknown output format 'xml'"));
    }

    #[test]
    fn set_default_format_overrides_default() {
        let mut cfg = Config::default();

        cfg.set_default_format(OutputFormat::Json);

        assert_eq!(cfg.default_format.as_deref(), Some("json"));
        assert_eq!(cfg.default_format().expect("json must resolve"), OutputFormat::Json);
    }

    #[test]
    fn extra_components_are_deduplicated() {
        let mut cfg = Config::default();

        cfg.add_extra_component("suburb");
        cfg.add_extra_component(" suburb ");
        cfg.add_extra_component("");
        cfg.add_extra_component("county");

        assert_eq!(cfg.extra_components, ["suburb", "county"]);
        assert!(cfg.remove_extra_component("suburb"));
        assert!(!cfg.remove_extra_component("suburb"));
        assert_eq!(cfg.extra_components, ["county"]);
    }

    #[test]
    fn load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert!(cfg.default_format.is_none());
        assert!(cfg.extra_components.is_empty());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_default_format(OutputFormat::Json);
        cfg.add_extra_component("suburb");
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_format().unwrap(), OutputFormat::Json);
        assert_eq!(loaded.extra_components, ["suburb"]);
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_format = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
