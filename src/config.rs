//! Configuration management
//!
//! Locates and parses the YAML configuration file:
//!
//! ```yaml
//! default: "8086:a348"
//! hotplug:
//!   - "046d:0a15"
//!   - "1b3f:2008"
//! ```
//!
//! The file is searched for at `~/.config/autopulse.yml`, then
//! `/etc/autopulse.yml`. `serde_yaml` only builds plain data, so tagged
//! values in the file can never construct anything.

use color_eyre::eyre::{Result, WrapErr};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::AutopulseError;
use crate::identifier::SinkIdentifier;

const CONFIG_FILE_NAME: &str = "autopulse.yml";
const SYSTEM_CONFIG_PATH: &str = "/etc/autopulse.yml";

/// Parsed configuration file
#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    values: Mapping,
}

impl Config {
    /// Candidate config paths in lookup order (user, then system)
    #[must_use]
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(CONFIG_FILE_NAME));
        }
        paths.push(PathBuf::from(SYSTEM_CONFIG_PATH));
        paths
    }

    /// First existing file among [`Config::candidate_paths`]
    ///
    /// # Errors
    /// Returns [`AutopulseError::ConfigNotFound`] if none exist.
    pub fn locate() -> Result<PathBuf> {
        Self::locate_in(&Self::candidate_paths())
    }

    /// First existing file among `candidates`
    ///
    /// # Errors
    /// Returns [`AutopulseError::ConfigNotFound`] listing every candidate if none exist.
    pub fn locate_in(candidates: &[PathBuf]) -> Result<PathBuf> {
        let found = candidates
            .iter()
            .find(|p| p.is_file())
            .cloned()
            .ok_or_else(|| AutopulseError::ConfigNotFound(candidates.to_vec()))?;

        debug!("Using config {}", found.display());
        Ok(found)
    }

    /// Locate and load the configuration file
    ///
    /// # Errors
    /// Returns an error if no config exists or it cannot be loaded.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::locate()?)
    }

    /// Load the configuration file at `path`
    ///
    /// # Errors
    /// Returns [`AutopulseError::ConfigParse`] if the file cannot be read or is
    /// not YAML, and [`AutopulseError::ConfigShape`] if it is not a mapping.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AutopulseError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_yaml(path, &contents)
    }

    fn from_yaml(path: &Path, contents: &str) -> Result<Self> {
        let value: Value =
            serde_yaml::from_str(contents).map_err(|e| AutopulseError::ConfigParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let Value::Mapping(values) = value else {
            return Err(AutopulseError::ConfigShape(
                "failed to parse dictionary from config.".to_string(),
            )
            .into());
        };

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// Where this configuration was loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The configured fallback sink
    ///
    /// # Errors
    /// Returns a wrapped [`AutopulseError::Parse`] if `default` is missing or
    /// not a valid identifier.
    pub fn default_sink(&self) -> Result<SinkIdentifier> {
        parse_value(self.values.get("default"))
            .wrap_err("Unable to load default sink from config")
    }

    /// The configured hotplug sinks, in file order
    ///
    /// A missing `hotplug` key means no hotplug sinks.
    ///
    /// # Errors
    /// Returns [`AutopulseError::ConfigShape`] if `hotplug` is not a list, and a
    /// wrapped [`AutopulseError::Parse`] for the first invalid entry.
    pub fn hotplug_sinks(&self) -> Result<Vec<SinkIdentifier>> {
        let entries = match self.values.get("hotplug") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Sequence(entries)) => entries,
            Some(_) => {
                return Err(AutopulseError::ConfigShape(
                    "hotplug must be a list of sink identifiers.".to_string(),
                )
                .into());
            }
        };

        entries
            .iter()
            .map(|entry| parse_value(Some(entry)).wrap_err("Unable to parse hotplug sink id"))
            .collect()
    }
}

/// Parse a YAML scalar as an identifier
fn parse_value(value: Option<&Value>) -> Result<SinkIdentifier, AutopulseError> {
    match value {
        Some(Value::String(s)) => s.parse(),
        Some(other) => Err(AutopulseError::Parse(describe(other))),
        None => Err(AutopulseError::Parse("nothing".to_string())),
    }
}

/// Render a non-string YAML value for an error message
fn describe(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| format!("{value:?}"))
}
