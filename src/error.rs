//! Typed error kinds
//!
//! These are raised into `eyre` reports by the rest of the crate. Callers that
//! need to branch on the kind can recover it with `Report::downcast_ref`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::identifier::SinkIdentifier;

/// Errors reported by autopulse itself (as opposed to the audio server)
#[derive(Error, Debug)]
pub enum AutopulseError {
    /// Malformed `vendor:product` identifier
    #[error("Unable to parse sink identifier from: {0}")]
    Parse(String),

    /// No configuration file exists at any candidate path
    #[error(
        "Unable to load a configuration file from any of the following paths: \n{}",
        format_candidates(.0)
    )]
    ConfigNotFound(Vec<PathBuf>),

    /// The configuration file could not be read or is not valid YAML
    #[error("Unable to parse {}: {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },

    /// The configuration file parsed but has the wrong shape
    #[error("{0}")]
    ConfigShape(String),

    /// No live sink matches a required identifier
    #[error("Unable to find {role}: {id}")]
    SinkNotFound { role: SinkRole, id: SinkIdentifier },
}

/// What a required sink was being looked up for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkRole {
    /// The configured fallback sink (`switch`)
    Default,
    /// An explicitly requested device (`set-output`)
    Device,
}

impl fmt::Display for SinkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default sink"),
            Self::Device => f.write_str("device"),
        }
    }
}

fn format_candidates(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!(" - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_not_found_lists_every_candidate() {
        let err = AutopulseError::ConfigNotFound(vec![
            PathBuf::from("/home/me/.config/autopulse.yml"),
            PathBuf::from("/etc/autopulse.yml"),
        ]);

        assert_eq!(
            err.to_string(),
            "Unable to load a configuration file from any of the following paths: \n\
             \x20- /home/me/.config/autopulse.yml\n\
             \x20- /etc/autopulse.yml"
        );
    }

    #[test]
    fn sink_not_found_names_role_and_id() {
        let id: SinkIdentifier = "dead:beef".parse().unwrap();
        let err = AutopulseError::SinkNotFound {
            role: SinkRole::Device,
            id,
        };
        assert_eq!(err.to_string(), "Unable to find device: dead:beef");
    }
}
