//! Command-line interface definitions
//!
//! Uses clap for argument parsing with derive macros.

use clap::{Parser, Subcommand};

/// autopulse - switch audio output to hotplugged devices
#[derive(Parser)]
#[command(name = "autopulse")]
#[command(version)]
#[command(about = "Switch PulseAudio output to the first available hotplug device")]
#[command(after_help = "\
BEHAVIOR:
  - switch moves output to the first connected hotplug sink, else the default sink
  - Hotplug sinks are checked in the order the audio server lists them
  - Switching sets the default sink and moves all playing streams onto it

IDENTIFIERS:
  Sinks are identified as VENDOR:PRODUCT, two 4-digit hex ids (e.g. 046d:0a44).
  Run 'autopulse list' to see the identifiers of connected outputs.

CONFIGURATION:
  ~/.config/autopulse.yml, then /etc/autopulse.yml:

    default: \"8086:a348\"
    hotplug:
      - \"046d:0a44\"

AUDIO SERVER:
  Uses pactl (PulseAudio 16+ or pipewire-pulse) with JSON output.
  Set RUST_LOG=debug to see every pactl call.")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Switch to the first available hotplug sink or the default
    Switch,

    /// List available outputs and identifiers
    #[command(visible_alias = "ls")]
    List,

    /// Switch the output to a given device
    #[command(visible_alias = "set")]
    SetOutput {
        /// Device identifier to switch to (VENDOR:PRODUCT, see `list`)
        id: String,
    },
}
