//! `autopulse` - automatic `PulseAudio` output switching
//!
//! Switches the default audio output to a configured "hotplug" device (a USB
//! headset, a dock) when it is connected, and back to a configured default when
//! it is not. Active streams are moved along with the default.
//!
//! Sinks are matched by the `vendor:product` ids the audio server reports, so
//! the same device is found whichever port it is plugged into. The audio server
//! is driven through `pactl`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod identifier;
pub mod matcher;
pub mod pulse;
pub mod style;
pub mod switcher;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types for convenience
pub use cli::Args;
pub use config::Config;
pub use error::AutopulseError;
pub use identifier::SinkIdentifier;
