//! `PulseAudio` integration
//!
//! The rest of the crate talks to the audio server through the [`AudioServer`]
//! trait. [`Pactl`] is the production implementation: it drives the `pactl`
//! tool with `--format=json` (`PulseAudio` 16+ or `pipewire-pulse`), so no
//! native client library is linked.
//!
//! `pactl` must be present in `PATH` for autopulse to function.

use color_eyre::eyre::{self, Result, WrapErr};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::process::Command;
use tracing::{debug, trace};

/// Client name reported to the audio server
pub const CLIENT_NAME: &str = "autopulse";

const PROP_VENDOR_ID: &str = "device.vendor.id";
const PROP_PRODUCT_ID: &str = "device.product.id";
const PROP_DESCRIPTION: &str = "device.description";

// ============================================================================
// Server Snapshot Types (from pactl --format=json)
// ============================================================================

/// An audio output as currently known to the server
#[derive(Debug, Clone, Deserialize)]
pub struct LiveSink {
    pub index: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl LiveSink {
    /// `device.vendor.id`, or `""` when the server doesn't report one
    #[must_use]
    pub fn vendor_id(&self) -> &str {
        self.property(PROP_VENDOR_ID)
    }

    /// `device.product.id`, or `""` when the server doesn't report one
    #[must_use]
    pub fn product_id(&self) -> &str {
        self.property(PROP_PRODUCT_ID)
    }

    /// `device.description`, falling back to the sink's own description
    #[must_use]
    pub fn device_description(&self) -> &str {
        self.properties
            .get(PROP_DESCRIPTION)
            .map_or(self.description.as_str(), String::as_str)
    }

    fn property(&self, key: &str) -> &str {
        self.properties.get(key).map_or("", String::as_str)
    }
}

/// An active stream and the sink it is routed to
#[derive(Debug, Clone, Deserialize)]
pub struct SinkInput {
    pub index: u32,
    pub sink: u32,
}

/// Subset of `pactl info` autopulse cares about
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerInfo {
    #[serde(default)]
    pub default_sink_name: String,
}

// ============================================================================
// Audio Server Interface
// ============================================================================

/// Operations autopulse needs from the audio server
///
/// One value per invocation; it is passed explicitly to every operation.
pub trait AudioServer {
    /// Current sinks in server order
    ///
    /// # Errors
    /// Returns an error if the server cannot be queried.
    fn sinks(&mut self) -> Result<Vec<LiveSink>>;

    /// Server info, including the current default sink name
    ///
    /// # Errors
    /// Returns an error if the server cannot be queried.
    fn server_info(&mut self) -> Result<ServerInfo>;

    /// Currently active streams
    ///
    /// # Errors
    /// Returns an error if the server cannot be queried.
    fn sink_inputs(&mut self) -> Result<Vec<SinkInput>>;

    /// Make `sink` the server's default output
    ///
    /// # Errors
    /// Returns an error if the server rejects the change.
    fn set_default_sink(&mut self, sink: &LiveSink) -> Result<()>;

    /// Route the stream `input_index` to the sink `sink_index`
    ///
    /// # Errors
    /// Returns an error if the server rejects the move.
    fn move_sink_input(&mut self, input_index: u32, sink_index: u32) -> Result<()>;
}

// ============================================================================
// pactl Implementation
// ============================================================================

/// `pactl`-backed session with the audio server
#[derive(Debug)]
pub struct Pactl {
    client_name: String,
}

impl Pactl {
    /// Open a session under `client_name`
    ///
    /// Verifies `pactl` is installed and the server answers `pactl info`.
    ///
    /// # Errors
    /// Returns an error with installation hints if `pactl` is missing, or the
    /// server's own message if it cannot be reached.
    pub fn connect(client_name: &str) -> Result<Self> {
        let session = Self {
            client_name: client_name.to_string(),
        };

        let info = session.server_info_json().wrap_err(
            "Unable to connect to the audio server.\n\
             \n\
             autopulse needs 'pactl' from PulseAudio 16+ (or pipewire-pulse):\n\
             - Arch/Manjaro: pacman -S libpulse\n\
             - Fedora: dnf install pulseaudio-utils\n\
             - Debian/Ubuntu: apt install pulseaudio-utils",
        )?;

        debug!(
            "Connected as '{}' (default sink: {})",
            session.client_name, info.default_sink_name
        );
        Ok(session)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("pactl");
        cmd.arg(format!("--client-name={}", self.client_name));
        cmd
    }

    /// Run `pactl <args>` and return its stdout
    fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        trace!("pactl {}", args.join(" "));

        let output = self
            .command()
            .args(args)
            .output()
            .wrap_err("Audio tool 'pactl' not found or failed. Is PulseAudio installed?")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            eyre::bail!("pactl {} failed: {}", args.join(" "), stderr.trim());
        }

        Ok(output.stdout)
    }

    /// Run a `pactl --format=json` query and deserialize the result
    fn query<T: DeserializeOwned>(&self, args: &[&str]) -> Result<T> {
        let mut full = vec!["--format=json"];
        full.extend_from_slice(args);

        let stdout = self.run(&full)?;
        serde_json::from_slice(&stdout)
            .wrap_err_with(|| format!("Failed to parse 'pactl {}' JSON", args.join(" ")))
    }

    fn server_info_json(&self) -> Result<ServerInfo> {
        self.query(&["info"])
    }
}

impl AudioServer for Pactl {
    fn sinks(&mut self) -> Result<Vec<LiveSink>> {
        let sinks: Vec<LiveSink> = self.query(&["list", "sinks"])?;
        trace!("pactl returned {} sinks", sinks.len());
        Ok(sinks)
    }

    fn server_info(&mut self) -> Result<ServerInfo> {
        self.server_info_json()
    }

    fn sink_inputs(&mut self) -> Result<Vec<SinkInput>> {
        let inputs: Vec<SinkInput> = self.query(&["list", "sink-inputs"])?;
        trace!("pactl returned {} sink inputs", inputs.len());
        Ok(inputs)
    }

    fn set_default_sink(&mut self, sink: &LiveSink) -> Result<()> {
        self.run(&["set-default-sink", &sink.name])
            .wrap_err_with(|| format!("Failed to set default sink to '{}'", sink.name))?;

        debug!("Set default sink: {}", sink.name);
        Ok(())
    }

    fn move_sink_input(&mut self, input_index: u32, sink_index: u32) -> Result<()> {
        let input = input_index.to_string();
        let target = sink_index.to_string();
        self.run(&["move-sink-input", &input, &target])
            .wrap_err_with(|| {
                format!("Failed to move sink input {input_index} to sink {sink_index}")
            })?;

        debug!("Moved sink input {} to sink {}", input_index, sink_index);
        Ok(())
    }
}
