//! Output switching
//!
//! Switching is two separate server operations: change the default sink, then
//! move every active stream. The server offers no transaction, so a failed move
//! leaves the default changed and earlier streams already moved.

use color_eyre::eyre::Result;
use tracing::{debug, info};

use crate::pulse::{AudioServer, LiveSink};

/// Make `sink` the default output and move all active streams onto it
///
/// # Errors
/// Returns the first server error; remaining streams are not moved.
pub fn switch_to(server: &mut impl AudioServer, sink: &LiveSink) -> Result<()> {
    server.set_default_sink(sink)?;

    let inputs = server.sink_inputs()?;
    for input in &inputs {
        debug!("Moving sink input {} from sink {}", input.index, input.sink);
        server.move_sink_input(input.index, sink.index)?;
    }

    info!(
        "Switched to {} ({} streams moved)",
        sink.name,
        inputs.len()
    );
    Ok(())
}
