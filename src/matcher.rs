//! Sink matching
//!
//! Resolves configured identifiers against the server's live sink list.

use std::fmt;

use color_eyre::eyre::Result;

use crate::error::{AutopulseError, SinkRole};
use crate::identifier::SinkIdentifier;
use crate::pulse::LiveSink;

/// First live sink matching the configured default
///
/// # Errors
/// Returns [`AutopulseError::SinkNotFound`] if no live sink matches.
pub fn find_default<'a>(sinks: &'a [LiveSink], id: &SinkIdentifier) -> Result<&'a LiveSink> {
    find_required(sinks, id, SinkRole::Default)
}

/// First live sink matching an explicitly requested device
///
/// # Errors
/// Returns [`AutopulseError::SinkNotFound`] if no live sink matches.
pub fn find_device<'a>(sinks: &'a [LiveSink], id: &SinkIdentifier) -> Result<&'a LiveSink> {
    find_required(sinks, id, SinkRole::Device)
}

fn find_required<'a>(
    sinks: &'a [LiveSink],
    id: &SinkIdentifier,
    role: SinkRole,
) -> Result<&'a LiveSink> {
    let sink = sinks
        .iter()
        .find(|s| id.matches(s))
        .ok_or_else(|| AutopulseError::SinkNotFound {
            role,
            id: id.clone(),
        })?;
    Ok(sink)
}

/// First live sink that matches any configured hotplug id
///
/// Sinks are scanned in server order, so when several hotplug devices are
/// plugged in the one the server lists first wins, regardless of the order of
/// `ids`.
#[must_use]
pub fn find_hotplug<'a>(sinks: &'a [LiveSink], ids: &[SinkIdentifier]) -> Option<&'a LiveSink> {
    sinks.iter().find(|s| ids.iter().any(|id| id.matches(s)))
}

/// One line of `autopulse list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRow<'a> {
    pub is_default: bool,
    pub vendor_id: &'a str,
    pub product_id: &'a str,
    pub description: &'a str,
}

impl fmt::Display for SinkRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_default { '*' } else { ' ' };
        write!(
            f,
            " {marker} {}:{} {}",
            or_unknown(self.vendor_id),
            or_unknown(self.product_id),
            self.description
        )
    }
}

fn or_unknown(id: &str) -> &str {
    if id.is_empty() { "????" } else { id }
}

/// Rows for every live sink, marking the one named `default_name`
pub fn list_all<'a>(
    sinks: &'a [LiveSink],
    default_name: &'a str,
) -> impl Iterator<Item = SinkRow<'a>> + 'a {
    sinks.iter().map(move |sink| SinkRow {
        is_default: sink.name == default_name,
        vendor_id: sink.vendor_id(),
        product_id: sink.product_id(),
        description: sink.device_description(),
    })
}
