//! CLI commands
//!
//! Each command runs against an open [`AudioServer`] session and writes its
//! human-readable output to `out`.

use color_eyre::eyre::Result;
use std::io::Write;
use tracing::info;

use crate::identifier::SinkIdentifier;
use crate::matcher::{find_default, find_device, find_hotplug, list_all};
use crate::pulse::AudioServer;
use crate::style::AutopulseStyle;
use crate::switcher::switch_to;

/// Switch to the first present hotplug sink, or the configured default
///
/// The default sink must be present even when a hotplug sink is, so a typo in
/// `default` is caught before it is needed.
///
/// # Errors
/// Returns an error if the default sink is not present or switching fails.
pub fn switch(
    server: &mut impl AudioServer,
    default_id: &SinkIdentifier,
    hotplug_ids: &[SinkIdentifier],
    out: &mut impl Write,
) -> Result<()> {
    let sinks = server.sinks()?;
    let default_sink = find_default(&sinks, default_id)?;

    if let Some(hotplug) = find_hotplug(&sinks, hotplug_ids) {
        info!("Hotplug sink present: {}", hotplug.name);
        writeln!(
            out,
            "{} \"{}\"",
            "Switching to Hotplug Sink:".success(),
            hotplug.device_description()
        )?;
        switch_to(server, hotplug)
    } else {
        info!("No hotplug sinks present, using default {}", default_sink.name);
        writeln!(
            out,
            "{} {}",
            "Switching to Default Sink, No Hotplug Sinks Found:".warning(),
            default_sink.device_description()
        )?;
        switch_to(server, default_sink)
    }
}

/// Print every sink with its identifier, marking the current default
///
/// # Errors
/// Returns an error if the server cannot be queried.
pub fn list(server: &mut impl AudioServer, out: &mut impl Write) -> Result<()> {
    let info = server.server_info()?;
    let sinks = server.sinks()?;

    for row in list_all(&sinks, &info.default_sink_name) {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

/// Switch to the sink matching `id`, ignoring the config
///
/// # Errors
/// Returns an error if no sink matches `id` or switching fails.
pub fn set_output(
    server: &mut impl AudioServer,
    id: &SinkIdentifier,
    out: &mut impl Write,
) -> Result<()> {
    let sinks = server.sinks()?;
    let sink = find_device(&sinks, id)?;

    writeln!(
        out,
        "{} \"{}\"",
        "Switching to Sink:".success(),
        sink.device_description()
    )?;
    switch_to(server, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AutopulseError, SinkRole};
    use crate::test_utils::{Call, FakeServer, sink};
    use pretty_assertions::assert_eq;

    fn id(value: &str) -> SinkIdentifier {
        value.parse().unwrap()
    }

    fn server() -> FakeServer {
        FakeServer::with_sinks(vec![
            sink(1, "1234", "5678", "A"),
            sink(2, "aaaa", "bbbb", "B"),
        ])
        .with_streams(1, &[20, 21])
    }

    #[test]
    fn test_switch_prefers_hotplug() {
        let mut server = server();
        let mut out = Vec::new();

        switch(&mut server, &id("1234:5678"), &[id("aaaa:bbbb")], &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Switching to Hotplug Sink:"));
        assert!(out.contains("\"B\""));
        assert_eq!(
            server.calls,
            vec![
                Call::SetDefault(2),
                Call::Move { input: 20, sink: 2 },
                Call::Move { input: 21, sink: 2 },
            ]
        );
    }

    #[test]
    fn test_switch_falls_back_to_default() {
        let mut server = server();
        let mut out = Vec::new();

        switch(&mut server, &id("1234:5678"), &[id("dead:beef")], &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Switching to Default Sink, No Hotplug Sinks Found:"));
        assert!(out.trim_end().ends_with(" A"));
        assert_eq!(server.calls[0], Call::SetDefault(1));
        assert_eq!(server.calls.len(), 3);
    }

    #[test]
    fn test_switch_with_no_hotplug_configured() {
        let mut server = server();
        let mut out = Vec::new();

        switch(&mut server, &id("aaaa:bbbb"), &[], &mut out).unwrap();

        assert_eq!(server.calls[0], Call::SetDefault(2));
    }

    #[test]
    fn test_switch_requires_default_even_with_hotplug_present() {
        let mut server = server();
        let mut out = Vec::new();

        let err = switch(&mut server, &id("dead:beef"), &[id("aaaa:bbbb")], &mut out).unwrap_err();

        assert_eq!(err.to_string(), "Unable to find default sink: dead:beef");
        assert!(server.calls.is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_list_prints_rows_with_default_marker() {
        let mut server = server();
        server.default_sink_name = server.sinks[0].name.clone();
        let mut out = Vec::new();

        list(&mut server, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            " * 1234:5678 A\n   aaaa:bbbb B\n"
        );
        assert!(server.calls.is_empty());
    }

    #[test]
    fn test_list_with_no_sinks_prints_nothing() {
        let mut server = FakeServer::default();
        let mut out = Vec::new();

        list(&mut server, &mut out).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn test_set_output_switches_to_requested_device() {
        let mut server = server();
        let mut out = Vec::new();

        set_output(&mut server, &id("AAAA:BBBB"), &mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().contains("\"B\""));
        assert_eq!(server.calls[0], Call::SetDefault(2));
        assert_eq!(server.calls.len(), 3);
    }

    #[test]
    fn test_set_output_unknown_device() {
        let mut server = server();
        let mut out = Vec::new();

        let err = set_output(&mut server, &id("dead:beef"), &mut out).unwrap_err();

        assert!(err.to_string().contains("dead:beef"));
        assert!(matches!(
            err.downcast_ref::<AutopulseError>(),
            Some(AutopulseError::SinkNotFound {
                role: SinkRole::Device,
                ..
            })
        ));
        assert!(server.calls.is_empty());
    }
}
