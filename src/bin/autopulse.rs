//! autopulse binary entry point
//!
//! Dispatches subcommands and turns any error into `ERROR: ...` on stderr with
//! exit status 1.

use clap::Parser;
use color_eyre::eyre::Result;
use std::io;
use std::process::ExitCode;
use tracing::debug;

use autopulse::{
    Config, SinkIdentifier,
    cli::{Args, Command},
    commands,
    pulse::{CLIENT_NAME, Pactl},
};

/// Initialize logging
///
/// Logs go to stderr so command output on stdout stays scriptable. Level comes
/// from `RUST_LOG`, defaulting to `warn`.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn run(command: Command) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match command {
        Command::Switch => {
            let config = Config::load()?;
            debug!("Loaded config from {}", config.path().display());

            // Resolve every configured id before touching the server
            let default_id = config.default_sink()?;
            let hotplug_ids = config.hotplug_sinks()?;

            let mut pulse = Pactl::connect(CLIENT_NAME)?;
            commands::switch(&mut pulse, &default_id, &hotplug_ids, &mut stdout)
        }

        Command::List => {
            let mut pulse = Pactl::connect(CLIENT_NAME)?;
            commands::list(&mut pulse, &mut stdout)
        }

        Command::SetOutput { id } => {
            let id: SinkIdentifier = id.parse()?;

            let mut pulse = Pactl::connect(CLIENT_NAME)?;
            commands::set_output(&mut pulse, &id, &mut stdout)
        }
    }
}

fn main() -> ExitCode {
    // Install color-eyre for panic handling
    if let Err(e) = color_eyre::install() {
        eprintln!("ERROR: {e}");
        return ExitCode::FAILURE;
    }

    let args = Args::parse();
    init_logging();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}
