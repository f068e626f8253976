//! `flowhost` binary entry point.
//!
//! Process semantics: `--help` prints usage and exits 0; a settings-load
//! failure prints its diagnostic and exits non-zero before any server is
//! constructed; a signal-driven shutdown exits 0; every other fatal error
//! exits non-zero with its diagnostic.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use flowhost::cli::{self, ArgPolicy};
use flowhost::config::loader::{self, DEFAULT_SETTINGS_FILE};
use flowhost::config::resolve;
use flowhost::error::{self, HostError};
use flowhost::lifecycle::startup::FlowHost;
use flowhost::observability::logging;
use flowhost::runtime::NoopRuntime;

#[tokio::main]
async fn main() -> ExitCode {
    error::install_fault_handler();

    let args = match cli::resolve(std::env::args(), ArgPolicy::Lenient) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if args.help {
        print!("{}", cli::usage());
        return ExitCode::SUCCESS;
    }

    let settings_path = args
        .settings_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
    let settings = match loader::load_settings(&settings_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", HostError::from(e).exit_report());
            return ExitCode::FAILURE;
        }
    };

    let config = resolve::resolve(settings, &args);
    logging::init(config.verbose);

    let host = FlowHost::new(config, Arc::new(NoopRuntime));
    match host.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.exit_report());
            ExitCode::FAILURE
        }
    }
}
