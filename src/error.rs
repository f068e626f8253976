//! Host-level error taxonomy and fatal-fault reporting.
//!
//! Every variant is fatal: the process either completes the full bootstrap
//! sequence and binds, or it exits before binding. Nothing is retried.

use std::io;

use thiserror::Error;

use crate::config::loader::SettingsError;
use crate::net::listener::BindError;
use crate::runtime::RuntimeStartError;

/// Fatal bootstrap or transport failure.
#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("invalid bind address {host}")]
    InvalidBindAddress { host: String },

    #[error("failed to load TLS configuration")]
    Tls(#[source] io::Error),

    #[error(transparent)]
    RuntimeStart(#[from] RuntimeStartError),

    #[error(transparent)]
    Bind(#[from] BindError),

    #[error("transport error")]
    Transport(#[source] io::Error),
}

impl HostError {
    /// Render the diagnostic printed before a failure exit.
    ///
    /// Address-in-use keeps its dedicated two-line form and a missing
    /// settings file stays a single line naming the path; everything else
    /// gets a generic header followed by the full cause chain.
    pub fn exit_report(&self) -> String {
        match self {
            HostError::Settings(e @ SettingsError::NotFound { .. }) => e.to_string(),
            HostError::Bind(BindError::AddrInUse { url }) => {
                format!("Unable to listen on {url}\nError: port in use")
            }
            other => format!("Fatal error:\n{}", detail(other)),
        }
    }
}

fn detail(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\nCaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Install the process-wide fault handler: any uncaught panic prints a
/// generic header plus the fault detail and terminates with failure status.
/// Fires at most once per fault.
pub fn install_fault_handler() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("Fatal error:");
        eprintln!("{info}");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_settings_is_a_single_line() {
        let err = HostError::from(SettingsError::NotFound {
            path: PathBuf::from("./settings.toml"),
        });
        assert_eq!(err.exit_report(), "Unable to load settings file ./settings.toml");
    }

    #[test]
    fn port_in_use_is_the_two_line_form() {
        let err = HostError::from(BindError::AddrInUse {
            url: "http://127.0.0.1:1880/".to_string(),
        });
        assert_eq!(
            err.exit_report(),
            "Unable to listen on http://127.0.0.1:1880/\nError: port in use"
        );
    }

    #[test]
    fn other_faults_get_header_and_causes() {
        let err = HostError::Transport(io::Error::other("boom"));
        let report = err.exit_report();
        assert!(report.starts_with("Fatal error:\n"));
        assert!(report.contains("boom"));
    }

    #[test]
    fn runtime_start_failure_is_reported_in_full() {
        let err = HostError::from(RuntimeStartError("flow deploy failed".into()));
        let report = err.exit_report();
        assert!(report.contains("flow runtime failed to start"));
        assert!(report.contains("flow deploy failed"));
    }
}
