//! Settings schema definitions.
//!
//! All types derive Serde traits for deserialization from the settings file.
//! Keys are camelCase on the wire (`uiHost`, `httpAdminRoot`, ...). Keys the
//! host does not recognize are captured in `extra` and passed through to the
//! runtime untouched.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw settings as read from the settings file, before resolution.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Bind address for the transport.
    pub ui_host: String,

    /// Bind port for the transport.
    pub ui_port: u16,

    /// Default URL prefix for both the admin and node surfaces.
    pub http_root: Option<String>,

    /// URL prefix for the admin surface; falls back to `httpRoot`.
    pub http_admin_root: Option<String>,

    /// URL prefix for node-defined endpoints; falls back to `httpRoot`.
    pub http_node_root: Option<String>,

    /// Shared credential pair, used wherever a specific one is unset.
    pub http_auth: Option<Credentials>,

    /// Credential pair guarding the admin surface.
    pub http_admin_auth: Option<Credentials>,

    /// Credential pair guarding node-defined endpoints.
    pub http_node_auth: Option<Credentials>,

    /// Credential pair guarding static files.
    pub http_static_auth: Option<Credentials>,

    /// TLS options; presence selects the encrypted transport.
    pub https: Option<TlsSettings>,

    /// Directory served as static files at the site root.
    pub http_static: Option<PathBuf>,

    /// Flow definition file. A CLI-supplied path takes precedence.
    pub flow_file: Option<PathBuf>,

    /// Verbose logging. Forced on by the `-v` flag.
    pub verbose: bool,

    /// Unrecognized settings keys, preserved for the runtime.
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui_host: "0.0.0.0".to_string(),
            ui_port: 1880,
            http_root: None,
            http_admin_root: None,
            http_node_root: None,
            http_auth: None,
            http_admin_auth: None,
            http_node_auth: None,
            http_static_auth: None,
            https: None,
            http_static: None,
            flow_file: None,
            verbose: false,
            extra: toml::Table::new(),
        }
    }
}

/// Basic-Auth credential pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Username, compared by exact match.
    pub user: String,

    /// Hex SHA-256 digest of the password.
    pub pass_hash: String,
}

/// TLS options for the encrypted transport.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsSettings {
    /// Path to the certificate file (PEM).
    pub cert_path: PathBuf,

    /// Path to the private key file (PEM).
    pub key_path: PathBuf,
}
