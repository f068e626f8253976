//! Settings resolution.
//!
//! Collapses the raw settings file plus CLI overrides into an immutable
//! [`HostConfig`]. Every fallback chain and prefix normalization happens
//! here, before any gate is installed or route mounted, so no later step
//! mutates configuration.

use std::path::PathBuf;

use crate::cli::InvocationArgs;
use crate::config::roots::normalize;
use crate::config::schema::{Credentials, Settings, TlsSettings};

/// Resolved host configuration, immutable after construction.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Bind address for the transport.
    pub ui_host: String,

    /// Bind port for the transport.
    pub ui_port: u16,

    /// Normalized admin mount prefix (leading and trailing `/`).
    pub admin_root: String,

    /// Normalized node mount prefix (leading and trailing `/`).
    pub node_root: String,

    /// Effective credential pair for the admin surface.
    pub admin_auth: Option<Credentials>,

    /// Effective credential pair for node-defined endpoints.
    pub node_auth: Option<Credentials>,

    /// Effective credential pair for static files. `None` unless static
    /// serving is enabled.
    pub static_auth: Option<Credentials>,

    /// TLS options; presence selects the encrypted transport.
    pub https: Option<TlsSettings>,

    /// Directory served as static files at the site root.
    pub http_static: Option<PathBuf>,

    /// Resolved flow definition file.
    pub flow_file: Option<PathBuf>,

    /// Verbose logging.
    pub verbose: bool,

    /// Settings keys the host does not recognize, preserved for the runtime.
    pub extra: toml::Table,
}

/// Resolve raw settings plus CLI arguments into a [`HostConfig`].
///
/// Fallback chains: each mount root falls back to `httpRoot` (default `/`)
/// and is normalized; each mount point's auth falls back to the shared
/// `httpAuth`. The CLI flow file and `-v` flag win over file values.
pub fn resolve(settings: Settings, args: &InvocationArgs) -> HostConfig {
    let http_root = settings.http_root.as_deref().unwrap_or("/");
    let admin_root = normalize(settings.http_admin_root.as_deref().unwrap_or(http_root));
    let node_root = normalize(settings.http_node_root.as_deref().unwrap_or(http_root));

    let shared = settings.http_auth;
    let admin_auth = settings.http_admin_auth.or_else(|| shared.clone());
    let node_auth = settings.http_node_auth.or_else(|| shared.clone());
    let static_auth = if settings.http_static.is_some() {
        settings.http_static_auth.or(shared)
    } else {
        None
    };

    HostConfig {
        ui_host: settings.ui_host,
        ui_port: settings.ui_port,
        admin_root,
        node_root,
        admin_auth,
        node_auth,
        static_auth,
        https: settings.https,
        http_static: settings.http_static,
        flow_file: args.flow_file.clone().or(settings.flow_file),
        verbose: args.verbose || settings.verbose,
        extra: settings.extra,
    }
}

impl HostConfig {
    /// URL scheme of the selected transport.
    pub fn scheme(&self) -> &'static str {
        if self.https.is_some() {
            "https"
        } else {
            "http"
        }
    }

    /// Externally reachable admin URL, announced once the socket is bound.
    ///
    /// A wildcard bind address is reported as the loopback address.
    pub fn admin_url(&self) -> String {
        let host = if self.ui_host == "0.0.0.0" {
            "127.0.0.1"
        } else {
            self.ui_host.as_str()
        };
        format!("{}://{}:{}{}", self.scheme(), host, self.ui_port, self.admin_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(user: &str) -> Credentials {
        Credentials {
            user: user.to_string(),
            pass_hash: "0".repeat(64),
        }
    }

    #[test]
    fn admin_root_falls_back_to_http_root() {
        let settings = Settings {
            http_root: Some("/ui".to_string()),
            ..Settings::default()
        };
        let cfg = resolve(settings, &InvocationArgs::default());
        assert_eq!(cfg.admin_root, "/ui/");
        assert_eq!(cfg.node_root, "/ui/");
    }

    #[test]
    fn roots_default_to_site_root() {
        let cfg = resolve(Settings::default(), &InvocationArgs::default());
        assert_eq!(cfg.admin_root, "/");
        assert_eq!(cfg.node_root, "/");
    }

    #[test]
    fn specific_root_wins_over_http_root() {
        let settings = Settings {
            http_root: Some("/ui".to_string()),
            http_node_root: Some("api".to_string()),
            ..Settings::default()
        };
        let cfg = resolve(settings, &InvocationArgs::default());
        assert_eq!(cfg.admin_root, "/ui/");
        assert_eq!(cfg.node_root, "/api/");
    }

    #[test]
    fn cli_verbose_wins_over_file_value() {
        let args = InvocationArgs {
            verbose: true,
            ..InvocationArgs::default()
        };
        let cfg = resolve(Settings::default(), &args);
        assert!(cfg.verbose);
    }

    #[test]
    fn cli_flow_file_wins_over_file_value() {
        let settings = Settings {
            flow_file: Some(PathBuf::from("from-settings.json")),
            ..Settings::default()
        };
        let args = InvocationArgs {
            flow_file: Some(PathBuf::from("from-cli.json")),
            ..InvocationArgs::default()
        };
        let cfg = resolve(settings.clone(), &args);
        assert_eq!(cfg.flow_file, Some(PathBuf::from("from-cli.json")));

        let cfg = resolve(settings, &InvocationArgs::default());
        assert_eq!(cfg.flow_file, Some(PathBuf::from("from-settings.json")));
    }

    #[test]
    fn mount_auth_falls_back_to_shared_auth() {
        let settings = Settings {
            http_auth: Some(creds("shared")),
            http_node_auth: Some(creds("node")),
            ..Settings::default()
        };
        let cfg = resolve(settings, &InvocationArgs::default());
        assert_eq!(cfg.admin_auth.unwrap().user, "shared");
        assert_eq!(cfg.node_auth.unwrap().user, "node");
    }

    #[test]
    fn static_auth_requires_static_serving() {
        let settings = Settings {
            http_auth: Some(creds("shared")),
            ..Settings::default()
        };
        let cfg = resolve(settings, &InvocationArgs::default());
        assert!(cfg.static_auth.is_none());

        let settings = Settings {
            http_auth: Some(creds("shared")),
            http_static: Some(PathBuf::from("/srv/www")),
            ..Settings::default()
        };
        let cfg = resolve(settings, &InvocationArgs::default());
        assert_eq!(cfg.static_auth.unwrap().user, "shared");
    }

    #[test]
    fn default_admin_url_uses_loopback() {
        let cfg = resolve(Settings::default(), &InvocationArgs::default());
        assert_eq!(cfg.admin_url(), "http://127.0.0.1:1880/");
    }

    #[test]
    fn explicit_host_is_announced_as_is() {
        let settings = Settings {
            ui_host: "192.168.1.5".to_string(),
            ui_port: 8080,
            http_admin_root: Some("ui".to_string()),
            ..Settings::default()
        };
        let cfg = resolve(settings, &InvocationArgs::default());
        assert_eq!(cfg.admin_url(), "http://192.168.1.5:8080/ui/");
    }

    #[test]
    fn tls_settings_select_https_scheme() {
        let settings = Settings {
            https: Some(TlsSettings {
                cert_path: PathBuf::from("cert.pem"),
                key_path: PathBuf::from("key.pem"),
            }),
            ..Settings::default()
        };
        let cfg = resolve(settings, &InvocationArgs::default());
        assert_eq!(cfg.scheme(), "https");
        assert_eq!(cfg.admin_url(), "https://127.0.0.1:1880/");
    }
}
