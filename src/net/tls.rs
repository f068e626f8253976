//! TLS configuration loading for the encrypted transport.

use std::io;
use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;

use crate::config::schema::TlsSettings;

/// Load the Rustls configuration from the configured certificate and key.
pub async fn load_tls(settings: &TlsSettings) -> Result<RustlsConfig, io::Error> {
    ensure_exists(&settings.cert_path, "certificate")?;
    ensure_exists(&settings.key_path, "private key")?;
    RustlsConfig::from_pem_file(&settings.cert_path, &settings.key_path).await
}

fn ensure_exists(path: &Path, what: &str) -> Result<(), io::Error> {
    if path.exists() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("TLS {} file not found: {}", what, path.display()),
        ))
    }
}
