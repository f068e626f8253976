//! Basic-Auth gates evaluated ahead of route dispatch.
//!
//! Gates form an ordered list of `(prefix, AuthGate)` registrations built
//! from the resolved configuration: admin root, node root, then the site
//! root when static serving is enabled. The first prefix covering a request
//! path decides which credential pair guards it; paths with no matching
//! prefix pass through unauthenticated. The whole set runs as one middleware
//! layer wrapped around the router, so every gate fires before any content
//! handler.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::Engine;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::config::resolve::HostConfig;
use crate::config::schema::Credentials;

/// Basic-Auth predicate for one mount prefix.
///
/// Usernames compare exactly; passwords compare as hex SHA-256 digests
/// against the stored digest. Both comparisons are constant-time.
#[derive(Debug, Clone)]
pub struct AuthGate {
    user: String,
    pass_hash: String,
}

impl AuthGate {
    pub fn new(creds: &Credentials) -> Self {
        Self {
            user: creds.user.clone(),
            pass_hash: creds.pass_hash.to_ascii_lowercase(),
        }
    }

    /// Check a supplied user/password pair against the configured credential.
    pub fn check(&self, user: &str, pass: &str) -> bool {
        let digest = hex_digest(pass);
        let user_ok = user.as_bytes().ct_eq(self.user.as_bytes());
        let pass_ok = digest.as_bytes().ct_eq(self.pass_hash.as_bytes());
        bool::from(user_ok & pass_ok)
    }
}

fn hex_digest(pass: &str) -> String {
    use std::fmt::Write;
    Sha256::digest(pass.as_bytes())
        .iter()
        .fold(String::with_capacity(64), |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        })
}

/// Ordered gate registrations. First matching prefix wins.
#[derive(Debug, Default)]
pub struct GateSet {
    gates: Vec<(String, AuthGate)>,
}

impl GateSet {
    /// Build the gate list from resolved configuration.
    ///
    /// Registration order is fixed: admin root, node root, then the site
    /// root when static serving is enabled. Mount points without an
    /// effective credential get no gate.
    pub fn from_config(cfg: &HostConfig) -> Self {
        let mut gates = Vec::new();
        if let Some(creds) = &cfg.admin_auth {
            gates.push((cfg.admin_root.clone(), AuthGate::new(creds)));
        }
        if let Some(creds) = &cfg.node_auth {
            gates.push((cfg.node_root.clone(), AuthGate::new(creds)));
        }
        if cfg.http_static.is_some() {
            if let Some(creds) = &cfg.static_auth {
                gates.push(("/".to_string(), AuthGate::new(creds)));
            }
        }
        Self { gates }
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// First gate whose prefix covers the request path.
    pub fn matching(&self, path: &str) -> Option<&AuthGate> {
        self.gates
            .iter()
            .find(|(prefix, _)| prefix_covers(prefix, path))
            .map(|(_, gate)| gate)
    }
}

/// A normalized prefix (`/x/`) covers itself, itself without the trailing
/// slash, and every sub-path.
fn prefix_covers(prefix: &str, path: &str) -> bool {
    if path.starts_with(prefix) {
        return true;
    }
    let bare = prefix.trim_end_matches('/');
    !bare.is_empty() && path == bare
}

/// Middleware entry: enforce the first matching gate, if any.
pub async fn enforce(State(gates): State<Arc<GateSet>>, request: Request, next: Next) -> Response {
    let Some(gate) = gates.matching(request.uri().path()) else {
        return next.run(request).await;
    };
    match basic_credentials(request.headers()) {
        Some((user, pass)) if gate.check(&user, &pass) => next.run(request).await,
        _ => challenge(),
    }
}

/// Decode `Authorization: Basic` credentials, if present and well-formed.
/// The scheme name is case-insensitive per RFC 7617.
fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Basic") {
        return None;
    }
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, pass) = decoded.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}

fn challenge() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"flowhost\"")],
    )
        .into_response()
}
