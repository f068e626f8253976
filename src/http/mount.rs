//! Route mounting.
//!
//! Assembles the single request-routing surface: the runtime's admin and
//! node routers at their normalized prefixes, optional static files at the
//! site root, with the gate layer in front of all of it. Mounting happens
//! once during bootstrap, strictly before the socket binds.

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::resolve::HostConfig;
use crate::http::gates::{self, GateSet};
use crate::runtime::FlowRuntime;

/// Build the complete routing surface for the host.
pub fn build_router(cfg: &HostConfig, runtime: &dyn FlowRuntime, gates: Arc<GateSet>) -> Router {
    let mut app = Router::new();
    app = mount(app, &cfg.admin_root, runtime.admin_router());
    app = mount(app, &cfg.node_root, runtime.node_router());
    if let Some(dir) = &cfg.http_static {
        app = app.fallback_service(ServeDir::new(dir));
    }
    app.layer(middleware::from_fn_with_state(gates, gates::enforce))
        .layer(TraceLayer::new_for_http())
}

/// Mount a sub-router at a normalized prefix. Root mounts merge instead of
/// nesting, which axum reserves for non-root paths.
fn mount(app: Router, root: &str, routes: Router) -> Router {
    let bare = root.trim_end_matches('/');
    if bare.is_empty() {
        app.merge(routes)
    } else {
        app.nest(bare, routes)
    }
}
