//! Interface to the embedded flow-execution runtime.
//!
//! The host treats the runtime as an opaque collaborator: it is handed the
//! live transport handle and the resolved configuration, asked for its admin
//! and node routing surfaces, started asynchronously before the socket
//! binds, and stopped (with a bounded wait) at shutdown. Everything behind
//! this trait (the flow engine, node execution, flow persistence) is out of
//! the host's scope.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum_server::Handle;
use thiserror::Error;

use crate::config::resolve::HostConfig;

/// Failure reported by the runtime's start operation. Fatal to the host;
/// the socket is never bound after a start failure.
#[derive(Debug, Error)]
#[error("flow runtime failed to start: {0}")]
pub struct RuntimeStartError(pub String);

/// The flow-execution runtime as consumed by the host.
#[async_trait]
pub trait FlowRuntime: Send + Sync {
    /// Hand the runtime its transport handle and the resolved settings.
    /// Called exactly once, before any route is mounted.
    fn init(&self, transport: Handle, config: Arc<HostConfig>);

    /// Routing surface mounted at the admin root.
    fn admin_router(&self) -> Router;

    /// Routing surface mounted at the node root.
    fn node_router(&self) -> Router;

    /// Start flows. The listening socket binds only after this resolves.
    async fn start(&self) -> Result<(), RuntimeStartError>;

    /// Stop flows. Awaited under a bounded timeout during shutdown.
    async fn stop(&self);
}

/// Stand-in runtime used by the `flowhost` binary when no engine is
/// embedded: empty routing surfaces, immediately ready.
#[derive(Debug, Default)]
pub struct NoopRuntime;

#[async_trait]
impl FlowRuntime for NoopRuntime {
    fn init(&self, _transport: Handle, _config: Arc<HostConfig>) {}

    fn admin_router(&self) -> Router {
        Router::new()
    }

    fn node_router(&self) -> Router {
        Router::new()
    }

    async fn start(&self) -> Result<(), RuntimeStartError> {
        Ok(())
    }

    async fn stop(&self) {}
}
