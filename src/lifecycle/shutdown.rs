//! Shutdown coordination.
//!
//! The runtime's stop operation is awaited, but only up to [`STOP_GRACE`]:
//! a hung runtime cannot keep the process alive. In-flight requests are not
//! drained; the transport closes as soon as the runtime has stopped.

use std::sync::Arc;
use std::time::Duration;

use axum_server::Handle;

use crate::runtime::FlowRuntime;

/// Hard cap on how long the runtime's stop operation may run.
pub const STOP_GRACE: Duration = Duration::from_secs(10);

/// Stop the runtime, then close the transport.
pub async fn run(runtime: Arc<dyn FlowRuntime>, transport: Handle) {
    tracing::info!("Stopping flows");
    if tokio::time::timeout(STOP_GRACE, runtime.stop()).await.is_err() {
        tracing::warn!(
            timeout_secs = STOP_GRACE.as_secs(),
            "Flow shutdown timed out, terminating anyway"
        );
    }
    transport.shutdown();
}
