//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the default directive follows the
/// resolved `verbose` setting. Called once, after settings resolution.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "flowhost=debug,tower_http=debug"
    } else {
        "flowhost=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
