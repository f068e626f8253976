//! Flowhost: bootstrap and lifecycle orchestration for an embeddable
//! flow-runtime HTTP front end.
//!
//! The host resolves settings, normalizes URL mount prefixes, installs
//! Basic-Auth gates, selects a plain or TLS transport, sequences the
//! runtime's asynchronous startup ahead of the socket bind, and handles
//! signals and faults for the rest of the process lifetime. The flow
//! runtime itself stays behind the [`runtime::FlowRuntime`] seam: an
//! embedder supplies an implementation and hands it to [`FlowHost`].
//!
//! ```text
//! argv → cli::resolve
//!      → config::loader (settings file)
//!      → config::resolve (overrides, fallbacks, prefix normalization)
//!      → http::gates + http::mount (routing surface)
//!      → net (plain or TLS transport)
//!      → lifecycle::startup (runtime ready, then bind)
//!      → lifecycle::signals / shutdown (rest of process lifetime)
//! ```

// Bootstrap subsystems
pub mod cli;
pub mod config;
pub mod http;
pub mod net;
pub mod runtime;

// Cross-cutting concerns
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use config::loader::SettingsError;
pub use config::resolve::HostConfig;
pub use config::schema::Settings;
pub use error::HostError;
pub use lifecycle::startup::{FlowHost, RunningHost};
pub use net::listener::BindError;
pub use runtime::{FlowRuntime, NoopRuntime};
