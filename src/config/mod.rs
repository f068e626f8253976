//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → resolve.rs (CLI overrides, fallback chains, prefix normalization)
//!     → HostConfig (resolved, immutable)
//!     → shared via Arc with the runtime and transport
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; nothing mutates it after bootstrap
//! - Unrecognized settings keys pass through to the runtime untouched
//! - Prefix normalization runs before gates install and routes mount, so
//!   gate prefixes and mount prefixes always match exactly

pub mod loader;
pub mod resolve;
pub mod roots;
pub mod schema;

pub use loader::SettingsError;
pub use resolve::HostConfig;
pub use schema::{Credentials, Settings, TlsSettings};
