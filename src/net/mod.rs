//! Transport selection: listener binding and TLS loading.
//!
//! Exactly one transport exists per process. TLS settings in the resolved
//! configuration select the encrypted transport; otherwise the plain one.
//! Both forward every request to the same routing surface.

pub mod listener;
pub mod tls;

pub use listener::BindError;
