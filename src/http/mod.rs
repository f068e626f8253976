//! Request-routing surface assembly.
//!
//! # Design Decisions
//! - Gates are an ordered prefix list evaluated before route dispatch, not
//!   per-route middleware, so a gate always covers its prefix's sub-paths
//! - The routing surface is mutated during bootstrap only; after the socket
//!   binds it is read-only from the host's perspective

pub mod gates;
pub mod mount;

pub use gates::{AuthGate, GateSet};
