//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve config → init runtime → mount routes → await runtime ready → bind
//!
//! Shutdown (shutdown.rs):
//!     Signal received → stop runtime (bounded wait) → close transport → exit
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: the socket binds only after the runtime reports ready
//! - Fail fast: any startup error is fatal, nothing is retried
//! - Runtime stop is awaited but capped; a hung stop cannot block exit
//! - In-flight requests are not drained at shutdown

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use startup::{FlowHost, RunningHost};
