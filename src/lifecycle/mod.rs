//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (shutdown.rs):
//!     listen_once(handle, event, callback)
//!         → task spawned on the hub executor
//!         → waits for first matching HubEvent
//!         → runs callback exactly once, then exits
//!
//! Shutdown:
//!     HubRuntime::close() → emit(HubEvent::Close) → listeners fire
//! ```
//!
//! # Design Decisions
//! - Broadcast bus: every listener gets its own receiver, no shared queue
//! - Listeners are one-shot: firing deregisters them automatically
//! - No ordering guarantee between listeners on the same event

pub mod shutdown;

pub use shutdown::{HubEvent, Shutdown, ShutdownRegistration};
