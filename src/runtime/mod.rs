//! Host runtime context.
//!
//! # Responsibilities
//! - Hand integrations the hub's global event bus
//! - Translate hub shutdown into the `Close` lifecycle event
//!
//! # Design Decisions
//! - One `HubRuntime` per hub process by convention, not enforced
//! - The runtime owns the bus; components hold references, never the bus

use crate::lifecycle::{HubEvent, Shutdown};

/// Handle to the running hub application.
///
/// Integration components receive a reference at setup time and use it to
/// reach cross-cutting services, currently the lifecycle event bus.
pub struct HubRuntime {
    shutdown: Shutdown,
}

impl HubRuntime {
    /// Create a fresh runtime context.
    pub fn new() -> Self {
        Self {
            shutdown: Shutdown::new(),
        }
    }

    /// The hub's global lifecycle event bus.
    pub fn bus(&self) -> &Shutdown {
        &self.shutdown
    }

    /// Signal that the hub is closing.
    ///
    /// Every registered `Close` listener fires; shared resources such as
    /// HTTP client pools tear down in response.
    pub fn close(&self) {
        tracing::info!("hub closing");
        self.shutdown.emit(HubEvent::Close);
    }
}

impl Default for HubRuntime {
    fn default() -> Self {
        Self::new()
    }
}
