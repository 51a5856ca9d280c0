//! Shutdown coordination for the hub.

use std::future::Future;

use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Named lifecycle events carried on the hub's event bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubEvent {
    /// The hub is closing; shared resources must tear down.
    Close,
}

/// Event bus for hub lifecycle events.
///
/// Provides a broadcast channel that long-running components subscribe to,
/// plus one-shot listener registration for teardown callbacks.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<HubEvent>,
}

impl Shutdown {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(8);
        Self { tx }
    }

    /// Subscribe to lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<HubEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all current listeners.
    pub fn emit(&self, event: HubEvent) {
        let _ = self.tx.send(event);
    }

    /// Get the number of active listeners.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Register a one-shot listener for `event`.
    ///
    /// Spawns a task on `handle` that waits for the first matching event,
    /// runs `callback` once, and exits. Registration returns immediately;
    /// the callback runs on the hub executor whenever the event fires.
    ///
    /// The `handle` parameter doubles as proof that a runtime exists: only
    /// code already inside (or holding onto) the hub executor can produce
    /// one.
    pub fn listen_once<F, Fut>(
        &self,
        handle: &Handle,
        event: HubEvent,
        callback: F,
    ) -> ShutdownRegistration
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut rx = self.tx.subscribe();
        let task = handle.spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(ev) if ev == event => {
                        callback().await;
                        break;
                    }
                    Ok(_) => continue,
                    // Missed events are lost; for teardown that only matters
                    // if more than the channel capacity fired in one burst.
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
        ShutdownRegistration { task }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Token for a registered one-shot listener.
///
/// Dropping the token detaches the listener task; it still fires when its
/// event arrives. There is no way to re-arm a fired listener.
#[derive(Debug)]
pub struct ShutdownRegistration {
    task: JoinHandle<()>,
}

impl ShutdownRegistration {
    /// Whether the listener has fired (or its bus was dropped).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
