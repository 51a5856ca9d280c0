//! Shared client handle with shutdown-only teardown.
//!
//! # Responsibilities
//! - Hand out the pooled `reqwest::Client` to any number of borrowers
//! - Refuse access once the hub has closed the client
//! - Keep teardown out of caller reach: no public close exists
//!
//! # Design Decisions
//! - Closed state is a lock-free pointer swap (arc-swap), requests on the
//!   hot path pay one atomic load
//! - `ClientLease` drops are inert; the pool outlives every lease
//! - Teardown is `pub(crate)`, reachable only from the factory's shutdown
//!   registration

use std::ops::Deref;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwapOption;
use reqwest::{Client, Method, RequestBuilder};

use crate::client::types::{ClientError, ClientResult};
use crate::lifecycle::ShutdownRegistration;

struct Inner {
    /// The live client, or `None` once the hub close event fired.
    client: ArcSwapOption<Client>,
    /// Token for the one-shot close listener, held for the handle's life.
    registration: OnceLock<ShutdownRegistration>,
}

/// Long-lived shared handle to the hub's HTTP client.
///
/// Clones are cheap and all refer to the same pool. The handle exposes no
/// close operation; teardown happens exactly once, when the hub emits its
/// close event.
#[derive(Clone)]
pub struct SharedClient {
    inner: Arc<Inner>,
}

impl SharedClient {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            inner: Arc::new(Inner {
                client: ArcSwapOption::from_pointee(client),
                registration: OnceLock::new(),
            }),
        }
    }

    pub(crate) fn attach_registration(&self, registration: ShutdownRegistration) {
        let _ = self.inner.registration.set(registration);
    }

    /// Borrow the underlying client for request building.
    ///
    /// Fails with [`ClientError::Closed`] after hub shutdown.
    pub fn client(&self) -> ClientResult<Arc<Client>> {
        self.inner.client.load_full().ok_or(ClientError::Closed)
    }

    /// Acquire a lease on the client.
    ///
    /// The lease is a plain borrow guard: dropping it returns nothing to
    /// the pool and never closes the shared client, so scoped use is always
    /// safe:
    ///
    /// ```no_run
    /// # fn poll(shared: &hub_http::SharedClient) -> Result<(), hub_http::ClientError> {
    /// {
    ///     let lease = shared.lease()?;
    ///     let _pending = lease.get("https://example.com/route");
    /// } // lease dropped, client stays open
    /// # Ok(())
    /// # }
    /// ```
    pub fn lease(&self) -> ClientResult<ClientLease> {
        Ok(ClientLease {
            client: self.client()?,
        })
    }

    /// Start building a request with the given method.
    pub fn request(&self, method: Method, url: &str) -> ClientResult<RequestBuilder> {
        Ok(self.client()?.request(method, url))
    }

    /// Start building a GET request.
    pub fn get(&self, url: &str) -> ClientResult<RequestBuilder> {
        self.request(Method::GET, url)
    }

    /// Start building a POST request.
    pub fn post(&self, url: &str) -> ClientResult<RequestBuilder> {
        self.request(Method::POST, url)
    }

    /// Whether hub shutdown has torn this client down.
    pub fn is_closed(&self) -> bool {
        self.inner.client.load().is_none()
    }

    /// Tear down the client in response to the hub close event.
    ///
    /// Takes the client out of the handle so every later accessor observes
    /// `Closed`, then releases this handle's reference to the pool. Pooled
    /// connections close as soon as outstanding leases are dropped. Calling
    /// this on an already-closed handle is a no-op.
    pub(crate) fn close(&self) {
        match self.inner.client.swap(None) {
            Some(client) => {
                drop(client);
                tracing::info!("shared HTTP client closed");
            }
            None => {
                tracing::debug!("shared HTTP client already closed");
            }
        }
    }
}

impl std::fmt::Debug for SharedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedClient")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Scoped borrow of the shared client.
///
/// Derefs to `reqwest::Client`. Dropping a lease has no effect on the
/// shared pool.
pub struct ClientLease {
    client: Arc<Client>,
}

impl Deref for ClientLease {
    type Target = Client;

    fn deref(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lease_drop_leaves_client_open() {
        let shared = SharedClient::new(Client::new());

        for _ in 0..3 {
            let lease = shared.lease().unwrap();
            drop(lease);
        }

        assert!(!shared.is_closed());
        assert!(shared.get("http://127.0.0.1:1/").is_ok());
    }

    #[test]
    fn close_is_idempotent() {
        let shared = SharedClient::new(Client::new());

        shared.close();
        assert!(shared.is_closed());
        assert!(matches!(shared.lease(), Err(ClientError::Closed)));

        // Second close must not panic or change anything.
        shared.close();
        assert!(shared.is_closed());
    }

    #[test]
    fn clones_observe_close() {
        let shared = SharedClient::new(Client::new());
        let other = shared.clone();

        shared.close();
        assert!(other.is_closed());
        assert!(matches!(other.client(), Err(ClientError::Closed)));
    }
}
