//! Shared HTTP client plumbing for a home-automation hub.
//!
//! Polling integrations (travel time, weather, energy prices) re-request
//! their upstream APIs every 10-30 seconds. Giving each of them a private
//! client would open a fresh TLS handshake per poll, so the hub hands out a
//! long-lived [`SharedClient`] per integration instance instead: pooled
//! keep-alive connections, a composed identification header, and IPv4-only
//! egress.
//!
//! # Architecture Overview
//!
//! ```text
//!   integration setup ──▶ create_client(runtime, policy, options)
//!                               │
//!                               ├─ net::tls        TLS context from CipherPolicy
//!                               ├─ client::factory reqwest client (UA, pool, IPv4)
//!                               └─ lifecycle       one-shot Close listener
//!                                                        │
//!   hub shutdown ──▶ HubRuntime::close() ──▶ HubEvent::Close ──▶ teardown
//! ```
//!
//! The handle deliberately exposes no close operation. Callers borrow it
//! (directly or through a [`ClientLease`]) and the only path to teardown is
//! the hub's global close event; see [`client::handle`].

pub mod client;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod runtime;

pub use client::factory::create_client;
pub use client::handle::{ClientLease, SharedClient};
pub use client::options::ClientOptions;
pub use client::types::ClientError;
pub use lifecycle::{HubEvent, Shutdown};
pub use net::tls::CipherPolicy;
pub use runtime::HubRuntime;
