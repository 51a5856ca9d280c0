//! Network policy subsystem.
//!
//! # Data Flow
//! ```text
//! CipherPolicy (from integration config)
//!     → tls.rs (rustls ClientConfig with webpki roots)
//!     → client::factory (preconfigured TLS on the shared client)
//! ```
//!
//! # Design Decisions
//! - TLS context built once per client, immutable afterward
//! - IPv4-only egress is applied at the client layer, not here

pub mod tls;

pub use tls::CipherPolicy;
