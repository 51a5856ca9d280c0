//! Shared HTTP client subsystem.
//!
//! # Data Flow
//! ```text
//! Integration setup:
//!     ClientOptions (TOML or in code)
//!         → factory.rs (TLS + reqwest builder + close registration)
//!         → SharedClient (handle.rs), reused for every poll
//!
//! Hub shutdown:
//!     HubEvent::Close → one-shot listener → handle torn down
//! ```
//!
//! # Design Decisions
//! - The handle has no public close; only the hub close event tears it down
//! - Keep-alive expiry defaults to 15s, an explicit pool option overrides
//! - Outbound connections bind 0.0.0.0, disabling IPv6 egress

pub mod factory;
pub mod handle;
pub mod options;
pub mod types;

pub use factory::{create_client, server_software, APPLICATION_NAME, KEEP_ALIVE_TIMEOUT};
pub use handle::{ClientLease, SharedClient};
pub use options::{load_options, ClientOptions, PoolOptions};
pub use types::{ClientError, ClientResult, OptionsError};
