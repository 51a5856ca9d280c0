//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Level configurable through `RUST_LOG`, falling back to a supplied
//!   default
//! - Client lifecycle events log at debug (create) and info (teardown)

pub mod logging;

pub use logging::init_logging;
