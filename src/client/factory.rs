//! Shared client construction.
//!
//! # Responsibilities
//! - Build the TLS context for the requested cipher policy
//! - Assemble the reqwest client: identification header, pool limits,
//!   IPv4-only egress, forwarded options
//! - Register the one-shot teardown against the hub close event
//!
//! # Design Decisions
//! - Construction performs no network I/O; the pool fills lazily
//! - Fail fast outside the hub executor, before anything is registered
//! - One handle per call; callers own reuse, the hub owns teardown

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::Client;
use tokio::runtime::Handle;

use crate::client::handle::SharedClient;
use crate::client::options::ClientOptions;
use crate::client::types::{ClientError, ClientResult};
use crate::lifecycle::HubEvent;
use crate::net::tls::{client_tls_config, CipherPolicy};
use crate::runtime::HubRuntime;

/// Most hub integrations poll every 10-30 seconds. 15 seconds keeps the
/// connection warm between polls without holding it open indefinitely, and
/// matches what the rest of the ecosystem uses for this workload.
pub const KEEP_ALIVE_TIMEOUT: Duration = Duration::from_secs(15);

/// Name the hub identifies itself as to upstream APIs.
pub const APPLICATION_NAME: &str = "HomeHub";

const HTTP_LIB_NAME: &str = "reqwest";
const HTTP_LIB_VERSION: &str = "0.12";
const RUNTIME_NAME: &str = "tokio";
const RUNTIME_VERSION: &str = "1";

/// Composed identification string sent as the default `User-Agent`.
pub fn server_software() -> String {
    format!(
        "{APPLICATION_NAME}/{} {HTTP_LIB_NAME}/{HTTP_LIB_VERSION} {RUNTIME_NAME}/{RUNTIME_VERSION}",
        env!("CARGO_PKG_VERSION"),
    )
}

/// Create a new shared HTTP client and register its teardown.
///
/// Forces use of IPv4 for outbound connections; some mapping and traffic
/// APIs still misbehave over IPv6.
///
/// Must be called from within the hub executor: the factory spawns the
/// close listener on the current runtime and returns
/// [`ClientError::NoRuntime`] when none is present. Construction itself
/// performs no network I/O.
///
/// The returned handle is independent per call. It stays open until the
/// hub emits [`HubEvent::Close`]; nothing a caller does with the handle or
/// its leases can close it earlier.
pub fn create_client(
    runtime: &HubRuntime,
    cipher_policy: CipherPolicy,
    options: ClientOptions,
) -> ClientResult<SharedClient> {
    let executor = Handle::try_current().map_err(|_| ClientError::NoRuntime)?;

    let tls = client_tls_config(cipher_policy)?;
    let client = build_client(tls, &options)?;
    let shared = SharedClient::new(client);

    let teardown = shared.clone();
    let registration = runtime
        .bus()
        .listen_once(&executor, HubEvent::Close, move || async move {
            teardown.close();
        });
    shared.attach_registration(registration);

    tracing::debug!(policy = ?cipher_policy, "shared HTTP client created");
    Ok(shared)
}

fn build_client(tls: rustls::ClientConfig, options: &ClientOptions) -> ClientResult<Client> {
    let headers = default_headers(options)?;

    let mut builder = Client::builder()
        .use_preconfigured_tls(tls)
        .default_headers(headers)
        .pool_idle_timeout(options.keepalive_expiry())
        .local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if let Some(pool) = &options.pool {
        if let Some(max_idle) = pool.max_idle_per_host {
            builder = builder.pool_max_idle_per_host(max_idle);
        }
    }
    if let Some(secs) = options.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if options.cookie_store {
        builder = builder.cookie_store(true);
    }

    Ok(builder.build()?)
}

/// Identification header first, then per-integration extras. An extra with
/// the same name overrides, which mirrors how callers expect header maps to
/// merge.
fn default_headers(options: &ClientOptions) -> ClientResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(&server_software())?);

    for (name, value) in &options.headers {
        let name: HeaderName = name.parse()?;
        headers.insert(name, HeaderValue::from_str(value)?);
    }

    Ok(headers)
}
