//! Client-side TLS context construction.

use std::sync::Arc;

use rustls::{ClientConfig, RootCertStore};
use serde::Deserialize;

/// Cipher and protocol policy for outbound TLS.
///
/// Most upstream APIs work with `Default`. `Modern` restricts the client to
/// TLS 1.3 for integrations that talk to endpoints under the operator's
/// control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherPolicy {
    /// Platform default: TLS 1.2 and 1.3 with the provider's suites.
    #[default]
    Default,
    /// Broad compatibility. The ring provider carries no legacy CBC suites,
    /// so this currently matches `Default`; kept as a distinct policy so
    /// configs survive a provider change.
    Intermediate,
    /// TLS 1.3 only.
    Modern,
}

/// Build a ready-to-use client TLS context for the given policy.
///
/// Trust anchors come from the bundled webpki root store. Errors from the
/// TLS library propagate unmodified.
pub fn client_tls_config(policy: CipherPolicy) -> Result<ClientConfig, rustls::Error> {
    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let versions: &[&rustls::SupportedProtocolVersion] = match policy {
        CipherPolicy::Default | CipherPolicy::Intermediate => rustls::ALL_VERSIONS,
        CipherPolicy::Modern => &[&rustls::version::TLS13],
    };

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = ClientConfig::builder_with_provider(provider)
        .with_protocol_versions(versions)?
        .with_root_certificates(roots)
        .with_no_client_auth();

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_policies_build() {
        for policy in [
            CipherPolicy::Default,
            CipherPolicy::Intermediate,
            CipherPolicy::Modern,
        ] {
            assert!(client_tls_config(policy).is_ok(), "{policy:?}");
        }
    }

    #[test]
    fn policy_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: CipherPolicy,
        }

        let wrapper: Wrapper = toml::from_str("policy = \"modern\"").unwrap();
        assert_eq!(wrapper.policy, CipherPolicy::Modern);
    }
}
