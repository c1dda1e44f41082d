//! rustls setup for the driver's TLS negotiation
//!
//! `sqlx` negotiates TLS according to `PGSSLMODE` (`prefer` by default), so
//! a process-wide crypto provider has to exist before the first connection.

use std::sync::OnceLock;

static CRYPTO_PROVIDER_INIT: OnceLock<()> = OnceLock::new();

/// Install the ring crypto provider once
///
/// If another provider is already installed it is kept.
pub fn ensure_crypto_provider() {
    CRYPTO_PROVIDER_INIT.get_or_init(|| {
        if rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
        {
            log::debug!("rustls crypto provider already installed");
        }
    });
}
