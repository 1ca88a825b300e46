//! Shared helpers for roster-core integration tests.

use std::sync::Arc;

use roster_core::rbac::RoleRegistry;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a test-friendly subscriber once per test binary. Override the
/// level via RUST_LOG.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,roster_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// A fresh, isolated registry seeded with the default roles.
#[allow(dead_code)]
pub fn registry() -> Arc<RoleRegistry> {
    Arc::new(RoleRegistry::new())
}
