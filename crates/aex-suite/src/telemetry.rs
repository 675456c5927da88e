//! Log output for test runs.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

/// Install the `tracing` subscriber.
///
/// Filter from `RUST_LOG`, default `info`. Safe to call from every test;
/// only the first call installs anything, and an already-installed global
/// subscriber is left alone.
pub fn init() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}
