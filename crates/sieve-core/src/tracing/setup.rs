//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install a global subscriber for binaries and tests that want output.
///
/// Reads the `SIEVE_LOG` environment variable, e.g.
/// `SIEVE_LOG=sieve_analysis=debug`. Falls back to `sieve=info` if unset
/// or invalid. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SIEVE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("sieve=info"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
