//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use argex_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding per-crate filter directives, e.g.
/// `ARGEX_LOG=argex_explain=debug,argex_pipeline=info`.
pub const LOG_ENV_VAR: &str = "ARGEX_LOG";

/// Initialize logging with the `argex=info` fallback.
///
/// Idempotent: only the first call in a process installs a subscriber.
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig::default());
}

/// Initialize logging; `ARGEX_LOG` wins over the configured level.
///
/// Installs the global subscriber, so the process must not have one yet.
/// Later calls are no-ops.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    let fallback = format!("argex={}", config.effective_log_level());
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
