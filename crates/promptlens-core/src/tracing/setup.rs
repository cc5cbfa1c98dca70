//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "PROMPTLENS_LOG";

/// Filter used when `PROMPTLENS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "promptlens=info";

/// Initialize the PromptLens tracing/logging system.
///
/// Reads `PROMPTLENS_LOG` for per-module log levels.
/// Format: `PROMPTLENS_LOG=promptlens_analysis::engine=debug,promptlens_core=warn`
///
/// Falls back to `promptlens=info` if `PROMPTLENS_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
