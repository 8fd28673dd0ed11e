//! Tracing setup
//!
//! Log output goes to stderr so it never mixes with prompts on stdout. The
//! filter is read from `BUDGET_SAVER_LOG` (e.g. `budget_saver=debug`).

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BUDGET_SAVER_LOG";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// Without `BUDGET_SAVER_LOG` only warnings are shown, or debug output when
/// `verbose` is set.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let fallback = if verbose { "budget_saver=debug" } else { "warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
