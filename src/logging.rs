//! Tracing setup
//!
//! Events go to stderr so that listings and summaries on stdout stay clean.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "EXPENSES_LOG";

static TRACING_INIT: Once = Once::new();

/// Pick the filter directive to use
///
/// `EXPENSES_LOG` wins, then the `-v` count, then the configured directive,
/// and finally `warn`.
pub fn filter_directive(env: Option<String>, verbosity: u8, configured: Option<&str>) -> String {
    if let Some(directive) = env.filter(|d| !d.trim().is_empty()) {
        return directive;
    }
    match verbosity {
        0 => configured.unwrap_or("warn").to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize the global subscriber once; later calls are ignored
pub fn init_tracing(verbosity: u8, configured: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let directive = filter_directive(std::env::var(LOG_ENV).ok(), verbosity, configured);
        let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

        // A subscriber may already be installed by an embedding application
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
