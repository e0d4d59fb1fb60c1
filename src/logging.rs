//! tracing-subscriber setup. Logs go to stderr so they never mix with rendered output.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Default filter directive for a `-v` count. `RUST_LOG` takes precedence when set.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "groknews=info,warn",
        _ => "groknews=debug,info",
    }
}

/// Filter built from the current environment. Load any `.env` file before calling this.
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

pub fn init_logging(verbosity: u8) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter(verbosity))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
