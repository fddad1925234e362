//! Tracing setup for the `findash` binary
//!
//! Log lines go to stderr so report output on stdout stays clean. Without
//! `-v` a set `RUST_LOG` is used as is; otherwise the crate logs at `warn`.
//! Each `-v` raises the crate level on top of `RUST_LOG`.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter directive for a verbosity level (number of `-v` flags)
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "finance_dashboard=warn",
        1 => "finance_dashboard=info",
        2 => "finance_dashboard=debug",
        _ => "finance_dashboard=trace",
    }
}

/// Crate directive to add on top of `RUST_LOG`, if any
///
/// An explicit `-v` always applies. At verbosity 0 the default only fills
/// in when `RUST_LOG` is unset or empty.
pub fn crate_directive(verbosity: u8, rust_log: Option<&str>) -> Option<&'static str> {
    let env_set = rust_log.is_some_and(|value| !value.trim().is_empty());
    if verbosity == 0 && env_set {
        None
    } else {
        Some(default_directive(verbosity))
    }
}

/// Initializes the global tracing subscriber once per process
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let mut filter = EnvFilter::from_default_env();
        if let Some(directive) = crate_directive(verbosity, rust_log.as_deref())
            .and_then(|d| d.parse::<Directive>().ok())
        {
            filter = filter.add_directive(directive);
        }

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
