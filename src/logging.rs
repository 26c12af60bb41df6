//! Tracing setup for debugging.
//!
//! The subscriber is only installed when `DECOMMENT_LOG` (or `RUST_LOG`) is
//! set, so normal runs pay nothing. Output goes to stderr and never mixes with
//! processed text on stdout.
//!
//! ```bash
//! DECOMMENT_LOG=debug decomment src/
//! DECOMMENT_LOG="decomment::core=trace" decomment app.js
//! ```

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "DECOMMENT_LOG";

/// `DECOMMENT_LOG` wins over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber if logging was requested.
pub fn init_tracing() {
    if std::env::var_os(LOG_ENV).is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    // Ignore the error if a subscriber is already installed (e.g. by a host application).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
