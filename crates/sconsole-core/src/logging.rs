//! Diagnostics configuration using tracing
//!
//! Diagnostics are the crate's own debug/warn output (config loading,
//! failed writes). They go to stderr so they never interleave with console
//! records on stdout.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable controlling the diagnostics filter
pub const LOG_ENV_VAR: &str = "SCONSOLE_LOG";

/// Filter used when `SCONSOLE_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the diagnostics subsystem
///
/// Log level is controlled by the `SCONSOLE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// SCONSOLE_LOG=debug sconsole --section build "compiling"
/// SCONSOLE_LOG=sconsole_app=trace sconsole "hello"
/// ```
pub fn init() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .without_time(),
        )
        .try_init()
        .map_err(|e| Error::config(format!("Failed to install diagnostics subscriber: {}", e)))?;

    tracing::debug!("Diagnostics initialized (filter from {})", LOG_ENV_VAR);

    Ok(())
}
