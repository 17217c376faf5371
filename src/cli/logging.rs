//! Log subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Picks the filter used when `RUST_LOG` is not set.
///
/// `-v` wins over the config file; with neither, only warnings are shown.
pub fn default_directive(verbose: u8, configured: Option<&str>) -> &str {
    match verbose {
        0 => configured.unwrap_or("warn"),
        1 => "debug",
        _ => "trace",
    }
}

/// Parses the fallback filter, rejecting malformed directives.
pub fn fallback_filter(verbose: u8, configured: Option<&str>) -> Result<EnvFilter> {
    let directive = default_directive(verbose, configured);
    EnvFilter::try_new(directive).with_context(|| format!("invalid log filter: {}", directive))
}

/// Installs a stderr subscriber. Later calls are no-ops.
pub fn init(verbose: u8, configured: Option<&str>) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => fallback_filter(verbose, configured)?,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}
