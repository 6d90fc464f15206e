//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout to command output.
//! The filter comes from `FBT_LOG` when set, otherwise from the configured level.

use crate::error::{BacktraceError, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FBT_LOG";

pub fn build_filter(default_level: &str) -> Result<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(spec) if !spec.trim().is_empty() => EnvFilter::try_new(&spec)
            .map_err(|e| BacktraceError::Config(format!("invalid {}: {}", LOG_ENV, e))),
        _ => EnvFilter::try_new(default_level)
            .map_err(|e| BacktraceError::Config(format!("invalid log level \"{}\": {}", default_level, e))),
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = build_filter(default_level)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test touching FBT_LOG.
    #[test]
    fn test_env_overrides_configured_level() {
        let configured = "warn,fbt_configured=trace";

        std::env::remove_var(LOG_ENV);
        let filter = build_filter(configured).unwrap().to_string();
        assert!(filter.contains("fbt_configured"));

        std::env::set_var(LOG_ENV, "fbt_override=debug");
        let filter = build_filter(configured).unwrap().to_string();
        assert!(filter.contains("fbt_override"));
        assert!(!filter.contains("fbt_configured"));

        std::env::set_var(LOG_ENV, "   ");
        let filter = build_filter(configured).unwrap().to_string();
        assert!(filter.contains("fbt_configured"));

        std::env::remove_var(LOG_ENV);
    }
}
