//! Logging setup

use eyre::eyre;
use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Verbosity handed to the subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Force debug output regardless of other settings
    pub debug: bool,
}

impl LogConfig {
    /// Combine configured settings with the `--debug` flag
    #[must_use]
    pub fn new(settings: &LogSettings, debug: bool) -> Self {
        Self {
            level: settings.level.clone(),
            debug,
        }
    }

    /// Build the filter: `--debug`, then `RUST_LOG`, then the configured level
    ///
    /// # Errors
    /// Returns error if the configured level is not a valid filter directive.
    pub fn filter(&self) -> eyre::Result<EnvFilter> {
        if self.debug {
            return Ok(EnvFilter::new("debug"));
        }

        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => Ok(EnvFilter::try_new(&self.level)?),
        }
    }
}

/// Install the global subscriber, writing to stderr
///
/// # Errors
/// Returns error if the filter is invalid or a subscriber is already set.
pub fn init(config: &LogConfig) -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter()?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to initialise logging: {e}"))
}
