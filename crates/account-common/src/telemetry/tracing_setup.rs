//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.

use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level filter (e.g., "info", "debug", "trace")
    pub level: Level,
    /// Enable JSON output format
    pub json: bool,
    /// Include file and line numbers
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            file_line: true,
        }
    }
}

impl TracingConfig {
    /// Create a production configuration with JSON logging
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            json: true,
            file_line: false,
        }
    }

    /// Pick the configuration for an application environment name
    ///
    /// `"production"` gets JSON output without file/line noise; everything
    /// else gets the human-readable default.
    #[must_use]
    pub fn for_env(app_env: &str) -> Self {
        if app_env == "production" {
            Self::production()
        } else {
            Self::default()
        }
    }

    /// Pick the configuration from the `APP_ENV` environment variable
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV") {
            Ok(app_env) => Self::for_env(&app_env),
            Err(_) => Self::default(),
        }
    }
}

/// Initialize the tracing subscriber with default configuration
///
/// Uses `RUST_LOG` environment variable for filtering if set,
/// otherwise defaults to "info" level.
///
/// # Panics
/// Panics if the subscriber cannot be initialized (usually means it's already set).
pub fn init_tracing() {
    let config = TracingConfig::default();
    let env_filter = env_filter_for(&config);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer(&config))
        .init();
}

/// Try to initialize tracing, returning Err if a subscriber is already set
///
/// Unlike `init_tracing`, this function will not panic if called multiple
/// times. The configuration follows `APP_ENV`: production deployments get
/// JSON output, everything else the human-readable format.
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_tracing_with_config(TracingConfig::from_env())
}

/// Try to initialize tracing with custom configuration
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    let env_filter = env_filter_for(&config);

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer(&config).json())
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer(&config))
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    }
}

fn env_filter_for(config: &TracingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.to_string()))
}

fn fmt_layer<S>(config: &TracingConfig) -> fmt::Layer<S> {
    fmt::layer()
        .with_file(config.file_line)
        .with_line_number(config.file_line)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.json);
        assert!(config.file_line);
    }

    #[test]
    fn test_production_config() {
        let config = TracingConfig::production();
        assert_eq!(config.level, Level::INFO);
        assert!(config.json);
        assert!(!config.file_line);
    }

    #[test]
    fn test_for_env_selects_format() {
        assert!(TracingConfig::for_env("production").json);
        assert!(!TracingConfig::for_env("development").json);
        assert!(!TracingConfig::for_env("staging").json);
        assert!(!TracingConfig::for_env("").json);
    }

    // Note: init_tracing itself is not unit-testable because the global
    // subscriber can only be set once per process.
}
