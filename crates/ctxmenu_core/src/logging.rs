//! Structured logging setup.
//!
//! Provides:
//! - Build-type conditional log levels
//! - Environment variable override via CTXMENU_LOG or RUST_LOG
//! - A writer hook for hosts without a usable stdout (browsers)

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::error::MenuError;

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Optional custom log filter
    pub log_filter: Option<String>,
    /// Whether to emit ANSI colour codes
    pub ansi: bool,
    /// Whether to prefix lines with a timestamp
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { log_filter: None, ansi: true, timestamps: true }
    }
}

impl LogConfig {
    /// Create a new logging configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom log filter.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Configuration for plain-text sinks: no colours, no clock.
    pub fn plain() -> Self {
        Self { log_filter: None, ansi: false, timestamps: false }
    }
}

/// Initialize stdout logging.
pub fn init_logging(config: LogConfig) -> Result<(), MenuError> {
    init_logging_with_writer(config, std::io::stdout)
}

/// Initialize logging into an arbitrary writer.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with_writer<W>(config: LogConfig, writer: W) -> Result<(), MenuError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter = build_env_filter(config.log_filter.as_deref());
    let builder = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(env_filter)
        .with_ansi(config.ansi)
        .with_target(true)
        .with_thread_ids(false);

    let result = if config.timestamps {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    };
    result.map_err(|e| MenuError::logging(e.to_string()))
}

/// Build the environment filter from config or defaults.
pub fn build_env_filter(custom_filter: Option<&str>) -> EnvFilter {
    // Priority: custom filter > CTXMENU_LOG > RUST_LOG > default
    if let Some(filter) = custom_filter {
        return EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(default_log_filter()));
    }

    EnvFilter::try_from_env("CTXMENU_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter()))
}

/// Get the default log filter based on build type.
pub fn default_log_filter() -> &'static str {
    #[cfg(debug_assertions)]
    {
        "info,ctxmenu_core=debug,ctxmenu_web=debug,ctxmenu_demo=debug"
    }
    #[cfg(not(debug_assertions))]
    {
        "warn,ctxmenu_core=info,ctxmenu_web=info,ctxmenu_demo=info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_filter_wins() {
        let filter = build_env_filter(Some("ctxmenu_core=trace"));
        assert_eq!(filter.to_string(), "ctxmenu_core=trace");
    }

    #[test]
    fn test_invalid_custom_filter_falls_back_to_default() {
        let filter = build_env_filter(Some("ctxmenu_core=notalevel"));
        assert_eq!(filter.to_string(), EnvFilter::new(default_log_filter()).to_string());
    }

    #[test]
    fn test_plain_config() {
        let config = LogConfig::plain().with_filter("debug");
        assert!(!config.ansi);
        assert!(!config.timestamps);
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }
}
