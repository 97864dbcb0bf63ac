//! Error types for the context menu.
//!
//! Only construction can fail in a way the caller sees. Once a menu exists,
//! every steady-state path (missing gate, repeated opens, dismissal bursts) is
//! a no-op rather than an error.

use thiserror::Error;

/// Main error type for the context menu.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The item list was empty at construction.
    #[error("No items were provided. At least one is required.")]
    NoItems,

    /// Any other invalid construction-time configuration.
    #[error("Config error: {message}")]
    Config {
        /// Human-readable error message.
        message: String,
    },

    /// The render adapter failed to create or update the popup surface.
    #[error("Surface error: {message}")]
    Surface {
        /// Human-readable error message.
        message: String,
    },

    /// The host environment rejected a subscription.
    #[error("Host error: {message}")]
    Host {
        /// Human-readable error message.
        message: String,
    },

    /// Serialized menu settings could not be read.
    #[error("Settings error: {message}")]
    Settings {
        /// Human-readable error message.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The global tracing subscriber could not be installed.
    #[error("Logging error: {message}")]
    Logging {
        /// Human-readable error message.
        message: String,
    },
}

impl MenuError {
    // ========== Constructors ==========

    /// Create a new config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// Create a new surface error.
    pub fn surface(message: impl Into<String>) -> Self {
        Self::Surface { message: message.into() }
    }

    /// Create a new host error.
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host { message: message.into() }
    }

    /// Create a new settings error.
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings { message: message.into(), source: None }
    }

    /// Create a new logging error.
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging { message: message.into() }
    }

    // ========== Methods ==========

    /// Check if this error was caused by the caller's configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::NoItems | Self::Config { .. } | Self::Settings { .. })
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::NoItems => "Config",
            Self::Config { .. } => "Config",
            Self::Surface { .. } => "Surface",
            Self::Host { .. } => "Host",
            Self::Settings { .. } => "Settings",
            Self::Logging { .. } => "Logging",
        }
    }

    /// Get an actionable hint for the caller.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::NoItems => Some("Add at least one item before building the menu"),
            Self::Config { .. } => None,
            Self::Surface { .. } => Some("Check that the document has a <body> element"),
            Self::Host { .. } => None,
            Self::Settings { .. } => Some("Settings must be a JSON object"),
            Self::Logging { .. } => Some("A global subscriber is already installed"),
        }
    }
}

// ========== Error Conversions ==========

/// Convert from serde_json::Error to MenuError.
impl From<serde_json::Error> for MenuError {
    fn from(err: serde_json::Error) -> Self {
        MenuError::Settings { message: format!("JSON error: {err}"), source: Some(Box::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_items_message() {
        let err = MenuError::NoItems;
        assert_eq!(err.to_string(), "No items were provided. At least one is required.");
        assert!(err.is_configuration());
        assert_eq!(err.category(), "Config");
    }

    #[test]
    fn test_json_conversion_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = MenuError::from(json_err);
        assert!(err.to_string().starts_with("Settings error: JSON error:"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_runtime_errors_are_not_configuration() {
        assert!(!MenuError::surface("no body").is_configuration());
        assert!(!MenuError::host("listener rejected").is_configuration());
        assert_eq!(MenuError::logging("twice").category(), "Logging");
    }
}
