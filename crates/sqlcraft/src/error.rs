//! Error types for sqlcraft

use thiserror::Error;

/// Result type alias for sqlcraft operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Error types for statement building
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Flavor name not recognized
    #[error("Unknown flavor: {0}")]
    UnknownFlavor(String),

    /// A `${` sequence in the assembled SQL is not a complete `${N}` token
    #[error("Malformed placeholder at byte {offset}")]
    MalformedPlaceholder { offset: usize },

    /// A `${N}` token refers to a value that was never registered
    #[error("Placeholder ${{{index}}} has no registered value ({registered} registered)")]
    UnknownPlaceholder { index: usize, registered: usize },

    /// Configuration read/parse error
    #[error("Config error: {0}")]
    Config(String),
}

impl BuildError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this error means placeholders and arguments would be out of sync
    pub fn is_desync(&self) -> bool {
        matches!(
            self,
            Self::MalformedPlaceholder { .. } | Self::UnknownPlaceholder { .. }
        )
    }

    /// Check if this is a configuration error (bad flavor name or config file)
    pub fn is_config(&self) -> bool {
        matches!(self, Self::UnknownFlavor(_) | Self::Config(_))
    }
}
