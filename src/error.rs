use thiserror::Error;

/// Unified error type for skill-version operations
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Invalid SemVer version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("Invalid bump level '{level}': expected major, minor, or patch")]
    InvalidLevel { level: String },

    #[error("Invalid pre-release label '{label}': {reason}")]
    InvalidPreReleaseLabel { label: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version store error: {0}")]
    Store(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in skill-version
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create an invalid-version error carrying the offending text
    pub fn invalid_version(input: impl Into<String>, reason: impl Into<String>) -> Self {
        VersionError::InvalidVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-level error carrying the offending level
    pub fn invalid_level(level: impl Into<String>) -> Self {
        VersionError::InvalidLevel {
            level: level.into(),
        }
    }

    /// Create an invalid-label error carrying the offending label
    pub fn invalid_label(label: impl Into<String>, reason: impl Into<String>) -> Self {
        VersionError::InvalidPreReleaseLabel {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionError::Config(msg.into())
    }

    /// Create a store error with context
    pub fn store(msg: impl Into<String>) -> Self {
        VersionError::Store(msg.into())
    }
}
