//! Error types for the publication pipeline.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all pipeline operations.
///
/// Transient image-provider failures are deliberately absent: the image
/// resolver recovers from those locally through its fallback chain and
/// never surfaces them to callers.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Transport-level failure talking to a remote provider
    #[error("HTTP request to {provider} failed: {source}")]
    Http {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Missing or unusable configuration (credentials, roots)
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The model call failed or returned no usable text; fatal for the run
    #[error("Synthesis error: {message}")]
    Synthesis { message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

impl PipelineError {
    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a synthesis error from a message.
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis {
            message: message.into(),
        }
    }

    /// Creates an invalid input error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Extension trait for mapping I/O results to [`PipelineError::FileSystem`]
/// with the offending path attached.
pub trait IoResultExt<T> {
    /// Attach a path to an I/O error.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|e| PipelineError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
