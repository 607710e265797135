//! Error types for envelope construction.

use thiserror::Error;

/// Result type for envelope operations.
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

/// Errors that can occur while building or writing an envelope.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The device type selector is not one of the known names.
    #[error("invalid device type '{name}' (expected one of: audio, midi, instrument)")]
    InvalidDeviceType {
        /// The rejected selector.
        name: String,
    },

    /// I/O error while writing an envelope.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnvelopeError {
    /// Creates an invalid device type error.
    pub fn invalid_device_type(name: impl Into<String>) -> Self {
        Self::InvalidDeviceType { name: name.into() }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            EnvelopeError::InvalidDeviceType { .. } => "AMXD_002",
            EnvelopeError::Io(_) => "AMXD_004",
        }
    }
}
