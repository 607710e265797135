//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on
//! `build` and `types`, so scripts can consume the result without scraping
//! colored text.

use amxd_format::DeviceType;
use serde::{Deserialize, Serialize};

use crate::pipeline::{BuildError, BuildSummary};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Input document does not exist
    pub const FILE_NOT_FOUND: &str = "AMXD_001";
    /// Device type selector not recognized
    pub const INVALID_DEVICE_TYPE: &str = "AMXD_002";
    /// Input document could not be read
    pub const FILE_READ: &str = "AMXD_003";
    /// Device file could not be written
    pub const FILE_WRITE: &str = "AMXD_004";
    /// Output path resolves to the input document
    pub const OUTPUT_IS_INPUT: &str = "AMXD_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "AMXD_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File path the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Converts a build error to a JSON error.
pub fn build_error_to_json(error: &BuildError) -> JsonError {
    let json = JsonError::new(error.code(), error.to_string());
    match error.file() {
        Some(path) => json.with_file(path.display().to_string()),
        None => json,
    }
}

/// Result details for a successful build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildResult {
    /// Input document path
    pub input: String,
    /// Written device file path
    pub output: String,
    /// Device type name
    pub device_type: DeviceType,
    /// 4-byte header tag as text
    pub type_tag: String,
    /// Size of the wrapped document
    pub payload_bytes: usize,
    /// Size of the device file
    pub total_bytes: usize,
    /// BLAKE3 hash of the device file
    pub blake3: String,
}

impl From<&BuildSummary> for BuildResult {
    fn from(summary: &BuildSummary) -> Self {
        Self {
            input: summary.input.display().to_string(),
            output: summary.output.display().to_string(),
            device_type: summary.device_type,
            type_tag: String::from_utf8_lossy(summary.device_type.tag()).into_owned(),
            payload_bytes: summary.payload_bytes,
            total_bytes: summary.total_bytes,
            blake3: summary.blake3.clone(),
        }
    }
}

/// JSON output for the `build` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildOutput {
    /// Whether the device file was written
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Build details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<BuildResult>,
}

impl BuildOutput {
    /// Creates a successful build output.
    pub fn success(result: BuildResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed build output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// One row of the `types` listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceTypeInfo {
    pub name: DeviceType,
    pub tag: String,
    pub description: String,
    pub track: String,
}

impl From<DeviceType> for DeviceTypeInfo {
    fn from(device_type: DeviceType) -> Self {
        Self {
            name: device_type,
            tag: String::from_utf8_lossy(device_type.tag()).into_owned(),
            description: device_type.description().to_string(),
            track: device_type.track_kind().to_string(),
        }
    }
}

/// JSON output for the `types` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypesOutput {
    pub device_types: Vec<DeviceTypeInfo>,
}
