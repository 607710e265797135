//! Device build pipeline
//!
//! Resolves paths, checks the input, wraps it in an envelope and writes the
//! device file. Every precondition is checked before the output is touched.

use amxd_format::{write_envelope, DeviceType, Envelope, EnvelopeError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::commands::json_output::error_codes;
use crate::output::{default_output_path, is_same_file, write_atomic};

/// Errors that can occur while building a device file
#[derive(Debug, Error)]
pub enum BuildError {
    /// The device type selector was rejected by the envelope builder
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// The input document does not exist
    #[error("{} not found", .0.display())]
    FileNotFound(PathBuf),

    /// The resolved output path is the input document itself
    #[error("output path {} would overwrite the input document", .0.display())]
    OutputIsInput(PathBuf),

    /// The input document could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The device file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: EnvelopeError,
    },
}

impl BuildError {
    /// Returns the stable error code used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            BuildError::Envelope(e) => e.code(),
            BuildError::FileNotFound(_) => error_codes::FILE_NOT_FOUND,
            BuildError::OutputIsInput(_) => error_codes::OUTPUT_IS_INPUT,
            BuildError::Read { .. } => error_codes::FILE_READ,
            BuildError::Write { .. } => error_codes::FILE_WRITE,
        }
    }

    /// Returns the file the error refers to, if any.
    pub fn file(&self) -> Option<&Path> {
        match self {
            BuildError::Envelope(_) => None,
            BuildError::FileNotFound(path)
            | BuildError::OutputIsInput(path)
            | BuildError::Read { path, .. }
            | BuildError::Write { path, .. } => Some(path.as_path()),
        }
    }
}

/// A request to build one device file
#[derive(Debug, Clone)]
pub struct BuildRequest<'a> {
    /// Path to the patcher document
    pub input: &'a Path,
    /// Output path (default: input with `.amxd` extension)
    pub output: Option<&'a Path>,
    /// Device type selector (audio, midi, instrument)
    pub device_type: &'a str,
}

/// Outcome of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub device_type: DeviceType,
    pub payload_bytes: usize,
    pub total_bytes: usize,
    /// BLAKE3 hash of the written device file
    pub blake3: String,
}

/// Build a device file
///
/// Order of checks: device type, input existence, output path. The output
/// is compared with the input after resolving symlinks and `..`, so no alias
/// of the input can be overwritten. The envelope is streamed into a staged
/// file that replaces the output only when complete, so a failed run leaves
/// no output behind.
pub fn build_device(request: &BuildRequest<'_>) -> Result<BuildSummary, BuildError> {
    let device_type: DeviceType = request.device_type.parse()?;

    if !request.input.exists() {
        return Err(BuildError::FileNotFound(request.input.to_path_buf()));
    }

    let output = request
        .output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(request.input));
    let same = is_same_file(request.input, &output).map_err(|source| BuildError::Read {
        path: request.input.to_path_buf(),
        source,
    })?;
    if same {
        return Err(BuildError::OutputIsInput(output));
    }

    let payload = fs::read(request.input).map_err(|source| BuildError::Read {
        path: request.input.to_path_buf(),
        source,
    })?;

    write_atomic(&output, |file| write_envelope(file, &payload, device_type)).map_err(
        |source| BuildError::Write {
            path: output.clone(),
            source,
        },
    )?;

    let envelope = Envelope::new(&payload, device_type);
    let mut hasher = blake3::Hasher::new();
    hasher.update(&envelope.header());
    hasher.update(envelope.payload);

    Ok(BuildSummary {
        input: request.input.to_path_buf(),
        output,
        device_type,
        payload_bytes: payload.len(),
        total_bytes: envelope.len(),
        blake3: hasher.finalize().to_hex().to_string(),
    })
}
