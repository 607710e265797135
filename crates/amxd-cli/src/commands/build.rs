//! Build command implementation
//!
//! Wraps a patcher document into an `.amxd` device file.

use amxd_format::DeviceType;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{build_error_to_json, BuildOutput, BuildResult};
use crate::pipeline::{build_device, BuildRequest};

/// Host the install hint refers to.
const HOST_NAME: &str = "Ableton Live 12";

/// Run the build command
///
/// # Arguments
/// * `input` - Path to the patcher document (.maxpat)
/// * `output` - Output device path (default: input with `.amxd` extension)
/// * `device_type` - Device type selector (audio, midi, instrument)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    input: &str,
    output: Option<&str>,
    device_type: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let request = BuildRequest {
        input: Path::new(input),
        output: output.map(Path::new),
        device_type,
    };

    if json_output {
        run_json(&request)
    } else {
        run_human(&request)
    }
}

/// Run build with human-readable (colored) output
fn run_human(request: &BuildRequest<'_>) -> Result<ExitCode> {
    println!(
        "{} {}",
        "Building:".cyan().bold(),
        request.input.display()
    );

    let summary = build_device(request)?;

    println!(
        "{} {} ({})",
        "Device type:".dimmed(),
        summary.device_type.description(),
        String::from_utf8_lossy(summary.device_type.tag())
    );
    println!(
        "{} Built {} ({} bytes, type={})",
        "SUCCESS".green().bold(),
        summary.output.display(),
        summary.total_bytes,
        summary.device_type
    );
    println!("\n{}", install_hint(&summary.output, summary.device_type));

    Ok(ExitCode::SUCCESS)
}

/// Run build with machine-readable JSON output
fn run_json(request: &BuildRequest<'_>) -> Result<ExitCode> {
    let (output, code) = match build_device(request) {
        Ok(summary) => (
            BuildOutput::success(BuildResult::from(&summary)),
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            BuildOutput::failure(vec![build_error_to_json(&e)]),
            ExitCode::from(1),
        ),
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize build output")?;
    println!("{}", json);

    Ok(code)
}

/// Tells the user where to drop the built device.
fn install_hint(output: &Path, device_type: DeviceType) -> String {
    let track = device_type.track_kind();
    format!(
        "To install: drag {} onto {} {} track in {}",
        output.display(),
        article(track),
        track,
        HOST_NAME
    )
}

/// Indefinite article for a track kind ("an audio", "a MIDI").
fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some(c) if "aeiouAEIOU".contains(c) => "an",
        _ => "a",
    }
}
