//! Types command implementation
//!
//! Lists the supported device types and their header tags.

use amxd_format::DeviceType;
use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{DeviceTypeInfo, TypesOutput};

/// Run the types command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let infos: Vec<DeviceTypeInfo> = DeviceType::ALL.into_iter().map(DeviceTypeInfo::from).collect();

    if json_output {
        let output = TypesOutput {
            device_types: infos,
        };
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize device types")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Device types:".cyan().bold());
    for info in &infos {
        println!(
            "  {:<12} {}  {:<14} {}",
            info.name.as_str().bold(),
            info.tag,
            info.description,
            format!("({} track)", info.track).dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}
