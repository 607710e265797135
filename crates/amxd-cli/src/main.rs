//! amxd - wrap patcher documents into device files
//!
//! This binary builds `.amxd` devices from `.maxpat` patcher documents and
//! lists the device types it can produce.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use amxd_cli::commands;

/// amxd - Device file builder for patcher documents
#[derive(Parser)]
#[command(name = "amxd")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wrap a patcher document into an .amxd device file
    Build {
        /// Path to the patcher document (.maxpat)
        #[arg(short, long)]
        input: String,

        /// Output device path (default: input path with .amxd extension)
        #[arg(short, long)]
        output: Option<String>,

        /// Device type (audio, midi, instrument)
        #[arg(short = 't', long, default_value = "audio")]
        device_type: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List supported device types and their header tags
    Types {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            input,
            output,
            device_type,
            json,
        } => commands::build::run(&input, output.as_deref(), &device_type, json),
        Commands::Types { json } => commands::types::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
