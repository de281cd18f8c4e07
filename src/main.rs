//! Binary entry point for natcap.
//!
//! This binary provides the CLI interface for natural capture.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow unnecessary_wraps for consistent command function signatures
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::{Parser, Subcommand};
use commands::{cmd_capture, cmd_config, cmd_init, cmd_parse};
use natcap::config::NatcapConfig;
use natcap::observability;
use std::process::ExitCode;

/// Environment variable naming a config file.
const CONFIG_PATH_ENV: &str = "NATCAP_CONFIG_PATH";

/// natcap - file free-form text as ideas, notes, tasks and reminders.
#[derive(Parser)]
#[command(name = "natcap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Classify a message and file it.
    Capture {
        /// The message to capture.
        message: String,

        /// Channel the message came from.
        #[arg(short, long, default_value = "cli")]
        source: String,

        /// Print the capture and routing result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Classify a message without filing it.
    Parse {
        /// The message to classify.
        message: String,

        /// Channel the message came from.
        #[arg(short, long, default_value = "cli")]
        source: String,
    },

    /// Create the memory directory and task table.
    Init,

    /// Show the effective configuration.
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_settings(&config.logging, cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(cli: Cli, config: &NatcapConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Capture {
            message,
            source,
            json,
        } => cmd_capture(config, message, source, json, cli.verbose),

        Commands::Parse { message, source } => cmd_parse(message, source, cli.verbose),

        Commands::Init => cmd_init(config),

        Commands::Config => cmd_config(config),
    }
}

/// Loads configuration from `--config`, then `NATCAP_CONFIG_PATH`, then the
/// default locations.
fn load_config(path: Option<&str>) -> Result<NatcapConfig, Box<dyn std::error::Error>> {
    if let Some(config_path) = path {
        return NatcapConfig::load_from_file(std::path::Path::new(config_path))
            .map_err(std::convert::Into::into);
    }

    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        if !config_path.trim().is_empty() {
            return NatcapConfig::load_from_file(std::path::Path::new(&config_path))
                .map_err(std::convert::Into::into);
        }
    }

    Ok(NatcapConfig::load_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_capture_source_defaults_to_cli() {
        let cli = Cli::try_parse_from(["natcap", "capture", "idea: x"]).unwrap();
        match cli.command {
            Commands::Capture { source, json, .. } => {
                assert_eq!(source, "cli");
                assert!(!json);
            },
            _ => panic!("expected capture command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["natcap", "parse", "note: x", "-v", "-c", "/tmp/natcap.toml"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some("/tmp/natcap.toml"));
    }
}
