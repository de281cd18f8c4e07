//! Core command handlers.
//!
//! Contains the implementation of the capture, parse and init commands.

use std::process::ExitCode;

use natcap::config::NatcapConfig;
use natcap::{Capture, CaptureParser, CaptureService, RouteResult, SqliteTaskStore};

/// Capture command.
///
/// Prints the acknowledgment (or JSON) and fails the process when the
/// capture could not be routed.
pub fn cmd_capture(
    config: &NatcapConfig,
    message: String,
    source: String,
    json: bool,
    verbose: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if config.auto_init_schema {
        if let Err(e) = SqliteTaskStore::new(&config.task_db).init_schema() {
            tracing::warn!(error = %e, "task schema init failed, task captures will fail");
        }
    }

    let service = CaptureService::from_config(config);
    let outcome = service.capture(&message, &source)?;

    if verbose {
        print_capture_details(&outcome.capture);
        print_route_details(&outcome.result);
    }

    if json {
        let value = serde_json::json!({
            "capture": outcome.capture,
            "result": outcome.result,
            "response": outcome.response(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", outcome.response());
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Parse command: classifies without writing anything.
pub fn cmd_parse(
    message: String,
    source: String,
    verbose: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let capture = CaptureParser::new().parse(&message, &source);

    if verbose {
        print_capture_details(&capture);
    }
    println!("{}", serde_json::to_string_pretty(&capture)?);

    Ok(ExitCode::SUCCESS)
}

/// Init command: creates the memory directory and task schema.
pub fn cmd_init(config: &NatcapConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(&config.memory_dir)?;
    SqliteTaskStore::new(&config.task_db).init_schema()?;

    println!("Workspace initialized:");
    println!("  Memory: {}", config.memory_dir.display());
    println!("  Tasks:  {}", config.task_db.display());

    Ok(ExitCode::SUCCESS)
}

fn print_capture_details(capture: &Capture) {
    eprintln!("Type:    {}", capture.capture_type);
    eprintln!("Content: {}", capture.content);
    if !capture.prefix.is_empty() {
        eprintln!("Prefix:  {}", capture.prefix);
    }
    if let Some(project) = &capture.project {
        eprintln!("Project: {project}");
    }
    if let Some(due) = capture.due_date {
        eprintln!("Due:     {due}");
    }
    eprintln!("Source:  {}", capture.source);
}

fn print_route_details(result: &RouteResult) {
    eprintln!("Routed:  {}", result.destination);
    if let Some(error) = &result.error {
        eprintln!("Error:   {error}");
    }
}
