//! Config command handler.

use std::process::ExitCode;

use natcap::config::NatcapConfig;
use natcap::observability::LogFormat;

/// Config command: prints the effective configuration.
pub fn cmd_config(config: &NatcapConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    println!("Current Configuration");
    println!("=====================");
    println!();
    println!("Workspace:        {}", config.workspace.display());
    println!("Memory Directory: {}", config.memory_dir.display());
    println!("Ideas File:       {}", config.ideas_file.display());
    println!("Task Database:    {}", config.task_db.display());
    println!("Title Max Chars:  {}", config.title_max_chars);
    println!("Auto Init Schema: {}", config.auto_init_schema);
    println!();
    display_logging_config(config);

    Ok(ExitCode::SUCCESS)
}

fn display_logging_config(config: &NatcapConfig) {
    let logging = &config.logging;
    let format = logging
        .format
        .as_deref()
        .map(LogFormat::parse)
        .unwrap_or_default();

    println!("Logging:");
    println!("  Level:  {}", logging.level.as_deref().unwrap_or("(default)"));
    println!("  Format: {format:?}");
    println!(
        "  File:   {}",
        logging
            .file
            .as_ref()
            .map_or_else(|| "(stderr)".to_string(), |f| f.display().to_string())
    );
}
