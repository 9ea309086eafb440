//! Output formatting for the kinda CLI

use anyhow::Error;
use colored::*;
use serde_json::json;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "causes": error.chain().skip(1).map(|e| e.to_string()).collect::<Vec<_>>(),
            "exit_code": crate::error::exit_code(error),
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

pub fn print_success(message: &str, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "message": message
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format success message as JSON: {e}"),
        }
    } else {
        println!("{} {}", "✓".green(), message);
    }
}

/// Warnings go to stderr so they never mix with dry-run report lines.
pub fn print_warning(message: &str, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "warning": message
        });
        match serde_json::to_string(&output) {
            Ok(s) => eprintln!("{s}"),
            Err(e) => eprintln!("Failed to format warning message as JSON: {e}"),
        }
    } else {
        eprintln!("{} {}", "⚠".yellow(), message);
    }
}
