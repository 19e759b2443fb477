//! Validate command implementation
//!
//! Loads a config file, validates it, and reports errors and warnings.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use terrafield_spec::{canonical_config_hash, validate_config};

use crate::input::{load_config, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `config_path` - Path to the config file (JSON)
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(config_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), config_path);

    let LoadResult {
        config,
        source_hash,
    } = load_config(Path::new(config_path))
        .with_context(|| format!("failed to load config file: {}", config_path))?;

    let config_hash = canonical_config_hash(&config)?;
    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);
    println!("{} {}", "Config hash:".dimmed(), &config_hash[..16]);

    let result = validate_config(&config);

    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
    for error in &result.errors {
        println!("  {} {}", "x".red(), error);
    }

    if result.is_ok() {
        println!("{}", "Config is valid".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} {} error(s)",
            "Invalid config:".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::FAILURE)
    }
}
