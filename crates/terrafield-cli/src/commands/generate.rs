//! Generate command implementation
//!
//! Loads and validates a config, resolves the seed, runs the terrain
//! core, and writes the rendered heightmap PNG.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use terrafield_spec::validate_config;
use terrafield_terrain::generate_terrain;

use crate::input::{load_config, LoadResult};
use crate::render::{render_heightmap, write_png};
use crate::seed::resolve_seed;

/// Run the generate command
///
/// # Arguments
/// * `config_path` - Path to the config file (JSON)
/// * `cli_seed` - Seed override from the command line
/// * `output_dir` - Directory for the output PNG (default: current directory)
/// * `force` - Overwrite an existing output file
///
/// # Returns
/// Exit code: 0 on success (including an existing-file skip), 1 on an
/// invalid config
pub fn run(
    config_path: &str,
    cli_seed: Option<i32>,
    output_dir: Option<&str>,
    force: bool,
) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Config:".cyan().bold(), config_path);
    let LoadResult { config, .. } = load_config(Path::new(config_path))
        .with_context(|| format!("failed to load config file: {}", config_path))?;

    // Invalid configs never reach the core; it performs no validation of
    // its own.
    let validation = validate_config(&config);
    for warning in &validation.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
    if !validation.is_ok() {
        for error in &validation.errors {
            println!("  {} {}", "x".red(), error);
        }
        println!(
            "{} {} error(s)",
            "Invalid config:".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::FAILURE);
    }

    let seed = resolve_seed(cli_seed, &config);
    println!(
        "{} {} ({}x{}, {} pass(es))",
        "Seed:".dimmed(),
        seed,
        config.width,
        config.height,
        config.passes
    );

    let map = generate_terrain(&config, seed).context("terrain generation failed")?;
    let elapsed = start.elapsed();

    if let Some((min, max)) = map.value_range() {
        println!(
            "{} {} samples in [{}, {}] ({} ms)",
            "Generated:".dimmed(),
            map.len(),
            min,
            max,
            elapsed.as_millis()
        );
    }

    let caption = config
        .add_image_data
        .then(|| format!("seed: {}, passes: {}", seed, config.passes));
    let image = render_heightmap(&map, &config, caption.as_deref());

    let filename = format!(
        "{}-{}-{}-{}.png",
        seed, config.width, config.height, config.passes
    );
    let path = Path::new(output_dir.unwrap_or(".")).join(&filename);

    if path.exists() && !force {
        println!(
            "{} {} already exists, skipping (use --force to overwrite)",
            "!".yellow(),
            path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    write_png(&image, &path)
        .with_context(|| format!("failed to write image: {}", path.display()))?;
    println!("{} {}", "Saved:".green().bold(), path.display());

    Ok(ExitCode::SUCCESS)
}
