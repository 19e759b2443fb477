//! Terrafield CLI - deterministic terrain noise field generation
//!
//! This binary provides commands for validating generation configs and
//! producing seeded heightmap PNGs from them.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use terrafield_cli::commands;

/// Terrafield - Deterministic Terrain Noise Generator
#[derive(Parser)]
#[command(name = "terrafield")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a generation config file
    Validate {
        /// Path to the config file (JSON)
        config: String,
    },

    /// Generate a terrain heightmap PNG from a config
    Generate {
        /// Path to the config file (JSON)
        config: String,

        /// Override the seed (takes precedence over the config's seed policy)
        #[arg(short, long)]
        seed: Option<i32>,

        /// Directory for the output PNG (default: current directory)
        #[arg(short, long)]
        output: Option<String>,

        /// Overwrite the output file if it already exists
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { config } => commands::validate::run(&config),
        Commands::Generate {
            config,
            seed,
            output,
            force,
        } => commands::generate::run(&config, seed, output.as_deref(), force),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
