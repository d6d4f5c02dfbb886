//! Command-line argument parsing for Ising simulations

use clap::{Parser, ValueEnum};

/// Metropolis Monte Carlo for the 2D Ising model with YAML configuration
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config_file: String,

    /// Write results or frames to this file (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Format of the temperature sweep results
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Write the log to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<String>,

    /// Override lattice side length N
    #[arg(long)]
    pub size: Option<usize>,

    /// Override equilibration sweep count
    #[arg(long)]
    pub equilibration_sweeps: Option<usize>,

    /// Override measurement sweep count
    #[arg(long)]
    pub measurement_sweeps: Option<usize>,

    /// Override the random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulate temperatures in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Produce animation frames instead of a temperature sweep
    #[arg(long)]
    pub animate: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}
